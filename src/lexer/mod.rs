//! Lexical analysis module.
//!
//! This module converts source text into a stream of classified tokens.
//! It handles:
//!
//! - Normalization of raw text (comment stripping, whitespace collapsing)
//! - Character-by-character scanning with line/column tracking
//! - Recognition of reserved words, identifiers, numbers, strings and
//!   operators
//! - Recovery from unrecognised characters

pub mod lexer;
pub mod normalizer;
pub mod tokens;
