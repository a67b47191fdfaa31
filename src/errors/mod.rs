//! Error types and error handling for the lexer.
//!
//! This module defines the diagnostics produced while scanning. It includes:
//!
//! - Error structures with source position information
//! - The lexical error variants (unrecognised characters and, in strict
//!   mode, unterminated literals and comments)
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
