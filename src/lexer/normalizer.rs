use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

lazy_static! {
    // Line comments stop before their newline; block comments run to `*/`
    // or to end of input.
    static ref INSIGNIFICANT: Regex =
        Regex::new(r"(?s)//[^\n]*|/\*.*?(?:\*/|\z)|\s+").unwrap();
}

/// Normalized text together with where each of its characters came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// `(offset in text, position in the original)` for every character of
    /// `text`, sorted by offset.
    pub origins: Vec<(usize, Position)>,
    /// Original positions of `/*` openers that never saw a `*/`.
    pub unterminated_comments: Vec<Position>,
}

impl Normalized {
    /// Maps a position in the normalized text back to the original source.
    ///
    /// Only positions that start a character of `text` map; anything else
    /// returns `None`.
    pub fn original_position(&self, position: &Position) -> Option<Position> {
        self.origins
            .binary_search_by_key(&position.offset, |(offset, _)| *offset)
            .ok()
            .map(|index| self.origins[index].1)
    }

    /// Moves a diagnostic reported on the normalized text onto the original
    /// source. Unmappable positions are left as they are.
    pub fn remap_error(&self, error: &Error) -> Error {
        match self.original_position(error.get_position()) {
            Some(position) => error.relocated(position),
            None => error.clone(),
        }
    }

    /// One `UnterminatedComment` diagnostic per stripped block comment that
    /// ran to end of input, positioned in the original source.
    pub fn comment_diagnostics(&self) -> Vec<Error> {
        self.unterminated_comments
            .iter()
            .map(|position| Error::new(ErrorImpl::UnterminatedComment, *position))
            .collect()
    }
}

/// Strips comments and collapses whitespace runs to single spaces, trimming
/// both ends. String literals get no special treatment.
pub fn normalize(text: &str) -> String {
    normalize_mapped(text).text
}

pub fn normalize_mapped(text: &str) -> Normalized {
    debug!("normalizing {} bytes", text.len());

    let mut out = String::with_capacity(text.len());
    let mut origins = Vec::new();
    let mut unterminated_comments = Vec::new();
    let mut cursor = Position::start();
    let mut last = 0;

    for found in INSIGNIFICANT.find_iter(text) {
        copy_verbatim(&text[last..found.start()], &mut out, &mut origins, &mut cursor);

        // Comments start with '/', whitespace runs never do.
        let matched = found.as_str();
        let is_space = !matched.starts_with('/');
        if matched.starts_with("/*") && (matched.len() < 4 || !matched.ends_with("*/")) {
            unterminated_comments.push(cursor);
        }
        if is_space && !out.is_empty() && !out.ends_with(' ') {
            origins.push((out.len(), cursor));
            out.push(' ');
        }

        for c in matched.chars() {
            cursor.advance(c);
        }
        last = found.end();
    }

    copy_verbatim(&text[last..], &mut out, &mut origins, &mut cursor);

    if out.ends_with(' ') {
        out.pop();
        origins.pop();
    }

    debug!("normalized to {} bytes", out.len());

    Normalized {
        text: out,
        origins,
        unterminated_comments,
    }
}

fn copy_verbatim(
    segment: &str,
    out: &mut String,
    origins: &mut Vec<(usize, Position)>,
    cursor: &mut Position,
) {
    for c in segment.chars() {
        origins.push((out.len(), *cursor));
        out.push(c);
        cursor.advance(c);
    }
}
