#![allow(clippy::module_inception)]

use std::{fmt::Display, fs, io, path::Path};

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::tokens::Token,
};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::lexer::{tokenize, Scan, Scanner, ScannerConfig};
pub use lexer::normalizer::{normalize, normalize_mapped, Normalized};

/// 1-based line and column of a character, plus its byte offset in the
/// buffer it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }

    pub fn start() -> Self {
        Position::new(1, 1, 0)
    }

    /// Moves past `c`, which must be the character at this position.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += c.len_utf8();
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line break.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a diagnostic against the source it was reported on.
///
/// `source` must be the buffer the error's position refers to.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: lexical error at line 2, column 7: character '@' not recognized
        -> teste.txt
           |
         2 | var x@;
           | ------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error, error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (&string[start..], start)
}

/// Serializes tokens one per line, in the token file layout.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

pub fn write_tokens<P: AsRef<Path>>(path: P, tokens: &[Token]) -> io::Result<()> {
    fs::write(path, format_tokens(tokens))
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::{Category, Token},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "inicio\r\nvar x;\n\nfim";

        assert_eq!(super::get_line_at_position(source, 1), Some("inicio"));
        assert_eq!(super::get_line_at_position(source, 2), Some("var x;"));
        assert_eq!(super::get_line_at_position(source, 3), Some(""));
        assert_eq!(super::get_line_at_position(source, 4), Some("fim"));
        assert_eq!(super::get_line_at_position(source, 5), None);
        assert_eq!(super::get_line_at_position(source, 0), None);
    }

    #[test]
    fn test_position_advance() {
        let mut pos = Position::start();
        pos.advance('a');
        assert_eq!(pos, Position::new(1, 2, 1));
        pos.advance('\n');
        assert_eq!(pos, Position::new(2, 1, 2));
        pos.advance('ç');
        assert_eq!(pos, Position::new(2, 2, 4));
    }

    #[test]
    fn test_render_error() {
        let source = "inicio\n  var x@;\nfim";
        let error = Error::new(
            ErrorImpl::UnrecognisedCharacter { character: '@' },
            Position::new(2, 8, 14),
        );

        let rendered = super::render_error(&error, source, "teste.txt");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: lexical error at line 2, column 8: character '@' not recognized"
        );
        assert_eq!(lines[1], "-> teste.txt");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | var x@;");
        assert_eq!(lines[4], "  | -----^");
    }

    #[test]
    fn test_format_tokens() {
        let tokens = vec![
            Token {
                lexeme: String::from("var"),
                category: Category::Number,
                position: Position::new(1, 1, 0),
            },
            Token {
                lexeme: String::from(";"),
                category: Category::Terminator,
                position: Position::new(1, 4, 3),
            },
        ];

        assert_eq!(
            super::format_tokens(&tokens),
            "[var, ] [nu, 1][1, ]\n[;, ] [ol, 1][4, ]\n"
        );
    }
}
