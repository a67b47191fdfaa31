use lazy_static::lazy_static;
use log::{debug, trace, warn};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Category, Token, RESERVED_LOOKUP};

lazy_static! {
    static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\p{Nd}$").unwrap();
}

/// Any Unicode decimal digit (general category Nd), not only `0-9`.
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0; 4])))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Report unterminated strings and block comments as diagnostics.
    pub strict: bool,
}

/// Everything a scan produced: the tokens in source order and the
/// diagnostics raised on the way. Diagnostics never stop a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Error>,
}

impl Scan {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Single-pass cursor over one source buffer.
///
/// Positions are tracked against the buffer the scanner was built on, so
/// scanning normalized text reports positions in the normalized text.
pub struct Scanner {
    source: String,
    cursor: Position,
    config: ScannerConfig,
    diagnostics: Vec<Error>,
}

impl Scanner {
    pub fn new(source: String) -> Scanner {
        Scanner::with_config(source, ScannerConfig::default())
    }

    pub fn with_config(source: String, config: ScannerConfig) -> Scanner {
        Scanner {
            source,
            cursor: Position::start(),
            config,
            diagnostics: vec![],
        }
    }

    pub fn position(&self) -> Position {
        self.cursor
    }

    pub fn at_eof(&self) -> bool {
        self.cursor.offset >= self.source.len()
    }

    fn at(&self) -> Option<char> {
        self.source[self.cursor.offset..].chars().next()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.cursor.offset..].chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.at()?;
        self.cursor.advance(c);
        Some(c)
    }

    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.at() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    fn lexeme_from(&self, start: &Position) -> String {
        String::from(&self.source[start.offset..self.cursor.offset])
    }

    fn report(&mut self, error: Error) {
        warn!("{}", error);
        self.diagnostics.push(error);
    }

    /// Diagnostics raised so far, leaving none behind.
    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Skips whitespace, `//` line comments (newline included) and `/* */`
    /// block comments until a significant character or end of input.
    fn skip_insignificant(&mut self) {
        while let Some(c) = self.at() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '/' && self.peek() == Some('/') {
                self.eat_while(|c| c != '\n');
                self.advance();
            } else if c == '/' && self.peek() == Some('*') {
                self.skip_block_comment();
            } else {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) {
        let start = self.cursor;
        self.advance();
        self.advance();

        while let Some(c) = self.at() {
            if c == '*' && self.peek() == Some('/') {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }

        if self.config.strict {
            self.report(Error::new(ErrorImpl::UnterminatedComment, start));
        }
    }

    fn symbol(&mut self) -> Token {
        let start = self.cursor;
        self.eat_while(|c| c.is_alphanumeric() || c == '_');

        let value = self.lexeme_from(&start);
        let category = RESERVED_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(Category::Identifier);

        MK_TOKEN!(value, category, start)
    }

    fn number(&mut self) -> Token {
        let start = self.cursor;
        self.eat_while(is_decimal_digit);

        MK_TOKEN!(self.lexeme_from(&start), Category::Number, start)
    }

    /// No escapes; an unterminated literal runs to end of input.
    fn string(&mut self) -> Token {
        let start = self.cursor;
        self.advance();
        self.eat_while(|c| c != '"');

        if self.advance().is_none() && self.config.strict {
            self.report(Error::new(ErrorImpl::UnterminatedString, start));
        }

        MK_TOKEN!(self.lexeme_from(&start), Category::StringLike, start)
    }

    fn single(&mut self, category: Category) -> Token {
        let start = self.cursor;
        self.advance();

        MK_TOKEN!(self.lexeme_from(&start), category, start)
    }

    fn operator(&mut self, c: char) -> Option<Token> {
        let start = self.cursor;

        let category = match c {
            '<' | '>' | '=' | '!' => {
                self.advance();
                if self.at() == Some('=') {
                    self.advance();
                }
                Category::RelationalControl
            }
            '+' | '-' | '*' | '/' | '%' => {
                self.advance();
                Category::Arithmetic
            }
            '&' | '|' => {
                self.advance();
                if self.at() == Some(c) {
                    self.advance();
                }
                Category::CompoundLogical
            }
            '~' => {
                self.advance();
                Category::CompoundLogical
            }
            _ => return None,
        };

        Some(MK_TOKEN!(self.lexeme_from(&start), category, start))
    }

    /// Produces the next token, reporting and dropping any unrecognised
    /// characters on the way. Returns `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            self.skip_insignificant();

            let c = self.at()?;

            let token = match c {
                c if c.is_alphabetic() => Some(self.symbol()),
                c if is_decimal_digit(c) => Some(self.number()),
                '"' => Some(self.string()),
                '(' | ')' | ':' => Some(self.single(Category::Punctuation)),
                ';' => Some(self.single(Category::Terminator)),
                c => self.operator(c),
            };

            match token {
                Some(token) => {
                    trace!("{} {:?} at {}", token.category, token.lexeme, token.position);
                    return Some(token);
                }
                None => {
                    let error =
                        Error::new(ErrorImpl::UnrecognisedCharacter { character: c }, self.cursor);
                    self.report(error);
                    self.advance();
                }
            }
        }
    }

    /// Consumes the rest of the input. A second call returns an empty scan.
    pub fn scan_all(&mut self) -> Scan {
        debug!("scanning from {}", self.cursor);

        let tokens: Vec<Token> = self.by_ref().collect();
        let diagnostics = self.take_diagnostics();

        debug!(
            "scanned {} tokens with {} diagnostics",
            tokens.len(),
            diagnostics.len()
        );

        Scan {
            tokens,
            diagnostics,
        }
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

pub fn tokenize(source: String, config: Option<ScannerConfig>) -> Scan {
    Scanner::with_config(source, config.unwrap_or_default()).scan_all()
}
