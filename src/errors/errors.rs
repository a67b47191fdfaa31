use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("lexical error at line {}, column {}: {internal_error}", .position.line, .position.column)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Add a closing `\"` to the string literal"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Close the block comment with `*/`"))
            }
        }
    }

    /// Returns a copy of this error reported at another position.
    pub fn relocated(&self, position: Position) -> Self {
        Error::new(self.internal_error.clone(), position)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl std::fmt::Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("character '{character}' not recognized")]
    UnrecognisedCharacter { character: char },
    #[error("string literal not terminated")]
    UnterminatedString,
    #[error("block comment not terminated")]
    UnterminatedComment,
}
