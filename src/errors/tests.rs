//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position::new(1, 10, 9),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position::new(3, 4, 42);
    let error = Error::new(ErrorImpl::UnterminatedString, pos);

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
}

#[test]
fn test_unrecognised_character_message() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '$' },
        Position::new(7, 12, 80),
    );

    assert_eq!(
        error.to_string(),
        "lexical error at line 7, column 12: character '$' not recognized"
    );
}

#[test]
fn test_unterminated_messages() {
    let string = Error::new(ErrorImpl::UnterminatedString, Position::new(2, 1, 5));
    let comment = Error::new(ErrorImpl::UnterminatedComment, Position::new(1, 3, 2));

    assert_eq!(string.get_error_name(), "UnterminatedString");
    assert_eq!(
        string.to_string(),
        "lexical error at line 2, column 1: string literal not terminated"
    );
    assert_eq!(comment.get_error_name(), "UnterminatedComment");
    assert_eq!(
        comment.to_string(),
        "lexical error at line 1, column 3: block comment not terminated"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::start());

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("*/")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_relocated() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '#' },
        Position::new(1, 13, 12),
    );
    let moved = error.relocated(Position::new(4, 2, 30));

    assert_eq!(moved.get_kind(), error.get_kind());
    assert_eq!(moved.get_position(), &Position::new(4, 2, 30));
}
