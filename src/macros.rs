//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Recognizers build every token through this macro so the field layout
//! lives in one place.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$lexeme` - The exact source text matched
/// * `$category` - The Category
/// * `$position` - The position of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(String::from("42"), Category::Number, start);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($lexeme:expr, $category:expr, $position:expr) => {
        Token {
            lexeme: $lexeme,
            category: $category,
            position: $position,
        }
    };
}
