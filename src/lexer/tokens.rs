use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Category> = {
        let mut map = HashMap::new();
        map.insert("inicio", Category::Identifier);
        map.insert("fim", Category::Identifier);
        map.insert("var", Category::Number);
        map.insert("leia", Category::StringLike);
        map.insert("escreva", Category::StringLike);
        map.insert("se", Category::RelationalControl);
        map.insert("senao", Category::RelationalControl);
        map
    };
}

/// Lexical category of a token.
///
/// Reserved words share categories with literals and operators; the
/// category alone does not distinguish `var` from `42`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Identifier,        // names, `inicio`, `fim`
    Number,            // integer literals, `var`
    StringLike,        // string literals, `leia`, `escreva`
    RelationalControl, // `< <= > >= = == ! !=`, `se`, `senao`
    Punctuation,       // `( ) :`
    Terminator,        // `;`
    Arithmetic,        // `+ - * / %`
    CompoundLogical,   // `& && | || ~`
}

impl Category {
    /// Two-letter code used in the token output file.
    ///
    /// Punctuation and arithmetic operators share `om`, the terminator and
    /// compound-logical operators share `ol`.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Identifier => "id",
            Category::Number => "nu",
            Category::StringLike => "fr",
            Category::RelationalControl => "or",
            Category::Punctuation | Category::Arithmetic => "om",
            Category::Terminator | Category::CompoundLogical => "ol",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub category: Category,
    pub position: Position,
}

/// Token file layout: `[<lexeme>, ] [<code>, <line>][<column>, ]`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, ] [{}, {}][{}, ]",
            self.lexeme,
            self.category.code(),
            self.position.line,
            self.position.column
        )
    }
}

impl Token {
    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.contains_key(self.lexeme.as_str())
    }
}
