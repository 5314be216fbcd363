//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use cinder_base::position::Position;
use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration representing the reserved words of the Cinder language.
///
/// The spellings `true` and `false` are deliberately absent: they lex as boolean literal tokens
/// carrying their source text, not as keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    If,
    Else,
    While,
    For,
    In,
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::In => "in",
        }
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in the
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> = {
                let mut map = HashMap::new();

                for keyword in KeywordKind::iter() {
                    map.insert(keyword.as_str(), keyword);
                }

                map
            };
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

/// Is an enumeration containing all kinds of tokens in the Cinder language.
///
/// Every token sequence produced by the lexer begins with exactly one [`Self::StartOfFile`] and
/// ends with exactly one [`Self::EndOfFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum TokenKind {
    StartOfFile,
    EndOfFile,

    Identifier,

    StringLiteral,
    IntegerLiteral,
    FloatLiteral,
    BooleanLiteral,

    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Equal,
    NotEqual,
    LessThanOrEqual,
    GreaterThanOrEqual,
    LessThan,
    GreaterThan,
    LogicalAnd,
    LogicalOr,
    LeftShift,
    RightShift,
    BitwiseXor,
    BitwiseAnd,
    BitwiseOr,

    Not,

    Comma,
    LeftParenthesis,
    RightParenthesis,
    LeftBrace,
    RightBrace,
    Assign,
    Semicolon,

    Keyword(KeywordKind),
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::StartOfFile => "START_OF_FILE",
            Self::EndOfFile => "END_OF_FILE",
            Self::Identifier => "IDENTIFIER",
            Self::StringLiteral => "STRING_LITERAL",
            Self::IntegerLiteral => "INTEGER_LITERAL",
            Self::FloatLiteral => "FLOAT_LITERAL",
            Self::BooleanLiteral => "BOOLEAN_LITERAL",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::BitwiseXor => "^",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::Not => "!",
            Self::Comma => ",",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Assign => "=",
            Self::Semicolon => ";",
            Self::Keyword(keyword) => keyword.as_str(),
        })
    }
}

/// Represents the smallest lexical unit of the source code.
///
/// The position records where the lexeme *starts*. The value carries the source text of the
/// lexeme for identifiers and the four literal kinds and is absent for every other kind; the
/// text of numeric and boolean literals is stored unparsed, conversion to a value is the
/// parser's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, new)]
pub struct Token {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the position of the first character of the token's lexeme.
    #[get_copy = "pub"]
    position: Position,

    /// Gets the textual payload of the token, if any.
    #[get = "pub"]
    value: Option<String>,
}
