//! Contains the syntax trees related to expressions and their parsing logic.

use cinder_base::{
    diagnostic::{Code, Diagnostic, Handler},
    position::Position,
};
use cinder_lexical::token::{Token, TokenKind};
use derive_more::From;
use enum_as_inner::EnumAsInner;
use getset::Getters;

use crate::parser::Parser;

/// Syntax Synopsis:
///
/// ``` ebnf
/// Expression:
///     Identifier
///     | Literal
///     | '(' Expression ')'
///     ;
/// ```
///
/// A parenthesized expression carries no node of its own: the production yields the inner
/// expression.
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Identifier:
///     IDENTIFIER
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Identifier {
    /// Gets the name of the identifier.
    #[get = "pub"]
    name: String,
}

impl Identifier {
    /// Dissolves the [`Identifier`] into its name.
    #[must_use]
    pub fn dissolve(self) -> String { self.name }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Literal:
///     INTEGER_LITERAL
///     | FLOAT_LITERAL
///     | BOOLEAN_LITERAL
///     | STRING_LITERAL
///     ;
/// ```
///
/// Unlike tokens, literal nodes carry parsed values: the conversion from the token's source text
/// happens in the parser, where an unparsable or out-of-range text fails the literal production.
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Parser {
    /// Parses an [`Expression`].
    pub fn parse_expression(&mut self) -> Option<Expression> {
        self.transactions.start();

        if let Some(identifier) = self.parse_identifier() {
            self.transactions.commit();
            return Some(Expression::Identifier(identifier));
        }

        self.transactions.rollback();

        self.transactions.start();

        if let Some(literal) = self.parse_literal() {
            self.transactions.commit();
            return Some(Expression::Literal(literal));
        }

        self.transactions.rollback();

        self.transactions.start();

        if self.expect(TokenKind::LeftParenthesis) {
            let Some(expression) = self.parse_expression() else {
                self.transactions.rollback();
                return None;
            };

            if !self.expect(TokenKind::RightParenthesis) {
                self.transactions.rollback();
                return None;
            }

            self.transactions.commit();
            return Some(expression);
        }

        self.transactions.rollback();

        None
    }

    /// Parses an [`Identifier`].
    pub fn parse_identifier(&mut self) -> Option<Identifier> {
        let token = self.peek()?;

        if token.kind() != TokenKind::Identifier {
            return None;
        }

        let name = token.value().clone()?;

        self.consume();

        Some(Identifier { name })
    }

    /// Parses a [`Literal`].
    pub fn parse_literal(&mut self) -> Option<Literal> {
        if let Some(value) = self.parse_integer_literal() {
            return Some(Literal::Integer(value));
        }

        if let Some(value) = self.parse_float_literal() {
            return Some(Literal::Float(value));
        }

        if let Some(value) = self.parse_boolean_literal() {
            return Some(Literal::Boolean(value));
        }

        if let Some(value) = self.parse_string_literal() {
            return Some(Literal::String(value));
        }

        let position = self.peek().map_or_else(Position::default, Token::position);

        self.errors.receive(Diagnostic::with_detail(
            position,
            Code::SyntaxError,
            "Expected literal",
        ));

        None
    }

    fn parse_integer_literal(&mut self) -> Option<i64> {
        let token = self.peek()?;

        if token.kind() != TokenKind::IntegerLiteral {
            return None;
        }

        let position = token.position();

        let Some(text) = token.value() else {
            self.errors.receive(Diagnostic::with_detail(
                position,
                Code::SyntaxError,
                "Expected integer literal",
            ));
            return None;
        };

        let value = match text.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                self.errors.receive(Diagnostic::with_detail(
                    position,
                    Code::SyntaxError,
                    "Integer literal out of range",
                ));
                return None;
            }
        };

        self.consume();

        Some(value)
    }

    fn parse_float_literal(&mut self) -> Option<f64> {
        let token = self.peek()?;

        if token.kind() != TokenKind::FloatLiteral {
            return None;
        }

        let position = token.position();

        let Some(text) = token.value() else {
            self.errors.receive(Diagnostic::with_detail(
                position,
                Code::SyntaxError,
                "Expected float literal",
            ));
            return None;
        };

        let value = match text.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                self.errors.receive(Diagnostic::with_detail(
                    position,
                    Code::SyntaxError,
                    "Float literal out of range",
                ));
                return None;
            }
        };

        self.consume();

        Some(value)
    }

    fn parse_boolean_literal(&mut self) -> Option<bool> {
        let token = self.peek()?;

        if token.kind() != TokenKind::BooleanLiteral {
            return None;
        }

        let position = token.position();

        let value = match token.value().as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => {
                self.errors.receive(Diagnostic::with_detail(
                    position,
                    Code::SyntaxError,
                    "Expected boolean literal",
                ));
                return None;
            }
        };

        self.consume();

        Some(value)
    }

    fn parse_string_literal(&mut self) -> Option<String> {
        let token = self.peek()?;

        if token.kind() != TokenKind::StringLiteral {
            return None;
        }

        let position = token.position();

        let Some(value) = token.value().clone() else {
            self.errors.receive(Diagnostic::with_detail(
                position,
                Code::SyntaxError,
                "Expected string literal",
            ));
            return None;
        };

        self.consume();

        Some(value)
    }
}
