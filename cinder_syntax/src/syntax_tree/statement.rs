//! Contains the syntax trees related to statements and their parsing logic.

use cinder_base::{
    diagnostic::{Code, Diagnostic, Handler},
    position::Position,
};
use cinder_lexical::token::{Token, TokenKind};
use derive_more::From;
use enum_as_inner::EnumAsInner;
use getset::Getters;

use super::{
    expression::{Expression, Identifier},
    Scope,
};
use crate::parser::Parser;

/// Syntax Synopsis:
///
/// ``` ebnf
/// Statement:
///     Scope
///     | Assignment
///     | Expression
///     ;
/// ```
///
/// The [`Self::Scope`] variant represents a nested block in the data model; no grammar
/// production currently emits it.
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Statement {
    Scope(Scope),
    Assignment(Assignment),
    Expression(Expression),
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Assignment:
///     Identifier '=' Expression
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Assignment {
    /// Gets the identifier being assigned to.
    #[get = "pub"]
    identifier: Identifier,

    /// Gets the expression of the right-hand side.
    #[get = "pub"]
    expression: Expression,
}

impl Assignment {
    /// Dissolves the [`Assignment`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (Identifier, Expression) { (self.identifier, self.expression) }
}

impl Parser {
    /// Parses a [`Statement`].
    pub fn parse_statement(&mut self) -> Option<Statement> {
        // assignment first: both alternatives start by consuming an identifier, the transaction
        // hands those tokens back before the expression alternative is tried
        self.transactions.start();

        if let Some(assignment) = self.parse_assignment() {
            self.transactions.commit();
            return Some(Statement::Assignment(assignment));
        }

        self.transactions.rollback();

        self.transactions.start();

        if let Some(expression) = self.parse_expression() {
            self.transactions.commit();
            return Some(Statement::Expression(expression));
        }

        self.transactions.rollback();

        let position = self.peek().map_or_else(Position::default, Token::position);

        self.errors.receive(Diagnostic::with_detail(
            position,
            Code::SyntaxError,
            "Expected statement",
        ));

        None
    }

    /// Parses an [`Assignment`].
    pub fn parse_assignment(&mut self) -> Option<Assignment> {
        self.transactions.start();

        let Some(identifier) = self.parse_identifier() else {
            self.transactions.rollback();
            return None;
        };

        if self.peek().map(Token::kind) != Some(TokenKind::Assign) {
            self.transactions.rollback();
            return None;
        }

        self.consume();

        let Some(expression) = self.parse_expression() else {
            self.transactions.rollback();
            return None;
        };

        self.transactions.commit();

        Some(Assignment {
            identifier,
            expression,
        })
    }
}
