//! Contains all the definitions of syntax tree nodes for the Cinder language and their parsing
//! logic.
//!
//! The nodes form a closed tagged-union hierarchy: a [`Program`] holds one [`Scope`], a scope
//! holds an ordered sequence of [`statement::Statement`]s, and so on down to literals and
//! identifiers. Nodes are immutable once constructed; a parse either produces a whole tree or
//! nothing.

use cinder_lexical::token::{Token, TokenKind};
use getset::Getters;

use crate::parser::Parser;

pub mod expression;
pub mod statement;

use statement::Statement;

/// Syntax Synopsis:
///
/// ``` ebnf
/// Scope:
///     '{'? (Statement ';')* '}'?
///     ;
/// ```
///
/// The braces are required unless this is the outer program scope.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Scope {
    /// Gets the ordered statements of the scope.
    #[get = "pub"]
    statements: Vec<Statement>,
}

impl Scope {
    /// Dissolves the [`Scope`] into its statements.
    #[must_use]
    pub fn dissolve(self) -> Vec<Statement> { self.statements }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Program:
///     Scope
///     ;
/// ```
///
/// The outer scope of a program is implicit: its braces may be omitted.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Program {
    /// Gets the outer scope of the program.
    #[get = "pub"]
    scope: Scope,
}

impl Program {
    /// Dissolves the [`Program`] into its outer scope.
    #[must_use]
    pub fn dissolve(self) -> Scope { self.scope }
}

impl Parser {
    /// Parses the whole token sequence into a [`Program`].
    ///
    /// # Returns
    /// [`None`] if the token sequence is not a syntactically valid program; the diagnostics
    /// recorded in [`Parser::diagnostics`] describe why. Diagnostics may also accumulate on a
    /// successful parse when a failed grammar alternative recorded them before another
    /// alternative succeeded.
    pub fn parse(&mut self) -> Option<Program> { self.parse_program() }

    fn parse_program(&mut self) -> Option<Program> {
        self.expect(TokenKind::StartOfFile);

        let scope = self.parse_scope(false)?;

        self.expect(TokenKind::EndOfFile);

        Some(Program { scope })
    }

    /// Parses a [`Scope`].
    ///
    /// With `require_braces`, the scope must be delimited by `{` and `}`; otherwise both braces
    /// are optional and the scope extends until a `}` or the end-of-file sentinel.
    pub fn parse_scope(&mut self, require_braces: bool) -> Option<Scope> {
        if require_braces {
            if !self.expect(TokenKind::LeftBrace) {
                return None;
            }
        } else if self.peek().map(Token::kind) == Some(TokenKind::LeftBrace) {
            self.consume();
        }

        let mut statements = Vec::new();

        while let Some(kind) = self.peek().map(Token::kind) {
            if kind == TokenKind::RightBrace || kind == TokenKind::EndOfFile {
                break;
            }

            let statement = self.parse_statement()?;

            if !self.expect(TokenKind::Semicolon) {
                return None;
            }

            statements.push(statement);
        }

        if require_braces {
            if !self.expect(TokenKind::RightBrace) {
                return None;
            }
        } else if self.peek().map(Token::kind) == Some(TokenKind::RightBrace) {
            self.consume();
        }

        Some(Scope { statements })
    }
}

#[cfg(test)]
mod tests;
