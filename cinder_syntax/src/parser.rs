//! Contains the [`Parser`] and its cursor machinery.

use cinder_base::{
    diagnostic::{Code, Diagnostic, Handler, Storage},
    position::Position,
};
use cinder_lexical::token::{Token, TokenKind};

use crate::transaction::TransactionManager;

/// The parser of the Cinder language.
///
/// Constructed over a token sequence, it consumes tokens through the
/// [`TransactionManager`]'s cursor so grammar productions can speculatively attempt an
/// alternative and cleanly undo partial consumption on failure. The token sequence is never
/// mutated; the syntax tree is built bottom-up from copies of the token payloads.
#[derive(Debug)]
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) transactions: TransactionManager,
    pub(crate) errors: Storage<Diagnostic>,
}

impl Parser {
    /// Creates a new [`Parser`] over the given token sequence.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            transactions: TransactionManager::new(),
            errors: Storage::new(),
        }
    }

    /// Gets the diagnostics recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &Storage<Diagnostic> { &self.errors }

    /// Peeks at the token the cursor currently points at.
    #[must_use]
    pub fn peek(&self) -> Option<&Token> { self.tokens.get(self.transactions.position()) }

    /// Peeks at the token located `offset` tokens away from the cursor.
    ///
    /// # Returns
    /// [`None`] if `offset` applied to the cursor falls outside of the token sequence.
    #[must_use]
    pub fn peek_offset(&self, offset: isize) -> Option<&Token> {
        let position = self.transactions.position();

        let index = if offset.is_negative() {
            position.checked_sub(offset.unsigned_abs())?
        } else {
            position.checked_add(offset.unsigned_abs())?
        };

        self.tokens.get(index)
    }

    /// Consumes the current token, advancing the cursor by one.
    pub fn consume(&mut self) -> Option<&Token> {
        let index = self.transactions.position();

        if index >= self.tokens.len() {
            return None;
        }

        self.transactions.set_position(index + 1);

        self.tokens.get(index)
    }

    /// Consumes the current token if it is of the given kind.
    ///
    /// Otherwise records a syntax error referencing the previous token's position and returns
    /// `false` without consuming anything.
    pub fn expect(&mut self, kind: TokenKind) -> bool {
        let found = self.peek().map(Token::kind);

        if found == Some(kind) {
            self.consume();
            return true;
        }

        let position = self
            .peek_offset(-1)
            .map_or_else(Position::default, Token::position);

        let detail = found.map_or_else(
            || format!("Expected token type {kind}, got end of file"),
            |found| format!("Expected token type {kind}, got {found}"),
        );

        self.errors
            .receive(Diagnostic::with_detail(position, Code::SyntaxError, detail));

        false
    }
}
