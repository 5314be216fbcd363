//! Contains the [`Lexer`] and its tokenization logic.

use std::str::FromStr;

use cinder_base::{
    diagnostic::{Code, Diagnostic, Handler, Storage},
    position::Position,
};

use crate::token::{KeywordKind, Token, TokenKind};

/// Turns a source text into an ordered sequence of [`Token`]s.
///
/// The lexer operates over the decoded characters of the source text through a cursor with one
/// character of lookahead. Lexical errors are recoverable: they are recorded into the lexer's
/// diagnostic storage and scanning continues, so [`Lexer::tokenize`] always returns a complete
/// token sequence.
#[derive(Debug)]
pub struct Lexer {
    source: Vec<char>,
    index: usize,
    line: usize,
    offset: usize,
    errors: Storage<Diagnostic>,
}

impl Lexer {
    /// Creates a new [`Lexer`] over the given source text.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            index: 0,
            line: 0,
            offset: 0,
            errors: Storage::new(),
        }
    }

    /// Gets the diagnostics recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &Storage<Diagnostic> { &self.errors }

    /// Tokenizes the whole source text in one pass.
    ///
    /// The returned sequence always starts with a [`TokenKind::StartOfFile`] token and ends with
    /// an [`TokenKind::EndOfFile`] token. Unknown characters and unterminated string literals are
    /// recorded as diagnostics without stopping the scan. Afterwards the cursor state is reset,
    /// so calling this method again reproduces the same sequence.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = vec![Token::new(TokenKind::StartOfFile, self.position(), None)];

        while let Some(character) = self.peek() {
            if character.is_ascii_alphabetic() || character == '_' {
                tokens.push(self.scan_identifier_or_keyword());
            } else if character == '"' {
                tokens.push(self.scan_string_literal());
            } else if character.is_ascii_digit() {
                tokens.push(self.scan_numeric_literal());
            } else if let Some(token) = self.scan_operator(character) {
                tokens.push(token);
            } else if character == '\n' {
                self.consume();
                self.line += 1;
                self.offset = 0;
            } else if character.is_whitespace() {
                self.consume();
            } else {
                self.errors
                    .receive(Diagnostic::new(self.position(), Code::UnknownCharacter));
                self.consume();
            }
        }

        tokens.push(Token::new(TokenKind::EndOfFile, self.position(), None));

        // reset the cursor so that a subsequent call tokenizes deterministically again
        self.index = 0;
        self.line = 0;
        self.offset = 0;

        tokens
    }

    /// Gets the current position of the cursor in the source text.
    fn position(&self) -> Position { Position::new(self.line, self.offset) }

    /// Peeks at the character the cursor currently points at.
    fn peek(&self) -> Option<char> { self.peek_at(0) }

    /// Peeks at the character located `offset` characters after the cursor.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source.get(self.index + offset).copied()
    }

    /// Consumes the current character, advancing the cursor and the column offset by one.
    fn consume(&mut self) -> Option<char> {
        let character = self.source.get(self.index).copied()?;

        self.index += 1;
        self.offset += 1;

        Some(character)
    }

    /// Consumes characters as long as the predicate holds, returning the accumulated text.
    fn scan_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut text = String::new();

        while let Some(character) = self.peek() {
            if !predicate(character) {
                break;
            }

            self.consume();
            text.push(character);
        }

        text
    }

    fn scan_identifier_or_keyword(&mut self) -> Token {
        let position = self.position();
        let text = self.scan_while(|character| character.is_ascii_alphanumeric() || character == '_');

        if let Ok(keyword) = KeywordKind::from_str(&text) {
            return Token::new(TokenKind::Keyword(keyword), position, None);
        }

        // `true`/`false` become boolean literals carrying their spelling
        if text == "true" || text == "false" {
            return Token::new(TokenKind::BooleanLiteral, position, Some(text));
        }

        Token::new(TokenKind::Identifier, position, Some(text))
    }

    fn scan_numeric_literal(&mut self) -> Token {
        let position = self.position();
        let mut text = self.scan_while(|character| character.is_ascii_digit());

        // a `.` after the digit run promotes the token to a float literal, fraction digits are
        // optional (`123.` is a float)
        if self.peek() == Some('.') {
            self.consume();
            text.push('.');
            text.push_str(&self.scan_while(|character| character.is_ascii_digit()));

            return Token::new(TokenKind::FloatLiteral, position, Some(text));
        }

        Token::new(TokenKind::IntegerLiteral, position, Some(text))
    }

    fn scan_string_literal(&mut self) -> Token {
        let position = self.position();
        let mut text = String::new();

        // the opening quote is consumed and discarded
        self.consume();

        while let Some(character) = self.peek() {
            if character == '"' {
                break;
            }

            if character == '\\' {
                self.consume();

                if let Some(escape) = self.peek() {
                    match escape {
                        'n' => text.push('\n'),
                        't' => text.push('\t'),
                        'r' => text.push('\r'),
                        '0' => text.push('\0'),
                        '\\' => text.push('\\'),
                        '"' => text.push('"'),
                        // any other escaped character is dropped
                        _ => {}
                    }

                    self.consume();
                }

                continue;
            }

            self.consume();
            text.push(character);
        }

        if self.peek().is_none() {
            self.errors.receive(Diagnostic::new(
                self.position(),
                Code::UnterminatedStringLiteral,
            ));
        }

        // the closing quote, if any, is consumed and discarded
        self.consume();

        Token::new(TokenKind::StringLiteral, position, Some(text))
    }

    fn scan_operator(&mut self, character: char) -> Option<Token> {
        let token = match character {
            '(' => self.scan_single(TokenKind::LeftParenthesis),
            ')' => self.scan_single(TokenKind::RightParenthesis),
            '{' => self.scan_single(TokenKind::LeftBrace),
            '}' => self.scan_single(TokenKind::RightBrace),
            ',' => self.scan_single(TokenKind::Comma),
            ';' => self.scan_single(TokenKind::Semicolon),
            '+' => self.scan_single(TokenKind::Add),
            '-' => self.scan_single(TokenKind::Subtract),
            '/' => self.scan_single(TokenKind::Divide),
            '^' => self.scan_single(TokenKind::BitwiseXor),
            '*' => self.scan_single_or_pair('*', TokenKind::Power, TokenKind::Multiply),
            '=' => self.scan_single_or_pair('=', TokenKind::Equal, TokenKind::Assign),
            '!' => self.scan_single_or_pair('=', TokenKind::NotEqual, TokenKind::Not),
            '&' => self.scan_single_or_pair('&', TokenKind::LogicalAnd, TokenKind::BitwiseAnd),
            '|' => self.scan_single_or_pair('|', TokenKind::LogicalOr, TokenKind::BitwiseOr),
            '<' => self.scan_angle(
                '<',
                TokenKind::LeftShift,
                TokenKind::LessThanOrEqual,
                TokenKind::LessThan,
            ),
            '>' => self.scan_angle(
                '>',
                TokenKind::RightShift,
                TokenKind::GreaterThanOrEqual,
                TokenKind::GreaterThan,
            ),
            _ => return None,
        };

        Some(token)
    }

    fn scan_single(&mut self, kind: TokenKind) -> Token {
        let position = self.position();

        self.consume();

        Token::new(kind, position, None)
    }

    /// Scans an operator that pairs with `second` into a two-character form, falling back to the
    /// single-character form by one character of lookahead.
    fn scan_single_or_pair(&mut self, second: char, pair: TokenKind, single: TokenKind) -> Token {
        let position = self.position();

        if self.peek_at(1) == Some(second) {
            self.consume();
            self.consume();

            return Token::new(pair, position, None);
        }

        self.consume();

        Token::new(single, position, None)
    }

    /// Scans `<`/`>`: doubling the character yields a shift, a following `=` yields the
    /// or-equal comparison, anything else the bare comparison.
    fn scan_angle(
        &mut self,
        character: char,
        shift: TokenKind,
        or_equal: TokenKind,
        bare: TokenKind,
    ) -> Token {
        let position = self.position();

        let kind = match self.peek_at(1) {
            Some(next) if next == character => shift,
            Some('=') => or_equal,
            _ => bare,
        };

        self.consume();

        if kind != bare {
            self.consume();
        }

        Token::new(kind, position, None)
    }
}
