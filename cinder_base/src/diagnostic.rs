//! A module for handling diagnostics in the front end.
//!
//! Diagnostics are recorded as data rather than thrown: both the lexer and the parser keep
//! operating after recording one, and the caller inspects the accumulated list afterwards.

use std::{
    fmt::Display,
    io,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use getset::{CopyGetters, Getters};

use crate::position::Position;

/// Is an enumeration of the stable diagnostic codes reported by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Code {
    /// `E001` - an unexpected token was found.
    UnexpectedToken,

    /// `E002` - a variable was referenced before being defined (reserved, currently unused).
    UndefinedVariable,

    /// `E003` - a function was called incorrectly (reserved, currently unused).
    InvalidFunctionCall,

    /// `E004` - the lexer found a character it cannot classify.
    UnknownCharacter,

    /// `E005` - a string literal reached the end of the input before its closing quote.
    UnterminatedStringLiteral,

    /// `E006` - a syntax error carrying a free-form detail message.
    SyntaxError,
}

impl Code {
    /// Gets the stable identifier of the code.
    #[must_use]
    pub fn identifier(self) -> &'static str {
        match self {
            Self::UnexpectedToken => "E001",
            Self::UndefinedVariable => "E002",
            Self::InvalidFunctionCall => "E003",
            Self::UnknownCharacter => "E004",
            Self::UnterminatedStringLiteral => "E005",
            Self::SyntaxError => "E006",
        }
    }

    /// Gets the canonical message of the code.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::UnexpectedToken => "Syntax Error - Unexpected token",
            Self::UndefinedVariable => "Undefined variable",
            Self::InvalidFunctionCall => "Invalid function call",
            Self::UnknownCharacter => "Unknown character",
            Self::UnterminatedStringLiteral => "Unterminated string literal",
            Self::SyntaxError => "Syntax Error",
        }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Represents a single recorded diagnostic: a position-tagged code with an optional detail.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct Diagnostic {
    /// Gets the position in the source text that the diagnostic refers to.
    #[get_copy = "pub"]
    position: Position,

    /// Gets the code of the diagnostic.
    #[get_copy = "pub"]
    code: Code,

    /// Gets the optional detail message of the diagnostic.
    #[get = "pub"]
    detail: Option<String>,
}

impl Diagnostic {
    /// Creates a new [`Diagnostic`] without a detail message.
    #[must_use]
    pub fn new(position: Position, code: Code) -> Self {
        Self {
            position,
            code,
            detail: None,
        }
    }

    /// Creates a new [`Diagnostic`] carrying a detail message.
    #[must_use]
    pub fn with_detail(position: Position, code: Code, detail: impl Into<String>) -> Self {
        Self {
            position,
            code,
            detail: Some(detail.into()),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.code.message())?;

        if let Some(detail) = &self.detail {
            write!(f, " - {detail}")?;
        }

        write!(f, " at line {}", self.position)
    }
}

/// Represents a trait responsible for handling diagnostics in the front end.
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, diagnostic: T);
}

/// Is a struct that implements the [`Handler`] trait by storing all diagnostics in a vector.
#[derive(Debug)]
pub struct Storage<T: Send + Sync> {
    entries: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Returns `true` if at least one diagnostic has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool { !self.entries.read().unwrap().is_empty() }

    /// Returns a reference to the underlying vector of diagnostics.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> { self.entries.read().unwrap() }

    /// Returns a mutable reference to the underlying vector of diagnostics.
    pub fn as_vec_mut(&self) -> RwLockWriteGuard<Vec<T>> { self.entries.write().unwrap() }

    /// Consumes the [`Storage`] and returns the underlying vector of diagnostics.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> { self.entries.into_inner().unwrap() }

    /// Removes all recorded diagnostics.
    pub fn clear(&self) { self.entries.write().unwrap().clear(); }
}

impl<T: Send + Sync + Display> Storage<T> {
    /// Writes every recorded diagnostic to the given stream, one per line.
    ///
    /// # Errors
    /// Returns an [`io::Error`] if writing to the stream fails.
    pub fn format<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in self.entries.read().unwrap().iter() {
            writeln!(out, "{entry}")?;
        }

        Ok(())
    }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, diagnostic: U) { self.entries.write().unwrap().push(diagnostic.into()); }
}

#[cfg(test)]
mod tests;
