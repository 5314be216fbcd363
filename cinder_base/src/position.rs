//! Contains the [`Position`] type used to locate tokens and diagnostics in the source text.

use std::fmt::Display;

use derive_new::new;

/// Is a struct pointing to a particular location in the source text.
///
/// Both fields are zero-based: the first character of the source text is located at line 0,
/// offset 0. The offset resets to zero and the line increments on each newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, new)]
pub struct Position {
    /// The line number of the location.
    pub line: usize,

    /// The character offset of the location within its line.
    pub offset: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.offset)
    }
}
