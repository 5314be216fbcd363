//! Contains the [`TransactionManager`], the checkpoint stack behind the parser's backtracking.

/// A single checkpoint on the stack: the position to restore on rollback and the working
/// position that moves while the checkpoint is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Checkpoint {
    restore: usize,
    current: usize,
}

impl Checkpoint {
    fn new(position: usize) -> Self {
        Self {
            restore: position,
            current: position,
        }
    }
}

/// Gives the parser undoable cursor movement so alternative grammar productions can be tried
/// without manual position bookkeeping at each call site.
///
/// The effective cursor position always resolves to the innermost open checkpoint, or to the
/// base position if none is open. Committing propagates the working position outward exactly one
/// level; rolling back discards everything done since the matching [`Self::start`], including
/// the progress of inner checkpoints that individually committed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TransactionManager {
    base: usize,
    checkpoints: Vec<Checkpoint>,
}

impl TransactionManager {
    /// Creates a new [`TransactionManager`] positioned at zero with no open checkpoint.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Gets the effective cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.checkpoints
            .last()
            .map_or(self.base, |checkpoint| checkpoint.current)
    }

    /// Sets the effective cursor position.
    pub fn set_position(&mut self, position: usize) {
        match self.checkpoints.last_mut() {
            Some(checkpoint) => checkpoint.current = position,
            None => self.base = position,
        }
    }

    /// Opens a new checkpoint at the current effective position.
    pub fn start(&mut self) { self.checkpoints.push(Checkpoint::new(self.position())); }

    /// Closes the innermost checkpoint, keeping the progress made while it was open.
    pub fn commit(&mut self) {
        let checkpoint = self
            .checkpoints
            .pop()
            .expect("commit without a matching start");

        self.set_position(checkpoint.current);
    }

    /// Closes the innermost checkpoint, discarding the progress made while it was open.
    pub fn rollback(&mut self) {
        let checkpoint = self
            .checkpoints
            .pop()
            .expect("rollback without a matching start");

        self.set_position(checkpoint.restore);
    }
}
