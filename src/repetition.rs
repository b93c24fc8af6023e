//! `RepetitionTable`: a fixed-capacity stack of Zobrist hashes.
//!
//! Pushed on every ply made during search (and, via `GameController`, during
//! play), popped on unmake — LIFO-nested with make/unmake so it always
//! empties when the search tree completes.

/// Deep enough for the longest search line this engine ever reaches
/// (quiescence included).
pub const CAPACITY: usize = 512;

pub struct RepetitionTable {
    hashes: Vec<u64>,
}

impl RepetitionTable {
    #[must_use]
    pub fn new() -> Self {
        RepetitionTable { hashes: Vec::with_capacity(CAPACITY) }
    }

    /// Push `hash` onto the stack. Debug-asserts against overflowing the
    /// documented capacity — a search deeper than `CAPACITY` plies would be
    /// a programming error.
    pub fn push(&mut self, hash: u64) {
        debug_assert!(self.hashes.len() < CAPACITY, "repetition table overflow");
        self.hashes.push(hash);
    }

    /// Pop the most recently pushed hash. Debug-asserts the stack isn't
    /// empty.
    pub fn pop(&mut self) {
        debug_assert!(!self.hashes.is_empty(), "pop on empty repetition table");
        self.hashes.pop();
    }

    /// True if `hash` currently appears anywhere in the stack.
    #[must_use]
    pub fn contains(&self, hash: u64) -> bool {
        self.hashes.contains(&hash)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl Default for RepetitionTable {
    fn default() -> Self {
        RepetitionTable::new()
    }
}
