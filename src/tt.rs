//! `TranspositionTable`: a direct-mapped hash -> `TTEntry` cache.
//!
//! Power-of-two sized, depth-preferred replacement, one entry per slot. No
//! generation aging — a newer search simply overwrites a shallower stale
//! entry.

use std::mem;

use crate::types::Move;

/// How the stored `eval` relates to the true minimax value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bound {
    /// `eval` is the exact minimax value.
    Exact,
    /// `eval` is a lower bound (search failed high against `beta`).
    Lower,
    /// `eval` is an upper bound (search failed low against `alpha`).
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    /// Full hash, stored for verification against direct-mapped collisions.
    pub hash: u64,
    pub eval: i32,
    pub depth: u32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

/// Hash-keyed cache of previously evaluated positions with bound information.
/// Entries live for the engine's lifetime; `clear` is exposed for a "new
/// game" reset.
pub struct TranspositionTable {
    table: Vec<Option<TTEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Build a table sized to approximately `size_mb` megabytes, rounded
    /// down to the nearest power-of-two entry count.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = mem::size_of::<Option<TTEntry>>();
        let mut num_entries = (size_mb * 1024 * 1024) / entry_size.max(1);
        num_entries = num_entries.next_power_of_two().max(1);
        if num_entries > 1 {
            // next_power_of_two rounds up; halve back down so we stay
            // within the requested budget rather than over it.
            num_entries /= 2;
        }
        let num_entries = num_entries.max(1024);

        TranspositionTable { table: vec![None; num_entries], mask: num_entries - 1 }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Return the entry for `hash` iff present *and* its stored depth is at
    /// least `min_depth`.
    #[must_use]
    pub fn probe(&self, hash: u64, min_depth: u32) -> Option<&TTEntry> {
        let entry = self.table[self.index(hash)].as_ref()?;
        if entry.hash == hash && entry.depth >= min_depth {
            Some(entry)
        } else {
            None
        }
    }

    /// Store a search result, computing the bound from the caller's
    /// original alpha/beta window. Depth-preferred
    /// replacement: a shallower incoming entry never evicts a deeper one
    /// for a different position.
    pub fn store(&mut self, hash: u64, eval: i32, alpha_orig: i32, beta: i32, depth: u32, best_move: Option<Move>) {
        let bound = if eval <= alpha_orig {
            Bound::Upper
        } else if eval >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };

        let index = self.index(hash);
        let should_replace = match &self.table[index] {
            Some(existing) => existing.hash == hash || depth >= existing.depth,
            None => true,
        };
        if should_replace {
            self.table[index] = Some(TTEntry { hash, eval, depth, bound, best_move });
        }
    }

    /// Drop every stored entry (e.g. on "new game").
    pub fn clear(&mut self) {
        for slot in &mut self.table {
            *slot = None;
        }
    }
}
