//! Precomputed, process-wide read-only lookup tables.
//!
//! Everything here is built once — either at compile time (`leapers`) or
//! lazily on first use (`magic`, `zobrist`) — and never mutated afterwards.
//! No code path outside this module should need to recompute an attack set
//! from scratch.

mod leapers;
mod magic;
mod zobrist;

pub(crate) use leapers::{king_attacks, knight_attacks, pawn_attacks};
pub(crate) use magic::{bishop_attacks, queen_attacks, rook_attacks};
pub(crate) use zobrist::ZOBRIST;
