//! Zobrist hashing keys.
//!
//! 793 keys drawn from a seeded PRNG so builds are reproducible:
//! 12 pieces * 64 squares (piece placement) + 1 (side to move) + 16
//! (one per possible 4-bit castle-rights value) + 8 (en-passant file).
//!
//! The en-passant file is always XORed in when `ep_square` is `Some`,
//! regardless of whether the side to move actually has a pawn that can
//! capture it. Two positions differing only in an uncapturable ghost ep
//! square therefore hash differently from one with no ep square at all;
//! what matters is that the rule is applied consistently everywhere.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub(crate) struct ZobristKeys {
    pub(crate) piece_square: [[u64; 64]; 12],
    pub(crate) side_to_move: u64,
    /// Indexed directly by `CastleRights::bits()` (0..16).
    pub(crate) castle_rights: [u64; 16],
    pub(crate) ep_file: [u64; 8],
}

fn build() -> ZobristKeys {
    // Fixed seed: builds must be reproducible.
    let mut rng = StdRng::seed_from_u64(0x7357_C0DE_5EED_0001);

    let mut piece_square = [[0u64; 64]; 12];
    for piece_table in &mut piece_square {
        for key in piece_table.iter_mut() {
            *key = rng.gen();
        }
    }

    let side_to_move = rng.gen();

    // Indexed directly by the 4-bit rights value; XOR out the old value's
    // key and XOR in the new one whenever rights change, including to/from 0.
    let mut castle_rights = [0u64; 16];
    for key in &mut castle_rights {
        *key = rng.gen();
    }

    let mut ep_file = [0u64; 8];
    for key in &mut ep_file {
        *key = rng.gen();
    }

    ZobristKeys { piece_square, side_to_move, castle_rights, ep_file }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(build);
