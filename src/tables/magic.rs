//! Magic bitboards for bishop and rook attacks.
//!
//! Rather than embedding a hand-picked magic-number table, magics are found
//! by brute-force search at first use, seeded with `rand`'s `StdRng` so
//! builds stay reproducible.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BISHOP_DELTAS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DELTAS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Relevant-occupancy mask: squares along the piece's rays, excluding the
/// outer ranks/files (they can't change the attack set once the ray reaches
/// the edge — ).
fn relevant_mask(sq: usize, deltas: &[(i32, i32); 4]) -> u64 {
    let (rank, file) = (sq as i32 / 8, sq as i32 % 8);
    let mut mask = 0u64;
    for &(dr, df) in deltas {
        let (mut r, mut f) = (rank + dr, file + df);
        while (1..7).contains(&r) && (1..7).contains(&f) {
            mask |= 1u64 << (r * 8 + f);
            r += dr;
            f += df;
        }
    }
    mask
}

/// Naive ray-walk attack set for a specific subset of blockers.
fn attacks_for_occupancy(sq: usize, occupancy: u64, deltas: &[(i32, i32); 4]) -> u64 {
    let (rank, file) = (sq as i32 / 8, sq as i32 % 8);
    let mut attacks = 0u64;
    for &(dr, df) in deltas {
        let (mut r, mut f) = (rank + dr, file + df);
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << (r * 8 + f);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// Enumerate every subset of `mask` via the standard carry-rippler trick.
fn subsets(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset = 0u64;
    loop {
        subsets.push(subset);
        if subset == mask {
            break;
        }
        subset = subset.wrapping_sub(mask) & mask;
    }
    subsets
}

struct MagicEntry {
    mask: u64,
    magic: u64,
    shift: u32,
    table: Vec<u64>,
}

impl MagicEntry {
    #[inline]
    fn lookup(&self, occupied: u64) -> u64 {
        let blockers = occupied & self.mask;
        let index = blockers.wrapping_mul(self.magic) >> self.shift;
        self.table[index as usize]
    }
}

/// Search for a magic number that perfectly hashes every occupancy subset of
/// `mask` into a table of size `1 << relevant_bits` with no collisions in
/// the resulting attack set.
fn find_magic(sq: usize, mask: u64, deltas: &[(i32, i32); 4], rng: &mut StdRng) -> MagicEntry {
    let relevant_bits = mask.count_ones();
    let shift = 64 - relevant_bits;
    let occupancy_subsets = subsets(mask);
    let reference_attacks: Vec<u64> = occupancy_subsets
        .iter()
        .map(|&occ| attacks_for_occupancy(sq, occ, deltas))
        .collect();

    loop {
        // Sparse random candidates (ANDing three random u64s) converge far
        // faster than uniform random u64s.
        let magic: u64 = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        if (magic.wrapping_mul(mask) >> 56).count_ones() < 6 {
            continue;
        }

        let table_size = 1usize << relevant_bits;
        let mut table = vec![u64::MAX; table_size];
        let mut ok = true;
        for (occ, &attacks) in occupancy_subsets.iter().zip(reference_attacks.iter()) {
            let index = (occ.wrapping_mul(magic) >> shift) as usize;
            if table[index] == u64::MAX {
                table[index] = attacks;
            } else if table[index] != attacks {
                ok = false;
                break;
            }
        }
        if ok {
            for slot in &mut table {
                if *slot == u64::MAX {
                    *slot = 0;
                }
            }
            return MagicEntry { mask, magic, shift, table };
        }
    }
}

fn build_table(deltas: &[(i32, i32); 4], seed: u64) -> Vec<MagicEntry> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..64).map(|sq| {
        let mask = relevant_mask(sq, deltas);
        find_magic(sq, mask, deltas, &mut rng)
    }).collect()
}

static BISHOP_MAGICS: Lazy<Vec<MagicEntry>> = Lazy::new(|| build_table(&BISHOP_DELTAS, 0xB15_4_0_42));
static ROOK_MAGICS: Lazy<Vec<MagicEntry>> = Lazy::new(|| build_table(&ROOK_DELTAS, 0xB00_4_0_42));

#[inline]
#[must_use]
pub(crate) fn bishop_attacks(sq: usize, occupied: u64) -> u64 {
    BISHOP_MAGICS[sq].lookup(occupied)
}

#[inline]
#[must_use]
pub(crate) fn rook_attacks(sq: usize, occupied: u64) -> u64 {
    ROOK_MAGICS[sq].lookup(occupied)
}

#[inline]
#[must_use]
pub(crate) fn queen_attacks(sq: usize, occupied: u64) -> u64 {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}
