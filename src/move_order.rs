//! `MoveSorter`: MVV-LVA capture ordering plus a promotion bonus.
//!
//! Scoring is a free function rather than a method on a stateful type so a
//! future PV/killer/history layer can compose additional terms before the
//! final sort without an API change.

use crate::position::Position;
use crate::types::{Move, MoveList, PieceType, ScoredMoveList};

/// Stateless namespace, mirroring `MoveGenerator`/`Evaluator`.
pub struct MoveSorter;

impl MoveSorter {
    /// Score every move in `moves` into a `ScoredMoveList`. Callers pull
    /// moves out best-first via `ScoredMoveList::pick_best`, an incremental
    /// selection sort, rather than sorting the whole list up front — most
    /// nodes beta-cut after only a few moves, so a full sort would pay for
    /// ordering moves that are never tried.
    #[must_use]
    pub fn score(pos: &Position, moves: &MoveList) -> ScoredMoveList {
        let mut scored = ScoredMoveList::new();
        for &mv in moves {
            scored.push(mv, score_move(pos, mv));
        }
        scored
    }
}

/// MVV-LVA capture bonus, or the promotion bonus, or 0 for a quiet move.
#[must_use]
pub fn score_move(pos: &Position, mv: Move) -> i32 {
    let mover = pos.board().piece_at(mv.from()).expect("score_move: empty source square");

    if let Some(promoted) = mv.promotion_piece() {
        return 50 * promoted.value() - mover.kind.value();
    }

    if let Some(victim_kind) = captured_kind(pos, mv) {
        return 10 * victim_kind.value() - mover.kind.value();
    }

    0
}

/// The piece type captured by `mv`, accounting for en-passant (whose victim
/// doesn't sit on the destination square).
fn captured_kind(pos: &Position, mv: Move) -> Option<PieceType> {
    if mv.is_en_passant() {
        return Some(PieceType::Pawn);
    }
    if mv.is_castling() {
        return None;
    }
    pos.board().piece_at(mv.to()).map(|p| p.kind)
}
