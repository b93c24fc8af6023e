//! Negamax search with alpha-beta pruning, quiescence, and iterative
//! deepening.
//!
//! Cancellation polls an atomic flag and unwinds explicitly rather than
//! throwing, so aborting a search is zero-cost on the hot path and bounded
//! in latency when it fires. Single-threaded: no Lazy-SMP, no learned
//! evaluation.

use crate::eval::Evaluator;
use crate::move_order::MoveSorter;
use crate::movegen::MoveGenerator;
use crate::position::Position;
use crate::repetition::RepetitionTable;
use crate::stopper::{SearchStopper, POLL_INTERVAL_NODES};
use crate::tt::{Bound, TranspositionTable};
use crate::types::Move;

/// Score assigned to a position where the side to move is checkmated,
/// adjusted by `ply` so shorter mates are preferred over longer ones.
/// Chosen comfortably above any realistic material+PST+mobility evaluation
/// (bounded by a handful of thousand centipawns).
pub const MATE_SCORE: i32 = 1_000_000;

/// Search window bound, safely negatable (`-INFINITY` doesn't overflow).
const INFINITY: i32 = 2_000_000_000;

#[cfg(feature = "logging")]
macro_rules! log_iteration {
    ($depth:expr, $nodes:expr, $score:expr) => {
        log::info!("info depth {} nodes {} score cp {}", $depth, $nodes, $score);
    };
}
#[cfg(not(feature = "logging"))]
macro_rules! log_iteration {
    ($depth:expr, $nodes:expr, $score:expr) => {{
        let _ = (&$depth, &$nodes, &$score);
    }};
}

/// Outcome of a complete `Search::run` call.
#[derive(Debug, Clone, Copy)]
pub struct SearchReport {
    /// The best move found by the last fully-completed iteration, or `None`
    /// if even depth 1 was aborted or the root position has no legal moves.
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth_completed: u32,
    pub nodes: u64,
}

/// Owns the transposition table and repetition stack across a search. A
/// fresh `Search` can be kept across moves so the TT survives a game, or
/// dropped per move — callers choose.
pub struct Search {
    tt: TranspositionTable,
    repetition: RepetitionTable,
    nodes: u64,
    root_best_move: Option<Move>,
}

impl Search {
    #[must_use]
    pub fn new(tt_size_mb: usize) -> Self {
        Search {
            tt: TranspositionTable::new(tt_size_mb),
            repetition: RepetitionTable::new(),
            nodes: 0,
            root_best_move: None,
        }
    }

    #[must_use]
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn clear_transposition_table(&mut self) {
        self.tt.clear();
    }

    /// Iterative deepening driver. `pos` is taken by value
    /// because search may run on a worker thread while the caller keeps
    /// reading the game's own position.
    #[must_use]
    pub fn run(&mut self, mut pos: Position, max_depth: u32, stopper: &dyn SearchStopper) -> SearchReport {
        stopper.reset();
        self.nodes = 0;
        let mut report = SearchReport { best_move: None, score: 0, depth_completed: 0, nodes: 0 };

        for depth in 1..=max_depth.max(1) {
            self.root_best_move = None;
            let score = self.negamax(&mut pos, -INFINITY, INFINITY, 0, depth, stopper);

            // An aborted iteration never commits: the search was incomplete
            // and its move is not sound.
            if stopper.is_stopped() {
                break;
            }

            report.depth_completed = depth;
            report.score = score;
            if self.root_best_move.is_some() {
                report.best_move = self.root_best_move;
            }
            log_iteration!(depth, self.nodes, score);
        }

        report.nodes = self.nodes;
        report
    }

    /// Negamax with alpha-beta pruning. `ply` counts half-moves
    /// from the search root; `depth_left` is the remaining search horizon.
    fn negamax(
        &mut self,
        pos: &mut Position,
        mut alpha: i32,
        beta: i32,
        ply: u32,
        depth_left: u32,
        stopper: &dyn SearchStopper,
    ) -> i32 {
        self.nodes += 1;
        if self.nodes % POLL_INTERVAL_NODES == 0 && stopper.is_stopped() {
            return 0;
        }

        let hash = pos.hash();

        if ply > 0 {
            if let Some(entry) = self.tt.probe(hash, depth_left) {
                match entry.bound {
                    Bound::Exact => return entry.eval,
                    Bound::Lower if entry.eval >= beta => return entry.eval,
                    Bound::Upper if entry.eval <= alpha => return entry.eval,
                    _ => {}
                }
            }
        }

        if depth_left == 0 {
            return self.quiescence(pos, alpha, beta, ply, stopper);
        }

        if ply > 0 && self.repetition.contains(hash) {
            return 0;
        }

        self.repetition.push(hash);
        let in_check = pos.is_check();
        let pseudo_legal = MoveGenerator::pseudo_legal(pos);
        let mut scored = MoveSorter::score(pos, &pseudo_legal);

        let alpha_orig = alpha;
        let mut best_move = None;
        let mut legal_moves = 0u32;

        let mut idx = 0;
        while let Some(next) = scored.pick_best(idx) {
            idx += 1;
            let mv = next.mv;
            let metadata = pos.make_move(mv);
            if !pos.last_mover_is_safe() {
                pos.unmake_move(mv, metadata);
                continue;
            }
            legal_moves += 1;

            let score = -self.negamax(pos, -beta, -alpha, ply + 1, depth_left - 1, stopper);
            pos.unmake_move(mv, metadata);

            if stopper.is_stopped() {
                self.repetition.pop();
                return 0;
            }

            if score > alpha {
                alpha = score;
                best_move = Some(mv);
                if ply == 0 {
                    self.root_best_move = Some(mv);
                }
                if score >= beta {
                    self.tt.store(hash, score, alpha_orig, beta, depth_left, Some(mv));
                    self.repetition.pop();
                    return beta;
                }
            }
        }

        self.repetition.pop();

        if legal_moves == 0 {
            return if in_check { -MATE_SCORE + ply as i32 } else { 0 };
        }

        self.tt.store(hash, alpha, alpha_orig, beta, depth_left, best_move);
        alpha
    }

    /// Quiescence search: extend past the horizon through captures only, to
    /// avoid the horizon effect.
    fn quiescence(&mut self, pos: &mut Position, mut alpha: i32, beta: i32, ply: u32, stopper: &dyn SearchStopper) -> i32 {
        self.nodes += 1;

        // Mobility is counted from the full pseudo-legal move list, not the
        // legal-only count, to avoid a make/unmake legality pass on every
        // quiescence node. A documented performance trade-off, not an
        // oversight: see `Evaluator::evaluate`'s doc comment.
        let mobility = MoveGenerator::pseudo_legal(pos).len() as u32;
        let stand_pat = Evaluator::evaluate(pos, mobility);
        if stand_pat >= beta {
            return stand_pat;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        // Polled on every quiescence entry, not throttled like negamax.
        if stopper.is_stopped() {
            return 0;
        }

        let hash = pos.hash();
        if self.repetition.contains(hash) {
            return 0;
        }
        self.repetition.push(hash);

        let captures = MoveGenerator::pseudo_legal_captures(pos);
        let mut scored = MoveSorter::score(pos, &captures);

        let mut idx = 0;
        while let Some(next) = scored.pick_best(idx) {
            idx += 1;
            let mv = next.mv;
            let metadata = pos.make_move(mv);
            if !pos.last_mover_is_safe() {
                pos.unmake_move(mv, metadata);
                continue;
            }

            let score = -self.quiescence(pos, -beta, -alpha, ply + 1, stopper);
            pos.unmake_move(mv, metadata);

            if stopper.is_stopped() {
                self.repetition.pop();
                return 0;
            }

            if score > alpha {
                alpha = score;
                if score >= beta {
                    self.repetition.pop();
                    return beta;
                }
            }
        }

        self.repetition.pop();
        alpha
    }
}
