//! `GameController`: owns a `Position` plus a `Search` across a game, driving
//! alternation between an external actor and the engine.

use crate::movegen::MoveGenerator;
use crate::position::Position;
use crate::search::{Search, SearchReport};
use crate::stopper::SearchStopper;
use crate::types::{Move, MoveList};

/// Why a game has ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameResult {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

/// The outcome of attempting to play a human move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Applied,
    Rejected,
}

/// Owns the position under play plus the search engine used to answer
/// `make_ai_move`. A full position history is kept separately
/// from the search's own `RepetitionTable` so threefold repetition (a
/// game-level draw rule) can be distinguished from the search's twofold
/// cutoff (a search-level cycle-avoidance heuristic).
pub struct GameController {
    position: Position,
    search: Search,
    hash_history: Vec<u64>,
}

impl GameController {
    #[must_use]
    pub fn new(position: Position, tt_size_mb: usize) -> Self {
        let hash_history = vec![position.hash()];
        GameController { position, search: Search::new(tt_size_mb), hash_history }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Every legal move in the current position.
    #[must_use]
    pub fn legal_moves(&mut self) -> MoveList {
        MoveGenerator::legal(&mut self.position)
    }

    /// True iff the side to move is currently in check.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    /// Apply `m` if it is legal; otherwise leave the position untouched.
    pub fn make_human_move(&mut self, m: Move) -> MoveOutcome {
        if !self.legal_moves().as_slice().contains(&m) {
            return MoveOutcome::Rejected;
        }
        self.position.make_move(m);
        self.hash_history.push(self.position.hash());
        MoveOutcome::Applied
    }

    /// Ask the search engine for, and play, the best move it finds within
    /// `max_depth` plies. Returns the full search
    /// report alongside whether a move was actually available to play.
    pub fn make_ai_move(&mut self, max_depth: u32, stopper: &dyn SearchStopper) -> SearchReport {
        let report = self.search.run(self.position.clone(), max_depth, stopper);
        if let Some(mv) = report.best_move {
            self.position.make_move(mv);
            self.hash_history.push(self.position.hash());
        }
        report
    }

    /// Terminal-state check: checkmate, stalemate, the
    /// fifty-move rule, threefold repetition, or insufficient material.
    #[must_use]
    pub fn game_result(&mut self) -> Option<GameResult> {
        if self.legal_moves().is_empty() {
            return Some(if self.position.is_check() { GameResult::Checkmate } else { GameResult::Stalemate });
        }
        if self.position.halfmove_clock() >= 100 {
            return Some(GameResult::FiftyMoveRule);
        }
        if self.is_threefold_repetition() {
            return Some(GameResult::ThreefoldRepetition);
        }
        if self.position.is_insufficient_material() {
            return Some(GameResult::InsufficientMaterial);
        }
        None
    }

    #[must_use]
    pub fn is_game_over(&mut self) -> bool {
        self.game_result().is_some()
    }

    fn is_threefold_repetition(&self) -> bool {
        let current = *self.hash_history.last().expect("hash_history is never empty");
        self.hash_history.iter().filter(|&&h| h == current).count() >= 3
    }
}
