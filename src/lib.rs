//! `chess_core`: bitboard move generation and negamax alpha-beta search
//! over a chess position.
//!
//! Primitives and precomputed tables (`types`,
//! `tables`) underlie the board/position representation (`board`,
//! `position`, `fen`), which underlies move generation (`movegen`), which
//! underlies evaluation, ordering, and search (`eval`, `move_order`, `tt`,
//! `repetition`, `stopper`, `search`), which is finally wrapped by
//! `game::GameController` for a turn-based caller. `notation` and `perft`
//! are leaf consumers of the core, not part of the layering chain.

pub mod board;
pub mod error;
pub mod eval;
pub mod fen;
pub mod game;
pub mod move_order;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod position;
pub mod repetition;
pub mod search;
pub mod stopper;
mod tables;
pub mod tt;
pub mod types;

pub use board::Board;
pub use error::{FenError, MoveParseError, SanError, SquareError};
pub use eval::Evaluator;
pub use fen::{parse_fen, to_fen};
pub use game::{GameController, GameResult, MoveOutcome};
pub use move_order::{score_move, MoveSorter};
pub use movegen::MoveGenerator;
pub use notation::{parse_san, parse_uci, to_san, to_uci};
pub use perft::{perft, perft_divide};
pub use position::{Metadata, Position};
pub use repetition::RepetitionTable;
pub use search::{Search, SearchReport, MATE_SCORE};
pub use stopper::{ManualStopper, SearchStopper, TimeBudgetStopper};
pub use tt::{Bound, TTEntry, TranspositionTable};
pub use types::{CastleRights, Color, Move, MoveList, Piece, PieceType, ScoredMove, ScoredMoveList, Square};
