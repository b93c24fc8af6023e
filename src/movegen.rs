//! Pseudo-legal and legal move generation.
//!
//! Pseudo-legal generation reads a snapshot of `friendly`/`enemy`/`occupied`
//! bitboards once per call and never recomputes it mid-generation. Legality
//! is filtered by make/`last_mover_is_safe`/unmake rather than a dedicated
//! pin/check generator.

use crate::board::Board;
use crate::position::Position;
use crate::tables::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks};
use crate::types::{bit_for, Bitboard, Color, Move, MoveList, Piece, PieceType, Square, PROMOTION_PIECES};

/// Occupancy snapshot taken once at generation entry.
struct Occupancy {
    friendly: Bitboard,
    enemy: Bitboard,
    occupied: Bitboard,
    empty: Bitboard,
}

impl Occupancy {
    fn snapshot(board: &Board, us: Color) -> Self {
        let friendly = board.occupancy(us);
        let enemy = board.occupancy(us.opposite());
        let occupied = friendly | enemy;
        Occupancy { friendly, enemy, occupied, empty: !occupied }
    }
}

/// Stateless move generator: a namespace for the pseudo-legal/legal/
/// capture-only generation entry points.
pub struct MoveGenerator;

impl MoveGenerator {
    /// All pseudo-legal moves for the side to move, including castling.
    #[must_use]
    pub fn pseudo_legal(pos: &Position) -> MoveList {
        let mut moves = MoveList::new();
        let board = pos.board();
        let us = pos.side_to_move();
        let occ = Occupancy::snapshot(board, us);

        gen_pawn_moves(pos, board, us, &occ, &mut moves, false);
        gen_knight_moves(board, us, &occ, &mut moves);
        gen_slider_moves(board, us, PieceType::Bishop, &occ, &mut moves);
        gen_slider_moves(board, us, PieceType::Rook, &occ, &mut moves);
        gen_slider_moves(board, us, PieceType::Queen, &occ, &mut moves);
        gen_king_moves(board, us, &occ, &mut moves);
        gen_castling_moves(pos, board, us, &occ, &mut moves);
        moves
    }

    /// Pseudo-legal captures, promotions, and en-passant only (no quiet
    /// pushes, no castling) — used by quiescence search.
    #[must_use]
    pub fn pseudo_legal_captures(pos: &Position) -> MoveList {
        let mut moves = MoveList::new();
        let board = pos.board();
        let us = pos.side_to_move();
        let occ = Occupancy::snapshot(board, us);

        gen_pawn_moves(pos, board, us, &occ, &mut moves, true);
        gen_leaper_captures(board, us, PieceType::Knight, &occ, &mut moves);
        gen_leaper_captures(board, us, PieceType::King, &occ, &mut moves);
        gen_slider_captures(board, us, PieceType::Bishop, &occ, &mut moves);
        gen_slider_captures(board, us, PieceType::Rook, &occ, &mut moves);
        gen_slider_captures(board, us, PieceType::Queen, &occ, &mut moves);
        moves
    }

    /// Pseudo-legal moves filtered to those that don't leave the mover's own
    /// king in check.
    #[must_use]
    pub fn legal(pos: &mut Position) -> MoveList {
        let mut legal = MoveList::new();
        for &m in MoveGenerator::pseudo_legal(pos).as_slice() {
            let md = pos.make_move(m);
            if pos.last_mover_is_safe() {
                legal.push(m);
            }
            pos.unmake_move(m, md);
        }
        legal
    }
}

fn gen_knight_moves(board: &Board, us: Color, occ: &Occupancy, moves: &mut MoveList) {
    for from in board.pieces_of_type(us, PieceType::Knight).iter() {
        let targets = knight_attacks(from) & !occ.friendly;
        for to in targets.iter() {
            moves.push(Move::normal(from, to));
        }
    }
}

fn gen_king_moves(board: &Board, us: Color, occ: &Occupancy, moves: &mut MoveList) {
    for from in board.pieces_of_type(us, PieceType::King).iter() {
        let targets = king_attacks(from) & !occ.friendly;
        for to in targets.iter() {
            moves.push(Move::normal(from, to));
        }
    }
}

fn gen_leaper_captures(board: &Board, us: Color, kind: PieceType, occ: &Occupancy, moves: &mut MoveList) {
    for from in board.pieces_of_type(us, kind).iter() {
        let attacks = if kind == PieceType::Knight { knight_attacks(from) } else { king_attacks(from) };
        for to in (attacks & occ.enemy).iter() {
            moves.push(Move::normal(from, to));
        }
    }
}

fn slider_attacks(kind: PieceType, sq: Square, occupied: Bitboard) -> Bitboard {
    match kind {
        PieceType::Bishop => Bitboard(bishop_attacks(sq.index(), occupied.0)),
        PieceType::Rook => Bitboard(rook_attacks(sq.index(), occupied.0)),
        PieceType::Queen => Bitboard(queen_attacks(sq.index(), occupied.0)),
        _ => unreachable!("slider_attacks called with non-slider piece type"),
    }
}

fn gen_slider_moves(board: &Board, us: Color, kind: PieceType, occ: &Occupancy, moves: &mut MoveList) {
    for from in board.pieces_of_type(us, kind).iter() {
        let targets = slider_attacks(kind, from, occ.occupied) & !occ.friendly;
        for to in targets.iter() {
            moves.push(Move::normal(from, to));
        }
    }
}

fn gen_slider_captures(board: &Board, us: Color, kind: PieceType, occ: &Occupancy, moves: &mut MoveList) {
    for from in board.pieces_of_type(us, kind).iter() {
        let targets = slider_attacks(kind, from, occ.occupied) & occ.enemy;
        for to in targets.iter() {
            moves.push(Move::normal(from, to));
        }
    }
}

fn promotion_rank(color: Color) -> usize {
    if color == Color::White { 7 } else { 0 }
}

fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, color: Color) {
    if to.rank() == promotion_rank(color) {
        for &promo in &PROMOTION_PIECES {
            moves.push(Move::promotion(from, to, promo));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}

#[allow(clippy::too_many_arguments)]
fn gen_pawn_moves(
    pos: &Position,
    board: &Board,
    us: Color,
    occ: &Occupancy,
    moves: &mut MoveList,
    captures_only: bool,
) {
    let white = us == Color::White;
    let start_rank = if white { 1 } else { 6 };

    for from in board.pieces_of_type(us, PieceType::Pawn).iter() {
        if !captures_only {
            if let Some(one) = from.forward(white) {
                if occ.empty.contains(one) {
                    push_pawn_move(moves, from, one, us);
                    if from.rank() == start_rank {
                        if let Some(two) = one.forward(white) {
                            if occ.empty.contains(two) {
                                moves.push(Move::normal(from, two));
                            }
                        }
                    }
                }
            }
        }

        let capture_targets = pawn_attacks(us, from) & occ.enemy;
        for to in capture_targets.iter() {
            push_pawn_move(moves, from, to, us);
        }

        if let Some(ep) = pos.ep_square() {
            if pawn_attacks(us, from).contains(ep) {
                moves.push(Move::en_passant(from, ep));
            }
        }
    }
}

fn gen_castling_moves(pos: &Position, board: &Board, us: Color, occ: &Occupancy, moves: &mut MoveList) {
    let rank = if us == Color::White { 0 } else { 7 };
    let king_from = Square::new(rank, 4);
    if board.piece_at(king_from) != Some(Piece::new(us, PieceType::King)) {
        return;
    }
    let them = us.opposite();
    let rights = pos.castle_rights();

    if rights.has(bit_for(us, true)) {
        let f = Square::new(rank, 5);
        let g = Square::new(rank, 6);
        if occ.empty.contains(f)
            && occ.empty.contains(g)
            && !board.is_attacked(king_from, them)
            && !board.is_attacked(f, them)
            && !board.is_attacked(g, them)
        {
            moves.push(Move::castling(king_from, g));
        }
    }
    if rights.has(bit_for(us, false)) {
        let d = Square::new(rank, 3);
        let c = Square::new(rank, 2);
        let b = Square::new(rank, 1);
        if occ.empty.contains(d)
            && occ.empty.contains(c)
            && occ.empty.contains(b)
            && !board.is_attacked(king_from, them)
            && !board.is_attacked(d, them)
            && !board.is_attacked(c, them)
        {
            moves.push(Move::castling(king_from, c));
        }
    }
}
