//! FEN parsing and serialization.
//!
//! The parser is tolerant: missing trailing fields default to "no
//! castling", "no en-passant", "halfmove 0", "fullmove 1". The
//! fullmove number is stored but never consulted by search.

use crate::board::Board;
use crate::error::FenError;
use crate::position::Position;
use crate::types::{bit_for, CastleRights, Color, Piece, Square};

/// Parse a standard 6-field FEN string. Trailing fields beyond
/// piece placement and side-to-move are optional.
pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.is_empty() {
        return Err(FenError::TooFewParts { found: parts.len() });
    }

    let mut board = Board::empty();
    let ranks: Vec<&str> = parts[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }
    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_from_top;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::InvalidRank { rank: rank_from_top, files: file + 1 });
                }
                board.add(piece, Square::new(rank, file));
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::InvalidRank { rank: rank_from_top, files: file });
        }
    }

    let side_to_move = match parts.get(1).copied().unwrap_or("w") {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::InvalidSideToMove { found: other.to_string() }),
    };

    let mut castle_rights = CastleRights::none();
    for c in parts.get(2).copied().unwrap_or("-").chars() {
        match c {
            'K' => castle_rights.set(bit_for(Color::White, true)),
            'Q' => castle_rights.set(bit_for(Color::White, false)),
            'k' => castle_rights.set(bit_for(Color::Black, true)),
            'q' => castle_rights.set(bit_for(Color::Black, false)),
            '-' => {}
            _ => return Err(FenError::InvalidCastling { char: c }),
        }
    }

    let ep_field = parts.get(3).copied().unwrap_or("-");
    let ep_square = if ep_field == "-" {
        None
    } else {
        Some(ep_field.parse::<Square>().map_err(|_| FenError::InvalidEnPassant { found: ep_field.to_string() })?)
    };

    let halfmove_clock = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
    // Fullmove number (parts[5]) is accepted but not retained.

    Ok(Position::from_parts(board, side_to_move, castle_rights, ep_square, halfmove_clock))
}

/// Serialize to FEN. Symmetric output is cheap and useful for tests and
/// debugging even though only parsing is strictly required.
#[must_use]
pub fn to_fen(pos: &Position) -> String {
    let board = pos.board();
    let mut ranks = Vec::with_capacity(8);
    for rank in (0..8).rev() {
        let mut row = String::new();
        let mut empty_run = 0;
        for file in 0..8 {
            let sq = Square::new(rank, file);
            match board.piece_at(sq) {
                Some(piece) => {
                    if empty_run > 0 {
                        row.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    row.push(piece.to_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            row.push_str(&empty_run.to_string());
        }
        ranks.push(row);
    }

    let side = if pos.side_to_move() == Color::White { "w" } else { "b" };

    let rights = pos.castle_rights();
    let mut castling = String::new();
    if rights.has(bit_for(Color::White, true)) {
        castling.push('K');
    }
    if rights.has(bit_for(Color::White, false)) {
        castling.push('Q');
    }
    if rights.has(bit_for(Color::Black, true)) {
        castling.push('k');
    }
    if rights.has(bit_for(Color::Black, false)) {
        castling.push('q');
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let ep = pos.ep_square().map_or_else(|| "-".to_string(), |sq| sq.to_string());

    format!("{} {} {} {} {} 1", ranks.join("/"), side, castling, ep, pos.halfmove_clock())
}
