//! UCI long-algebraic move notation and SAN formatting.
//!
//! `to_uci` is a thin wrapper over `Move`'s own `Display` impl, which already
//! produces exactly `from + to + optional promotion letter`. `parse_uci`
//! resolves the from/to/promotion triple against the position's pseudo-legal
//! moves so the returned `Move` carries the right flag (castling/en-passant/
//! promotion) without re-deriving the rules.

use crate::error::{MoveParseError, SanError};
use crate::movegen::MoveGenerator;
use crate::position::Position;
use crate::types::{Move, PieceType, Square};

/// Parse a UCI long-algebraic move string (`e2e4`, `e7e8q`) against `pos`,
/// returning the matching pseudo-legal `Move`.
pub fn parse_uci(pos: &Position, text: &str) -> Result<Move, MoveParseError> {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(MoveParseError::InvalidLength { len: bytes.len() });
    }

    let from: Square = text[0..2]
        .parse()
        .map_err(|_| MoveParseError::InvalidSquare { notation: text[0..2].to_string() })?;
    let to: Square = text[2..4]
        .parse()
        .map_err(|_| MoveParseError::InvalidSquare { notation: text[2..4].to_string() })?;
    let promotion = if bytes.len() == 5 {
        Some(PieceType::from_char(bytes[4] as char).ok_or(MoveParseError::InvalidPromotion { char: bytes[4] as char })?)
    } else {
        None
    };

    MoveGenerator::pseudo_legal(pos)
        .iter()
        .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_piece() == promotion)
        .copied()
        .ok_or(MoveParseError::IllegalMove { notation: text.to_string() })
}

/// Format `m` as a UCI long-algebraic string. Castling is already
/// encoded as the king's from->to, matching `e1g1`/`e1c1`/`e8g8`/`e8c8`.
#[must_use]
pub fn to_uci(m: Move) -> String {
    m.to_string()
}

/// Format `m`, played from `pos`, as Standard Algebraic Notation.
///
/// `pos` is mutated and restored (make/unmake) to compute check/mate
/// suffixes and disambiguation against the other currently-legal moves.
#[must_use]
pub fn to_san(pos: &mut Position, m: Move) -> String {
    let mover = pos.board().piece_at(m.from()).expect("to_san: empty source square");
    let is_capture = m.is_en_passant() || pos.board().piece_at(m.to()).is_some();

    let mut san = if m.is_castling() {
        if m.to().file() == 6 { "O-O".to_string() } else { "O-O-O".to_string() }
    } else if mover.kind == PieceType::Pawn {
        let mut s = String::new();
        if is_capture {
            s.push((b'a' + m.from().file() as u8) as char);
            s.push('x');
        }
        s.push_str(&m.to().to_string());
        if let Some(promo) = m.promotion_piece() {
            s.push('=');
            s.push(promo.to_char().to_ascii_uppercase());
        }
        s
    } else {
        let mut s = String::new();
        s.push(mover.kind.to_char().to_ascii_uppercase());
        s.push_str(&disambiguator(pos, m));
        if is_capture {
            s.push('x');
        }
        s.push_str(&m.to().to_string());
        s
    };

    let metadata = pos.make_move(m);
    if pos.is_check() {
        let no_replies = MoveGenerator::legal(pos).is_empty();
        san.push(if no_replies { '#' } else { '+' });
    }
    pos.unmake_move(m, metadata);

    san
}

/// File, then rank, then full square disambiguation among other legal moves
/// of the same piece type landing on the same destination.
fn disambiguator(pos: &mut Position, m: Move) -> String {
    let mover = pos.board().piece_at(m.from()).expect("disambiguator: empty source square");
    let rivals: Vec<Move> = MoveGenerator::legal(pos)
        .iter()
        .copied()
        .filter(|&other| {
            other != m
                && other.to() == m.to()
                && pos.board().piece_at(other.from()).map(|p| p.kind) == Some(mover.kind)
        })
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    let same_file = rivals.iter().any(|r| r.from().file() == m.from().file());
    let same_rank = rivals.iter().any(|r| r.from().rank() == m.from().rank());
    if !same_file {
        ((b'a' + m.from().file() as u8) as char).to_string()
    } else if !same_rank {
        (m.from().rank() + 1).to_string()
    } else {
        m.from().to_string()
    }
}

/// Parse Standard Algebraic Notation (`e4`, `Nf3`, `Bxc6+`, `O-O`, `e8=Q#`)
/// against the currently-legal moves of `pos`.
///
/// `pos` is mutated and restored (via `MoveGenerator::legal`) while matching
/// candidates, same as `to_san`'s check-suffix computation.
pub fn parse_san(pos: &mut Position, san: &str) -> Result<Move, SanError> {
    let trimmed = san.trim();
    if trimmed.is_empty() {
        return Err(SanError::Empty);
    }
    let core = trimmed.trim_end_matches(['+', '#']);

    if core == "O-O" || core == "0-0" {
        return find_castling(pos, true);
    }
    if core == "O-O-O" || core == "0-0-0" {
        return find_castling(pos, false);
    }

    let (piece, rest) = match core.chars().next() {
        Some(c @ ('N' | 'B' | 'R' | 'Q' | 'K')) => (
            PieceType::from_char(c).expect("matched against a known piece letter above"),
            &core[1..],
        ),
        _ => (PieceType::Pawn, core),
    };

    let (body, promotion) = match rest.split_once('=') {
        Some((b, p)) => {
            let promo_char = p.chars().next().ok_or(SanError::Empty)?;
            let promo = PieceType::from_char(promo_char)
                .ok_or_else(|| SanError::InvalidSquare { notation: p.to_string() })?;
            (b, Some(promo))
        }
        None => (rest, None),
    };

    let body_no_capture: String = body.chars().filter(|&c| c != 'x').collect();
    if body_no_capture.len() < 2 {
        return Err(SanError::InvalidSquare { notation: body_no_capture });
    }
    let split_at = body_no_capture.len() - 2;
    let dest_str = &body_no_capture[split_at..];
    let dest: Square =
        dest_str.parse().map_err(|_| SanError::InvalidSquare { notation: dest_str.to_string() })?;
    let disambig = &body_no_capture[..split_at];
    let disambig_file = disambig.chars().find(|c| c.is_ascii_lowercase()).map(|c| c as usize - 'a' as usize);
    let disambig_rank = disambig.chars().find(|c| c.is_ascii_digit()).map(|c| c as usize - '1' as usize);

    let candidates: Vec<Move> = MoveGenerator::legal(pos)
        .iter()
        .copied()
        .filter(|&m| {
            m.to() == dest
                && pos.board().piece_at(m.from()).map(|p| p.kind) == Some(piece)
                && m.promotion_piece() == promotion
                && disambig_file.map_or(true, |f| m.from().file() == f)
                && disambig_rank.map_or(true, |r| m.from().rank() == r)
        })
        .collect();

    match candidates.len() {
        0 => Err(SanError::NoMatchingMove { san: trimmed.to_string() }),
        1 => Ok(candidates[0]),
        _ => Err(SanError::AmbiguousMove { san: trimmed.to_string() }),
    }
}

fn find_castling(pos: &mut Position, kingside: bool) -> Result<Move, SanError> {
    MoveGenerator::legal(pos)
        .iter()
        .copied()
        .find(|m| m.is_castling() && (m.to().file() == 6) == kingside)
        .ok_or_else(|| SanError::NoMatchingMove { san: if kingside { "O-O" } else { "O-O-O" }.to_string() })
}
