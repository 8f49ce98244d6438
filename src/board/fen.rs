//! FEN import/export.
//!
//! Not part of the bare move-generation/search core, but every driver
//! needs a way to pin down a concrete position, and the perft and
//! integration test suites rely on it. Fairy pieces use the same letters
//! as [`crate::board::types::Piece::to_char`] (`a`/`c`/`i`/`g`), which is a
//! non-standard extension to plain FEN — classic positions round-trip
//! through any standard FEN reader.

use super::error::FenError;
use super::position::Position;
use super::types::{castle_bit, Bitboard, CastlingRights, Color, Piece, Square, Variant};

/// Standard classic starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Starting position for [`Variant::FairyChess`]: knights on the b/g files
/// become Nightriders, bishops on c/f become Princess/Empress.
pub const START_FEN_FAIRY: &str = "riaqkcir/pppppppp/8/8/8/8/PPPPPPPP/RIAQKCIR w KQkq - 0 1";

impl Position {
    /// Render this position as a FEN string, given the side to move (which
    /// `Position` itself does not track). Halfmove clock and fullmove
    /// number are not tracked either and are always emitted as `0 1`.
    #[must_use]
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty_run = 0u32;
            for file in 0..8 {
                let sq = Square::new(rank, file);
                match self.piece_at(sq) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            placement.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        placement.push(piece.to_fen_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };

        let mut castling = String::new();
        if self.castle_rights.has(Color::White, true) {
            castling.push('K');
        }
        if self.castle_rights.has(Color::White, false) {
            castling.push('Q');
        }
        if self.castle_rights.has(Color::Black, true) {
            castling.push('k');
        }
        if self.castle_rights.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = match self.en_passant_target {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };

        format!("{placement} {side} {castling} {en_passant} 0 1")
    }

    /// Parse a FEN string, returning the position and the side to move it
    /// encodes (since `Position` has no field to put that in).
    pub fn from_fen(fen: &str) -> Result<(Position, Color), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut position = Position::empty(Variant::Classic);
        let mut saw_fairy_piece = false;

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(FenError::TooManyFiles { rank, files: file });
                    }
                    continue;
                }
                if file >= 8 {
                    return Err(FenError::TooManyFiles { rank, files: file + 1 });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                saw_fairy_piece |= piece.is_fairy();
                let sq = Square::new(rank, file);
                position.piece_bb[color.index()][piece.index()] =
                    position.piece_bb[color.index()][piece.index()].or(Bitboard::from_square(sq));
                file += 1;
            }
        }
        position.variant = if saw_fairy_piece {
            Variant::FairyChess
        } else {
            Variant::Classic
        };

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castle_bits = 0u8;
        if parts[2] != "-" {
            for c in parts[2].chars() {
                let bit = match c {
                    'K' => castle_bit(Color::White, 'K'),
                    'Q' => castle_bit(Color::White, 'Q'),
                    'k' => castle_bit(Color::Black, 'K'),
                    'q' => castle_bit(Color::Black, 'Q'),
                    other => return Err(FenError::InvalidCastling { char: other }),
                };
                castle_bits |= bit;
            }
        }
        position.castle_rights = CastlingRights::from_u8(castle_bits);

        position.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(parts[3].parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?)
        };

        position.recompute_occupancy();
        position.zobrist_key = crate::zobrist::compute_hash(&position);

        Ok((position, side_to_move))
    }
}
