//! Static position evaluation.
//!
//! The core only commits to a pluggable `Evaluator` capability and the one
//! default implementation named by the spec's data model (material +
//! piece-square tables); tuning the term weights is explicitly out of scope.

use crate::board::types::{Color, Piece, Square, ALL_PIECES};
use crate::board::Position;

/// A static scalar evaluation of a position, from White's perspective:
/// positive favors White, negative favors Black. Implementors must not
/// allocate per call — a process-lifetime evaluator is the expected shape,
/// matching the "avoid heap-allocating the evaluator per call" guidance.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, position: &Position) -> i32;
}

/// Pawn PST, White's perspective, a1..h8 in rank-major order (index = sq).
/// Mirrored for Black via `Square::flip_vertical`. Values favor central
/// and advanced pawns; no claim of tuning accuracy is made.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,   5,  10,  25,  25,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

const ZERO_PST: [i32; 64] = [0; 64];

fn pst_for(piece: Piece) -> &'static [i32; 64] {
    match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King => &KING_PST,
        // Fairy pieces get no positional term beyond material; the spec
        // scopes evaluation tuning out and these have no classical analogue.
        Piece::Princess | Piece::Empress | Piece::Nightrider | Piece::Grasshopper => &ZERO_PST,
    }
}

fn pst_value(piece: Piece, color: Color, sq: Square) -> i32 {
    let table = pst_for(piece);
    let idx = match color {
        Color::White => sq.as_index(),
        Color::Black => sq.flip_vertical().as_index(),
    };
    table[idx]
}

/// Default evaluator: sum of material (`Piece::value`) plus piece-square
/// table bonuses, mirrored for Black so the table reads "from the side's
/// own perspective" for both colors.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialPst;

impl Evaluator for MaterialPst {
    fn evaluate(&self, position: &Position) -> i32 {
        let mut score = 0;
        for color in [Color::White, Color::Black] {
            let sign = match color {
                Color::White => 1,
                Color::Black => -1,
            };
            for piece in ALL_PIECES {
                let mut bb = position.piece_bb(color, piece);
                while !bb.is_empty() {
                    let sq = crate::board::types::pop_lsb(&mut bb);
                    score += sign * (piece.value() + pst_value(piece, color, sq));
                }
            }
        }
        score
    }
}
