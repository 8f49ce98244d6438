//! Attack detection via inverse-ray probing.

use super::position::Position;
use super::rays::{apply_step, BISHOP_DIRS, KNIGHT_STEPS, QUEEN_DIRS, ROOK_DIRS};
use super::types::{Color, Piece, Square};

/// True iff any piece of `attacker`'s color could capture on `sq` given the
/// current occupancy. Probes each attack pattern outward from `sq` rather
/// than generating every attacker's moves, which is what makes legality
/// filtering and castling checks cheap.
#[must_use]
pub fn is_square_attacked(position: &Position, sq: Square, attacker: Color) -> bool {
    if pawn_attacks(position, sq, attacker) {
        return true;
    }
    if knight_like_attacks(position, sq, attacker) {
        return true;
    }
    if king_attacks(position, sq, attacker) {
        return true;
    }
    if sliding_orthogonal_attacks(position, sq, attacker) {
        return true;
    }
    if sliding_diagonal_attacks(position, sq, attacker) {
        return true;
    }
    if nightrider_attacks(position, sq, attacker) {
        return true;
    }
    if grasshopper_attacks(position, sq, attacker) {
        return true;
    }
    false
}

/// True iff `side` is currently in check.
#[must_use]
pub fn is_in_check(position: &Position, side: Color) -> bool {
    is_square_attacked(position, position.king_square(side), side.opponent())
}

fn has_piece(position: &Position, sq: Square, color: Color, piece: Piece) -> bool {
    position.piece_bb(color, piece).contains(sq)
}

fn pawn_attacks(position: &Position, sq: Square, attacker: Color) -> bool {
    // A White pawn on `p` attacks `p+7` and `p+9`; inverted, an attacker
    // square for `sq` is `sq-7`/`sq-9` (mirrored for Black).
    let offsets: [i32; 2] = match attacker {
        Color::White => [-9, -7],
        Color::Black => [9, 7],
    };
    for offset in offsets {
        let step = super::rays::Step {
            offset,
            max_file_delta: 1,
        };
        if let Some(from) = apply_step(sq, step) {
            if has_piece(position, from, attacker, Piece::Pawn) {
                return true;
            }
        }
    }
    false
}

fn knight_like_attacks(position: &Position, sq: Square, attacker: Color) -> bool {
    for step in KNIGHT_STEPS {
        if let Some(from) = apply_step(sq, step) {
            if has_piece(position, from, attacker, Piece::Knight)
                || has_piece(position, from, attacker, Piece::Princess)
                || has_piece(position, from, attacker, Piece::Empress)
            {
                return true;
            }
        }
    }
    false
}

fn king_attacks(position: &Position, sq: Square, attacker: Color) -> bool {
    for step in super::rays::KING_STEPS {
        if let Some(from) = apply_step(sq, step) {
            if has_piece(position, from, attacker, Piece::King) {
                return true;
            }
        }
    }
    false
}

/// Walk repeatedly in `step`'s direction from `sq`, returning the first
/// occupied square encountered, if any.
fn first_occupied(position: &Position, sq: Square, step: super::rays::Step) -> Option<Square> {
    let mut current = sq;
    loop {
        current = apply_step(current, step)?;
        if position.all_occupancy().contains(current) {
            return Some(current);
        }
    }
}

fn sliding_orthogonal_attacks(position: &Position, sq: Square, attacker: Color) -> bool {
    for step in ROOK_DIRS {
        if let Some(hit) = first_occupied(position, sq, step) {
            if has_piece(position, hit, attacker, Piece::Rook)
                || has_piece(position, hit, attacker, Piece::Queen)
                || has_piece(position, hit, attacker, Piece::Empress)
            {
                return true;
            }
        }
    }
    false
}

fn sliding_diagonal_attacks(position: &Position, sq: Square, attacker: Color) -> bool {
    for step in BISHOP_DIRS {
        if let Some(hit) = first_occupied(position, sq, step) {
            if has_piece(position, hit, attacker, Piece::Bishop)
                || has_piece(position, hit, attacker, Piece::Queen)
                || has_piece(position, hit, attacker, Piece::Princess)
            {
                return true;
            }
        }
    }
    false
}

fn nightrider_attacks(position: &Position, sq: Square, attacker: Color) -> bool {
    for step in KNIGHT_STEPS {
        let mut current = sq;
        loop {
            match apply_step(current, step) {
                Some(next) => {
                    if position.all_occupancy().contains(next) {
                        if has_piece(position, next, attacker, Piece::Nightrider) {
                            return true;
                        }
                        break;
                    }
                    current = next;
                }
                None => break,
            }
        }
    }
    false
}

/// A Grasshopper's landing square is always exactly one step beyond its
/// hurdle, so from `sq` (a candidate landing square) the hurdle — if any —
/// sits exactly one step away in the reverse direction. The attacking
/// Grasshopper itself can be any number of empty squares further along
/// that same reverse direction, so that leg still slides.
fn grasshopper_attacks(position: &Position, sq: Square, attacker: Color) -> bool {
    for step in QUEEN_DIRS {
        let reverse = super::rays::Step {
            offset: -step.offset,
            max_file_delta: step.max_file_delta,
        };
        if let Some(hurdle) = apply_step(sq, reverse) {
            if position.all_occupancy().contains(hurdle) {
                if let Some(origin) = first_occupied(position, hurdle, reverse) {
                    if has_piece(position, origin, attacker, Piece::Grasshopper) {
                        return true;
                    }
                }
            }
        }
    }
    false
}
