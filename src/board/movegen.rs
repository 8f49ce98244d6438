//! Pseudo-legal move generation per piece type, plus the legality filter.

use super::attacks::{is_in_check, is_square_attacked};
use super::position::Position;
use super::rays::{apply_step, BISHOP_DIRS, KING_STEPS, KNIGHT_STEPS, QUEEN_DIRS, ROOK_DIRS};
use super::types::{Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

/// All legal moves for `side` in `position`: pseudo-legal generation
/// followed by a check filter (copy, apply, test whether the mover's own
/// king is attacked afterward).
#[must_use]
pub fn generate_legal_moves(position: &Position, side: Color) -> MoveList {
    filter_legal(position, side, generate_pseudo_legal(position, side))
}

/// Only capturing moves (including en-passant and capture-promotions),
/// legality-filtered. Castling and quiet moves never pass the capture
/// test, so they drop out without special-casing.
#[must_use]
pub fn generate_captures(position: &Position, side: Color) -> MoveList {
    let mut captures = MoveList::new();
    for mv in generate_pseudo_legal(position, side).iter() {
        if mv.is_capture() {
            captures.push(*mv);
        }
    }
    filter_legal(position, side, captures)
}

fn filter_legal(position: &Position, side: Color, candidates: MoveList) -> MoveList {
    let mut legal = MoveList::new();
    for mv in candidates.iter() {
        let mut copy = *position;
        if copy.apply_move(*mv).is_err() {
            continue;
        }
        if !is_in_check(&copy, side) {
            legal.push(*mv);
        }
    }
    legal
}

fn generate_pseudo_legal(position: &Position, side: Color) -> MoveList {
    let mut moves = MoveList::new();
    generate_pawn_moves(position, side, &mut moves);
    generate_jump_moves(position, side, Piece::Knight, &KNIGHT_STEPS, &mut moves);
    generate_jump_moves(position, side, Piece::Princess, &KNIGHT_STEPS, &mut moves);
    generate_jump_moves(position, side, Piece::Empress, &KNIGHT_STEPS, &mut moves);
    generate_jump_moves(position, side, Piece::King, &KING_STEPS, &mut moves);
    generate_sliding_moves(position, side, Piece::Rook, &ROOK_DIRS, &mut moves);
    generate_sliding_moves(position, side, Piece::Bishop, &BISHOP_DIRS, &mut moves);
    generate_sliding_moves(position, side, Piece::Queen, &QUEEN_DIRS, &mut moves);
    generate_sliding_moves(position, side, Piece::Princess, &BISHOP_DIRS, &mut moves);
    generate_sliding_moves(position, side, Piece::Empress, &ROOK_DIRS, &mut moves);
    generate_nightrider_moves(position, side, &mut moves);
    generate_grasshopper_moves(position, side, &mut moves);
    generate_castling_moves(position, side, &mut moves);
    moves
}

fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, is_capture: bool, promo_rank: usize) {
    if to.rank() == promo_rank {
        for piece in PROMOTION_PIECES {
            if is_capture {
                moves.push(Move::new_promotion_capture(from, to, piece));
            } else {
                moves.push(Move::new_promotion(from, to, piece));
            }
        }
    } else if is_capture {
        moves.push(Move::capture(from, to));
    } else {
        moves.push(Move::quiet(from, to));
    }
}

fn generate_pawn_moves(position: &Position, side: Color, moves: &mut MoveList) {
    let (up, start_rank, promo_rank): (i32, usize, usize) = match side {
        Color::White => (8, 1, 7),
        Color::Black => (-8, 6, 0),
    };
    let enemy = side.opponent();
    let occ = position.all_occupancy();

    let mut pawns = position.piece_bb(side, Piece::Pawn);
    while !pawns.is_empty() {
        let from = super::types::pop_lsb(&mut pawns);
        let from_idx = from.as_index() as i32;

        let single_idx = from_idx + up;
        let single_empty = (0..64).contains(&single_idx) && !occ.contains(Square::from_index(single_idx as usize));
        if single_empty {
            let to = Square::from_index(single_idx as usize);
            push_pawn_move(moves, from, to, false, promo_rank);

            if from.rank() == start_rank {
                let double_idx = from_idx + 2 * up;
                let double_to = Square::from_index(double_idx as usize);
                if !occ.contains(double_to) {
                    moves.push(Move::double_pawn_push(from, double_to));
                }
            }
        }

        for file_delta in [-1i32, 1] {
            let cap_idx = from_idx + up + file_delta;
            if !(0..64).contains(&cap_idx) {
                continue;
            }
            let to = Square::from_index(cap_idx as usize);
            if from.file_distance(to) != 1 {
                continue;
            }
            if let Some((color, _)) = position.piece_at(to) {
                if color == enemy {
                    push_pawn_move(moves, from, to, true, promo_rank);
                }
            } else if position.en_passant_target() == Some(to) {
                moves.push(Move::en_passant(from, to));
            }
        }
    }
}

fn generate_jump_moves(
    position: &Position,
    side: Color,
    piece: Piece,
    steps: &[super::rays::Step],
    moves: &mut MoveList,
) {
    let mut bb = position.piece_bb(side, piece);
    while !bb.is_empty() {
        let from = super::types::pop_lsb(&mut bb);
        for &step in steps {
            if let Some(to) = apply_step(from, step) {
                push_if_not_friendly(position, side, from, to, moves);
            }
        }
    }
}

fn push_if_not_friendly(position: &Position, side: Color, from: Square, to: Square, moves: &mut MoveList) {
    match position.piece_at(to) {
        Some((color, _)) if color == side => {}
        Some((_, _)) => moves.push(Move::capture(from, to)),
        None => moves.push(Move::quiet(from, to)),
    }
}

fn generate_sliding_moves(
    position: &Position,
    side: Color,
    piece: Piece,
    dirs: &[super::rays::Step],
    moves: &mut MoveList,
) {
    let mut bb = position.piece_bb(side, piece);
    while !bb.is_empty() {
        let from = super::types::pop_lsb(&mut bb);
        for &dir in dirs {
            let mut current = from;
            loop {
                match apply_step(current, dir) {
                    Some(to) => match position.piece_at(to) {
                        Some((color, _)) if color == side => break,
                        Some(_) => {
                            moves.push(Move::capture(from, to));
                            break;
                        }
                        None => {
                            moves.push(Move::quiet(from, to));
                            current = to;
                        }
                    },
                    None => break,
                }
            }
        }
    }
}

fn generate_nightrider_moves(position: &Position, side: Color, moves: &mut MoveList) {
    let mut bb = position.piece_bb(side, Piece::Nightrider);
    while !bb.is_empty() {
        let from = super::types::pop_lsb(&mut bb);
        for &step in &KNIGHT_STEPS {
            let mut current = from;
            loop {
                match apply_step(current, step) {
                    Some(to) => match position.piece_at(to) {
                        Some((color, _)) if color == side => break,
                        Some(_) => {
                            moves.push(Move::capture(from, to));
                            break;
                        }
                        None => {
                            moves.push(Move::quiet(from, to));
                            current = to;
                        }
                    },
                    None => break,
                }
            }
        }
    }
}

fn generate_grasshopper_moves(position: &Position, side: Color, moves: &mut MoveList) {
    let mut bb = position.piece_bb(side, Piece::Grasshopper);
    while !bb.is_empty() {
        let from = super::types::pop_lsb(&mut bb);
        for &dir in &QUEEN_DIRS {
            let Some(hurdle) = first_occupied(position, from, dir) else {
                continue;
            };
            let Some(landing) = apply_step(hurdle, dir) else {
                continue;
            };
            push_if_not_friendly(position, side, from, landing, moves);
        }
    }
}

fn first_occupied(position: &Position, from: Square, step: super::rays::Step) -> Option<Square> {
    let mut current = from;
    loop {
        current = apply_step(current, step)?;
        if position.all_occupancy().contains(current) {
            return Some(current);
        }
    }
}

fn generate_castling_moves(position: &Position, side: Color, moves: &mut MoveList) {
    for kingside in [true, false] {
        if let Some(mv) = castling_move(position, side, kingside) {
            moves.push(mv);
        }
    }
}

fn castling_move(position: &Position, color: Color, kingside: bool) -> Option<Move> {
    if !position.castle_rights().has(color, kingside) {
        return None;
    }

    let (king_from, king_to, must_be_empty, must_be_safe): (usize, usize, &[usize], &[usize]) =
        match (color, kingside) {
            (Color::White, true) => (4, 6, &[5, 6], &[4, 5, 6]),
            (Color::White, false) => (4, 2, &[1, 2, 3], &[2, 3, 4]),
            (Color::Black, true) => (60, 62, &[61, 62], &[60, 61, 62]),
            (Color::Black, false) => (60, 58, &[57, 58, 59], &[58, 59, 60]),
        };

    let occ = position.all_occupancy();
    if must_be_empty
        .iter()
        .any(|&sq| occ.contains(Square::from_index(sq)))
    {
        return None;
    }

    let enemy = color.opponent();
    if must_be_safe
        .iter()
        .any(|&sq| is_square_attacked(position, Square::from_index(sq), enemy))
    {
        return None;
    }

    let from = Square::from_index(king_from);
    let to = Square::from_index(king_to);
    Some(if kingside {
        Move::castle_kingside(from, to)
    } else {
        Move::castle_queenside(from, to)
    })
}
