//! Alpha-beta negamax search with quiescence, move ordering, and a
//! transposition table, plus the Lazy-SMP root search in [`smp`].

pub mod config;
pub mod smp;

use crate::board::types::{Color, Move, MoveList, ScoredMoveList};
use crate::board::{generate_captures, generate_legal_moves, is_in_check, Position};
use crate::eval::Evaluator;
use crate::tt::TranspositionTable;
use crate::zobrist;

use config::{INF, MATE_VALUE};

fn color_mult(side: Color) -> i32 {
    match side {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Score moves into ordering tiers: TT hint highest, then captures, then
/// non-capture promotions, then everything else. Within a tier, relative
/// order is preserved (`ScoredMoveList::pick_best` only swaps on a strict
/// improvement).
fn order_moves(moves: &MoveList, hint: Option<Move>) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for mv in moves.iter() {
        let score = if Some(*mv) == hint {
            3
        } else if mv.is_capture() {
            2
        } else if mv.is_promotion() {
            1
        } else {
            0
        };
        scored.push(*mv, score);
    }
    scored
}

fn order_captures(captures: &MoveList) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for mv in captures.iter() {
        let score = i32::from(mv.is_promotion());
        scored.push(*mv, score);
    }
    scored
}

/// Negamax with alpha-beta pruning, TT probe/store, and a quiescence leaf
/// search. `side` is whoever is to move at this node; scores are always
/// returned from that side's own perspective (standard negamax).
pub(crate) fn negamax(
    tt: &TranspositionTable,
    evaluator: &dyn Evaluator,
    position: Position,
    depth: i32,
    mut alpha: i32,
    beta: i32,
    side: Color,
) -> i32 {
    let alpha_orig = alpha;
    let search_hash = zobrist::with_side_to_move(position.zobrist_key(), side);

    let probe = tt.probe(search_hash, depth, alpha, beta);
    if let Some(score) = probe.score {
        #[cfg(feature = "logging")]
        log::trace!("tt hit at depth {depth} hash {search_hash:#x} score {score}");
        return score;
    }
    #[cfg(feature = "logging")]
    log::trace!("tt miss at depth {depth} hash {search_hash:#x}");

    if depth <= 0 {
        return quiescence(evaluator, position, alpha, beta, side, config::DELTA_PRUNING_MARGIN);
    }

    let legal = generate_legal_moves(&position, side);
    if legal.is_empty() {
        return if is_in_check(&position, side) {
            -(MATE_VALUE + depth)
        } else {
            0
        };
    }

    let mut ordered = order_moves(&legal, probe.hint_move);
    let mut best_move = legal.first();
    let mut best_score = -INF;

    let mut idx = 0;
    while let Some(&scored) = ordered.pick_best(idx) {
        let mv = scored.mv;
        let mut copy = position;
        if copy.apply_move(mv).is_err() {
            idx += 1;
            continue;
        }
        let score = -negamax(tt, evaluator, copy, depth - 1, -beta, -alpha, side.opponent());

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
        idx += 1;
    }

    tt.store(search_hash, best_score, depth, alpha_orig, beta, best_move);
    best_score
}

/// Quiescence search: depth-unbounded, captures only, no TT involvement.
/// Skips any capture that would leave the mover's own king attacked,
/// rather than trusting capture generation to have already filtered it.
pub(crate) fn quiescence(
    evaluator: &dyn Evaluator,
    position: Position,
    mut alpha: i32,
    beta: i32,
    side: Color,
    delta_margin: i32,
) -> i32 {
    let stand_pat = color_mult(side) * evaluator.evaluate(&position);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat < alpha - delta_margin {
        return alpha;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let captures = generate_captures(&position, side);
    let mut ordered = order_captures(&captures);

    let mut idx = 0;
    while let Some(&scored) = ordered.pick_best(idx) {
        let mv = scored.mv;
        let mut copy = position;
        if copy.apply_move(mv).is_err() {
            idx += 1;
            continue;
        }
        if is_in_check(&copy, side) {
            idx += 1;
            continue;
        }
        let score = -quiescence(evaluator, copy, -beta, -alpha, side.opponent(), delta_margin);
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
        idx += 1;
    }

    alpha
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{Piece, Square};
    use crate::board::types::Variant;
    use crate::eval::MaterialPst;

    #[test]
    fn negamax_scores_checkmate_as_a_mate_value_at_the_current_depth() {
        // Classic back-rank mate: Black king boxed in by its own pawns,
        // White rook delivering check along the 8th rank. Black to move
        // has no legal reply.
        let mut p = Position::empty(Variant::Classic);
        p.set_piece(Color::Black, Piece::King, Square::new(7, 6)); // g8
        p.set_piece(Color::Black, Piece::Pawn, Square::new(6, 5)); // f7
        p.set_piece(Color::Black, Piece::Pawn, Square::new(6, 6)); // g7
        p.set_piece(Color::Black, Piece::Pawn, Square::new(6, 7)); // h7
        p.set_piece(Color::White, Piece::Rook, Square::new(7, 0)); // a8
        p.set_piece(Color::White, Piece::King, Square::new(0, 0)); // a1

        let tt = TranspositionTable::new(4096);
        let depth = 3;
        let score = negamax(&tt, &MaterialPst, p, depth, -INF, INF, Color::Black);
        assert_eq!(score, -(MATE_VALUE + depth));
    }

    #[test]
    fn negamax_scores_stalemate_as_zero() {
        let mut p = Position::empty(Variant::Classic);
        p.set_piece(Color::White, Piece::King, Square::new(0, 0));
        p.set_piece(Color::Black, Piece::King, Square::new(1, 2));
        p.set_piece(Color::Black, Piece::Queen, Square::new(2, 1));

        let tt = TranspositionTable::new(4096);
        let score = negamax(&tt, &MaterialPst, p, 3, -INF, INF, Color::White);
        assert_eq!(score, 0);
    }

    #[test]
    fn quiescence_prefers_winning_a_hanging_queen() {
        let mut p = Position::empty(Variant::Classic);
        p.set_piece(Color::White, Piece::King, Square::from_index(4));
        p.set_piece(Color::Black, Piece::King, Square::from_index(60));
        p.set_piece(Color::White, Piece::Rook, Square::from_index(0));
        p.set_piece(Color::Black, Piece::Queen, Square::from_index(8));

        let score = quiescence(&MaterialPst, p, -INF, INF, Color::White, config::DELTA_PRUNING_MARGIN);
        assert!(score > 800, "expected score reflecting captured queen, got {score}");
    }
}
