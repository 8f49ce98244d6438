//! Lazy-SMP root search: independent iterative-deepening workers sharing
//! one transposition table, with the final move read back from the TT.

use std::thread;

use crate::board::types::{Color, Move, MoveList};
use crate::board::{generate_legal_moves, Position};
use crate::eval::Evaluator;
use crate::tt::TranspositionTable;
use crate::zobrist;

use super::config::{SearchConfig, INF};
use super::negamax;

fn color_mult(side: Color) -> i32 {
    match side {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Run iterative deepening from `1..=search_depth` on `position`, discarding
/// the numeric result of each call — the side effect is TT population.
fn run_worker(tt: &TranspositionTable, evaluator: &dyn Evaluator, position: Position, side: Color, search_depth: u32) {
    for depth in 1..=search_depth.max(1) {
        let _ = negamax(tt, evaluator, position, depth as i32, -INF, INF, side);
        #[cfg(feature = "logging")]
        log::debug!("worker finished depth {depth}");
    }
}

/// Search `position` for `side_to_move`'s best move using `config.worker_count`
/// Lazy-SMP workers sharing a fresh transposition table of `config.tt_size`
/// entries, then read the move back from the TT entry for the root hash.
///
/// Falls back to the first legal move if, against expectations, the TT
/// probe at the end does not return one (e.g. `search_depth == 0`).
#[must_use]
pub fn best_move(
    position: &Position,
    side_to_move: Color,
    evaluator: &dyn Evaluator,
    config: SearchConfig,
) -> Option<Move> {
    let legal: MoveList = generate_legal_moves(position, side_to_move);
    if legal.is_empty() {
        return None;
    }

    let tt = TranspositionTable::new(config.tt_size);
    let root_hash = zobrist::with_side_to_move(position.zobrist_key(), side_to_move);
    let worker_count = config.worker_count.max(1);

    if worker_count == 1 {
        run_worker(&tt, evaluator, *position, side_to_move, config.search_depth);
    } else {
        thread::scope(|scope| {
            for _ in 1..worker_count {
                scope.spawn(|| run_worker(&tt, evaluator, *position, side_to_move, config.search_depth));
            }
            run_worker(&tt, evaluator, *position, side_to_move, config.search_depth);
        });
    }

    let probe = tt.probe(root_hash, config.search_depth as i32, -INF, INF);
    let chosen = probe.hint_move.or_else(|| legal.first());

    #[cfg(feature = "logging")]
    if let Some(mv) = chosen {
        log::info!("selected move {mv}");
    }

    chosen
}
