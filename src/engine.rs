//! Game controller: turn tracking, legality-checked move application, and
//! the terminal-state state machine built on top of the search core.

use crate::board::error::IllegalMoveError;
use crate::board::types::{Color, Move, Variant};
use crate::board::{generate_legal_moves, is_in_check, Position};
use crate::eval::{Evaluator, MaterialPst};
use crate::search::config::SearchConfig;
use crate::search::smp;

/// Observed game state after a move, per the transition table: a
/// side-to-move with no legal moves is Checkmate (if in check) or
/// Stalemate (otherwise); with legal moves it is Check or Playing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum GameState {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

/// Classify `position` from `side_to_move`'s perspective.
#[must_use]
pub fn game_state(position: &Position, side_to_move: Color) -> GameState {
    let legal = generate_legal_moves(position, side_to_move);
    let in_check = is_in_check(position, side_to_move);
    match (legal.is_empty(), in_check) {
        (true, true) => GameState::Checkmate,
        (true, false) => GameState::Stalemate,
        (false, true) => GameState::Check,
        (false, false) => GameState::Playing,
    }
}

/// Owns a `Position` plus the turn-tracking and evaluator state the board
/// layer itself deliberately omits. This is the crate's one stateful,
/// driver-facing entry point; `Position` and the free search functions
/// remain usable on their own for anything that wants to manage its own
/// turn tracking (e.g. a perft harness).
pub struct GameController {
    position: Position,
    side_to_move: Color,
    evaluator: Box<dyn Evaluator>,
}

impl GameController {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        GameController {
            position: Position::new_position(variant),
            side_to_move: Color::White,
            evaluator: Box::new(MaterialPst),
        }
    }

    #[must_use]
    pub fn from_position(position: Position, side_to_move: Color) -> Self {
        GameController {
            position,
            side_to_move,
            evaluator: Box::new(MaterialPst),
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn game_state(&self) -> GameState {
        game_state(&self.position, self.side_to_move)
    }

    /// Replace the evaluator used by future [`GameController::best_move`]
    /// calls.
    pub fn set_evaluator(&mut self, evaluator: impl Evaluator + 'static) {
        self.evaluator = Box::new(evaluator);
    }

    /// Apply `mv` if and only if it is in the current legal move set.
    /// Leaves the controller unchanged and returns an error otherwise.
    pub fn play_move(&mut self, mv: Move) -> Result<GameState, IllegalMoveError> {
        let legal = generate_legal_moves(&self.position, self.side_to_move);
        if !legal.iter().any(|m| *m == mv) {
            #[cfg(feature = "logging")]
            log::trace!("rejected illegal move {mv}");
            return Err(IllegalMoveError::NotLegal);
        }
        self.position.apply_move(mv)?;
        self.side_to_move = self.side_to_move.opponent();
        Ok(self.game_state())
    }

    /// Search for the best move in the current position using `search_depth`
    /// plies of iterative deepening across `worker_count` Lazy-SMP workers.
    /// Returns [`Move::null`] if the position has no legal moves.
    #[must_use]
    pub fn best_move(&self, search_depth: u32, worker_count: usize) -> Move {
        let config = SearchConfig {
            search_depth,
            worker_count,
            ..SearchConfig::default()
        };
        smp::best_move(&self.position, self.side_to_move, self.evaluator.as_ref(), config)
            .unwrap_or(Move::null())
    }
}
