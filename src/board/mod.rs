//! Board state, move generation, and attack detection.

pub mod error;
pub mod types;

mod attacks;
mod fen;
mod movegen;
mod position;
mod rays;

pub use attacks::{is_in_check, is_square_attacked};
pub use fen::{START_FEN, START_FEN_FAIRY};
pub use movegen::{generate_captures, generate_legal_moves};
pub use position::Position;
