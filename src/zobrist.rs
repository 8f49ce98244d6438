//! Zobrist hashing.
//!
//! Keys are generated once, process-wide, from a PRNG seeded with a fixed
//! constant so hashes are reproducible across runs and processes.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::types::{Color, NUM_PIECE_TYPES};
use crate::board::Position;

/// Fixed seed for the key-generation PRNG. Changing this changes every
/// hash the engine produces; it must never vary between builds.
const ZOBRIST_SEED: u64 = 0x5EED_1234_C0FF_EE42;

pub(crate) struct ZobristKeys {
    piece_keys: [[[u64; 64]; NUM_PIECE_TYPES]; 2],
    en_passant_keys: [u64; 65],
    castle_keys: [u64; 16],
    pub(crate) side_key: u64,
}

static KEYS: Lazy<ZobristKeys> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_keys = [[[0u64; 64]; NUM_PIECE_TYPES]; 2];
    for color_keys in piece_keys.iter_mut() {
        for piece_keys in color_keys.iter_mut() {
            for key in piece_keys.iter_mut() {
                *key = rng.gen();
            }
        }
    }

    let mut en_passant_keys = [0u64; 65];
    for key in en_passant_keys.iter_mut() {
        *key = rng.gen();
    }

    let mut castle_keys = [0u64; 16];
    for key in castle_keys.iter_mut() {
        *key = rng.gen();
    }

    ZobristKeys {
        piece_keys,
        en_passant_keys,
        castle_keys,
        side_key: rng.gen(),
    }
});

/// Recompute a position's hash from scratch: XOR together a key for every
/// piece on the board, the en-passant target (or the dedicated "none"
/// slot), and the castling-rights mask. Side-to-move is deliberately not
/// folded in here — the search XORs `side_key` at the point it needs a
/// side-disambiguated key, keeping `compute_hash` itself a pure function
/// of board state only.
#[must_use]
pub(crate) fn compute_hash(position: &Position) -> u64 {
    let keys = &*KEYS;
    let mut hash = 0u64;

    for color in [Color::White, Color::Black] {
        let color_idx = color.index();
        for piece_idx in 0..NUM_PIECE_TYPES {
            let mut bb = position.piece_bb[color_idx][piece_idx];
            while !bb.is_empty() {
                let sq = crate::board::types::pop_lsb(&mut bb);
                hash ^= keys.piece_keys[color_idx][piece_idx][sq.as_index()];
            }
        }
    }

    match position.en_passant_target {
        Some(sq) => hash ^= keys.en_passant_keys[sq.as_index()],
        None => hash ^= keys.en_passant_keys[64],
    }

    hash ^= keys.castle_keys[position.castle_rights.as_u8() as usize];

    hash
}

/// XOR in the side-to-move key, producing the key the transposition table
/// is actually probed/stored under. See [`compute_hash`] for why this is
/// split out.
#[inline]
#[must_use]
pub(crate) fn with_side_to_move(hash: u64, side: Color) -> u64 {
    match side {
        Color::White => hash,
        Color::Black => hash ^ KEYS.side_key,
    }
}
