//! Property-based fuzzing of random legal-move sequences against the
//! quantified invariants: bitboard disjointness, hash determinism, and
//! that legal moves never leave the mover in check.

use proptest::prelude::*;

use chess_engine::board::types::{Color, Square, Variant};
use chess_engine::board::{generate_legal_moves, is_in_check, Position};

fn assert_occupancy_consistent(p: &Position) {
    let white = p.occupancy(Color::White);
    let black = p.occupancy(Color::Black);
    assert!(white.is_disjoint(black), "a square cannot hold pieces of both colors");
    assert_eq!(white.or(black), p.all_occupancy());
    for idx in 0..64u8 {
        let sq = Square::from_index(idx as usize);
        let occupied = p.all_occupancy().contains(sq);
        assert_eq!(p.piece_at(sq).is_some(), occupied);
    }
}

fn play_random_sequence(mut position: Position, mut side: Color, move_choices: &[usize]) -> (Position, Color, u32) {
    let mut plies_played = 0;
    for &choice in move_choices {
        let legal = generate_legal_moves(&position, side);
        if legal.is_empty() {
            break;
        }
        let mv = legal.get(choice % legal.len()).unwrap();
        position.apply_move(mv).expect("legally generated move must apply");
        assert!(
            !is_in_check(&position, side),
            "applying a legal move must never leave the mover in check"
        );
        side = side.opponent();
        plies_played += 1;
    }
    (position, side, plies_played)
}

proptest! {
    #[test]
    fn random_legal_sequences_preserve_bitboard_invariants(choices in prop::collection::vec(0usize..64, 1..40)) {
        let position = Position::new_position(Variant::Classic);
        let (after, _, _) = play_random_sequence(position, Color::White, &choices);
        assert_occupancy_consistent(&after);
    }

    #[test]
    fn hash_matches_recomputation_after_random_sequence(choices in prop::collection::vec(0usize..64, 1..40)) {
        let position = Position::new_position(Variant::Classic);
        let (after, side, _) = play_random_sequence(position, Color::White, &choices);
        let (roundtripped, roundtripped_side) = Position::from_fen(&after.to_fen(side)).unwrap();
        prop_assert_eq!(roundtripped_side, side);
        prop_assert_eq!(roundtripped.zobrist_key(), after.zobrist_key());
    }

    #[test]
    fn fairy_variant_random_sequences_preserve_bitboard_invariants(choices in prop::collection::vec(0usize..64, 1..40)) {
        let position = Position::new_position(Variant::FairyChess);
        let (after, _, _) = play_random_sequence(position, Color::White, &choices);
        assert_occupancy_consistent(&after);
    }
}
