//! Fast-path equivalence tests.
//!
//! Every fast-path literal must give exactly what the general path gives for
//! the same text, for any board. Boards are generated with proptest.

use proptest::prelude::*;

use ccg_select::cards::{CardId, CardInstance, CardType};
use ccg_select::core::{Board, EntityId, PlayerId, SelectorConfig};
use ccg_select::effects::ResultSet;
use ccg_select::selector::{compile, fast_path, Perspective, SelectorEngine};
use ccg_select::zones::Zone;

/// Generated card: (pool, owner, zone, type, health).
type CardShape = (u8, u8, usize, usize, i64);

fn card_shape() -> impl Strategy<Value = CardShape> {
    (0u8..2, 0u8..2, 0..Zone::ALL.len(), 0..CardType::ALL.len(), -2i64..4)
}

fn build_board(shapes: &[CardShape]) -> Board {
    let mut board = Board::new();
    for (index, (pool, owner, zone, card_type, health)) in shapes.iter().enumerate() {
        let mut card = CardInstance::new(
            EntityId(index as u32),
            CardId::new(1),
            CardType::ALL[*card_type],
            PlayerId::new(*owner),
            Zone::ALL[*zone],
        );
        card.properties.health = *health;
        board.add_card(PlayerId::new(*pool), card);
    }
    board
}

/// General path only: compile and filter, bypassing the literal table.
fn general_path(board: &Board, perspective: PlayerId, text: &str) -> ResultSet {
    let compiled = compile(text, &SelectorConfig::default()).unwrap();
    let perspective = Perspective::of(perspective);
    board
        .universe()
        .filter(|card| compiled.matches(card, &perspective).unwrap())
        .map(|card| card.entity_id)
        .collect()
}

proptest! {
    #[test]
    fn fast_path_matches_general_path(
        shapes in prop::collection::vec(card_shape(), 0..24),
        first_player in any::<bool>(),
    ) {
        let board = build_board(&shapes);
        let perspective = if first_player { PlayerId::FIRST } else { PlayerId::SECOND };
        let mut engine = SelectorEngine::new(SelectorConfig::default());

        for literal in fast_path::literals() {
            let fast = engine.evaluate(&board, perspective, literal).unwrap();
            prop_assert_eq!(&fast, &general_path(&board, perspective, literal), "{}", literal);
        }
        prop_assert_eq!(engine.diagnostics().fast_path_hits, 7);
        prop_assert_eq!(engine.diagnostics().slow_path, 0);
    }

    #[test]
    fn own_and_enemy_partition_character(
        shapes in prop::collection::vec(card_shape(), 0..24),
    ) {
        let board = build_board(&shapes);
        let mut engine = SelectorEngine::new(SelectorConfig::default());

        let own = engine.evaluate(&board, PlayerId::FIRST, "own character").unwrap();
        let enemy = engine.evaluate(&board, PlayerId::FIRST, "enemy character").unwrap();
        let all = engine.evaluate(&board, PlayerId::FIRST, "character").unwrap();

        let mut joined = own.concat(&enemy).to_vec();
        let mut expected = all.to_vec();
        joined.sort();
        expected.sort();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn zone_clause_is_a_union(
        shapes in prop::collection::vec(card_shape(), 0..24),
    ) {
        let board = build_board(&shapes);
        let mut engine = SelectorEngine::new(SelectorConfig::default());

        let hand = engine.evaluate(&board, PlayerId::FIRST, "minion @hand").unwrap();
        let deck = engine.evaluate(&board, PlayerId::FIRST, "minion @deck").unwrap();
        let both = engine.evaluate(&board, PlayerId::FIRST, "minion @hand @deck").unwrap();

        prop_assert_eq!(both.len(), hand.len() + deck.len());
        prop_assert!(hand.iter().chain(deck.iter()).all(|id| both.contains(id)));
    }
}
