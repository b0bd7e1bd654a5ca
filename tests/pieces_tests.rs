//! Pieces tests - rotation table, shape catalog and factory

use std::collections::HashSet;

use tui_blockfall::core::pieces::{
    slot_of, turn_offset, turn_shape, LOCAL_SLOTS, QUARTER_TURN,
};
use tui_blockfall::core::{BoardError, PieceFactory, RandomSource, Shape, SimpleRng, DEFAULT_CATALOG};
use tui_blockfall::types::Position;

#[test]
fn test_quarter_turn_is_a_permutation() {
    let unique: HashSet<usize> = QUARTER_TURN.iter().copied().collect();
    assert_eq!(unique.len(), 16);
    assert!(QUARTER_TURN.iter().all(|&s| s < 16));
}

#[test]
fn test_every_slot_returns_after_four_turns() {
    for (slot, &start) in LOCAL_SLOTS.iter().enumerate() {
        let mut offset = start;
        for _ in 0..4 {
            offset = turn_offset(offset).unwrap();
        }
        assert_eq!(offset, start, "slot {slot}");
    }
}

#[test]
fn test_no_slot_is_fixed_by_a_single_turn() {
    for slot in 0..16 {
        assert_ne!(QUARTER_TURN[slot], slot);
    }
}

#[test]
fn test_turn_maps_x_y_to_y_minus_x_minus_one() {
    for &offset in LOCAL_SLOTS.iter() {
        let turned = turn_offset(offset).unwrap();
        assert_eq!(turned, Position::new(offset.y, -offset.x - 1));
    }
}

#[test]
fn test_catalog_shapes_cycle_in_four_turns() {
    for shape in DEFAULT_CATALOG {
        let start = shape.offsets();
        let mut turned = start;
        for _ in 0..4 {
            turned = turn_shape(&turned).unwrap();
        }
        assert_eq!(turned, start, "{}", shape.name());
    }
}

#[test]
fn test_unknown_offset_is_reported() {
    assert_eq!(slot_of(Position::new(2, 0)), None);
    assert_eq!(
        turn_offset(Position::new(2, 0)),
        Err(BoardError::UnknownOffset(Position::new(2, 0)))
    );
}

#[test]
fn test_shape_rejects_slots_outside_table() {
    assert_eq!(
        Shape::new("bad", [1, 2, 3, 16]).unwrap_err(),
        BoardError::UnknownSlot(16)
    );
    let ok = Shape::new("bar", [8, 9, 10, 11]).unwrap();
    assert_eq!(ok.offsets()[0], Position::new(-2, 0));
}

#[test]
fn test_factory_amount_matches_catalog() {
    let factory = PieceFactory::from_seed(1);
    assert_eq!(factory.amount(), 3);
    assert_eq!(factory.catalog().len(), DEFAULT_CATALOG.len());
}

#[test]
fn test_factory_only_produces_catalog_shapes() {
    let mut factory = PieceFactory::from_seed(12345);
    let catalog: HashSet<_> = DEFAULT_CATALOG.iter().map(|s| s.offsets()).collect();

    let mut seen = HashSet::new();
    for _ in 0..1_000 {
        let shape = factory.create();
        assert!(catalog.contains(&shape));
        seen.insert(shape);
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = PieceFactory::from_seed(42);
    let mut b = PieceFactory::from_seed(42);
    for _ in 0..100 {
        assert_eq!(a.create(), b.create());
    }
}

#[test]
fn test_empty_catalog_is_rejected() {
    let result = PieceFactory::with_catalog(Vec::new(), SimpleRng::new(1));
    assert!(matches!(result, Err(BoardError::EmptyCatalog)));
}

struct Fixed(u32);

impl RandomSource for Fixed {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.0 % bound
    }
}

#[test]
fn test_factory_uses_injected_random_source() {
    let mut factory = PieceFactory::new(Fixed(1));
    assert_eq!(factory.create(), DEFAULT_CATALOG[1].offsets());
    assert_eq!(factory.create(), DEFAULT_CATALOG[1].offsets());
}
