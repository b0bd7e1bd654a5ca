//! Pieces module - shape catalog, local slot table and quarter-turn rotation
//!
//! Every piece lives in a 4x4 local space centred between its four middle
//! cells. Slots are numbered row-major:
//!
//! ```text
//!          x: -2 -1  0  1
//! y: -2     [00 01 02 03]
//! y: -1     [04 05 06 07]
//! y:  0     [08 09 10 11]
//! y:  1     [12 13 14 15]
//! ```
//!
//! Shapes are defined as four slot indices, and rotation maps slot to slot
//! through a fixed table, so a turned piece always stays inside the same
//! local space.

use std::fmt;

use crate::error::BoardError;
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{Position, PIECE_CELLS};

/// The four local offsets of a piece
pub type PieceShape = [Position; PIECE_CELLS];

/// Slot index -> local offset (row-major, x and y in -2..=1)
pub const LOCAL_SLOTS: [Position; 16] = [
    Position::new(-2, -2),
    Position::new(-1, -2),
    Position::new(0, -2),
    Position::new(1, -2),
    Position::new(-2, -1),
    Position::new(-1, -1),
    Position::new(0, -1),
    Position::new(1, -1),
    Position::new(-2, 0),
    Position::new(-1, 0),
    Position::new(0, 0),
    Position::new(1, 0),
    Position::new(-2, 1),
    Position::new(-1, 1),
    Position::new(0, 1),
    Position::new(1, 1),
];

/// Slot index -> slot index after one quarter turn.
///
/// Local `(x, y)` lands on `(y, -x - 1)`: the 4x4 grid turned a quarter
/// about its centre. Four applications are the identity.
pub const QUARTER_TURN: [usize; 16] = [12, 8, 4, 0, 13, 9, 5, 1, 14, 10, 6, 2, 15, 11, 7, 3];

/// Find the slot index of a local offset
pub fn slot_of(offset: Position) -> Option<usize> {
    LOCAL_SLOTS.iter().position(|&slot| slot == offset)
}

/// Turn a single local offset a quarter turn.
///
/// Fails only for offsets outside the local space, which no catalog shape
/// can produce.
pub fn turn_offset(offset: Position) -> Result<Position, BoardError> {
    let slot = slot_of(offset).ok_or(BoardError::UnknownOffset(offset))?;
    Ok(LOCAL_SLOTS[QUARTER_TURN[slot]])
}

/// Turn every offset of a shape a quarter turn
pub fn turn_shape(shape: &PieceShape) -> Result<PieceShape, BoardError> {
    let mut turned = *shape;
    for offset in turned.iter_mut() {
        *offset = turn_offset(*offset)?;
    }
    Ok(turned)
}

/// A catalog entry: four slots of the local table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    name: &'static str,
    slots: [u8; PIECE_CELLS],
}

impl Shape {
    /// Define a shape, checking that every slot exists
    pub fn new(name: &'static str, slots: [u8; PIECE_CELLS]) -> Result<Self, BoardError> {
        if let Some(&bad) = slots.iter().find(|&&s| s as usize >= LOCAL_SLOTS.len()) {
            return Err(BoardError::UnknownSlot(bad));
        }
        Ok(Self { name, slots })
    }

    const fn from_slots(name: &'static str, slots: [u8; PIECE_CELLS]) -> Self {
        Self { name, slots }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn slots(&self) -> [u8; PIECE_CELLS] {
        self.slots
    }

    /// Local offsets of this shape
    pub fn offsets(&self) -> PieceShape {
        self.slots.map(|slot| LOCAL_SLOTS[slot as usize])
    }
}

/// 2x2 block: slots 5 6 9 10
pub const SQUARE: Shape = Shape::from_slots("square", [5, 6, 9, 10]);

/// One cell on top of a row of three: slots 5 8 9 10
pub const TEE: Shape = Shape::from_slots("tee", [5, 8, 9, 10]);

/// Column of three with a foot: slots 1 5 9 10
pub const ELL: Shape = Shape::from_slots("ell", [1, 5, 9, 10]);

/// The shapes new pieces are drawn from
pub const DEFAULT_CATALOG: [Shape; 3] = [SQUARE, TEE, ELL];

/// Produces the offsets for freshly spawned pieces.
///
/// Owns no board state; only the catalog and the random source.
pub struct PieceFactory {
    catalog: Vec<Shape>,
    rng: Box<dyn RandomSource>,
}

impl PieceFactory {
    /// Factory over the default catalog
    pub fn new(rng: impl RandomSource + 'static) -> Self {
        Self {
            catalog: DEFAULT_CATALOG.to_vec(),
            rng: Box::new(rng),
        }
    }

    /// Factory over the default catalog with a [`SimpleRng`] seeded from `seed`
    pub fn from_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }

    /// Factory over a custom catalog
    pub fn with_catalog(
        catalog: Vec<Shape>,
        rng: impl RandomSource + 'static,
    ) -> Result<Self, BoardError> {
        if catalog.is_empty() {
            return Err(BoardError::EmptyCatalog);
        }
        Ok(Self {
            catalog,
            rng: Box::new(rng),
        })
    }

    /// Number of shapes in the catalog
    pub fn amount(&self) -> usize {
        self.catalog.len()
    }

    pub fn catalog(&self) -> &[Shape] {
        &self.catalog
    }

    /// Pick a shape uniformly at random and return its local offsets
    pub fn create(&mut self) -> PieceShape {
        let index = self.rng.next_below(self.amount() as u32) as usize;
        self.catalog[index].offsets()
    }
}

impl fmt::Debug for PieceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieceFactory")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

/// The active falling piece: four local offsets around an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub offsets: PieceShape,
    pub anchor: Position,
}

impl Piece {
    pub fn new(offsets: PieceShape, anchor: Position) -> Self {
        Self { offsets, anchor }
    }

    /// Absolute board cells at the current anchor
    pub fn cells(&self) -> [Position; PIECE_CELLS] {
        self.cells_at(self.anchor)
    }

    /// Absolute board cells if the anchor were at `anchor`
    pub fn cells_at(&self, anchor: Position) -> [Position; PIECE_CELLS] {
        self.offsets.map(|offset| anchor + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_slots_are_row_major() {
        for (i, slot) in LOCAL_SLOTS.iter().enumerate() {
            assert_eq!(slot.x, (i % 4) as i32 - 2);
            assert_eq!(slot.y, (i / 4) as i32 - 2);
        }
    }

    #[test]
    fn test_quarter_turn_matches_formula() {
        for (i, &turned) in QUARTER_TURN.iter().enumerate() {
            let p = LOCAL_SLOTS[i];
            assert_eq!(LOCAL_SLOTS[turned], Position::new(p.y, -p.x - 1));
        }
    }

    #[test]
    fn test_quarter_turn_is_a_permutation() {
        let mut seen = [false; 16];
        for &t in QUARTER_TURN.iter() {
            assert!(!seen[t]);
            seen[t] = true;
        }
    }

    #[test]
    fn test_turn_offset_rejects_outside_space() {
        assert_eq!(
            turn_offset(Position::new(2, 0)),
            Err(BoardError::UnknownOffset(Position::new(2, 0)))
        );
        assert_eq!(
            turn_offset(Position::new(0, -3)),
            Err(BoardError::UnknownOffset(Position::new(0, -3)))
        );
    }

    #[test]
    fn test_shape_new_validates_slots() {
        assert!(Shape::new("ok", [0, 1, 2, 15]).is_ok());
        assert_eq!(Shape::new("bad", [0, 1, 2, 16]), Err(BoardError::UnknownSlot(16)));
    }

    #[test]
    fn test_piece_cells_follow_anchor() {
        let piece = Piece::new(SQUARE.offsets(), Position::new(7, 0));
        assert_eq!(
            piece.cells(),
            [
                Position::new(6, -1),
                Position::new(7, -1),
                Position::new(6, 0),
                Position::new(7, 0),
            ]
        );
    }

    #[test]
    fn test_factory_debug_omits_rng() {
        let factory = PieceFactory::from_seed(1);
        let text = format!("{:?}", factory);
        assert!(text.contains("square"));
    }
}
