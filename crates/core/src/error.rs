//! Board errors.
//!
//! Rejected moves are not errors; they are reported as `false` / no-op
//! outcomes. The variants here are internal invariant violations.

use std::error::Error;
use std::fmt;

use crate::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A piece offset outside the 4x4 local space reached the rotation table.
    UnknownOffset(Position),
    /// A shape definition names a slot outside `0..16`.
    UnknownSlot(u8),
    /// A piece factory was built without any shapes.
    EmptyCatalog,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::UnknownOffset(p) => {
                write!(f, "piece offset {} is outside the 4x4 local space", p)
            }
            BoardError::UnknownSlot(slot) => {
                write!(f, "shape slot {} is outside the 16-slot local table", slot)
            }
            BoardError::EmptyCatalog => write!(f, "piece catalog has no shapes"),
        }
    }
}

impl Error for BoardError {}
