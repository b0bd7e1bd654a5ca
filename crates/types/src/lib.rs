//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain values with no external dependencies, so they can be
//! shared by the simulation core, the input layer and the terminal renderer.
//!
//! # Board Dimensions
//!
//! - **Width**: 15 columns (indexed 0-14, column 14 is the border)
//! - **Height**: 15 rows (indexed 0-14, row 14 is the border)
//! - **Spawn anchor**: (`width / 2`, 0)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 24 | Step clock rate |
//! | `BLOCK_DOWN_MS` | 300 | Gravity interval (one row per 300ms) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, Operation, Position, BOARD_WIDTH};
//!
//! let anchor = Position::new(BOARD_WIDTH / 2, 0);
//! assert_eq!(anchor + Direction::Down.offset(), Position::new(7, 1));
//!
//! assert_eq!(Operation::from_str("left"), Some(Operation::Left));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign};
use std::time::Duration;

/// Board width in cells, including the border column (15 columns)
pub const BOARD_WIDTH: i32 = 15;

/// Board height in cells, including the border row (15 rows)
pub const BOARD_HEIGHT: i32 = 15;

/// Step clock rate in ticks per second
pub const FPS: u32 = 24;

/// Gravity interval in milliseconds
pub const BLOCK_DOWN_MS: u64 = 300;

/// Gravity interval as a `Duration`
pub const BLOCK_DOWN_TIME: Duration = Duration::from_millis(BLOCK_DOWN_MS);

/// Number of cells in every piece
pub const PIECE_CELLS: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(FPS, 24);
        assert_eq!(BLOCK_DOWN_TIME, Duration::from_millis(300));
        assert_eq!(BOARD_WIDTH, 15);
        assert_eq!(BOARD_HEIGHT, 15);
    }

    #[test]
    fn position_addition_is_componentwise() {
        let a = Position::new(3, -2);
        let b = Position::new(-1, 5);
        assert_eq!(a + b, Position::new(2, 3));

        let mut c = a;
        c += Position::RIGHT;
        assert_eq!(c, Position::new(4, -2));
    }

    #[test]
    fn direction_offsets_are_unit_vectors() {
        assert_eq!(Direction::Up.offset(), Position::new(0, -1));
        assert_eq!(Direction::Down.offset(), Position::new(0, 1));
        assert_eq!(Direction::Left.offset(), Position::new(-1, 0));
        assert_eq!(Direction::Right.offset(), Position::new(1, 0));

        for dir in Direction::ALL {
            let p = dir.offset();
            assert_eq!(p.x.abs() + p.y.abs(), 1);
        }
    }
}

/// A board coordinate or a piece-local offset.
///
/// `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const UP: Position = Position::new(0, -1);
    pub const DOWN: Position = Position::new(0, 1);
    pub const LEFT: Position = Position::new(-1, 0);
    pub const RIGHT: Position = Position::new(1, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, other: Position) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for this direction
    pub const fn offset(self) -> Position {
        match self {
            Direction::Up => Position::UP,
            Direction::Down => Position::DOWN,
            Direction::Left => Position::LEFT,
            Direction::Right => Position::RIGHT,
        }
    }
}

/// State of a single board cell
///
/// There is no color or piece-kind distinction: a cell is either free or
/// filled by a locked (or, in a snapshot, the active) piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Empty,
    Occupied,
}

impl Tile {
    pub fn is_occupied(self) -> bool {
        self == Tile::Occupied
    }
}

/// Discrete operation tokens delivered by the input dispatcher
///
/// `Up` rotates the active piece; the other three move it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Up,
    Down,
    Left,
    Right,
}

impl Operation {
    /// Parse an operation token (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Operation;
    ///
    /// assert_eq!(Operation::from_str("up"), Some(Operation::Up));
    /// assert_eq!(Operation::from_str("RIGHT"), Some(Operation::Right));
    /// assert_eq!(Operation::from_str("drop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Operation::Up),
            "down" => Some(Operation::Down),
            "left" => Some(Operation::Left),
            "right" => Some(Operation::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Up => "up",
            Operation::Down => "down",
            Operation::Left => "left",
            Operation::Right => "right",
        }
    }
}

/// Status carried by a render notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// A new grid snapshot is available
    Update,
    /// The clock was paused
    Stop,
    /// The game was finished
    Finish,
}

impl RenderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStatus::Update => "update",
            RenderStatus::Stop => "stop",
            RenderStatus::Finish => "finish",
        }
    }
}
