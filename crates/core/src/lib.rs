//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block simulation: the grid, the active
//! piece, collision and boundary checks, rotation geometry and gravity.
//! It has **no dependencies** on terminals, timers or threads:
//!
//! - **Deterministic**: the piece factory draws from an injected, seeded
//!   random source
//! - **Testable**: every rule is a plain method on [`Board`]
//! - **Portable**: rendering happens through the [`Renderer`] trait
//!
//! # Module Structure
//!
//! - [`board`]: grid ownership, movement, rotation, locking and gravity
//! - [`grid`]: fixed-size flat cell storage
//! - [`pieces`]: 16-slot local table, quarter-turn table, shape catalog, factory
//! - [`rng`]: seeded LCG used for shape selection
//! - [`render`]: render events and the renderer seam
//! - [`error`]: internal invariant violations
//!
//! # Rules
//!
//! - A 15x15 board whose last column and last row are a border
//! - New pieces spawn at (`width / 2`, 0) without a collision check
//! - Gravity drops the piece one row every 300ms; a piece that cannot drop
//!   locks and a new one spawns
//! - No line clears, no scoring, no game over
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use blockfall_core::{Board, DropOutcome};
//!
//! let mut board = Board::with_seed(12345);
//! board.move_left();
//! board.rotate().unwrap();
//!
//! // Gravity only fires once 300ms have accumulated.
//! assert_eq!(board.update(Duration::from_millis(100)), None);
//! assert_eq!(board.update(Duration::from_millis(200)), Some(DropOutcome::Moved));
//! ```

pub mod board;
pub mod error;
pub mod grid;
pub mod pieces;
pub mod render;
pub mod rng;

pub use blockfall_types as types;

pub use board::{Board, BoardConfig, DropOutcome, LockMode, RotationCheck};
pub use error::BoardError;
pub use grid::Grid;
pub use pieces::{Piece, PieceFactory, PieceShape, Shape, DEFAULT_CATALOG};
pub use render::{NullRenderer, RenderEvent, Renderer};
pub use rng::{RandomSource, SimpleRng};
