//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the four operation tokens the game
//! controller understands, plus the two host-level keys (pause and quit).
//! It knows nothing about the board or the clock.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_pause_toggle, should_quit};
