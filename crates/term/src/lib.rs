//! Terminal renderer.
//!
//! A small rendering layer that turns [`RenderEvent`](crate::core::RenderEvent)s
//! into the classic bordered text board and flushes it to the terminal.
//!
//! Goals:
//! - Keep `core` free of I/O
//! - Keep the text layout pure so it can be tested without a terminal

pub mod board_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use board_view::{board_lines, board_text, BLOCK_GLYPH, BORDER_GLYPH, EMPTY_GLYPH};
pub use renderer::{encode_frame_into, TerminalRenderer};
