//! Renderer seam.
//!
//! The core never draws anything itself. Whoever hosts the game supplies a
//! [`Renderer`] and receives a [`RenderEvent`] whenever the visible state
//! changes.

use std::io;

use crate::grid::Grid;
use crate::types::RenderStatus;

/// A render notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Merged grid: locked cells plus the active piece
    Update(Grid),
    Stop,
    Finish,
}

impl RenderEvent {
    pub fn status(&self) -> RenderStatus {
        match self {
            RenderEvent::Update(_) => RenderStatus::Update,
            RenderEvent::Stop => RenderStatus::Stop,
            RenderEvent::Finish => RenderStatus::Finish,
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        match self {
            RenderEvent::Update(grid) => Some(grid),
            _ => None,
        }
    }
}

/// Sink for render notifications
pub trait Renderer: Send {
    fn render(&mut self, event: RenderEvent) -> io::Result<()>;
}

/// Renderer that drops every event (headless runs, benchmarks)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _event: RenderEvent) -> io::Result<()> {
        Ok(())
    }
}
