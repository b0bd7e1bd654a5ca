//! Grid module - fixed-size cell storage
//!
//! Uses a flat row-major `Vec<Tile>` sized once at construction.
//! Coordinates: (x, y) with x in `0..width` (left to right) and y in
//! `0..height` (top to bottom). The last column and last row are the border;
//! the grid stores them like any other cell but the board never lets a
//! piece enter them.

use crate::types::{Position, Tile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            cells: vec![Tile::Empty; len],
        }
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.x >= self.width || pos.y < 0 || pos.y >= self.height {
            return None;
        }
        Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Get the tile at `pos`; `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set the tile at `pos`.
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, tile: Tile) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled. Cells above the top row count as open.
    pub fn is_occupied(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Tile::Occupied))
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|t| t.is_occupied()).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(Tile::Empty);
    }
}
