//! BoardView: maps a merged grid into text rows.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout for a `width x height` grid: a top border of `width + 1` border
//! glyphs, then `height - 1` rows of one border glyph, `width - 1` interior
//! cells and one border glyph, then a bottom border like the top one. The
//! grid's own last column and last row never reach the screen; the bottom
//! and right border glyphs stand in for them.

use crate::core::Grid;
use crate::types::{Position, Tile};

/// Glyph for border cells
pub const BORDER_GLYPH: char = '.';
/// Glyph for occupied interior cells
pub const BLOCK_GLYPH: char = '*';
/// Glyph for empty interior cells
pub const EMPTY_GLYPH: char = ' ';

fn border_row(width: i32) -> String {
    std::iter::repeat(BORDER_GLYPH)
        .take((width + 1).max(0) as usize)
        .collect()
}

/// The bordered board, one string per screen row
pub fn board_lines(grid: &Grid) -> Vec<String> {
    let width = grid.width();
    let height = grid.height();

    let mut lines = Vec::with_capacity(height.max(0) as usize + 1);
    lines.push(border_row(width));
    for y in 0..height - 1 {
        let mut line = String::with_capacity(width.max(0) as usize + 1);
        line.push(BORDER_GLYPH);
        for x in 0..width - 1 {
            line.push(match grid.get(Position::new(x, y)) {
                Some(Tile::Occupied) => BLOCK_GLYPH,
                _ => EMPTY_GLYPH,
            });
        }
        line.push(BORDER_GLYPH);
        lines.push(line);
    }
    lines.push(border_row(width));
    lines
}

/// The whole board as one text block, starting with an empty line
pub fn board_text(grid: &Grid) -> String {
    let mut text = String::from("\n");
    text.push_str(&board_lines(grid).join("\n"));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_border_and_blanks() {
        let grid = Grid::new(4, 4);
        assert_eq!(
            board_lines(&grid),
            vec![".....", ".   .", ".   .", ".   .", "....."]
        );
    }

    #[test]
    fn occupied_cells_use_block_glyph() {
        let mut grid = Grid::new(4, 4);
        grid.set(Position::new(0, 0), Tile::Occupied);
        grid.set(Position::new(2, 2), Tile::Occupied);
        assert_eq!(
            board_lines(&grid),
            vec![".....", ".*  .", ".   .", ".  *.", "....."]
        );
    }

    #[test]
    fn border_column_and_row_are_never_drawn_as_cells() {
        let mut grid = Grid::new(4, 4);
        grid.set(Position::new(3, 1), Tile::Occupied);
        grid.set(Position::new(1, 3), Tile::Occupied);
        assert!(!board_text(&grid).contains(BLOCK_GLYPH));
    }

    #[test]
    fn text_starts_with_newline_and_has_no_trailing_newline() {
        let text = board_text(&Grid::new(15, 15));
        assert!(text.starts_with('\n'));
        assert!(!text.ends_with('\n'));
        // blank line + top border + 14 interior rows + bottom border
        assert_eq!(text.split('\n').count(), 17);
    }
}
