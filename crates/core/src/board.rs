//! Board module - grid, active piece, collision and gravity
//!
//! The board is the only owner and mutator of the locked-cell grid and the
//! active piece. Every rejected move or rotation is a plain `false`/no-op:
//! walls and locked cells are routine in a real-time input loop.
//!
//! Boundary rules: the last column (`x == width - 1`) and the last row
//! (`y == height - 1`) are border cells a piece may never enter, and `x < 0`
//! is off the board. There is no top bound, so a freshly spawned piece may
//! have cells at `y < 0`.

use std::time::Duration;

use crate::error::BoardError;
use crate::grid::Grid;
use crate::pieces::{turn_shape, Piece, PieceFactory, PieceShape};
use crate::types::{
    Direction, Position, Tile, BLOCK_DOWN_TIME, BOARD_HEIGHT, BOARD_WIDTH, PIECE_CELLS,
};

/// What happens to a piece's cells when it can no longer fall
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockMode {
    /// Cells are written into the grid and stay there
    #[default]
    Persist,
    /// Cells are dropped; the grid never changes
    Discard,
}

impl LockMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "persist" => Some(LockMode::Persist),
            "discard" => Some(LockMode::Discard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LockMode::Persist => "persist",
            LockMode::Discard => "discard",
        }
    }
}

/// Which cells a rotation is validated against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotationCheck {
    /// The cells the piece would occupy after turning
    #[default]
    Turned,
    /// The cells the piece occupies before turning. A turn into a wall or
    /// into locked cells can succeed in this mode.
    Current,
}

impl RotationCheck {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "turned" => Some(RotationCheck::Turned),
            "current" => Some(RotationCheck::Current),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RotationCheck::Turned => "turned",
            RotationCheck::Current => "current",
        }
    }
}

/// Board dimensions and rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    /// Gravity interval
    pub block_down_time: Duration,
    pub lock_mode: LockMode,
    pub rotation_check: RotationCheck,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            block_down_time: BLOCK_DOWN_TIME,
            lock_mode: LockMode::default(),
            rotation_check: RotationCheck::default(),
        }
    }
}

/// Result of a downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece fell one row
    Moved,
    /// The piece could not fall; it was locked and a new piece spawned
    Locked,
}

#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
    piece: Piece,
    factory: PieceFactory,
    /// Time accumulated toward the next gravity step
    fall_timer: Duration,
}

impl Board {
    /// Create a board and spawn the first piece
    pub fn new(config: BoardConfig, factory: PieceFactory) -> Self {
        let mut board = Self {
            config,
            grid: Grid::new(config.width, config.height),
            piece: Piece::new([Position::default(); PIECE_CELLS], Position::default()),
            factory,
            fall_timer: Duration::ZERO,
        };
        board.create_block();
        board
    }

    /// Default-sized board drawing from the default catalog
    pub fn with_seed(seed: u32) -> Self {
        Self::new(BoardConfig::default(), PieceFactory::from_seed(seed))
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn width(&self) -> i32 {
        self.config.width
    }

    pub fn height(&self) -> i32 {
        self.config.height
    }

    /// The persisted grid (locked cells only)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn fall_timer(&self) -> Duration {
        self.fall_timer
    }

    pub fn factory(&self) -> &PieceFactory {
        &self.factory
    }

    /// Where every new piece is anchored
    pub fn spawn_anchor(&self) -> Position {
        Position::new(self.config.width / 2, 0)
    }

    /// Replace the active piece (hosts restoring a position, tests)
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    /// Mark a cell of the persisted grid. Returns false if out of bounds
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> bool {
        self.grid.set(pos, tile)
    }

    /// Empty the grid, zero the fall timer and spawn a new piece
    pub fn reset(&mut self) {
        self.grid.clear();
        self.fall_timer = Duration::ZERO;
        self.create_block();
    }

    /// Spawn a new active piece at the spawn anchor.
    ///
    /// No collision check: a spawn on top of locked cells simply overlaps.
    pub fn create_block(&mut self) {
        let offsets = self.factory.create();
        self.piece = Piece::new(offsets, self.spawn_anchor());
        log::debug!("spawned piece {:?} at {}", offsets, self.piece.anchor);
    }

    #[inline(always)]
    fn in_playfield(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.config.width - 1 && pos.y < self.config.height - 1
    }

    /// False if any of `cells` is occupied in the persisted grid.
    ///
    /// Does not check bounds; callers bound-check first.
    pub fn check_contain(&self, cells: &[Position]) -> bool {
        !cells.iter().any(|&pos| self.grid.is_occupied(pos))
    }

    /// Bound-check then occupancy-check a candidate placement
    fn check_cells(&self, cells: [Position; PIECE_CELLS]) -> bool {
        cells.iter().all(|&pos| self.in_playfield(pos)) && self.check_contain(&cells)
    }

    /// Can the active piece move one step in `direction`?
    pub fn check_block_move(&self, direction: Direction) -> bool {
        let anchor = self.piece.anchor + direction.offset();
        self.check_cells(self.piece.cells_at(anchor))
    }

    fn shift(&mut self, direction: Direction) -> bool {
        if !self.check_block_move(direction) {
            return false;
        }
        self.piece.anchor += direction.offset();
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(Direction::Right)
    }

    /// Drop one row, or lock and respawn if the piece cannot fall
    pub fn move_down(&mut self) -> DropOutcome {
        if self.shift(Direction::Down) {
            return DropOutcome::Moved;
        }
        self.lock_piece();
        self.create_block();
        DropOutcome::Locked
    }

    fn lock_piece(&mut self) {
        log::debug!(
            "locking piece at {} ({})",
            self.piece.anchor,
            self.config.lock_mode.as_str()
        );
        match self.config.lock_mode {
            LockMode::Persist => {
                self.merge_board(true);
            }
            LockMode::Discard => {}
        }
    }

    /// Turn the active piece a quarter turn in place.
    ///
    /// Returns `Ok(false)` when the turn is blocked. An offset outside the
    /// local slot table is an internal invariant violation and is returned
    /// as an error.
    pub fn rotate(&mut self) -> Result<bool, BoardError> {
        let turned: PieceShape = turn_shape(&self.piece.offsets).map_err(|e| {
            log::error!("cannot rotate piece {:?}: {}", self.piece, e);
            e
        })?;

        let checked = match self.config.rotation_check {
            RotationCheck::Turned => Piece::new(turned, self.piece.anchor).cells(),
            RotationCheck::Current => self.piece.cells(),
        };
        if !self.check_cells(checked) {
            return Ok(false);
        }

        self.piece.offsets = turned;
        Ok(true)
    }

    /// Advance gravity by `delta`.
    ///
    /// Returns the outcome of the drop when the accumulated time reached the
    /// gravity interval, `None` otherwise.
    pub fn update(&mut self, delta: Duration) -> Option<DropOutcome> {
        self.fall_timer = self.fall_timer.saturating_add(delta);
        if self.fall_timer < self.config.block_down_time {
            return None;
        }
        self.fall_timer = Duration::ZERO;

        let outcome = self.move_down();
        log::trace!("gravity step: {:?}", outcome);
        Some(outcome)
    }

    /// Locked cells with the active piece stamped on top.
    ///
    /// With `commit == false` this works on a copy and leaves the board
    /// untouched. With `commit == true` the active piece is stamped into the
    /// persisted grid itself, and a copy of the result is returned.
    pub fn merge_board(&mut self, commit: bool) -> Grid {
        if !commit {
            return self.snapshot();
        }
        let cells = self.piece.cells();
        stamp(&mut self.grid, &cells);
        self.grid.clone()
    }

    /// Read-only form of `merge_board(false)`
    pub fn snapshot(&self) -> Grid {
        let mut grid = self.grid.clone();
        stamp(&mut grid, &self.piece.cells());
        grid
    }
}

/// Mark `cells` occupied, skipping any outside the grid (e.g. above the top).
///
/// Rows above the top are dropped, not wrapped onto the bottom rows.
fn stamp(grid: &mut Grid, cells: &[Position]) {
    for &pos in cells {
        grid.set(pos, Tile::Occupied);
    }
}
