//! Game controller - one board, one step clock, one renderer.
//!
//! [`Game`] is the session object a host creates and keeps. Board state sits
//! behind a single mutex shared by the clock task and the host's command
//! calls, so gravity and input never mutate the board at the same time.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;

use crate::clock::StepClock;
use crate::config::GameConfig;
use crate::core::{Board, BoardError, DropOutcome, Grid, PieceFactory, RenderEvent, Renderer};
use crate::types::Operation;

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Created, never started
    Idle,
    Running,
    Paused,
    /// Terminal; `start` no longer has an effect
    Finished,
}

struct Session {
    board: Board,
    renderer: Box<dyn Renderer>,
    /// Gravity applies only while set. Flipped under the lock by
    /// `start`, `pause` and `finish`.
    ticking: bool,
}

impl Session {
    fn new(board: Board, renderer: Box<dyn Renderer>) -> Self {
        Self {
            board,
            renderer,
            ticking: false,
        }
    }

    fn tick(&mut self, delta: Duration) {
        if !self.ticking {
            return;
        }
        if self.board.update(delta).is_some() {
            self.render_board();
        }
    }

    fn render_board(&mut self) {
        let grid = self.board.snapshot();
        self.emit(RenderEvent::Update(grid));
    }

    fn emit(&mut self, event: RenderEvent) {
        let status = event.status();
        if let Err(e) = self.renderer.render(event) {
            log::warn!("renderer failed on {}: {}", status.as_str(), e);
        }
    }
}

/// Every board mutation leaves the board valid, so a poisoned lock is safe
/// to keep using.
fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Game {
    session: Arc<Mutex<Session>>,
    clock: StepClock,
    status: GameStatus,
}

impl Game {
    /// Wrap `board` in a session ticking `fps` times per second on `handle`
    pub fn new(
        board: Board,
        fps: u32,
        renderer: impl Renderer + 'static,
        handle: Handle,
    ) -> Self {
        let session = Arc::new(Mutex::new(Session::new(board, Box::new(renderer))));

        let shared = Arc::clone(&session);
        let clock = StepClock::new(fps, handle, move |delta| lock(&shared).tick(delta));

        Self {
            session,
            clock,
            status: GameStatus::Idle,
        }
    }

    pub fn from_config(
        config: &GameConfig,
        renderer: impl Renderer + 'static,
        handle: Handle,
    ) -> Self {
        let board = Board::new(config.board, PieceFactory::from_seed(config.seed));
        Self::new(board, config.fps, renderer, handle)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Start or resume the clock and draw the current board
    pub fn start(&mut self) {
        match self.status {
            GameStatus::Running | GameStatus::Finished => return,
            GameStatus::Idle | GameStatus::Paused => {}
        }
        self.clock.start();
        self.status = GameStatus::Running;
        log::info!("game running");
        let mut session = lock(&self.session);
        session.ticking = true;
        session.render_board();
    }

    /// Stop the clock; the board is kept as is
    pub fn pause(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.clock.stop();
        self.status = GameStatus::Paused;
        log::info!("game paused");
        let mut session = lock(&self.session);
        session.ticking = false;
        session.emit(RenderEvent::Stop);
    }

    /// Stop the clock for good
    pub fn finish(&mut self) {
        if self.status == GameStatus::Finished {
            return;
        }
        self.clock.stop();
        self.status = GameStatus::Finished;
        log::info!("game finished");
        let mut session = lock(&self.session);
        session.ticking = false;
        session.emit(RenderEvent::Finish);
    }

    /// Apply a board command while running, then redraw.
    ///
    /// Returns `None` when the game is not running.
    fn command<T>(&self, f: impl FnOnce(&mut Board) -> T) -> Option<T> {
        if !self.is_running() {
            return None;
        }
        let mut session = lock(&self.session);
        let out = f(&mut session.board);
        session.render_board();
        Some(out)
    }

    /// Rotate the active piece
    pub fn move_up(&self) -> Result<bool, BoardError> {
        self.command(Board::rotate).unwrap_or(Ok(false))
    }

    /// Drop the active piece one row (locking it if it cannot fall)
    pub fn move_down(&self) -> Option<DropOutcome> {
        self.command(Board::move_down)
    }

    pub fn move_left(&self) -> bool {
        self.command(Board::move_left).unwrap_or(false)
    }

    pub fn move_right(&self) -> bool {
        self.command(Board::move_right).unwrap_or(false)
    }

    /// Dispatch an input token to the matching command
    pub fn apply(&self, operation: Operation) -> Result<(), BoardError> {
        match operation {
            Operation::Up => {
                self.move_up()?;
            }
            Operation::Down => {
                self.move_down();
            }
            Operation::Left => {
                self.move_left();
            }
            Operation::Right => {
                self.move_right();
            }
        }
        Ok(())
    }

    /// Merged grid as the renderer would see it
    pub fn snapshot(&self) -> Grid {
        lock(&self.session).board.snapshot()
    }

    /// Read-only access to the board
    pub fn with_board<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        f(&lock(&self.session).board)
    }
}
