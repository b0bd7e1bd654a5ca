//! Runtime configuration.
//!
//! Everything has a default; the environment can override individual values.
//! Unparseable or out-of-range values fall back to the default.

use std::env;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::clock::MAX_FPS;
use crate::core::{BoardConfig, LockMode, RotationCheck};
use crate::types::FPS;

/// Smallest board edge that still fits a spawned piece and a border
pub const MIN_BOARD_DIM: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board: BoardConfig,
    /// Step clock rate
    pub fps: u32,
    /// Seed for shape selection
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            fps: FPS,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// | Variable | Meaning |
    /// |----------|---------|
    /// | `BLOCKFALL_BOARD_WIDTH` | board width (min 6) |
    /// | `BLOCKFALL_BOARD_HEIGHT` | board height (min 6) |
    /// | `BLOCKFALL_BLOCK_DOWN_MS` | gravity interval in ms |
    /// | `BLOCKFALL_LOCK_MODE` | `persist` or `discard` |
    /// | `BLOCKFALL_ROTATION_CHECK` | `turned` or `current` |
    /// | `BLOCKFALL_FPS` | step clock rate (1 to 1000) |
    /// | `BLOCKFALL_SEED` | shape seed (defaults to the wall clock) |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = BoardConfig::default();
        let parse = |key: &str| lookup(key).map(|s| s.trim().to_string());

        let width = parse("BLOCKFALL_BOARD_WIDTH")
            .and_then(|s| parse_num::<i32>(&s))
            .filter(|&w| w >= MIN_BOARD_DIM)
            .unwrap_or(defaults.width);
        let height = parse("BLOCKFALL_BOARD_HEIGHT")
            .and_then(|s| parse_num::<i32>(&s))
            .filter(|&h| h >= MIN_BOARD_DIM)
            .unwrap_or(defaults.height);
        let block_down_time = parse("BLOCKFALL_BLOCK_DOWN_MS")
            .and_then(|s| parse_num::<u64>(&s))
            .map(Duration::from_millis)
            .unwrap_or(defaults.block_down_time);
        let lock_mode = parse("BLOCKFALL_LOCK_MODE")
            .and_then(|s| LockMode::from_str(&s))
            .unwrap_or(defaults.lock_mode);
        let rotation_check = parse("BLOCKFALL_ROTATION_CHECK")
            .and_then(|s| RotationCheck::from_str(&s))
            .unwrap_or(defaults.rotation_check);

        let fps = parse("BLOCKFALL_FPS")
            .and_then(|s| parse_num::<u32>(&s))
            .filter(|f| (1..=MAX_FPS).contains(f))
            .unwrap_or(FPS);
        let seed = parse("BLOCKFALL_SEED")
            .and_then(|s| parse_num::<u32>(&s))
            .unwrap_or_else(clock_seed);

        Self {
            board: BoardConfig {
                width,
                height,
                block_down_time,
                lock_mode,
                rotation_check,
            },
            fps,
            seed,
        }
    }
}

fn parse_num<T: FromStr>(s: &str) -> Option<T> {
    s.parse().ok()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
