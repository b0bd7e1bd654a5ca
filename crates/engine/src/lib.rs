//! Game engine - drives the simulation core in real time.
//!
//! The core crate is pure and has no notion of wall-clock time. This crate
//! adds the moving parts:
//!
//! - [`clock`]: fixed-rate step clock on a tokio runtime
//! - [`controller`]: the [`Game`] session object (board + clock + renderer)
//! - [`config`]: defaults and environment overrides
//!
//! Hosts own the tokio runtime and pass a [`tokio::runtime::Handle`] in, so
//! the engine never creates threads of its own.

pub mod clock;
pub mod config;
pub mod controller;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::StepClock;
pub use config::GameConfig;
pub use controller::{Game, GameStatus};
