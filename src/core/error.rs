//! Session error types.
//!
//! The engine has a deliberately small failure surface: roster validation
//! at session start, and name lookups on penalty application. Everything
//! else (pool exhaustion, storage parse failures, out-of-phase inputs)
//! is absorbed locally and logged.

use thiserror::Error;

/// Errors surfaced by session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A session needs at least two players.
    #[error("need at least 2 players, got {0}")]
    InsufficientPlayers(usize),

    /// Roster is capped by the `PlayerId` width.
    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    /// Player names must be unique within a session.
    #[error("duplicate player name: {0}")]
    DuplicatePlayer(String),

    /// A penalty referenced a name not in the roster.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// A minigame input arrived while no minigame was open.
    #[error("no active minigame")]
    NoActiveMinigame,
}
