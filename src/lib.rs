//! # brindis
//!
//! A deterministic engine for a Spanish-language party game: a deck of
//! prompt and minigame cards, drink-counting, achievements, and
//! persistence, with no UI attached.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine exposes state and events; rendering,
//!    audio, and real clocks are the host's problem. Time enters only
//!    through [`Session::tick`](session::Session::tick).
//!
//! 2. **Deterministic**: Every random pick flows through a seeded RNG.
//!    Same seed, same roster, same inputs: same session.
//!
//! 3. **Single Writer**: Only the session orchestrator mutates drink
//!    counters. Minigames return outcomes; trackers observe events.
//!
//! ## Modules
//!
//! - `core`: Player IDs, roster, RNG, countdowns, errors
//! - `cards`: Card kinds, difficulty, modes, deck generation
//! - `content`: Static Spanish prompt tables and draw pools
//! - `minigames`: The six minigame state machines
//! - `session`: The orchestrator, table rules, session events
//! - `progress`: Achievements and play statistics
//! - `storage`: Profile persistence behind a key-value trait

pub mod cards;
pub mod content;
pub mod core;
pub mod minigames;
pub mod progress;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{Countdown, PlayerId, PlayerMap, Roster, SessionError, SessionRng, Tick};

pub use crate::cards::{Card, CardId, CardKind, DeckBuilder, Difficulty, GameMode};

pub use crate::content::{ContentPool, PromptTable};

pub use crate::minigames::{
    ActiveMinigame, ConstraintSpec, MinigameAction, MinigameStatus, RoundOutcome,
};

pub use crate::session::{
    ActiveConstraint, AdvanceOutcome, EventId, Session, SessionEvent, SessionEventKind,
};

pub use crate::progress::{
    AchievementBook, AchievementDef, AchievementState, PlayStats, DEFAULT_ACHIEVEMENTS,
};

pub use crate::storage::{
    load_profile, save_profile, MemoryStore, Profile, ProfileStore, StorageError, Theme,
    PROFILE_KEY,
};
