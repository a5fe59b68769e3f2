//! Cross-session progress: achievements and play statistics.
//!
//! Both trackers are pure observers of [`crate::session::SessionEvent`]s
//! drained from a running session. The orchestrator never knows they
//! exist.

pub mod achievements;
pub mod stats;

pub use achievements::{
    AchievementBook, AchievementDef, AchievementState, AchievementTrigger, DEFAULT_ACHIEVEMENTS,
};
pub use stats::PlayStats;
