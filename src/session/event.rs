//! Session events.
//!
//! The orchestrator emits an event for every observable mutation.
//! Progress trackers (achievements, stats) consume these instead of
//! reaching into session state.
//!
//! Every event carries an [`EventId`] drawn from a session-monotonic
//! counter. Trackers remember the highest id they applied and ignore
//! replays, so a double-fired callback can never over-count progress.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::PlayerId;

/// Monotonically increasing event identifier within a session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EventId(pub u64);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event({})", self.0)
    }
}

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEventKind {
    /// A session started with this many players.
    SessionStarted { player_count: usize },
    /// A drink delta was applied to a player.
    DrinkApplied { player: PlayerId, amount: i32 },
    /// A card was skipped without playing it.
    CardSkipped { kind: CardKind },
    /// A minigame round resolved.
    RoundResolved { kind: CardKind },
    /// A card was consumed and the cursor advanced.
    CardResolved { kind: CardKind },
    /// A table rule ran out of rounds.
    ConstraintExpired { text: String },
    /// The deck ran out; the session is over.
    SessionCompleted,
}

/// An event with its id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub id: EventId,
    pub kind: SessionEventKind,
}
