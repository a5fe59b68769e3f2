//! Session orchestration.
//!
//! The [`Session`] walks the generated deck, opens minigames for the
//! cards that have one, applies their outcomes to the roster, and emits
//! [`SessionEvent`]s for the progress trackers.

pub mod constraint;
pub mod event;
pub mod orchestrator;

pub use constraint::{ActiveConstraint, ConstraintList};
pub use event::{EventId, SessionEvent, SessionEventKind};
pub use orchestrator::{AdvanceOutcome, Session};
