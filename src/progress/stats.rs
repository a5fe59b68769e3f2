//! Aggregate play statistics.
//!
//! One observer struct serves two scopes: a fresh instance tallies a
//! single session, and the persisted lifetime copy absorbs each session
//! tally when it ends.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::session::{SessionEvent, SessionEventKind};

/// Counters over observed session events.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayStats {
    pub cards_resolved: u32,
    pub cards_skipped: u32,
    /// Drink units handed out (positive deltas only).
    pub drinks_applied: u32,
    pub rounds_by_kind: FxHashMap<CardKind, u32>,
    pub sessions_completed: u32,
}

impl PlayStats {
    /// Empty counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds resolved for one card kind.
    #[must_use]
    pub fn rounds(&self, kind: CardKind) -> u32 {
        self.rounds_by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Total minigame rounds resolved, any kind.
    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.rounds_by_kind.values().sum()
    }

    /// Feed one session event into the counters.
    pub fn observe(&mut self, event: &SessionEvent) {
        match &event.kind {
            SessionEventKind::DrinkApplied { amount, .. } => {
                self.drinks_applied = self.drinks_applied.saturating_add((*amount).max(0) as u32);
            }
            SessionEventKind::CardResolved { .. } => {
                self.cards_resolved += 1;
            }
            SessionEventKind::CardSkipped { .. } => {
                self.cards_skipped += 1;
            }
            SessionEventKind::RoundResolved { kind } => {
                *self.rounds_by_kind.entry(*kind).or_insert(0) += 1;
            }
            SessionEventKind::SessionCompleted => {
                self.sessions_completed += 1;
            }
            SessionEventKind::SessionStarted { .. }
            | SessionEventKind::ConstraintExpired { .. } => {}
        }
    }

    /// Fold another tally into this one.
    pub fn absorb(&mut self, other: &PlayStats) {
        self.cards_resolved += other.cards_resolved;
        self.cards_skipped += other.cards_skipped;
        self.drinks_applied = self.drinks_applied.saturating_add(other.drinks_applied);
        for (kind, count) in &other.rounds_by_kind {
            *self.rounds_by_kind.entry(*kind).or_insert(0) += count;
        }
        self.sessions_completed += other.sessions_completed;
    }
}
