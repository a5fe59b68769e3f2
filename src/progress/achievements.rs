//! Achievement definitions and unlock tracking.
//!
//! Definitions are static; only per-achievement progress is persisted.
//! The book consumes [`SessionEvent`]s and remembers the last event id
//! it applied, so feeding the same event twice (a UI callback firing on
//! both edges, a replayed drain) cannot double-count progress. The
//! counter restarts with every session, which `SessionStarted` signals.

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::session::{EventId, SessionEvent, SessionEventKind};

/// What an achievement counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AchievementTrigger {
    /// Drink units applied to anyone (positive deltas only).
    Drinks,
    /// Cards consumed by the session cursor.
    CardsResolved,
    /// Cards skipped without playing.
    CardsSkipped,
    /// Minigame rounds resolved, optionally restricted to one kind.
    RoundsResolved(Option<CardKind>),
    /// Sessions played to the end of the deck.
    SessionsCompleted,
}

/// A static achievement definition.
#[derive(Clone, Copy, Debug)]
pub struct AchievementDef {
    /// Stable identifier used as the persistence key.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub trigger: AchievementTrigger,
    /// Progress needed to unlock.
    pub max_progress: u32,
}

/// The built-in achievement set.
pub static DEFAULT_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "primera-noche",
        name: "Primera noche",
        description: "Termina tu primera partida",
        trigger: AchievementTrigger::SessionsCompleted,
        max_progress: 1,
    },
    AchievementDef {
        id: "veterano",
        name: "Veterano",
        description: "Termina diez partidas",
        trigger: AchievementTrigger::SessionsCompleted,
        max_progress: 10,
    },
    AchievementDef {
        id: "hidratacion",
        name: "Hidratación",
        description: "Reparte cincuenta tragos",
        trigger: AchievementTrigger::Drinks,
        max_progress: 50,
    },
    AchievementDef {
        id: "maraton",
        name: "Maratón",
        description: "Juega cien cartas",
        trigger: AchievementTrigger::CardsResolved,
        max_progress: 100,
    },
    AchievementDef {
        id: "cobarde",
        name: "Cobarde",
        description: "Salta veinte cartas",
        trigger: AchievementTrigger::CardsSkipped,
        max_progress: 20,
    },
    AchievementDef {
        id: "artificiero",
        name: "Artificiero",
        description: "Sobrevive quince rondas de bomba",
        trigger: AchievementTrigger::RoundsResolved(Some(CardKind::Bomba)),
        max_progress: 15,
    },
    AchievementDef {
        id: "sabelotodo",
        name: "Sabelotodo",
        description: "Resuelve veinticinco rondas de trivia",
        trigger: AchievementTrigger::RoundsResolved(Some(CardKind::Trivia)),
        max_progress: 25,
    },
    AchievementDef {
        id: "todoterreno",
        name: "Todoterreno",
        description: "Resuelve doscientas rondas de minijuego",
        trigger: AchievementTrigger::RoundsResolved(None),
        max_progress: 200,
    },
];

/// Persisted progress for one achievement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementState {
    pub progress: u32,
    /// Unlock time in epoch milliseconds, once reached.
    pub unlocked_at: Option<u64>,
}

/// Progress across the whole achievement set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AchievementBook {
    states: FxHashMap<String, AchievementState>,
    #[serde(skip)]
    last_event: Option<EventId>,
}

impl AchievementBook {
    /// A book with no progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress for one achievement id.
    #[must_use]
    pub fn state(&self, id: &str) -> AchievementState {
        self.states.get(id).cloned().unwrap_or_default()
    }

    /// Whether an achievement is unlocked.
    #[must_use]
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.states
            .get(id)
            .is_some_and(|s| s.unlocked_at.is_some())
    }

    /// Count of unlocked achievements.
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| s.unlocked_at.is_some())
            .count()
    }

    /// Feed one session event into the book.
    ///
    /// `now_ms` stamps any unlock this event causes. Returns the
    /// definitions newly unlocked, in definition order. Events at or
    /// below the last applied id are replays and change nothing.
    pub fn observe(&mut self, event: &SessionEvent, now_ms: u64) -> Vec<&'static AchievementDef> {
        if matches!(event.kind, SessionEventKind::SessionStarted { .. }) {
            self.last_event = None;
        }
        if let Some(last) = self.last_event {
            if event.id <= last {
                debug!("achievements: replayed {} ignored", event.id);
                return Vec::new();
            }
        }
        self.last_event = Some(event.id);

        let mut unlocked = Vec::new();
        for def in DEFAULT_ACHIEVEMENTS {
            let delta = event_delta(&event.kind, def.trigger);
            if delta == 0 {
                continue;
            }
            let state = self.states.entry(def.id.to_string()).or_default();
            if state.unlocked_at.is_some() {
                continue;
            }
            state.progress = state.progress.saturating_add(delta).min(def.max_progress);
            if state.progress >= def.max_progress {
                state.unlocked_at = Some(now_ms);
                unlocked.push(def);
            }
        }
        unlocked
    }
}

fn event_delta(kind: &SessionEventKind, trigger: AchievementTrigger) -> u32 {
    match (kind, trigger) {
        (SessionEventKind::DrinkApplied { amount, .. }, AchievementTrigger::Drinks) => {
            (*amount).max(0) as u32
        }
        (SessionEventKind::CardResolved { .. }, AchievementTrigger::CardsResolved) => 1,
        (SessionEventKind::CardSkipped { .. }, AchievementTrigger::CardsSkipped) => 1,
        (
            SessionEventKind::RoundResolved { kind },
            AchievementTrigger::RoundsResolved(filter),
        ) => match filter {
            Some(wanted) if wanted != *kind => 0,
            _ => 1,
        },
        (SessionEventKind::SessionCompleted, AchievementTrigger::SessionsCompleted) => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn event(id: u64, kind: SessionEventKind) -> SessionEvent {
        SessionEvent {
            id: EventId(id),
            kind,
        }
    }

    fn drink(id: u64, amount: i32) -> SessionEvent {
        event(
            id,
            SessionEventKind::DrinkApplied {
                player: PlayerId::new(0),
                amount,
            },
        )
    }

    #[test]
    fn test_unique_ids() {
        for (i, def) in DEFAULT_ACHIEVEMENTS.iter().enumerate() {
            assert!(
                !DEFAULT_ACHIEVEMENTS[..i].iter().any(|d| d.id == def.id),
                "duplicate id {}",
                def.id
            );
        }
    }

    #[test]
    fn test_drink_progress_accumulates() {
        let mut book = AchievementBook::new();

        book.observe(&drink(0, 3), 1000);
        assert_eq!(book.state("hidratacion").progress, 3);

        book.observe(&drink(1, 2), 1000);
        assert_eq!(book.state("hidratacion").progress, 5);
        assert!(!book.is_unlocked("hidratacion"));
    }

    #[test]
    fn test_unlock_at_max_progress() {
        let mut book = AchievementBook::new();

        let unlocked = book.observe(&drink(0, 49), 1000);
        assert!(unlocked.is_empty());

        let unlocked = book.observe(&drink(1, 1), 2000);
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].id, "hidratacion");
        assert_eq!(book.state("hidratacion").unlocked_at, Some(2000));

        // Further progress past the cap changes nothing
        let unlocked = book.observe(&drink(2, 10), 3000);
        assert!(unlocked.is_empty());
        assert_eq!(book.state("hidratacion").progress, 50);
    }

    #[test]
    fn test_replayed_event_ignored() {
        let mut book = AchievementBook::new();

        book.observe(&drink(5, 4), 1000);
        book.observe(&drink(5, 4), 1000);
        book.observe(&drink(3, 4), 1000);

        assert_eq!(book.state("hidratacion").progress, 4);
    }

    #[test]
    fn test_new_session_resets_replay_guard() {
        let mut book = AchievementBook::new();

        book.observe(&drink(7, 2), 1000);

        // Next session restarts ids at zero
        book.observe(
            &event(0, SessionEventKind::SessionStarted { player_count: 3 }),
            2000,
        );
        book.observe(&drink(1, 2), 2000);

        assert_eq!(book.state("hidratacion").progress, 4);
    }

    #[test]
    fn test_round_filter_by_kind() {
        let mut book = AchievementBook::new();

        book.observe(
            &event(0, SessionEventKind::RoundResolved { kind: CardKind::Bomba }),
            1000,
        );
        book.observe(
            &event(1, SessionEventKind::RoundResolved { kind: CardKind::Trivia }),
            1000,
        );

        assert_eq!(book.state("artificiero").progress, 1);
        assert_eq!(book.state("sabelotodo").progress, 1);
        assert_eq!(book.state("todoterreno").progress, 2);
    }

    #[test]
    fn test_negative_drinks_do_not_progress() {
        let mut book = AchievementBook::new();

        book.observe(&drink(0, -3), 1000);
        assert_eq!(book.state("hidratacion").progress, 0);
    }

    #[test]
    fn test_session_completed_unlocks_first_night() {
        let mut book = AchievementBook::new();

        let unlocked = book.observe(&event(0, SessionEventKind::SessionCompleted), 5000);
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].id, "primera-noche");
        assert_eq!(book.unlocked_count(), 1);
    }

    #[test]
    fn test_state_roundtrips_through_json() {
        let mut book = AchievementBook::new();
        book.observe(&drink(0, 50), 1234);

        let json = serde_json::to_string(&book).unwrap();
        let back: AchievementBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back.state("hidratacion").unlocked_at, Some(1234));
    }
}
