//! Charades.
//!
//! One player acts out a drawn prompt against the clock. A guess in
//! time means everyone else drinks; running out of time means the actor
//! drinks the card penalty.

use log::debug;

use crate::cards::{Card, Difficulty};
use crate::content::PromptTable;
use crate::core::{Countdown, PlayerId, Tick};

use super::{MinigameAction, MinigameCtx, MinigameStatus, RoundOutcome, RESULT_DELAY_TICKS};

/// Phases of a charades round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharadesPhase {
    Waiting,
    /// Actor performing, clock running.
    Acting,
    /// Guessed or timed out.
    Resolved,
    Result,
}

/// The charades state machine.
#[derive(Clone, Debug)]
pub struct CharadesGame {
    phase: CharadesPhase,
    actor: PlayerId,
    word: Option<String>,
    timer: Countdown,
    time_limit: u32,
    guessed: bool,
    difficulty: Difficulty,
    penalty: u32,
    display: Countdown,
    rounds_left: u32,
}

impl CharadesGame {
    /// Create a charades round with `actor` performing.
    #[must_use]
    pub fn new(card: &Card, actor: PlayerId, rounds: u32) -> Self {
        Self {
            phase: CharadesPhase::Waiting,
            actor,
            word: None,
            timer: Countdown::new(0),
            time_limit: card.time_limit.unwrap_or(60),
            guessed: false,
            difficulty: card.difficulty,
            penalty: card.penalty,
            display: Countdown::new(0),
            rounds_left: rounds.max(1),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> CharadesPhase {
        self.phase
    }

    /// Who is acting.
    #[must_use]
    pub fn actor(&self) -> PlayerId {
        self.actor
    }

    /// The prompt being acted, once drawn. Only the actor's screen
    /// shows it; that is the UI's problem, not the engine's.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Ticks left to act.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    /// Handle a user input.
    pub fn handle(&mut self, action: &MinigameAction, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match (self.phase, action) {
            (CharadesPhase::Waiting, MinigameAction::Start) => {
                let entry = ctx
                    .pool
                    .draw(PromptTable::Charadas, self.difficulty, ctx.rng);
                self.word = Some(entry.text.to_string());
                self.timer = Countdown::new(self.time_limit);
                self.phase = CharadesPhase::Acting;
                MinigameStatus::InProgress
            }
            (CharadesPhase::Acting, MinigameAction::Guessed) => {
                self.guessed = true;
                self.phase = CharadesPhase::Resolved;
                MinigameStatus::InProgress
            }
            (CharadesPhase::Resolved, MinigameAction::Acknowledge) => {
                self.phase = CharadesPhase::Result;
                self.display = Countdown::new(RESULT_DELAY_TICKS);
                let outcome = if self.guessed {
                    // Everyone but the actor drinks one.
                    RoundOutcome::group_except(ctx.roster, &[self.actor], 1)
                } else {
                    RoundOutcome::single(self.actor, self.penalty as i32)
                };
                MinigameStatus::RoundComplete(outcome)
            }
            _ => {
                debug!("charades: ignoring {:?} in {:?}", action, self.phase);
                MinigameStatus::InProgress
            }
        }
    }

    /// Advance by one tick.
    pub fn tick(&mut self, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match self.phase {
            CharadesPhase::Acting => {
                if self.timer.tick() == Tick::Expired {
                    self.guessed = false;
                    self.phase = CharadesPhase::Resolved;
                }
                MinigameStatus::InProgress
            }
            CharadesPhase::Result => {
                if self.display.tick() == Tick::Expired {
                    if self.rounds_left > 1 {
                        self.rounds_left -= 1;
                        self.actor = ctx.roster.next_after(self.actor);
                        self.word = None;
                        self.guessed = false;
                        self.phase = CharadesPhase::Waiting;
                        MinigameStatus::InProgress
                    } else {
                        MinigameStatus::Finished
                    }
                } else {
                    MinigameStatus::InProgress
                }
            }
            _ => MinigameStatus::InProgress,
        }
    }
}
