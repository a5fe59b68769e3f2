//! Spin-the-bottle.
//!
//! The spinner starts the bottle; a short spin countdown stands in for
//! the animation, after which a target is drawn uniformly from everyone
//! else at the table. The target gets a challenge: complete it or
//! drink.

use log::debug;

use crate::cards::{Card, Difficulty};
use crate::content::PromptTable;
use crate::core::{Countdown, PlayerId, Tick};

use super::{MinigameAction, MinigameCtx, MinigameStatus, RoundOutcome, RESULT_DELAY_TICKS};

/// Ticks the bottle spins before pointing.
pub const SPIN_TICKS: u32 = 3;

/// Phases of a bottle round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BottlePhase {
    Waiting,
    Spinning,
    /// The bottle points at the target.
    Pointing,
    /// Challenge revealed; target must accept or refuse.
    Challenge,
    Result,
}

/// The spin-the-bottle state machine.
#[derive(Clone, Debug)]
pub struct BottleGame {
    phase: BottlePhase,
    spinner: PlayerId,
    target: Option<PlayerId>,
    spin: Countdown,
    difficulty: Difficulty,
    challenge_text: Option<String>,
    challenge_drinks: u32,
    display: Countdown,
    rounds_left: u32,
}

impl BottleGame {
    /// Create a bottle round with `spinner` holding the bottle.
    #[must_use]
    pub fn new(card: &Card, spinner: PlayerId, rounds: u32) -> Self {
        Self {
            phase: BottlePhase::Waiting,
            spinner,
            target: None,
            spin: Countdown::new(0),
            difficulty: card.difficulty,
            challenge_text: None,
            challenge_drinks: card.penalty,
            display: Countdown::new(0),
            rounds_left: rounds.max(1),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> BottlePhase {
        self.phase
    }

    /// Who spun the bottle this round.
    #[must_use]
    pub fn spinner(&self) -> PlayerId {
        self.spinner
    }

    /// Who the bottle points at, once stopped.
    #[must_use]
    pub fn target(&self) -> Option<PlayerId> {
        self.target
    }

    /// The challenge text, once revealed.
    #[must_use]
    pub fn challenge(&self) -> Option<&str> {
        self.challenge_text.as_deref()
    }

    /// Handle a user input.
    pub fn handle(&mut self, action: &MinigameAction, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match (self.phase, action) {
            (BottlePhase::Waiting, MinigameAction::Start) => {
                self.spin = Countdown::new(SPIN_TICKS);
                self.phase = BottlePhase::Spinning;
                MinigameStatus::InProgress
            }
            (BottlePhase::Pointing, MinigameAction::Acknowledge) => {
                let entry = ctx.pool.draw(PromptTable::Retos, self.difficulty, ctx.rng);
                self.challenge_text = Some(entry.text.to_string());
                self.challenge_drinks = entry.difficulty.base_penalty();
                self.phase = BottlePhase::Challenge;
                MinigameStatus::InProgress
            }
            (BottlePhase::Challenge, MinigameAction::Resolve { accepted }) => {
                self.phase = BottlePhase::Result;
                self.display = Countdown::new(RESULT_DELAY_TICKS);
                let outcome = if *accepted {
                    RoundOutcome::none()
                } else {
                    // Target always exists once past Pointing.
                    RoundOutcome::single(self.target.unwrap(), self.challenge_drinks as i32)
                };
                MinigameStatus::RoundComplete(outcome)
            }
            _ => {
                debug!("bottle: ignoring {:?} in {:?}", action, self.phase);
                MinigameStatus::InProgress
            }
        }
    }

    /// Advance by one tick.
    pub fn tick(&mut self, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match self.phase {
            BottlePhase::Spinning => {
                if self.spin.tick() == Tick::Expired {
                    self.target = Some(self.pick_target(ctx));
                    self.phase = BottlePhase::Pointing;
                }
                MinigameStatus::InProgress
            }
            BottlePhase::Result => {
                if self.display.tick() == Tick::Expired {
                    if self.rounds_left > 1 {
                        self.rounds_left -= 1;
                        // The target spins next.
                        self.spinner = self.target.unwrap();
                        self.target = None;
                        self.challenge_text = None;
                        self.phase = BottlePhase::Waiting;
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

    fn pick_target(&self, ctx: &mut MinigameCtx<'_>) -> PlayerId {
        let candidates: Vec<PlayerId> = ctx
            .roster
            .player_ids()
            .filter(|p| *p != self.spinner)
            .collect();
        // Roster has at least two players, so candidates is non-empty.
        *ctx.rng.choose(&candidates).unwrap()
    }
}
