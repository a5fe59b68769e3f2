//! Yo nunca ("never have I ever").
//!
//! Statements are read to the table; the caller reports who drank. The
//! game runs exactly `players × 3` rounds and then hands control back —
//! the only minigame whose round count scales with the roster.

use log::debug;

use crate::cards::{Card, Difficulty};
use crate::content::PromptTable;
use crate::core::{Countdown, PlayerId, Roster, Tick};

use super::{MinigameAction, MinigameCtx, MinigameStatus, RoundOutcome, RESULT_DELAY_TICKS};

/// Rounds per player in a yo-nunca session.
pub const ROUNDS_PER_PLAYER: u32 = 3;

/// Phases of a yo-nunca round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YoNuncaPhase {
    Waiting,
    /// Statement on screen.
    Prompt,
    /// Drinkers recorded, tally on screen.
    Tally,
    Result,
}

/// The yo-nunca state machine.
#[derive(Clone, Debug)]
pub struct YoNuncaGame {
    phase: YoNuncaPhase,
    statement: Option<String>,
    drinkers: Vec<PlayerId>,
    rounds_played: u32,
    max_rounds: u32,
    difficulty: Difficulty,
    drink_amount: u32,
    display: Countdown,
}

impl YoNuncaGame {
    /// Create a yo-nunca run sized to the roster.
    #[must_use]
    pub fn new(card: &Card, roster: &Roster) -> Self {
        Self {
            phase: YoNuncaPhase::Waiting,
            statement: None,
            drinkers: Vec::new(),
            rounds_played: 0,
            max_rounds: roster.player_count() as u32 * ROUNDS_PER_PLAYER,
            difficulty: card.difficulty,
            drink_amount: 1,
            display: Countdown::new(0),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> YoNuncaPhase {
        self.phase
    }

    /// The current statement, once drawn.
    #[must_use]
    pub fn statement(&self) -> Option<&str> {
        self.statement.as_deref()
    }

    /// Rounds fully completed so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Total rounds this run will play.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Handle a user input.
    pub fn handle(&mut self, action: &MinigameAction, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match (self.phase, action) {
            (YoNuncaPhase::Waiting, MinigameAction::Start) => {
                let entry = ctx
                    .pool
                    .draw(PromptTable::YoNunca, self.difficulty, ctx.rng);
                self.statement = Some(entry.text.to_string());
                self.phase = YoNuncaPhase::Prompt;
                MinigameStatus::InProgress
            }
            (YoNuncaPhase::Prompt, MinigameAction::RecordDrinkers(players)) => {
                self.drinkers = players
                    .iter()
                    .copied()
                    .filter(|p| p.index() < ctx.roster.player_count())
                    .collect();
                self.phase = YoNuncaPhase::Tally;
                MinigameStatus::InProgress
            }
            (YoNuncaPhase::Tally, MinigameAction::Acknowledge) => {
                self.phase = YoNuncaPhase::Result;
                self.display = Countdown::new(RESULT_DELAY_TICKS);
                let mut outcome = RoundOutcome::none();
                for player in &self.drinkers {
                    outcome.penalties.push((*player, self.drink_amount as i32));
                }
                MinigameStatus::RoundComplete(outcome)
            }
            _ => {
                debug!("yo-nunca: ignoring {:?} in {:?}", action, self.phase);
                MinigameStatus::InProgress
            }
        }
    }

    /// Advance by one tick.
    pub fn tick(&mut self, _ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        if self.phase != YoNuncaPhase::Result {
            return MinigameStatus::InProgress;
        }

        if self.display.tick() == Tick::Expired {
            self.rounds_played += 1;
            if self.rounds_played >= self.max_rounds {
                MinigameStatus::Finished
            } else {
                self.statement = None;
                self.drinkers.clear();
                self.phase = YoNuncaPhase::Waiting;
                MinigameStatus::InProgress
            }
        } else {
            MinigameStatus::InProgress
        }
    }
}
