//! Cultura general trivia.
//!
//! One player answers a four-option question against a countdown. A
//! wrong answer or a timeout costs the card's penalty; a correct answer
//! costs nothing.

use log::debug;

use crate::cards::{Card, Difficulty};
use crate::content::tables::TriviaEntry;
use crate::core::{Countdown, PlayerId, Tick};

use super::{MinigameAction, MinigameCtx, MinigameStatus, RoundOutcome, RESULT_DELAY_TICKS};

/// Phases of a trivia round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriviaPhase {
    Waiting,
    /// Question on screen, clock running.
    Question,
    /// Answer (or timeout) revealed.
    Reveal,
    Result,
}

/// The trivia state machine.
#[derive(Clone, Debug)]
pub struct TriviaGame {
    phase: TriviaPhase,
    answering: PlayerId,
    entry: Option<&'static TriviaEntry>,
    timer: Countdown,
    time_limit: u32,
    chosen: Option<usize>,
    correct: bool,
    difficulty: Difficulty,
    penalty: u32,
    display: Countdown,
    rounds_left: u32,
}

impl TriviaGame {
    /// Create a trivia round with `answering` on the spot.
    #[must_use]
    pub fn new(card: &Card, answering: PlayerId, rounds: u32) -> Self {
        Self {
            phase: TriviaPhase::Waiting,
            answering,
            entry: None,
            timer: Countdown::new(0),
            time_limit: card.time_limit.unwrap_or(15),
            chosen: None,
            correct: false,
            difficulty: card.difficulty,
            penalty: card.penalty,
            display: Countdown::new(0),
            rounds_left: rounds.max(1),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TriviaPhase {
        self.phase
    }

    /// Who must answer.
    #[must_use]
    pub fn answering(&self) -> PlayerId {
        self.answering
    }

    /// The question, once drawn.
    #[must_use]
    pub fn question(&self) -> Option<&'static TriviaEntry> {
        self.entry
    }

    /// Ticks left to answer.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    /// Whether the last answer was right (valid in Reveal/Result).
    #[must_use]
    pub fn was_correct(&self) -> bool {
        self.correct
    }

    /// Handle a user input.
    pub fn handle(&mut self, action: &MinigameAction, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match (self.phase, action) {
            (TriviaPhase::Waiting, MinigameAction::Start) => {
                self.entry = Some(ctx.pool.draw_trivia(self.difficulty, ctx.rng));
                self.timer = Countdown::new(self.time_limit);
                self.phase = TriviaPhase::Question;
                MinigameStatus::InProgress
            }
            (TriviaPhase::Question, MinigameAction::Answer(index)) => {
                // Question is always present past Waiting.
                let entry = self.entry.unwrap();
                self.chosen = Some(*index);
                self.correct = *index == entry.answer;
                self.phase = TriviaPhase::Reveal;
                MinigameStatus::InProgress
            }
            (TriviaPhase::Reveal, MinigameAction::Acknowledge) => {
                self.phase = TriviaPhase::Result;
                self.display = Countdown::new(RESULT_DELAY_TICKS);
                let outcome = if self.correct {
                    RoundOutcome::none()
                } else {
                    RoundOutcome::single(self.answering, self.penalty as i32)
                };
                MinigameStatus::RoundComplete(outcome)
            }
            _ => {
                debug!("trivia: ignoring {:?} in {:?}", action, self.phase);
                MinigameStatus::InProgress
            }
        }
    }

    /// Advance by one tick.
    pub fn tick(&mut self, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match self.phase {
            TriviaPhase::Question => {
                if self.timer.tick() == Tick::Expired {
                    // Timeout counts as a wrong answer.
                    self.chosen = None;
                    self.correct = false;
                    self.phase = TriviaPhase::Reveal;
                }
                MinigameStatus::InProgress
            }
            TriviaPhase::Result => {
                if self.display.tick() == Tick::Expired {
                    if self.rounds_left > 1 {
                        self.rounds_left -= 1;
                        self.answering = ctx.roster.next_after(self.answering);
                        self.entry = None;
                        self.chosen = None;
                        self.correct = false;
                        self.phase = TriviaPhase::Waiting;
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
