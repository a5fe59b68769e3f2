//! Pass-the-bomb.
//!
//! The bomb is armed with a fuse countdown and handed around the table
//! in roster order. Whoever holds it when the fuse reaches zero draws a
//! penalty dare. Passing is free and unlimited; the fuse is the only
//! clock.

use log::debug;

use crate::cards::{Card, Difficulty};
use crate::core::{Countdown, PlayerId, Tick};

use super::{MinigameAction, MinigameCtx, MinigameStatus, RoundOutcome, RESULT_DELAY_TICKS};

/// Phases of a bomb round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BombPhase {
    /// Round not started; bomb on the table.
    Waiting,
    /// Fuse burning; the holder can pass.
    Armed,
    /// Fuse hit zero with the current holder.
    Exploded,
    /// Penalty dare revealed.
    Penalty,
    /// Penalty applied; result on screen.
    PenaltyResult,
}

/// The pass-the-bomb state machine.
#[derive(Clone, Debug)]
pub struct BombGame {
    phase: BombPhase,
    holder: PlayerId,
    fuse_ticks: u32,
    fuse: Countdown,
    difficulty: Difficulty,
    penalty_text: Option<String>,
    penalty_drinks: u32,
    display: Countdown,
    rounds_left: u32,
    passes: u32,
}

impl BombGame {
    /// Create a bomb round. `first_holder` starts with the bomb.
    #[must_use]
    pub fn new(card: &Card, first_holder: PlayerId, rounds: u32) -> Self {
        Self {
            phase: BombPhase::Waiting,
            holder: first_holder,
            fuse_ticks: card.time_limit.unwrap_or(10),
            fuse: Countdown::new(0),
            difficulty: card.difficulty,
            penalty_text: None,
            penalty_drinks: card.penalty,
            display: Countdown::new(0),
            rounds_left: rounds.max(1),
            passes: 0,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> BombPhase {
        self.phase
    }

    /// Who holds the bomb.
    #[must_use]
    pub fn holder(&self) -> PlayerId {
        self.holder
    }

    /// Ticks left on the fuse.
    #[must_use]
    pub fn fuse_remaining(&self) -> u32 {
        self.fuse.remaining()
    }

    /// The penalty dare, once drawn.
    #[must_use]
    pub fn penalty_text(&self) -> Option<&str> {
        self.penalty_text.as_deref()
    }

    /// How many times the bomb was passed this round.
    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Handle a user input.
    pub fn handle(&mut self, action: &MinigameAction, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match (self.phase, action) {
            (BombPhase::Waiting, MinigameAction::Start) => {
                self.fuse = Countdown::new(self.fuse_ticks);
                self.phase = BombPhase::Armed;
                MinigameStatus::InProgress
            }
            (BombPhase::Armed, MinigameAction::PassBomb) => {
                self.holder = ctx.roster.next_after(self.holder);
                self.passes += 1;
                MinigameStatus::InProgress
            }
            (BombPhase::Exploded, MinigameAction::Acknowledge) => {
                let entry = ctx.pool.draw(
                    crate::content::PromptTable::Penalties,
                    self.difficulty,
                    ctx.rng,
                );
                self.penalty_text = Some(entry.text.to_string());
                self.penalty_drinks = entry.difficulty.base_penalty();
                self.phase = BombPhase::Penalty;
                MinigameStatus::InProgress
            }
            (BombPhase::Penalty, MinigameAction::Acknowledge) => {
                self.phase = BombPhase::PenaltyResult;
                self.display = Countdown::new(RESULT_DELAY_TICKS);
                MinigameStatus::RoundComplete(RoundOutcome::single(
                    self.holder,
                    self.penalty_drinks as i32,
                ))
            }
            _ => {
                debug!("bomb: ignoring {:?} in {:?}", action, self.phase);
                MinigameStatus::InProgress
            }
        }
    }

    /// Advance by one tick.
    pub fn tick(&mut self, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match self.phase {
            BombPhase::Armed => {
                if self.fuse.tick() == Tick::Expired {
                    debug!("bomb exploded on {}", ctx.roster.name(self.holder));
                    self.phase = BombPhase::Exploded;
                }
                MinigameStatus::InProgress
            }
            BombPhase::PenaltyResult => {
                if self.display.tick() == Tick::Expired {
                    if self.rounds_left > 1 {
                        self.rounds_left -= 1;
                        self.reset_round(ctx);
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

    fn reset_round(&mut self, ctx: &mut MinigameCtx<'_>) {
        let count = ctx.roster.player_count();
        self.holder = PlayerId::new(ctx.rng.gen_range_usize(0..count) as u8);
        self.penalty_text = None;
        self.passes = 0;
        self.phase = BombPhase::Waiting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardKind};
    use crate::content::ContentPool;
    use crate::core::{Roster, SessionRng};

    fn fixture() -> (Roster, ContentPool, SessionRng) {
        let roster =
            Roster::new(vec!["Ana".into(), "Beto".into(), "Coco".into()]).unwrap();
        (roster, ContentPool::new(), SessionRng::new(42))
    }

    fn bomb_card(fuse: u32) -> Card {
        Card {
            id: CardId::new(0),
            kind: CardKind::Bomba,
            difficulty: Difficulty::Medio,
            content: String::new(),
            penalty: 2,
            time_limit: Some(fuse),
        }
    }

    #[test]
    fn test_explodes_after_exact_fuse() {
        let (roster, mut pool, mut rng) = fixture();
        let mut game = BombGame::new(&bomb_card(10), PlayerId::new(0), 1);
        let mut ctx = MinigameCtx {
            roster: &roster,
            pool: &mut pool,
            rng: &mut rng,
        };

        game.handle(&MinigameAction::Start, &mut ctx);
        assert_eq!(game.phase(), BombPhase::Armed);

        // Nine ticks: still armed, fuse strictly decreasing
        for expected in (1..10).rev() {
            game.tick(&mut ctx);
            assert_eq!(game.phase(), BombPhase::Armed);
            assert_eq!(game.fuse_remaining(), expected);
        }

        // Tenth tick: explosion, with the original holder
        game.tick(&mut ctx);
        assert_eq!(game.phase(), BombPhase::Exploded);
        assert_eq!(game.holder(), PlayerId::new(0));
    }

    #[test]
    fn test_pass_moves_holder_in_roster_order() {
        let (roster, mut pool, mut rng) = fixture();
        let mut game = BombGame::new(&bomb_card(10), PlayerId::new(0), 1);
        let mut ctx = MinigameCtx {
            roster: &roster,
            pool: &mut pool,
            rng: &mut rng,
        };

        game.handle(&MinigameAction::Start, &mut ctx);
        game.handle(&MinigameAction::PassBomb, &mut ctx);
        assert_eq!(game.holder(), PlayerId::new(1));

        game.handle(&MinigameAction::PassBomb, &mut ctx);
        game.handle(&MinigameAction::PassBomb, &mut ctx);
        assert_eq!(game.holder(), PlayerId::new(0)); // wrapped
        assert_eq!(game.passes(), 3);
    }

    #[test]
    fn test_deterministic_holder_under_fixed_pass_schedule() {
        let (roster, mut pool, mut rng) = fixture();
        let mut game = BombGame::new(&bomb_card(10), PlayerId::new(0), 1);
        let mut ctx = MinigameCtx {
            roster: &roster,
            pool: &mut pool,
            rng: &mut rng,
        };

        game.handle(&MinigameAction::Start, &mut ctx);
        // Pass on ticks 3 and 7
        for tick in 1..=10 {
            game.tick(&mut ctx);
            if tick == 3 || tick == 7 {
                game.handle(&MinigameAction::PassBomb, &mut ctx);
            }
        }

        assert_eq!(game.phase(), BombPhase::Exploded);
        assert_eq!(game.holder(), PlayerId::new(2));
    }

    #[test]
    fn test_penalty_flow_yields_one_outcome() {
        let (roster, mut pool, mut rng) = fixture();
        let mut game = BombGame::new(&bomb_card(1), PlayerId::new(1), 1);
        let mut ctx = MinigameCtx {
            roster: &roster,
            pool: &mut pool,
            rng: &mut rng,
        };

        game.handle(&MinigameAction::Start, &mut ctx);
        game.tick(&mut ctx);
        assert_eq!(game.phase(), BombPhase::Exploded);

        game.handle(&MinigameAction::Acknowledge, &mut ctx);
        assert_eq!(game.phase(), BombPhase::Penalty);
        assert!(game.penalty_text().is_some());

        let status = game.handle(&MinigameAction::Acknowledge, &mut ctx);
        match status {
            MinigameStatus::RoundComplete(outcome) => {
                assert_eq!(outcome.penalties.len(), 1);
                assert_eq!(outcome.penalties[0].0, PlayerId::new(1));
                assert!(outcome.penalties[0].1 > 0);
            }
            other => panic!("expected RoundComplete, got {:?}", other),
        }

        // Display delay, then finished
        let mut finished = 0;
        for _ in 0..RESULT_DELAY_TICKS + 1 {
            if game.tick(&mut ctx) == MinigameStatus::Finished {
                finished += 1;
            }
        }
        assert_eq!(finished, 1);
    }

    #[test]
    fn test_multi_round_resets_to_waiting() {
        let (roster, mut pool, mut rng) = fixture();
        let mut game = BombGame::new(&bomb_card(1), PlayerId::new(0), 2);
        let mut ctx = MinigameCtx {
            roster: &roster,
            pool: &mut pool,
            rng: &mut rng,
        };

        game.handle(&MinigameAction::Start, &mut ctx);
        game.tick(&mut ctx);
        game.handle(&MinigameAction::Acknowledge, &mut ctx);
        game.handle(&MinigameAction::Acknowledge, &mut ctx);

        for _ in 0..RESULT_DELAY_TICKS {
            game.tick(&mut ctx);
        }

        assert_eq!(game.phase(), BombPhase::Waiting);
        assert_eq!(game.passes(), 0);
    }

    #[test]
    fn test_out_of_phase_inputs_ignored() {
        let (roster, mut pool, mut rng) = fixture();
        let mut game = BombGame::new(&bomb_card(10), PlayerId::new(0), 1);
        let mut ctx = MinigameCtx {
            roster: &roster,
            pool: &mut pool,
            rng: &mut rng,
        };

        // Passing before arming does nothing
        let status = game.handle(&MinigameAction::PassBomb, &mut ctx);
        assert_eq!(status, MinigameStatus::InProgress);
        assert_eq!(game.phase(), BombPhase::Waiting);
        assert_eq!(game.holder(), PlayerId::new(0));
    }
}
