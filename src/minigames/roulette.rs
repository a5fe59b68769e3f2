//! Penalty roulette.
//!
//! The wheel spins on its own countdown. Letting it run down lands the
//! mild end of the table; stopping it early (more ticks remaining) maps
//! to the spicier difficulty tiers via `Difficulty::from_remaining`.
//! Segments are drawn uniformly; what varies with the stop is the
//! difficulty of any challenge text and nothing else.

use log::debug;

use crate::cards::{Card, Difficulty};
use crate::content::PromptTable;
use crate::core::{Countdown, PlayerId, Tick};

use super::{
    ConstraintSpec, MinigameAction, MinigameCtx, MinigameStatus, RoundOutcome, RESULT_DELAY_TICKS,
};

/// Ticks a full spin takes if never stopped.
pub const ROULETTE_SPIN_TICKS: u32 = 8;

/// What a wheel segment does when landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// The spinner drinks `n`.
    Drinks(u32),
    /// Everyone drinks `n`.
    Everyone(u32),
    /// The spinner picks who drinks `n`.
    Choose(u32),
    /// The spinner gets a challenge: complete it or drink.
    Challenge,
    /// A table rule comes into effect for a few rounds.
    Rule,
    /// Nothing happens.
    Safe,
}

/// The wheel layout. Uniform pick per stop.
pub const WHEEL: [Segment; 8] = [
    Segment::Drinks(2),
    Segment::Everyone(1),
    Segment::Choose(3),
    Segment::Challenge,
    Segment::Rule,
    Segment::Safe,
    Segment::Drinks(4),
    Segment::Challenge,
];

/// Phases of a roulette round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoulettePhase {
    Waiting,
    Spinning,
    /// Wheel stopped on a segment.
    Stopped,
    Result,
}

/// The roulette state machine.
#[derive(Clone, Debug)]
pub struct RouletteGame {
    phase: RoulettePhase,
    spinner: PlayerId,
    spin: Countdown,
    stop_difficulty: Difficulty,
    segment: Option<Segment>,
    challenge_text: Option<String>,
    pending_rule: Option<ConstraintSpec>,
    display: Countdown,
    rounds_left: u32,
}

impl RouletteGame {
    /// Create a roulette round with `spinner` at the wheel.
    #[must_use]
    pub fn new(card: &Card, spinner: PlayerId, rounds: u32) -> Self {
        Self {
            phase: RoulettePhase::Waiting,
            spinner,
            spin: Countdown::new(0),
            stop_difficulty: card.difficulty,
            segment: None,
            challenge_text: None,
            pending_rule: None,
            display: Countdown::new(0),
            rounds_left: rounds.max(1),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoulettePhase {
        self.phase
    }

    /// Who is spinning.
    #[must_use]
    pub fn spinner(&self) -> PlayerId {
        self.spinner
    }

    /// The segment landed on, once stopped.
    #[must_use]
    pub fn segment(&self) -> Option<Segment> {
        self.segment
    }

    /// The challenge text, when the segment dealt one.
    #[must_use]
    pub fn challenge(&self) -> Option<&str> {
        self.challenge_text.as_deref()
    }

    /// Handle a user input.
    pub fn handle(&mut self, action: &MinigameAction, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match (self.phase, action) {
            (RoulettePhase::Waiting, MinigameAction::Start) => {
                self.spin = Countdown::new(ROULETTE_SPIN_TICKS);
                self.phase = RoulettePhase::Spinning;
                MinigameStatus::InProgress
            }
            (RoulettePhase::Spinning, MinigameAction::StopWheel) => {
                self.stop_difficulty =
                    Difficulty::from_remaining(self.spin.remaining(), ROULETTE_SPIN_TICKS);
                self.land(ctx);
                MinigameStatus::InProgress
            }
            (RoulettePhase::Stopped, MinigameAction::ChooseTarget(target)) => {
                if let Some(Segment::Choose(n)) = self.segment {
                    if target.index() < ctx.roster.player_count() {
                        return self.finish_round(RoundOutcome::single(*target, n as i32));
                    }
                    debug!("roulette: chosen target {} not in roster", target);
                }
                MinigameStatus::InProgress
            }
            (RoulettePhase::Stopped, MinigameAction::Resolve { accepted }) => {
                if self.segment == Some(Segment::Challenge) {
                    let outcome = if *accepted {
                        RoundOutcome::none()
                    } else {
                        RoundOutcome::single(
                            self.spinner,
                            self.stop_difficulty.base_penalty() as i32,
                        )
                    };
                    return self.finish_round(outcome);
                }
                MinigameStatus::InProgress
            }
            (RoulettePhase::Stopped, MinigameAction::Acknowledge) => {
                let outcome = match self.segment {
                    Some(Segment::Drinks(n)) => RoundOutcome::single(self.spinner, n as i32),
                    Some(Segment::Everyone(n)) => {
                        RoundOutcome::group_except(ctx.roster, &[], n as i32)
                    }
                    Some(Segment::Safe) => RoundOutcome::none(),
                    Some(Segment::Rule) => {
                        // Rule already drawn at landing.
                        let rule = self.pending_rule.take().unwrap();
                        RoundOutcome::none().with_constraint(rule)
                    }
                    // Choose and Challenge need their dedicated inputs.
                    Some(Segment::Choose(_)) | Some(Segment::Challenge) | None => {
                        return MinigameStatus::InProgress
                    }
                };
                self.finish_round(outcome)
            }
            _ => {
                debug!("roulette: ignoring {:?} in {:?}", action, self.phase);
                MinigameStatus::InProgress
            }
        }
    }

    /// Advance by one tick.
    pub fn tick(&mut self, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match self.phase {
            RoulettePhase::Spinning => {
                if self.spin.tick() == Tick::Expired {
                    self.stop_difficulty = Difficulty::Suave;
                    self.land(ctx);
                }
                MinigameStatus::InProgress
            }
            RoulettePhase::Result => {
                if self.display.tick() == Tick::Expired {
                    if self.rounds_left > 1 {
                        self.rounds_left -= 1;
                        self.segment = None;
                        self.challenge_text = None;
                        self.phase = RoulettePhase::Waiting;
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

    fn land(&mut self, ctx: &mut MinigameCtx<'_>) {
        let segment = WHEEL[ctx.rng.gen_range_usize(0..WHEEL.len())];
        match segment {
            Segment::Challenge => {
                let entry = ctx
                    .pool
                    .draw(PromptTable::Retos, self.stop_difficulty, ctx.rng);
                self.challenge_text = Some(entry.text.to_string());
            }
            Segment::Rule => {
                let rule = ctx.pool.draw_rule(ctx.rng);
                self.pending_rule = Some(ConstraintSpec {
                    text: rule.text.to_string(),
                    player: None,
                    rounds: rule.rounds,
                });
            }
            _ => {}
        }
        self.segment = Some(segment);
        self.phase = RoulettePhase::Stopped;
    }

    fn finish_round(&mut self, outcome: RoundOutcome) -> MinigameStatus {
        self.phase = RoulettePhase::Result;
        self.display = Countdown::new(RESULT_DELAY_TICKS);
        MinigameStatus::RoundComplete(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardKind};
    use crate::content::ContentPool;
    use crate::core::{Roster, SessionRng};

    fn fixture(seed: u64) -> (Roster, ContentPool, SessionRng) {
        let roster =
            Roster::new(vec!["Ana".into(), "Beto".into(), "Coco".into()]).unwrap();
        (roster, ContentPool::new(), SessionRng::new(seed))
    }

    fn roulette_card() -> Card {
        Card {
            id: CardId::new(0),
            kind: CardKind::Ruleta,
            difficulty: Difficulty::Medio,
            content: String::new(),
            penalty: 2,
            time_limit: None,
        }
    }

    fn land(game: &mut RouletteGame, ctx: &mut MinigameCtx<'_>) -> Segment {
        game.handle(&MinigameAction::Start, ctx);
        for _ in 0..ROULETTE_SPIN_TICKS {
            game.tick(ctx);
        }
        assert_eq!(game.phase(), RoulettePhase::Stopped);
        game.segment().unwrap()
    }

    #[test]
    fn test_full_spin_lands_on_segment() {
        let (roster, mut pool, mut rng) = fixture(42);
        let mut game = RouletteGame::new(&roulette_card(), PlayerId::new(0), 1);
        let mut ctx = MinigameCtx {
            roster: &roster,
            pool: &mut pool,
            rng: &mut rng,
        };

        let segment = land(&mut game, &mut ctx);
        assert!(WHEEL.contains(&segment));
    }

    #[test]
    fn test_early_stop_raises_difficulty() {
        let (roster, mut pool, mut rng) = fixture(42);
        let mut game = RouletteGame::new(&roulette_card(), PlayerId::new(0), 1);
        let mut ctx = MinigameCtx {
            roster: &roster,
            pool: &mut pool,
            rng: &mut rng,
        };

        game.handle(&MinigameAction::Start, &mut ctx);
        // Stop immediately: full countdown remaining
        game.handle(&MinigameAction::StopWheel, &mut ctx);

        assert_eq!(game.phase(), RoulettePhase::Stopped);
        assert_eq!(game.stop_difficulty, Difficulty::Picante);
    }

    #[test]
    fn test_every_segment_reachable() {
        let mut landed = Vec::new();
        for seed in 0..100 {
            let (roster, mut pool, mut rng) = fixture(seed);
            let mut game = RouletteGame::new(&roulette_card(), PlayerId::new(0), 1);
            let mut ctx = MinigameCtx {
                roster: &roster,
                pool: &mut pool,
                rng: &mut rng,
            };
            landed.push(land(&mut game, &mut ctx));
        }

        for segment in WHEEL {
            assert!(landed.contains(&segment), "{:?} never landed", segment);
        }
    }

    #[test]
    fn test_everyone_segment_hits_all_players() {
        // Seek a seed that lands on Everyone
        for seed in 0..100 {
            let (roster, mut pool, mut rng) = fixture(seed);
            let mut game = RouletteGame::new(&roulette_card(), PlayerId::new(0), 1);
            let mut ctx = MinigameCtx {
                roster: &roster,
                pool: &mut pool,
                rng: &mut rng,
            };

            if let Segment::Everyone(n) = land(&mut game, &mut ctx) {
                let status = game.handle(&MinigameAction::Acknowledge, &mut ctx);
                match status {
                    MinigameStatus::RoundComplete(outcome) => {
                        assert_eq!(outcome.penalties.len(), 3);
                        assert!(outcome.penalties.iter().all(|(_, d)| *d == n as i32));
                        return;
                    }
                    other => panic!("expected RoundComplete, got {:?}", other),
                }
            }
        }
        panic!("Everyone segment never landed in 100 seeds");
    }

    #[test]
    fn test_rule_segment_carries_constraint() {
        for seed in 0..200 {
            let (roster, mut pool, mut rng) = fixture(seed);
            let mut game = RouletteGame::new(&roulette_card(), PlayerId::new(0), 1);
            let mut ctx = MinigameCtx {
                roster: &roster,
                pool: &mut pool,
                rng: &mut rng,
            };

            if land(&mut game, &mut ctx) == Segment::Rule {
                let status = game.handle(&MinigameAction::Acknowledge, &mut ctx);
                match status {
                    MinigameStatus::RoundComplete(outcome) => {
                        let constraint = outcome.constraint.expect("rule constraint");
                        assert!(constraint.rounds > 0);
                        assert!(outcome.penalties.is_empty());
                        return;
                    }
                    other => panic!("expected RoundComplete, got {:?}", other),
                }
            }
        }
        panic!("Rule segment never landed in 200 seeds");
    }

    #[test]
    fn test_choose_segment_requires_target() {
        for seed in 0..200 {
            let (roster, mut pool, mut rng) = fixture(seed);
            let mut game = RouletteGame::new(&roulette_card(), PlayerId::new(0), 1);
            let mut ctx = MinigameCtx {
                roster: &roster,
                pool: &mut pool,
                rng: &mut rng,
            };

            if let Segment::Choose(n) = land(&mut game, &mut ctx) {
                // Acknowledge alone does not resolve it
                assert_eq!(
                    game.handle(&MinigameAction::Acknowledge, &mut ctx),
                    MinigameStatus::InProgress
                );

                let status =
                    game.handle(&MinigameAction::ChooseTarget(PlayerId::new(2)), &mut ctx);
                match status {
                    MinigameStatus::RoundComplete(outcome) => {
                        assert_eq!(
                            outcome.penalties.as_slice(),
                            &[(PlayerId::new(2), n as i32)]
                        );
                        return;
                    }
                    other => panic!("expected RoundComplete, got {:?}", other),
                }
            }
        }
        panic!("Choose segment never landed in 200 seeds");
    }
}
