//! Minigame state machines.
//!
//! Each minigame is an independent finite-state machine: `Waiting`
//! until an explicit start action, an active phase ended by a countdown
//! or a randomized selection, then a per-round result. Every round
//! yields exactly one [`RoundOutcome`]; after a fixed display delay the
//! machine resets for another round or reports [`MinigameStatus::Finished`]
//! and the orchestrator takes back control.
//!
//! Dispatch is the [`ActiveMinigame`] sum type, so a card kind without a
//! handler is a compile error, not a silent fallthrough.

pub mod bomb;
pub mod bottle;
pub mod charades;
pub mod roulette;
pub mod trivia;
pub mod yo_nunca;

use smallvec::SmallVec;

use crate::cards::{Card, CardKind};
use crate::content::ContentPool;
use crate::core::{PlayerId, Roster, SessionRng};

pub use bomb::{BombGame, BombPhase};
pub use bottle::{BottleGame, BottlePhase};
pub use charades::{CharadesGame, CharadesPhase};
pub use roulette::{RouletteGame, RoulettePhase, Segment};
pub use trivia::{TriviaGame, TriviaPhase};
pub use yo_nunca::{YoNuncaGame, YoNuncaPhase};

/// Ticks a result screen stays up before the machine moves on.
pub const RESULT_DELAY_TICKS: u32 = 3;

/// Borrowed session resources a minigame needs while running.
pub struct MinigameCtx<'a> {
    pub roster: &'a Roster,
    pub pool: &'a mut ContentPool,
    pub rng: &'a mut SessionRng,
}

/// A conditional penalty produced by a round (e.g. a table rule).
///
/// Informational only: players self-police; the orchestrator just
/// counts rounds until it expires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintSpec {
    /// The rule text shown to the table.
    pub text: String,
    /// The player it applies to, or `None` for everyone.
    pub player: Option<PlayerId>,
    /// How many completed rounds it stays active.
    pub rounds: u32,
}

/// Drink deltas and constraints from one completed round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundOutcome {
    /// `(player, drinks)` tuples to apply. Positive values only in
    /// normal flows.
    pub penalties: SmallVec<[(PlayerId, i32); 4]>,
    /// A new table rule, if the round dealt one.
    pub constraint: Option<ConstraintSpec>,
}

impl RoundOutcome {
    /// A round with no drinks.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A single player drinks.
    #[must_use]
    pub fn single(player: PlayerId, drinks: i32) -> Self {
        let mut penalties = SmallVec::new();
        penalties.push((player, drinks));
        Self {
            penalties,
            constraint: None,
        }
    }

    /// Every player in the roster drinks, except the listed ones.
    #[must_use]
    pub fn group_except(roster: &Roster, exempt: &[PlayerId], drinks: i32) -> Self {
        let penalties = roster
            .player_ids()
            .filter(|p| !exempt.contains(p))
            .map(|p| (p, drinks))
            .collect();
        Self {
            penalties,
            constraint: None,
        }
    }

    /// Attach a constraint to this outcome.
    #[must_use]
    pub fn with_constraint(mut self, constraint: ConstraintSpec) -> Self {
        self.constraint = Some(constraint);
        self
    }
}

/// What a minigame reports after handling an input or a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MinigameStatus {
    /// Nothing to apply yet.
    InProgress,
    /// A round just resolved; apply the outcome. The machine is now in
    /// its result-display phase.
    RoundComplete(RoundOutcome),
    /// All rounds done; the orchestrator should close the overlay and
    /// advance the cursor.
    Finished,
}

/// User inputs a minigame can receive.
///
/// Machines ignore inputs that make no sense in their current phase;
/// the UI cannot race the engine into a bad state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MinigameAction {
    /// Arm the bomb / spin the bottle or wheel / reveal the question.
    Start,
    /// Hand the bomb to the next player.
    PassBomb,
    /// Stop the roulette wheel early.
    StopWheel,
    /// Answer a trivia question by option index.
    Answer(usize),
    /// Report which players drank on a yo-nunca statement.
    RecordDrinkers(Vec<PlayerId>),
    /// The charades word was guessed in time.
    Guessed,
    /// Accept or refuse a challenge.
    Resolve { accepted: bool },
    /// Pick who drinks, for segments that let the spinner choose.
    ChooseTarget(PlayerId),
    /// Move past an informational phase (explosion, reveal, tally).
    Acknowledge,
}

/// The open minigame, tagged by kind.
#[derive(Clone, Debug)]
pub enum ActiveMinigame {
    Bomb(BombGame),
    Bottle(BottleGame),
    Roulette(RouletteGame),
    Trivia(TriviaGame),
    YoNunca(YoNuncaGame),
    Charades(CharadesGame),
}

impl ActiveMinigame {
    /// Open the minigame for a card, or `None` for plain prompt kinds.
    ///
    /// `current` is the player whose turn it is when the card comes up.
    #[must_use]
    pub fn open(card: &Card, current: PlayerId, roster: &Roster) -> Option<Self> {
        match card.kind {
            CardKind::Bomba => Some(ActiveMinigame::Bomb(BombGame::new(card, current, 1))),
            CardKind::Botella => Some(ActiveMinigame::Bottle(BottleGame::new(card, current, 1))),
            CardKind::Ruleta => Some(ActiveMinigame::Roulette(RouletteGame::new(card, current, 1))),
            CardKind::Trivia => Some(ActiveMinigame::Trivia(TriviaGame::new(card, current, 1))),
            CardKind::YoNunca => Some(ActiveMinigame::YoNunca(YoNuncaGame::new(card, roster))),
            CardKind::Charadas => Some(ActiveMinigame::Charades(CharadesGame::new(card, current, 1))),
            CardKind::VerdadReto
            | CardKind::QuePrefieres
            | CardKind::QuienProbable
            | CardKind::AccionRapida => None,
        }
    }

    /// The card kind this minigame serves.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            ActiveMinigame::Bomb(_) => CardKind::Bomba,
            ActiveMinigame::Bottle(_) => CardKind::Botella,
            ActiveMinigame::Roulette(_) => CardKind::Ruleta,
            ActiveMinigame::Trivia(_) => CardKind::Trivia,
            ActiveMinigame::YoNunca(_) => CardKind::YoNunca,
            ActiveMinigame::Charades(_) => CardKind::Charadas,
        }
    }

    /// Route a user input to the machine.
    pub fn handle(&mut self, action: &MinigameAction, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match self {
            ActiveMinigame::Bomb(g) => g.handle(action, ctx),
            ActiveMinigame::Bottle(g) => g.handle(action, ctx),
            ActiveMinigame::Roulette(g) => g.handle(action, ctx),
            ActiveMinigame::Trivia(g) => g.handle(action, ctx),
            ActiveMinigame::YoNunca(g) => g.handle(action, ctx),
            ActiveMinigame::Charades(g) => g.handle(action, ctx),
        }
    }

    /// Advance the machine by one tick.
    pub fn tick(&mut self, ctx: &mut MinigameCtx<'_>) -> MinigameStatus {
        match self {
            ActiveMinigame::Bomb(g) => g.tick(ctx),
            ActiveMinigame::Bottle(g) => g.tick(ctx),
            ActiveMinigame::Roulette(g) => g.tick(ctx),
            ActiveMinigame::Trivia(g) => g.tick(ctx),
            ActiveMinigame::YoNunca(g) => g.tick(ctx),
            ActiveMinigame::Charades(g) => g.tick(ctx),
        }
    }
}
