//! Deck generation.
//!
//! The deck is built once, at session start: `card_count` independent
//! uniform draws over the card kinds, each with a difficulty sampled
//! from the mode's weights and content pulled from the matching table.
//! Cards are immutable after this point; the session consumes them
//! through its cursor.

use crate::cards::{Card, CardId, CardKind, Difficulty, GameMode};
use crate::content::{ContentPool, PromptTable};
use crate::core::SessionRng;

/// Builder that generates a session deck.
///
/// ## Example
///
/// ```
/// use brindis::cards::{DeckBuilder, GameMode};
/// use brindis::content::ContentPool;
/// use brindis::core::SessionRng;
///
/// let mut pool = ContentPool::new();
/// let mut rng = SessionRng::new(42);
/// let deck = DeckBuilder::new(GameMode::Clasico, 20).build(&mut pool, &mut rng);
/// assert_eq!(deck.len(), 20);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder {
    mode: GameMode,
    card_count: usize,
}

impl DeckBuilder {
    /// Create a builder for `card_count` cards in the given mode.
    #[must_use]
    pub fn new(mode: GameMode, card_count: usize) -> Self {
        Self { mode, card_count }
    }

    /// Generate the deck.
    ///
    /// Kinds are drawn uniformly with replacement; content within a
    /// table is drawn without replacement via the pool.
    pub fn build(self, pool: &mut ContentPool, rng: &mut SessionRng) -> Vec<Card> {
        let weights = self.mode.difficulty_weights();

        (0..self.card_count)
            .map(|i| {
                let kind = CardKind::ALL[rng.gen_range_usize(0..CardKind::ALL.len())];
                let difficulty = Self::sample_difficulty(&weights, rng);
                self.make_card(CardId::new(i as u32), kind, difficulty, pool, rng)
            })
            .collect()
    }

    fn sample_difficulty(weights: &[f32; 4], rng: &mut SessionRng) -> Difficulty {
        const TIERS: [Difficulty; 4] = [
            Difficulty::Suave,
            Difficulty::Medio,
            Difficulty::Alto,
            Difficulty::Picante,
        ];
        // Weights are mode constants and never all zero.
        TIERS[rng.choose_weighted(weights).unwrap()]
    }

    fn make_card(
        self,
        id: CardId,
        kind: CardKind,
        difficulty: Difficulty,
        pool: &mut ContentPool,
        rng: &mut SessionRng,
    ) -> Card {
        let (content, difficulty) = match PromptTable::for_kind(kind) {
            Some(table) => {
                let entry = pool.draw(table, difficulty, rng);
                // The entry actually drawn decides the card's tier; the
                // pool may have fallen back to a different one.
                (entry.text.to_string(), entry.difficulty)
            }
            // Minigame kinds draw their content during play.
            None => (Self::intro_text(kind).to_string(), difficulty),
        };

        Card {
            id,
            kind,
            difficulty,
            penalty: difficulty.base_penalty(),
            time_limit: kind.default_time_limit(),
            content,
        }
    }

    fn intro_text(kind: CardKind) -> &'static str {
        match kind {
            CardKind::Bomba => "¡Pasa la bomba antes de que explote!",
            CardKind::Botella => "Gira la botella: a quien apunte, le toca",
            CardKind::Ruleta => "Gira la ruleta y acata tu destino",
            CardKind::Trivia => "Pregunta de cultura: responde antes de que acabe el tiempo",
            _ => "",
        }
    }
}
