//! Card kinds, difficulties, and the cards themselves.
//!
//! A session's deck is a batch of immutable cards generated up front.
//! Each card carries the prompt text, a base drink penalty, and (for the
//! timed kinds) a time limit in ticks. Kinds are a closed enum so the
//! orchestrator's dispatch is checked exhaustively at compile time.

use serde::{Deserialize, Serialize};

/// Card identifier, unique within a session's deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Every kind of card a deck can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    /// "Never have I ever" statements, tallied over several rounds.
    YoNunca,
    /// Truth-or-dare prompt.
    VerdadReto,
    /// Act out a word against the clock.
    Charadas,
    /// "Would you rather" prompt.
    QuePrefieres,
    /// "Who is most likely to" prompt.
    QuienProbable,
    /// Trivia question with a time limit.
    Trivia,
    /// Quick-action prompt (first to comply is safe).
    AccionRapida,
    /// Pass-the-bomb round with a fuse.
    Bomba,
    /// Spin-the-bottle challenge.
    Botella,
    /// Penalty roulette wheel.
    Ruleta,
}

impl CardKind {
    /// All card kinds, in deck-generation order.
    pub const ALL: [CardKind; 10] = [
        CardKind::YoNunca,
        CardKind::VerdadReto,
        CardKind::Charadas,
        CardKind::QuePrefieres,
        CardKind::QuienProbable,
        CardKind::Trivia,
        CardKind::AccionRapida,
        CardKind::Bomba,
        CardKind::Botella,
        CardKind::Ruleta,
    ];

    /// Whether this kind opens a dedicated minigame overlay.
    ///
    /// Kinds without one are plain prompts: the orchestrator shows the
    /// card text and advances immediately.
    #[must_use]
    pub fn has_minigame(self) -> bool {
        matches!(
            self,
            CardKind::YoNunca
                | CardKind::Charadas
                | CardKind::Trivia
                | CardKind::Bomba
                | CardKind::Botella
                | CardKind::Ruleta
        )
    }

    /// Default time limit in ticks for timed kinds.
    #[must_use]
    pub fn default_time_limit(self) -> Option<u32> {
        match self {
            CardKind::Bomba => Some(10),
            CardKind::Trivia => Some(15),
            CardKind::Charadas => Some(60),
            CardKind::AccionRapida => Some(5),
            _ => None,
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::YoNunca => "yo-nunca",
            CardKind::VerdadReto => "verdad-reto",
            CardKind::Charadas => "charadas",
            CardKind::QuePrefieres => "que-prefieres",
            CardKind::QuienProbable => "quien-probable",
            CardKind::Trivia => "trivia",
            CardKind::AccionRapida => "accion-rapida",
            CardKind::Bomba => "bomba",
            CardKind::Botella => "botella",
            CardKind::Ruleta => "ruleta",
        };
        write!(f, "{}", name)
    }
}

/// Content difficulty tiers, mildest to spiciest.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Suave,
    Medio,
    Alto,
    Picante,
}

impl Difficulty {
    /// Base drink penalty for content of this difficulty.
    #[must_use]
    pub fn base_penalty(self) -> u32 {
        match self {
            Difficulty::Suave => 1,
            Difficulty::Medio => 2,
            Difficulty::Alto => 3,
            Difficulty::Picante => 5,
        }
    }

    /// Difficulty derived from how much of a countdown is left.
    ///
    /// Stopping a wheel early (most time remaining) lands in the spicy
    /// tiers; letting it run down lands in the mild ones.
    #[must_use]
    pub fn from_remaining(remaining: u32, total: u32) -> Self {
        if total == 0 {
            return Difficulty::Suave;
        }
        let quarter = (remaining * 4) / total;
        match quarter {
            0 => Difficulty::Suave,
            1 => Difficulty::Medio,
            2 => Difficulty::Alto,
            _ => Difficulty::Picante,
        }
    }
}

/// Game mode chosen at session start; selects the difficulty weights
/// used when generating the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Clasico,
    Intenso,
    Picante,
}

impl GameMode {
    /// Weights over [Suave, Medio, Alto, Picante] for deck generation.
    #[must_use]
    pub fn difficulty_weights(self) -> [f32; 4] {
        match self {
            GameMode::Clasico => [0.40, 0.35, 0.20, 0.05],
            GameMode::Intenso => [0.15, 0.35, 0.35, 0.15],
            GameMode::Picante => [0.05, 0.20, 0.35, 0.40],
        }
    }
}

/// An immutable card in the session deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within the deck.
    pub id: CardId,
    /// What this card is.
    pub kind: CardKind,
    /// Difficulty tier the content was drawn at.
    pub difficulty: Difficulty,
    /// Prompt text shown to the players.
    pub content: String,
    /// Base drink penalty for failing/refusing this card.
    pub penalty: u32,
    /// Countdown length in ticks, for timed kinds.
    pub time_limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_minigame_split() {
        assert!(CardKind::Bomba.has_minigame());
        assert!(CardKind::YoNunca.has_minigame());
        assert!(!CardKind::VerdadReto.has_minigame());
        assert!(!CardKind::QuienProbable.has_minigame());
    }

    #[test]
    fn test_all_kinds_listed_once() {
        for kind in CardKind::ALL {
            assert_eq!(
                CardKind::ALL.iter().filter(|k| **k == kind).count(),
                1,
                "{} appears more than once",
                kind
            );
        }
    }

    #[test]
    fn test_base_penalty_monotonic() {
        assert!(Difficulty::Suave.base_penalty() < Difficulty::Medio.base_penalty());
        assert!(Difficulty::Medio.base_penalty() < Difficulty::Alto.base_penalty());
        assert!(Difficulty::Alto.base_penalty() < Difficulty::Picante.base_penalty());
    }

    #[test]
    fn test_from_remaining_tiers() {
        assert_eq!(Difficulty::from_remaining(0, 12), Difficulty::Suave);
        assert_eq!(Difficulty::from_remaining(4, 12), Difficulty::Medio);
        assert_eq!(Difficulty::from_remaining(7, 12), Difficulty::Alto);
        assert_eq!(Difficulty::from_remaining(12, 12), Difficulty::Picante);
        // Degenerate total
        assert_eq!(Difficulty::from_remaining(0, 0), Difficulty::Suave);
    }

    #[test]
    fn test_kind_serde_kebab_case() {
        let json = serde_json::to_string(&CardKind::YoNunca).unwrap();
        assert_eq!(json, "\"yo-nunca\"");

        let back: CardKind = serde_json::from_str("\"accion-rapida\"").unwrap();
        assert_eq!(back, CardKind::AccionRapida);
    }

    #[test]
    fn test_card_serde_roundtrip() {
        let card = Card {
            id: CardId::new(3),
            kind: CardKind::Bomba,
            difficulty: Difficulty::Alto,
            content: "¡Pasa la bomba!".to_string(),
            penalty: 3,
            time_limit: Some(10),
        };

        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
