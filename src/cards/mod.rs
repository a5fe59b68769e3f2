//! Cards and deck generation.

pub mod card;
pub mod deck;

pub use card::{Card, CardId, CardKind, Difficulty, GameMode};
pub use deck::DeckBuilder;
