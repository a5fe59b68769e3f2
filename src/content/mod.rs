//! Content sampling.
//!
//! `ContentPool` draws prompts without replacement: every item in a
//! table is handed out once before any repeats. When a table (or the
//! subset matching the requested difficulty) is exhausted, the used set
//! for that table resets silently and drawing continues — this is
//! intended behavior, not an error, and it guarantees draws always
//! terminate because the tables are non-empty by construction.

pub mod tables;

use log::debug;
use rustc_hash::FxHashMap;

use crate::cards::{CardKind, Difficulty};
use crate::core::SessionRng;
use tables::{PromptEntry, RuleEntry, TriviaEntry};

/// The prompt tables a pool tracks used-sets for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PromptTable {
    YoNunca,
    VerdadReto,
    Charadas,
    QuePrefieres,
    QuienProbable,
    AccionRapida,
    /// Bomb penalty dares.
    Penalties,
    /// Bottle and roulette challenges.
    Retos,
}

impl PromptTable {
    /// The prompt table backing a card kind, if it has one.
    ///
    /// Trivia has its own structured table and is drawn via
    /// [`ContentPool::draw_trivia`]; the remaining minigame kinds draw
    /// from `Penalties`/`Retos` during play rather than at deck time.
    #[must_use]
    pub fn for_kind(kind: CardKind) -> Option<Self> {
        match kind {
            CardKind::YoNunca => Some(PromptTable::YoNunca),
            CardKind::VerdadReto => Some(PromptTable::VerdadReto),
            CardKind::Charadas => Some(PromptTable::Charadas),
            CardKind::QuePrefieres => Some(PromptTable::QuePrefieres),
            CardKind::QuienProbable => Some(PromptTable::QuienProbable),
            CardKind::AccionRapida => Some(PromptTable::AccionRapida),
            CardKind::Trivia | CardKind::Bomba | CardKind::Botella | CardKind::Ruleta => None,
        }
    }

    fn entries(self) -> &'static [PromptEntry] {
        match self {
            PromptTable::YoNunca => tables::YO_NUNCA,
            PromptTable::VerdadReto => tables::VERDAD_RETO,
            PromptTable::Charadas => tables::CHARADAS,
            PromptTable::QuePrefieres => tables::QUE_PREFIERES,
            PromptTable::QuienProbable => tables::QUIEN_PROBABLE,
            PromptTable::AccionRapida => tables::ACCION_RAPIDA,
            PromptTable::Penalties => tables::PENALTIES,
            PromptTable::Retos => tables::RETOS,
        }
    }
}

/// Sampling-without-replacement state over the static tables.
#[derive(Clone, Debug, Default)]
pub struct ContentPool {
    used: FxHashMap<PromptTable, Vec<usize>>,
    used_trivia: Vec<usize>,
}

impl ContentPool {
    /// Create a fresh pool with nothing used.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a prompt at the requested difficulty.
    ///
    /// Preference order: an unused entry at the exact difficulty, then
    /// any unused entry in the table, then a reset of the table's used
    /// set followed by a re-draw.
    pub fn draw(
        &mut self,
        table: PromptTable,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> &'static PromptEntry {
        let entries = table.entries();
        let used = self.used.entry(table).or_default();

        let index = Self::pick(entries, used, difficulty, rng).unwrap_or_else(|| {
            debug!("content table {:?} exhausted, resetting used set", table);
            used.clear();
            // Non-empty tables make the second pick infallible.
            Self::pick(entries, used, difficulty, rng).unwrap()
        });

        used.push(index);
        &entries[index]
    }

    /// Draw a trivia question at the requested difficulty.
    pub fn draw_trivia(
        &mut self,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> &'static TriviaEntry {
        let entries = tables::TRIVIA;

        let exact: Vec<usize> = (0..entries.len())
            .filter(|i| !self.used_trivia.contains(i) && entries[*i].difficulty == difficulty)
            .collect();
        let any: Vec<usize> = (0..entries.len())
            .filter(|i| !self.used_trivia.contains(i))
            .collect();

        let candidates = if !exact.is_empty() {
            exact
        } else if !any.is_empty() {
            any
        } else {
            debug!("trivia table exhausted, resetting used set");
            self.used_trivia.clear();
            (0..entries.len()).collect()
        };

        let index = *rng.choose(&candidates).unwrap();
        self.used_trivia.push(index);
        &entries[index]
    }

    /// Draw a table rule. Rules are few; they repeat freely.
    pub fn draw_rule(&mut self, rng: &mut SessionRng) -> &'static RuleEntry {
        rng.choose(tables::REGLAS).unwrap()
    }

    fn pick(
        entries: &'static [PromptEntry],
        used: &[usize],
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> Option<usize> {
        let exact: Vec<usize> = (0..entries.len())
            .filter(|i| !used.contains(i) && entries[*i].difficulty == difficulty)
            .collect();
        if let Some(&index) = rng.choose(&exact) {
            return Some(index);
        }

        let any: Vec<usize> = (0..entries.len()).filter(|i| !used.contains(i)).collect();
        rng.choose(&any).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_prefers_requested_difficulty() {
        let mut pool = ContentPool::new();
        let mut rng = SessionRng::new(42);

        let entry = pool.draw(PromptTable::YoNunca, Difficulty::Suave, &mut rng);
        assert_eq!(entry.difficulty, Difficulty::Suave);
    }

    #[test]
    fn test_no_repeats_before_reset() {
        let mut pool = ContentPool::new();
        let mut rng = SessionRng::new(42);

        let total = tables::RETOS.len();
        let mut seen = Vec::new();
        for _ in 0..total {
            let entry = pool.draw(PromptTable::Retos, Difficulty::Medio, &mut rng);
            assert!(
                !seen.contains(&entry.text),
                "repeat before exhausting the table: {}",
                entry.text
            );
            seen.push(entry.text);
        }
    }

    #[test]
    fn test_every_entry_reachable_before_reset() {
        let mut pool = ContentPool::new();
        let mut rng = SessionRng::new(7);

        let total = tables::PENALTIES.len();
        let mut seen = Vec::new();
        for _ in 0..total {
            seen.push(pool.draw(PromptTable::Penalties, Difficulty::Alto, &mut rng).text);
        }

        for entry in tables::PENALTIES {
            assert!(seen.contains(&entry.text), "never drawn: {}", entry.text);
        }
    }

    #[test]
    fn test_reset_after_exhaustion() {
        let mut pool = ContentPool::new();
        let mut rng = SessionRng::new(42);

        // Drain the table twice over; draws must keep succeeding.
        let total = tables::QUE_PREFIERES.len();
        for _ in 0..(total * 2 + 1) {
            pool.draw(PromptTable::QuePrefieres, Difficulty::Suave, &mut rng);
        }
    }

    #[test]
    fn test_trivia_no_repeats_before_reset() {
        let mut pool = ContentPool::new();
        let mut rng = SessionRng::new(42);

        let total = tables::TRIVIA.len();
        let mut seen = Vec::new();
        for _ in 0..total {
            let entry = pool.draw_trivia(Difficulty::Medio, &mut rng);
            assert!(!seen.contains(&entry.question));
            seen.push(entry.question);
        }

        // One more: the reset kicks in
        pool.draw_trivia(Difficulty::Medio, &mut rng);
    }

    #[test]
    fn test_rule_draw() {
        let mut pool = ContentPool::new();
        let mut rng = SessionRng::new(42);

        let rule = pool.draw_rule(&mut rng);
        assert!(rule.rounds > 0);
    }
}
