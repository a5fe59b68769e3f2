//! Conditional penalties ("table rules").
//!
//! Rules like "end every sentence with X" stay active for a fixed
//! number of rounds. The orchestrator decrements them once per consumed
//! card and drops them at zero. They are informational: enforcement is
//! up to the humans at the table.

use crate::minigames::ConstraintSpec;

/// A rule currently in effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveConstraint {
    pub spec: ConstraintSpec,
    pub rounds_left: u32,
}

/// The set of rules currently in effect.
#[derive(Clone, Debug, Default)]
pub struct ConstraintList {
    items: Vec<ActiveConstraint>,
}

impl ConstraintList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a new rule into effect.
    pub fn add(&mut self, spec: ConstraintSpec) {
        let rounds_left = spec.rounds;
        self.items.push(ActiveConstraint { spec, rounds_left });
    }

    /// Rules currently active.
    #[must_use]
    pub fn active(&self) -> &[ActiveConstraint] {
        &self.items
    }

    /// Decrement every rule by one round; return the ones that expired.
    pub fn advance_round(&mut self) -> Vec<ConstraintSpec> {
        let mut expired = Vec::new();
        self.items.retain_mut(|item| {
            item.rounds_left -= 1;
            if item.rounds_left == 0 {
                expired.push(item.spec.clone());
                false
            } else {
                true
            }
        });
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(text: &str, rounds: u32) -> ConstraintSpec {
        ConstraintSpec {
            text: text.to_string(),
            player: None,
            rounds,
        }
    }

    #[test]
    fn test_expires_after_rounds() {
        let mut list = ConstraintList::new();
        list.add(rule("sin nombres propios", 2));

        assert!(list.advance_round().is_empty());
        assert_eq!(list.active().len(), 1);
        assert_eq!(list.active()[0].rounds_left, 1);

        let expired = list.advance_round();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].text, "sin nombres propios");
        assert!(list.active().is_empty());
    }

    #[test]
    fn test_multiple_rules_expire_independently() {
        let mut list = ConstraintList::new();
        list.add(rule("regla corta", 1));
        list.add(rule("regla larga", 3));

        let expired = list.advance_round();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].text, "regla corta");
        assert_eq!(list.active().len(), 1);
    }
}
