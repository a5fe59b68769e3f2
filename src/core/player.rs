//! Player identification and roster management.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 2-255 players.
//!
//! ## PlayerMap
//!
//! Efficient per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Roster
//!
//! The session's player list: unique names plus per-player drink
//! counters. Created at session start, destroyed with the session.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::SessionError;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// The session's player roster: names and drink counters.
///
/// Names are unique within a session. Drink counters start at zero and
/// are mutated only through [`Roster::add_drinks`], which saturates at
/// zero so an explicit undo can never take a counter negative.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
    drinks: PlayerMap<u32>,
}

impl Roster {
    /// Build a roster from player names.
    ///
    /// Fails with [`SessionError::InsufficientPlayers`] for fewer than
    /// two names, [`SessionError::TooManyPlayers`] above the `PlayerId`
    /// cap, and [`SessionError::DuplicatePlayer`] on repeated names.
    pub fn new(names: Vec<String>) -> Result<Self, SessionError> {
        if names.len() < 2 {
            return Err(SessionError::InsufficientPlayers(names.len()));
        }
        if names.len() > 255 {
            return Err(SessionError::TooManyPlayers(names.len()));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].iter().any(|n| n == name) {
                return Err(SessionError::DuplicatePlayer(name.clone()));
            }
        }

        let count = names.len();
        Ok(Self {
            names,
            drinks: PlayerMap::with_value(count, 0),
        })
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.names.len())
    }

    /// Get a player's name.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }

    /// Look up a player ID by name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<PlayerId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| PlayerId(i as u8))
    }

    /// Get a player's drink counter.
    #[must_use]
    pub fn drinks(&self, player: PlayerId) -> u32 {
        self.drinks[player]
    }

    /// Apply a signed drink delta to a player, saturating at zero.
    pub fn add_drinks(&mut self, player: PlayerId, delta: i32) {
        let current = self.drinks[player];
        self.drinks[player] = if delta >= 0 {
            current.saturating_add(delta as u32)
        } else {
            current.saturating_sub(delta.unsigned_abs())
        };
    }

    /// The player after `player` in roster order, wrapping around.
    #[must_use]
    pub fn next_after(&self, player: PlayerId) -> PlayerId {
        PlayerId(((player.index() + 1) % self.names.len()) as u8)
    }
}
