//! Core types: players, RNG, countdowns, errors.

pub mod clock;
pub mod error;
pub mod player;
pub mod rng;

pub use clock::{Countdown, Tick};
pub use error::SessionError;
pub use player::{PlayerId, PlayerMap, Roster};
pub use rng::SessionRng;
