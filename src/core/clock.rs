//! Tick-driven countdowns.
//!
//! All time-driven behavior in the engine flows through a single tick
//! source: the caller invokes `Session::tick` once per second of wall
//! clock (or as fast as it likes in tests), and every active countdown
//! decrements by exactly one per tick. There is no wall-clock access
//! anywhere in the engine, which makes every timed transition
//! reproducible under a virtual clock.

use serde::{Deserialize, Serialize};

/// Result of advancing a countdown by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Still counting down; `remaining` ticks left.
    Running { remaining: u32 },
    /// This tick brought the countdown to zero. Reported exactly once.
    Expired,
    /// The countdown had already expired before this tick.
    Idle,
}

/// A countdown decremented by an external tick source.
///
/// ## Example
///
/// ```
/// use brindis::core::{Countdown, Tick};
///
/// let mut fuse = Countdown::new(2);
/// assert_eq!(fuse.tick(), Tick::Running { remaining: 1 });
/// assert_eq!(fuse.tick(), Tick::Expired);
/// assert_eq!(fuse.tick(), Tick::Idle);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    /// Create a countdown with `ticks` ticks until expiry.
    #[must_use]
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Ticks left until expiry.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown has reached zero.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Advance by one tick.
    ///
    /// Returns `Tick::Expired` exactly once, on the tick that reaches
    /// zero. Later ticks return `Tick::Idle` so callers never fire a
    /// resolution transition twice.
    pub fn tick(&mut self) -> Tick {
        if self.remaining == 0 {
            return Tick::Idle;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            Tick::Expired
        } else {
            Tick::Running {
                remaining: self.remaining,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_decrements_by_one() {
        let mut c = Countdown::new(5);

        for expected in (1..5).rev() {
            assert_eq!(c.tick(), Tick::Running { remaining: expected });
            assert_eq!(c.remaining(), expected);
        }
    }

    #[test]
    fn test_countdown_expires_exactly_once() {
        let mut c = Countdown::new(3);

        let mut expiries = 0;
        for _ in 0..10 {
            if c.tick() == Tick::Expired {
                expiries += 1;
            }
        }

        assert_eq!(expiries, 1);
        assert!(c.is_expired());
    }

    #[test]
    fn test_zero_countdown_never_expires() {
        // A countdown created at zero was never armed; it must not fire.
        let mut c = Countdown::new(0);
        assert_eq!(c.tick(), Tick::Idle);
        assert_eq!(c.tick(), Tick::Idle);
    }

    #[test]
    fn test_countdown_serde() {
        let c = Countdown::new(7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Countdown = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
