//! Roll generation.
//!
//! The scheduler doesn't care how pins fall. It asks a `RollSource` for
//! the balls of a frame and lets the frame validate them:
//!
//! - `RandomRolls`: seeded uniform pin counts
//! - `PerfectRolls`: every ball a strike
//! - `ScriptedRolls`: a fixed list of balls, for tests and replays
//!
//! ## Contexts
//!
//! A `Regular` request wants a frame's opening: `[10]` or two balls at a
//! fresh rack. A `Bonus` request wants the tenth frame's bonus balls,
//! thrown at the rack the opening left behind.

mod random;
mod scripted;

pub use random::RandomRolls;
pub use scripted::{PerfectRolls, ScriptedRolls};

use serde::{Deserialize, Serialize};

use crate::core::{FrameId, Result};
use crate::frame::{Rack, Rolls};

/// What kind of balls are being asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollContext {
    /// The frame's opening balls at a fresh rack.
    Regular,
    /// Tenth-frame bonus balls.
    Bonus {
        /// How many balls are owed (1 or 2).
        balls: usize,
        /// The rack the first bonus ball is thrown at.
        rack: Rack,
    },
}

impl RollContext {
    #[must_use]
    pub fn is_bonus(&self) -> bool {
        matches!(self, RollContext::Bonus { .. })
    }
}

/// Source of pin counts for the scheduler.
///
/// Implementations should honor the rack rules; whatever they return is
/// still checked by `Frame::record`.
pub trait RollSource {
    /// Produce the balls for `frame` in the given context.
    fn generate_rolls(&mut self, frame: FrameId, context: RollContext) -> Result<Rolls>;
}

impl<R: RollSource + ?Sized> RollSource for Box<R> {
    fn generate_rolls(&mut self, frame: FrameId, context: RollContext) -> Result<Rolls> {
        (**self).generate_rolls(frame, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_bonus() {
        assert!(!RollContext::Regular.is_bonus());
        assert!(RollContext::Bonus {
            balls: 1,
            rack: Rack::fresh()
        }
        .is_bonus());
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn RollSource> = Box::new(PerfectRolls);
        let rolls = source.generate_rolls(FrameId::FIRST, RollContext::Regular).unwrap();
        assert_eq!(rolls.as_slice(), &[10]);
    }
}
