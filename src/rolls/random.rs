//! Seeded random pin counts.

use super::{RollContext, RollSource};
use crate::core::{FrameId, GameRng, Result, MAX_PINS};
use crate::frame::{Rack, Rolls};

/// Uniform random rolls from a seeded `GameRng`.
///
/// Each ball knocks down a uniform count of the pins still standing, so
/// a first ball is uniform in 0-10 and a second ball in 0 to whatever is
/// left.
#[derive(Clone, Debug)]
pub struct RandomRolls {
    rng: GameRng,
}

impl RandomRolls {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    fn throw(&mut self, rack: &mut Rack) -> u8 {
        let pins = self.rng.gen_pins(rack.standing());
        // gen_pins never exceeds the pins standing
        let _ = rack.knock(pins);
        pins
    }
}

impl RollSource for RandomRolls {
    fn generate_rolls(&mut self, _frame: FrameId, context: RollContext) -> Result<Rolls> {
        let mut rolls = Rolls::new();
        match context {
            RollContext::Regular => {
                let mut rack = Rack::fresh();
                let first = self.throw(&mut rack);
                rolls.push(first);
                if first < MAX_PINS {
                    rolls.push(self.throw(&mut rack));
                }
            }
            RollContext::Bonus { balls, mut rack } => {
                for _ in 0..balls {
                    rolls.push(self.throw(&mut rack));
                }
            }
        }
        Ok(rolls)
    }
}
