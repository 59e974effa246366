//! Deterministic roll sources.

use std::collections::VecDeque;

use super::{RollContext, RollSource};
use crate::core::{BowlingError, FrameId, Result, MAX_PINS};
use crate::frame::Rolls;

/// Every ball is a strike.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerfectRolls;

impl RollSource for PerfectRolls {
    fn generate_rolls(&mut self, _frame: FrameId, context: RollContext) -> Result<Rolls> {
        let balls = match context {
            RollContext::Regular => 1,
            RollContext::Bonus { balls, .. } => balls,
        };
        Ok(std::iter::repeat(MAX_PINS).take(balls).collect())
    }
}

/// Replays a fixed list of balls in order.
///
/// A regular request takes one ball if it is a strike and two
/// otherwise; a bonus request takes as many balls as are owed. The
/// script is not checked here, the frame rejects impossible rolls.
///
/// ```
/// use rust_bowling::core::FrameId;
/// use rust_bowling::rolls::{RollContext, RollSource, ScriptedRolls};
///
/// let mut script = ScriptedRolls::new([10, 4, 6]);
/// let strike = script.generate_rolls(FrameId::FIRST, RollContext::Regular).unwrap();
/// let spare = script.generate_rolls(FrameId::new(2), RollContext::Regular).unwrap();
/// assert_eq!(strike.as_slice(), &[10]);
/// assert_eq!(spare.as_slice(), &[4, 6]);
/// assert!(script.is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    balls: VecDeque<u8>,
}

impl ScriptedRolls {
    pub fn new(balls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            balls: balls.into_iter().collect(),
        }
    }

    /// Balls left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.balls.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.balls.is_empty()
    }

    fn next_ball(&mut self, frame: FrameId) -> Result<u8> {
        self.balls
            .pop_front()
            .ok_or(BowlingError::RollSourceExhausted { frame })
    }
}

impl RollSource for ScriptedRolls {
    fn generate_rolls(&mut self, frame: FrameId, context: RollContext) -> Result<Rolls> {
        let mut rolls = Rolls::new();
        match context {
            RollContext::Regular => {
                let first = self.next_ball(frame)?;
                rolls.push(first);
                if first != MAX_PINS {
                    rolls.push(self.next_ball(frame)?);
                }
            }
            RollContext::Bonus { balls, .. } => {
                for _ in 0..balls {
                    rolls.push(self.next_ball(frame)?);
                }
            }
        }
        Ok(rolls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Rack;

    #[test]
    fn test_perfect_rolls() {
        let mut source = PerfectRolls;
        let regular = source.generate_rolls(FrameId::TENTH, RollContext::Regular).unwrap();
        assert_eq!(regular.as_slice(), &[10]);

        let bonus = source
            .generate_rolls(
                FrameId::TENTH,
                RollContext::Bonus {
                    balls: 2,
                    rack: Rack::fresh(),
                },
            )
            .unwrap();
        assert_eq!(bonus.as_slice(), &[10, 10]);
    }

    #[test]
    fn test_scripted_bonus() {
        let mut script = ScriptedRolls::new([7, 3, 9]);
        let opening = script.generate_rolls(FrameId::TENTH, RollContext::Regular).unwrap();
        assert_eq!(opening.as_slice(), &[7, 3]);

        let bonus = script
            .generate_rolls(
                FrameId::TENTH,
                RollContext::Bonus {
                    balls: 1,
                    rack: Rack::fresh(),
                },
            )
            .unwrap();
        assert_eq!(bonus.as_slice(), &[9]);
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    fn test_scripted_exhausted() {
        let mut script = ScriptedRolls::new([4]);
        assert_eq!(
            script.generate_rolls(FrameId::new(6), RollContext::Regular),
            Err(BowlingError::RollSourceExhausted { frame: FrameId::new(6) })
        );
    }
}
