//! A single frame and the rack rules its rolls must obey.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{BowlingError, FrameId, Result, RollFault, MAX_PINS};

/// Pin counts for one frame. Never more than three.
pub type Rolls = SmallVec<[u8; 3]>;

/// Strike, spare or open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
}

/// Pins on the lane for the next ball.
///
/// A rack is reset once every pin is down or after its second ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    standing: u8,
    thrown: u8,
}

impl Rack {
    /// A full rack of ten pins.
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            standing: MAX_PINS,
            thrown: 0,
        }
    }

    /// Pins left standing.
    #[must_use]
    pub const fn standing(&self) -> u8 {
        self.standing
    }

    /// No ball has been thrown at this rack yet.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        self.thrown == 0
    }

    /// Throw a ball that knocks down `pins`.
    pub fn knock(&mut self, pins: u8) -> std::result::Result<(), RollFault> {
        if pins > MAX_PINS {
            return Err(RollFault::OutOfRange(pins));
        }
        if pins > self.standing {
            return Err(RollFault::ExceedsPinsStanding {
                pins,
                standing: self.standing,
            });
        }

        self.standing -= pins;
        self.thrown += 1;
        if self.standing == 0 || self.thrown == 2 {
            *self = Self::fresh();
        }
        Ok(())
    }
}

impl Default for Rack {
    fn default() -> Self {
        Self::fresh()
    }
}

/// Balls a finished frame holds, judged from the rolls seen so far.
fn required_balls(id: FrameId, rolls: &[u8]) -> usize {
    let strike = rolls.first() == Some(&MAX_PINS);
    let spare = !strike && rolls.len() >= 2 && rolls[0] + rolls[1] == MAX_PINS;

    match (id.is_tenth(), strike, spare) {
        (false, true, _) => 1,
        (false, false, _) => 2,
        (true, true, _) | (true, _, true) => 3,
        (true, false, false) => 2,
    }
}

/// Balls in a frame before any tenth-frame bonus.
fn opening_balls(id: FrameId, rolls: &[u8]) -> usize {
    if rolls.first() == Some(&MAX_PINS) {
        1
    } else {
        2.min(required_balls(id, rolls))
    }
}

/// Check `rolls` as the rolls of a (possibly unfinished) frame.
fn validate(id: FrameId, rolls: &[u8]) -> std::result::Result<(), RollFault> {
    let mut rack = Rack::fresh();
    for &pins in rolls {
        rack.knock(pins)?;
    }

    let expected = required_balls(id, rolls);
    if rolls.len() > expected {
        return Err(RollFault::WrongRollCount {
            expected,
            got: rolls.len(),
        });
    }

    let opening = opening_balls(id, rolls);
    if rolls.len() < opening {
        return Err(RollFault::WrongRollCount {
            expected: opening,
            got: rolls.len(),
        });
    }
    Ok(())
}

/// One player's rolls for one frame.
///
/// Classification (`is_strike`, `is_spare`, `base_pins`) is derived from
/// the recorded rolls every time, so it can never drift from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    id: FrameId,
    rolls: Rolls,
    resolved_score: Option<u16>,
}

impl Frame {
    /// Create an empty frame.
    #[must_use]
    pub fn new(id: FrameId) -> Self {
        Self {
            id,
            rolls: Rolls::new(),
            resolved_score: None,
        }
    }

    /// Record rolls into this frame.
    ///
    /// Frames 1-9 take one complete set: `[10]` or two balls. The tenth
    /// frame takes its opening (`[10]` or two balls) and then the bonus
    /// balls it is owed, either in one call or two.
    pub fn record(&mut self, rolls: &[u8]) -> Result<()> {
        if self.is_complete() {
            return Err(self.fault(RollFault::FrameAlreadyComplete));
        }

        let mut candidate = self.rolls.clone();
        candidate.extend_from_slice(rolls);
        validate(self.id, &candidate).map_err(|reason| self.fault(reason))?;

        trace!(frame = %self.id, rolls = ?candidate, "rolls recorded");
        self.rolls = candidate;
        Ok(())
    }

    fn fault(&self, reason: RollFault) -> BowlingError {
        BowlingError::InvalidRoll {
            frame: self.id,
            reason,
        }
    }

    #[must_use]
    pub fn id(&self) -> FrameId {
        self.id
    }

    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    #[must_use]
    pub fn first_roll(&self) -> Option<u8> {
        self.rolls.first().copied()
    }

    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.first_roll() == Some(MAX_PINS)
    }

    #[must_use]
    pub fn is_spare(&self) -> bool {
        !self.is_strike() && self.rolls.len() >= 2 && self.rolls[0] + self.rolls[1] == MAX_PINS
    }

    #[must_use]
    pub fn kind(&self) -> FrameKind {
        if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    /// Pins knocked down by this frame's own rolls.
    #[must_use]
    pub fn base_pins(&self) -> u16 {
        self.rolls.iter().map(|&p| u16::from(p)).sum()
    }

    /// Score including bonus, once the frame has been resolved.
    #[must_use]
    pub fn resolved_score(&self) -> Option<u16> {
        self.resolved_score
    }

    pub(crate) fn set_resolved_score(&mut self, score: u16) {
        self.resolved_score = Some(score);
    }

    /// Has nothing been rolled yet?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Does the frame hold every roll it needs, bonus balls included?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.rolls.is_empty() && self.rolls.len() == required_balls(self.id, &self.rolls)
    }

    /// Tenth-frame bonus balls still to be thrown.
    ///
    /// Zero for frames 1-9 and before the tenth frame's opening is in.
    #[must_use]
    pub fn bonus_balls_owed(&self) -> usize {
        if !self.id.is_tenth() || self.rolls.len() < opening_balls(self.id, &self.rolls) {
            return 0;
        }
        required_balls(self.id, &self.rolls) - self.rolls.len()
    }

    /// The rack the next ball will be thrown at.
    #[must_use]
    pub fn rack(&self) -> Rack {
        let mut rack = Rack::fresh();
        for &pins in &self.rolls {
            // Recorded rolls were validated against this same rack.
            let _ = rack.knock(pins);
        }
        rack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(id: u8, rolls: &[u8]) -> Frame {
        let mut frame = Frame::new(FrameId::new(id));
        frame.record(rolls).unwrap();
        frame
    }

    fn fault(id: u8, rolls: &[u8]) -> RollFault {
        match Frame::new(FrameId::new(id)).record(rolls) {
            Err(BowlingError::InvalidRoll { reason, .. }) => reason,
            other => panic!("expected invalid roll, got {:?}", other),
        }
    }

    #[test]
    fn test_rack_resets() {
        let mut rack = Rack::fresh();
        rack.knock(3).unwrap();
        assert_eq!(rack.standing(), 7);
        assert!(!rack.is_fresh());
        rack.knock(2).unwrap();
        assert!(rack.is_fresh());

        rack.knock(10).unwrap();
        assert_eq!(rack.standing(), 10);
    }

    #[test]
    fn test_open_frame() {
        let f = frame(1, &[3, 4]);
        assert_eq!(f.kind(), FrameKind::Open);
        assert_eq!(f.base_pins(), 7);
        assert!(f.is_complete());
        assert_eq!(f.bonus_balls_owed(), 0);
        assert_eq!(f.resolved_score(), None);
    }

    #[test]
    fn test_strike_frame_is_one_ball() {
        let f = frame(5, &[10]);
        assert!(f.is_strike());
        assert!(!f.is_spare());
        assert!(f.is_complete());
        assert_eq!(f.base_pins(), 10);
    }

    #[test]
    fn test_spare_frame() {
        let f = frame(2, &[4, 6]);
        assert!(f.is_spare());
        assert_eq!(f.kind(), FrameKind::Spare);
        assert_eq!(f.first_roll(), Some(4));
    }

    #[test]
    fn test_gutter_then_ten_is_spare() {
        let f = frame(2, &[0, 10]);
        assert!(f.is_spare());
        assert!(!f.is_strike());
    }

    #[test]
    fn test_roll_out_of_range() {
        assert_eq!(fault(1, &[11, 0]), RollFault::OutOfRange(11));
    }

    #[test]
    fn test_roll_exceeds_pins_standing() {
        assert_eq!(
            fault(1, &[7, 5]),
            RollFault::ExceedsPinsStanding { pins: 5, standing: 3 }
        );
    }

    #[test]
    fn test_wrong_roll_counts() {
        assert_eq!(fault(1, &[3]), RollFault::WrongRollCount { expected: 2, got: 1 });
        assert_eq!(fault(1, &[10, 0]), RollFault::WrongRollCount { expected: 1, got: 2 });
        assert_eq!(fault(1, &[3, 4, 2]), RollFault::WrongRollCount { expected: 2, got: 3 });
        assert_eq!(fault(10, &[3, 4, 2]), RollFault::WrongRollCount { expected: 2, got: 3 });
        assert_eq!(fault(1, &[]), RollFault::WrongRollCount { expected: 2, got: 0 });
    }

    #[test]
    fn test_frame_never_rerolled() {
        let mut f = frame(3, &[2, 2]);
        assert_eq!(
            f.record(&[1, 1]),
            Err(BowlingError::InvalidRoll {
                frame: FrameId::new(3),
                reason: RollFault::FrameAlreadyComplete,
            })
        );
        assert_eq!(f.rolls(), &[2, 2]);
    }

    #[test]
    fn test_rejected_record_leaves_frame_untouched() {
        let mut f = Frame::new(FrameId::new(4));
        assert!(f.record(&[9, 9]).is_err());
        assert!(f.is_empty());
        f.record(&[9, 0]).unwrap();
        assert_eq!(f.rolls(), &[9, 0]);
    }

    #[test]
    fn test_tenth_open_takes_two() {
        let f = frame(10, &[3, 5]);
        assert!(f.is_complete());
        assert_eq!(f.bonus_balls_owed(), 0);
    }

    #[test]
    fn test_tenth_strike_opening_then_bonus() {
        let mut f = frame(10, &[10]);
        assert!(!f.is_complete());
        assert_eq!(f.bonus_balls_owed(), 2);
        assert_eq!(f.rack(), Rack::fresh());

        f.record(&[10, 10]).unwrap();
        assert!(f.is_complete());
        assert_eq!(f.base_pins(), 30);
    }

    #[test]
    fn test_tenth_spare_owes_one_fresh_ball() {
        let mut f = frame(10, &[6, 4]);
        assert_eq!(f.bonus_balls_owed(), 1);
        assert!(f.rack().is_fresh());
        f.record(&[10]).unwrap();
        assert!(f.is_complete());
        assert_eq!(f.base_pins(), 20);
    }

    #[test]
    fn test_tenth_full_set_in_one_call() {
        let f = frame(10, &[10, 3, 7]);
        assert!(f.is_complete());
        assert!(f.is_strike());
        assert_eq!(f.base_pins(), 20);

        let f = frame(10, &[9, 1, 0]);
        assert!(f.is_complete());
        assert!(f.is_spare());
    }

    #[test]
    fn test_tenth_bonus_pair_shares_a_rack() {
        assert_eq!(
            fault(10, &[10, 6, 5]),
            RollFault::ExceedsPinsStanding { pins: 5, standing: 4 }
        );

        // a strike in the bonus pair resets the rack
        let f = frame(10, &[10, 10, 9]);
        assert!(f.is_complete());
    }

    #[test]
    fn test_tenth_partial_bonus() {
        let mut f = frame(10, &[10]);
        f.record(&[4]).unwrap();
        assert_eq!(f.bonus_balls_owed(), 1);
        assert_eq!(f.rack().standing(), 6);
        assert!(f.record(&[7]).is_err());
        f.record(&[6]).unwrap();
        assert!(f.is_complete());
    }

    #[test]
    fn test_tenth_too_many_bonus_balls() {
        assert_eq!(
            fault(10, &[10, 10, 10, 10]),
            RollFault::WrongRollCount { expected: 3, got: 4 }
        );
        assert_eq!(
            fault(10, &[5, 5, 5, 5]),
            RollFault::WrongRollCount { expected: 3, got: 4 }
        );
    }
}
