//! Resolved per-frame scores, ready for rendering.

use serde::{Deserialize, Serialize};

use crate::core::{FrameId, PlayerId};
use crate::frame::{Frame, Rolls};

/// One resolved frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredFrame {
    pub frame: FrameId,
    pub rolls: Rolls,
    pub is_strike: bool,
    pub is_spare: bool,
    /// Pins plus strike/spare bonus.
    pub resolved_score: u16,
    /// Running total through this frame.
    pub cumulative_total: u16,
}

impl ScoredFrame {
    pub(crate) fn new(frame: &Frame, resolved_score: u16, cumulative_total: u16) -> Self {
        Self {
            frame: frame.id(),
            rolls: frame.rolls().into(),
            is_strike: frame.is_strike(),
            is_spare: frame.is_spare(),
            resolved_score,
            cumulative_total,
        }
    }
}

/// A bowler's resolved game, frames 1-10 in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    player: PlayerId,
    frames: Vec<ScoredFrame>,
}

impl ScoreCard {
    pub(crate) fn new(player: PlayerId, frames: Vec<ScoredFrame>) -> Self {
        Self { player, frames }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn frames(&self) -> &[ScoredFrame] {
        &self.frames
    }

    #[must_use]
    pub fn frame(&self, id: FrameId) -> &ScoredFrame {
        &self.frames[id.index()]
    }

    /// Final score: the tenth frame's cumulative total.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.frames.last().map_or(0, |f| f.cumulative_total)
    }
}
