//! One bowler's ten frames and the cursor of the frame being played.

use serde::{Deserialize, Serialize};

use super::record::Frame;
use crate::core::{BowlingError, FrameId, PlayerId, Result, FRAME_COUNT};

/// Exactly ten frames for one player, filled strictly in order.
///
/// Only the frame under the cursor can be written, so a frame is never
/// touched again once the cursor has moved past it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSequence {
    player: PlayerId,
    frames: Vec<Frame>,
    cursor: usize,
}

impl PlayerSequence {
    /// Create a sequence of ten empty frames.
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            frames: FrameId::all().map(Frame::new).collect(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Index of the frame being played; `FRAME_COUNT` once complete.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[must_use]
    pub fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id.index()]
    }

    pub(crate) fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    /// The frame being played.
    pub fn current_frame(&self) -> Result<&Frame> {
        self.frames.get(self.cursor).ok_or(BowlingError::SequenceComplete {
            player: self.player,
        })
    }

    /// The frame being played, for recording rolls.
    pub fn current_frame_mut(&mut self) -> Result<&mut Frame> {
        let player = self.player;
        self.frames
            .get_mut(self.cursor)
            .ok_or(BowlingError::SequenceComplete { player })
    }

    /// Move to the next frame if the current one holds all its rolls.
    ///
    /// Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        match self.frames.get(self.cursor) {
            Some(frame) if frame.is_complete() => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    /// Record rolls into the current frame, then try to advance.
    pub fn record(&mut self, rolls: &[u8]) -> Result<()> {
        self.current_frame_mut()?.record(rolls)?;
        self.advance();
        Ok(())
    }

    /// Has the tenth frame received every roll it needs?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.frames[FRAME_COUNT - 1].is_complete()
    }

    /// The first frame still missing rolls.
    #[must_use]
    pub fn first_unfinished(&self) -> Option<&Frame> {
        self.frames.iter().find(|f| !f.is_complete())
    }
}
