//! Bonus resolution over a finished sequence.
//!
//! ## Rules
//!
//! - Open frame: its own pins
//! - Spare: 10 plus the next ball
//! - Strike: 10 plus the next two balls, which may come from two
//!   different frames when strikes are chained
//! - Tenth frame: its own 2 or 3 balls, no lookahead
//!
//! Because a strike in frames 1-9 holds the single ball `[10]`, "the
//! next balls" are simply the first balls of the flattened rolls that
//! follow the frame.

use tracing::debug;

use super::card::{ScoreCard, ScoredFrame};
use crate::core::{BowlingError, Result};
use crate::frame::{Frame, FrameKind, PlayerSequence};
use crate::game::Game;

/// Computes resolved scores and running totals.
///
/// Scoring only reads recorded rolls, so resolving the same sequence
/// twice yields the same card.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreResolver;

impl ScoreResolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Score a finished sequence without touching it.
    pub fn score(&self, seq: &PlayerSequence) -> Result<ScoreCard> {
        ensure_complete(seq)?;

        let frames = seq.frames();
        let mut cumulative = 0;
        let scored = frames
            .iter()
            .enumerate()
            .map(|(index, frame)| {
                let resolved = frame_score(frames, index);
                cumulative += resolved;
                ScoredFrame::new(frame, resolved, cumulative)
            })
            .collect();

        Ok(ScoreCard::new(seq.player(), scored))
    }

    /// Score a finished sequence and store each frame's resolved score.
    pub fn resolve(&self, seq: &mut PlayerSequence) -> Result<ScoreCard> {
        let card = self.score(seq)?;
        for (frame, scored) in seq.frames_mut().iter_mut().zip(card.frames()) {
            frame.set_resolved_score(scored.resolved_score);
        }

        debug!(player = %card.player(), total = card.total(), "sequence resolved");
        Ok(card)
    }

    /// Resolve every bowler in turn order.
    ///
    /// Nothing is resolved unless every bowler has finished.
    pub fn resolve_game(&self, game: &mut Game) -> Result<Vec<ScoreCard>> {
        for seq in game.players().values() {
            ensure_complete(seq)?;
        }
        game.sequences_mut().map(|seq| self.resolve(seq)).collect()
    }
}

fn ensure_complete(seq: &PlayerSequence) -> Result<()> {
    match seq.first_unfinished() {
        Some(frame) => Err(BowlingError::IncompleteSequence {
            player: seq.player(),
            frame: frame.id(),
        }),
        None => Ok(()),
    }
}

/// Resolved score of `frames[index]`.
fn frame_score(frames: &[Frame], index: usize) -> u16 {
    let frame = &frames[index];
    let bonus_balls = match frame.kind() {
        _ if frame.id().is_tenth() => 0,
        FrameKind::Strike => 2,
        FrameKind::Spare => 1,
        FrameKind::Open => 0,
    };

    let bonus: u16 = frames[index + 1..]
        .iter()
        .flat_map(|f| f.rolls())
        .take(bonus_balls)
        .map(|&pins| u16::from(pins))
        .sum();

    frame.base_pins() + bonus
}
