//! Round-robin turn scheduling.
//!
//! Bowlers are visited in fixed cyclic order. Each visit bowls the
//! visited player's current frame in full: the opening balls and, in the
//! tenth frame, any bonus balls it earns. Round r therefore has every
//! bowler play frame r before anyone starts frame r+1.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::state::Game;
use crate::core::{FrameId, PlayerId, Result};
use crate::frame::{PlayerSequence, Rolls};
use crate::rolls::{RollContext, RollSource};

/// One bowler's visit to the lane.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub player: PlayerId,
    pub frame: FrameId,
    /// Every ball bowled on this visit, bonus balls included.
    pub rolls: Rolls,
}

/// Drives a `Game` to completion with balls from a `RollSource`.
#[derive(Clone, Debug)]
pub struct TurnScheduler<R> {
    source: R,
    active: PlayerId,
}

impl<R: RollSource> TurnScheduler<R> {
    /// Create a scheduler that starts with the first bowler.
    pub fn new(source: R) -> Self {
        Self {
            source,
            active: PlayerId::new(0),
        }
    }

    /// The bowler who will be visited next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn into_source(self) -> R {
        self.source
    }

    /// Visit the next bowler who still has frames to play.
    ///
    /// Returns `None` once the game is complete.
    pub fn take_turn(&mut self, game: &mut Game) -> Result<Option<Visit>> {
        if game.is_complete() {
            return Ok(None);
        }

        while game.sequence(self.active).is_complete() {
            self.pass_turn(game);
        }

        let visit = self.bowl_frame(game.sequence_mut(self.active))?;
        self.pass_turn(game);
        Ok(Some(visit))
    }

    /// Visit bowlers until the turn wraps back to the first one.
    pub fn play_round(&mut self, game: &mut Game) -> Result<Vec<Visit>> {
        let round = game.round();
        let mut visits = Vec::with_capacity(game.player_count());
        while let Some(visit) = self.take_turn(game)? {
            visits.push(visit);
            if self.active.index() == 0 || game.round() != round {
                break;
            }
        }
        Ok(visits)
    }

    /// Play rounds until every bowler has finished the tenth frame.
    pub fn play_to_completion(&mut self, game: &mut Game) -> Result<Vec<Visit>> {
        let mut visits = Vec::new();
        while !game.is_complete() {
            visits.extend(self.play_round(game)?);
        }

        info!(
            players = game.player_count(),
            visits = visits.len(),
            "game complete"
        );
        Ok(visits)
    }

    fn pass_turn(&mut self, game: &mut Game) {
        self.active = self.active.next(game.player_count());
        if self.active.index() == 0 {
            debug!(round = %game.round(), "round finished");
            game.finish_round();
        }
    }

    fn bowl_frame(&mut self, seq: &mut PlayerSequence) -> Result<Visit> {
        let frame = seq.current_frame()?.id();
        let mut rolls = self.source.generate_rolls(frame, RollContext::Regular)?;
        seq.current_frame_mut()?.record(&rolls)?;

        let current = seq.current_frame()?;
        let balls = current.bonus_balls_owed();
        if balls > 0 {
            let context = RollContext::Bonus {
                balls,
                rack: current.rack(),
            };
            let bonus = self.source.generate_rolls(frame, context)?;
            seq.current_frame_mut()?.record(&bonus)?;
            rolls.extend_from_slice(&bonus);
        }

        seq.advance();
        debug!(player = %seq.player(), %frame, ?rolls, "frame bowled");

        Ok(Visit {
            player: seq.player(),
            frame,
            rolls,
        })
    }
}
