//! Game state: every bowler's sequence plus the round being played.

use serde::{Deserialize, Serialize};

use crate::core::{validate_player_count, FrameId, GameConfig, PlayerId, PlayerMap, Result};
use crate::frame::PlayerSequence;

/// One game of 2-4 bowlers.
///
/// Player order is fixed at setup and is the turn order. The game owns
/// its sequences outright, so separate games never share state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    players: PlayerMap<PlayerSequence>,
    round: FrameId,
}

impl Game {
    /// Set up a game with `player_count` empty sequences.
    ///
    /// Fails with `InvalidPlayerCount` unless the count is 2-4.
    pub fn new(player_count: usize) -> Result<Self> {
        validate_player_count(player_count)?;

        Ok(Self {
            players: PlayerMap::new(player_count, PlayerSequence::new),
            round: FrameId::FIRST,
        })
    }

    /// Set up a game for a configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::new(config.player_count)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Frame being played across all players.
    #[must_use]
    pub fn round(&self) -> FrameId {
        self.round
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerSequence> {
        &self.players
    }

    #[must_use]
    pub fn sequence(&self, player: PlayerId) -> &PlayerSequence {
        &self.players[player]
    }

    pub fn sequence_mut(&mut self, player: PlayerId) -> &mut PlayerSequence {
        &mut self.players[player]
    }

    pub(crate) fn sequences_mut(&mut self) -> impl Iterator<Item = &mut PlayerSequence> {
        self.players.values_mut()
    }

    /// Every bowler has finished the tenth frame.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.players.values().all(PlayerSequence::is_complete)
    }

    /// Move to the next round. The round stays at 10 once reached.
    pub(crate) fn finish_round(&mut self) {
        if let Some(next) = self.round.next() {
            self.round = next;
        }
    }
}
