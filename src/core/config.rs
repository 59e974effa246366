//! Game configuration types.
//!
//! A game is configured at setup by providing:
//! - the number of bowlers (2-4)
//! - a seed for the random roll source
//! - a `RollPolicy` choosing how pins fall
//!
//! `FrameId` lives here too: frames are the fixed positions every
//! player's sequence is built from.

use serde::{Deserialize, Serialize};

use super::error::{BowlingError, Result};
use crate::rolls::{PerfectRolls, RandomRolls, RollSource};

/// Frames per player in a game.
pub const FRAME_COUNT: usize = 10;

/// Pins in a full rack.
pub const MAX_PINS: u8 = 10;

/// Fewest bowlers a game accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most bowlers a game accepts.
pub const MAX_PLAYERS: usize = 4;

/// Frame identifier, 1 through 10.
///
/// Frame ids are 1-based to match a printed score sheet; use `index()`
/// for the 0-based position inside a player's sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrameId(u8);

impl FrameId {
    /// The opening frame.
    pub const FIRST: FrameId = FrameId(1);

    /// The tenth frame, the only one that can take bonus balls.
    pub const TENTH: FrameId = FrameId(FRAME_COUNT as u8);

    /// Create a new frame ID.
    ///
    /// Panics if `id` is outside 1-10.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id >= 1 && id as usize <= FRAME_COUNT, "Frame id must be 1-10");
        Self(id)
    }

    /// Get the raw frame number (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the position within a sequence (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Is this the tenth frame?
    #[must_use]
    pub const fn is_tenth(self) -> bool {
        self.0 as usize == FRAME_COUNT
    }

    /// The following frame, or `None` after the tenth.
    #[must_use]
    pub const fn next(self) -> Option<FrameId> {
        if self.is_tenth() {
            None
        } else {
            Some(FrameId(self.0 + 1))
        }
    }

    /// Iterate over frames 1 through 10.
    ///
    /// ```
    /// use rust_bowling::core::FrameId;
    ///
    /// let frames: Vec<_> = FrameId::all().collect();
    /// assert_eq!(frames.len(), 10);
    /// assert_eq!(frames[0], FrameId::FIRST);
    /// assert_eq!(frames[9], FrameId::TENTH);
    /// ```
    pub fn all() -> impl Iterator<Item = FrameId> {
        (1..=FRAME_COUNT as u8).map(FrameId)
    }
}

impl std::fmt::Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frame {}", self.0)
    }
}

/// How pins fall during a simulated game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollPolicy {
    /// Seeded random pin counts.
    #[default]
    Random,
    /// Every ball is a strike.
    Perfect,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of bowlers (2-4).
    pub player_count: usize,

    /// Seed for the random roll source.
    pub seed: u64,

    /// Roll generation policy.
    pub policy: RollPolicy,
}

impl GameConfig {
    /// Create a new game configuration.
    ///
    /// Fails with `InvalidPlayerCount` unless `player_count` is 2-4.
    pub fn new(player_count: usize) -> Result<Self> {
        validate_player_count(player_count)?;

        Ok(Self {
            player_count,
            seed: 42,
            policy: RollPolicy::default(),
        })
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the roll policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the roll source this configuration asks for.
    #[must_use]
    pub fn roll_source(&self) -> Box<dyn RollSource> {
        match self.policy {
            RollPolicy::Random => Box::new(RandomRolls::new(self.seed)),
            RollPolicy::Perfect => Box::new(PerfectRolls),
        }
    }
}

/// Check a player count against the 2-4 limit.
pub fn validate_player_count(player_count: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(BowlingError::InvalidPlayerCount(player_count))
    }
}
