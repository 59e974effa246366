//! Core engine types: players, frame ids, configuration, errors, RNG.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    validate_player_count, FrameId, GameConfig, RollPolicy, FRAME_COUNT, MAX_PINS, MAX_PLAYERS,
    MIN_PLAYERS,
};
pub use error::{BowlingError, Result, RollFault};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
