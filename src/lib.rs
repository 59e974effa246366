//! # rust-bowling
//!
//! A multi-player ten-pin bowling simulator built around a scoring engine.
//!
//! ## Design Principles
//!
//! 1. **Scores are derived, never stored ahead of time**: a frame only
//!    records pins. Strike/spare classification and bonus-adjusted scores
//!    are computed from the recorded rolls.
//!
//! 2. **Frames fill in order**: each bowler's ten frames are a fixed
//!    sequence with a cursor; lookahead is plain indexing.
//!
//! 3. **Randomness is a collaborator**: the scheduler asks a `RollSource`
//!    for balls, so games can be random, perfect, or scripted.
//!
//! ## Modules
//!
//! - `core`: Player and frame ids, configuration, errors, RNG
//! - `frame`: Frames, racks, and per-player frame sequences
//! - `rolls`: Roll sources (random, perfect, scripted)
//! - `game`: Game state and round-robin turn scheduling
//! - `scoring`: Bonus resolution, score cards, and score sheets

pub mod core;
pub mod frame;
pub mod game;
pub mod rolls;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    BowlingError, FrameId, GameConfig, GameRng, PlayerId, PlayerMap, Result, RollFault, RollPolicy,
};

pub use crate::frame::{Frame, FrameKind, PlayerSequence, Rack, Rolls};

pub use crate::rolls::{PerfectRolls, RandomRolls, RollContext, RollSource, ScriptedRolls};

pub use crate::game::{play_game, Game, TurnScheduler, Visit};

pub use crate::scoring::{frame_marks, ScoreCard, ScoreResolver, ScoreSheet, ScoredFrame};
