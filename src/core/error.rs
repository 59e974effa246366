//! Error types for the scoring engine.
//!
//! Every failure here is a local, synchronous integration error: a roll
//! source produced an impossible frame, a caller bowled past the tenth
//! frame, or scores were requested too early. None are retried.

use thiserror::Error;

use super::config::FrameId;
use super::player::PlayerId;

/// Why a set of rolls was rejected by a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RollFault {
    #[error("{0} pins is outside 0-10")]
    OutOfRange(u8),
    #[error("{pins} pins knocked down with only {standing} standing")]
    ExceedsPinsStanding { pins: u8, standing: u8 },
    #[error("expected {expected} rolls, got {got}")]
    WrongRollCount { expected: usize, got: usize },
    #[error("frame already holds all its rolls")]
    FrameAlreadyComplete,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BowlingError {
    #[error("invalid roll in {frame}: {reason}")]
    InvalidRoll { frame: FrameId, reason: RollFault },
    #[error("{player} has already bowled all ten frames")]
    SequenceComplete { player: PlayerId },
    #[error("{player} cannot be scored yet: {frame} is unfinished")]
    IncompleteSequence { player: PlayerId, frame: FrameId },
    #[error("player count must be 2-4, got {0}")]
    InvalidPlayerCount(usize),
    #[error("roll script ran out while bowling {frame}")]
    RollSourceExhausted { frame: FrameId },
}

pub type Result<T> = std::result::Result<T, BowlingError>;
