//! Score resolution and score sheets.
//!
//! Scoring runs after play: a frame's score is only final once the
//! frames it looks ahead into have been bowled, so `ScoreResolver`
//! refuses to score a sequence until its tenth frame is complete.
//!
//! ## Example
//!
//! ```
//! use rust_bowling::core::{FrameId, PlayerId};
//! use rust_bowling::frame::PlayerSequence;
//! use rust_bowling::scoring::ScoreResolver;
//!
//! let mut seq = PlayerSequence::new(PlayerId::new(0));
//! seq.record(&[4, 6]).unwrap();
//! seq.record(&[5, 0]).unwrap();
//! while !seq.is_complete() {
//!     seq.record(&[0, 0]).unwrap();
//! }
//!
//! let card = ScoreResolver::new().resolve(&mut seq).unwrap();
//! assert_eq!(card.frame(FrameId::FIRST).resolved_score, 15);
//! assert_eq!(card.total(), 20);
//! ```

mod card;
mod resolver;
mod sheet;

pub use card::{ScoreCard, ScoredFrame};
pub use resolver::ScoreResolver;
pub use sheet::{frame_marks, ScoreSheet};
