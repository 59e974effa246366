//! Frames and per-player frame sequences.
//!
//! A `Frame` holds one bowler's rolls for one of the ten frames and
//! classifies them as strike, spare or open. A `PlayerSequence` holds a
//! bowler's ten frames and the cursor of the frame being played.
//!
//! ## Roll layout
//!
//! - Frames 1-9: `[10]` for a strike, two balls otherwise
//! - Frame 10: two balls when open, `[10, b1, b2]` after a strike,
//!   `[r1, r2, b]` after a spare
//!
//! ```
//! use rust_bowling::core::{FrameId, PlayerId};
//! use rust_bowling::frame::PlayerSequence;
//!
//! let mut seq = PlayerSequence::new(PlayerId::new(0));
//! seq.record(&[4, 6]).unwrap();
//! seq.record(&[10]).unwrap();
//!
//! assert!(seq.frame(FrameId::FIRST).is_spare());
//! assert!(seq.frame(FrameId::new(2)).is_strike());
//! assert_eq!(seq.current_frame().unwrap().id(), FrameId::new(3));
//! ```

mod record;
mod sequence;

pub use record::{Frame, FrameKind, Rack, Rolls};
pub use sequence::PlayerSequence;
