//! Plain-text score sheets in bowling notation.
//!
//! ```text
//! Player 1:
//! +-------+-------+-- ... --+-------+
//! |   X   |  7 /  |   ...   | X X X |
//! +-------+-------+-- ... --+-------+
//! |  20   |  37   |   ...   |  183  |
//! +-------+-------+-- ... --+-------+
//! ```

use std::fmt;

use smallvec::SmallVec;

use super::card::{ScoreCard, ScoredFrame};
use crate::core::MAX_PINS;
use crate::frame::Rack;

const CELL_WIDTH: usize = 7;

/// Marks for each ball of a frame: `X` strike, `/` spare, `-` gutter,
/// otherwise the pin count.
pub fn frame_marks(frame: &ScoredFrame) -> SmallVec<[char; 3]> {
    let mut rack = Rack::fresh();
    frame
        .rolls
        .iter()
        .map(|&pins| {
            let mark = if rack.is_fresh() && pins == MAX_PINS {
                'X'
            } else if !rack.is_fresh() && pins == rack.standing() {
                '/'
            } else if pins == 0 {
                '-'
            } else {
                char::from(b'0' + pins)
            };
            // Scored rolls were validated when they were recorded.
            let _ = rack.knock(pins);
            mark
        })
        .collect()
}

fn marks_cell(frame: &ScoredFrame) -> String {
    let marks: Vec<String> = frame_marks(frame).iter().map(char::to_string).collect();
    marks.join(" ")
}

fn write_border(f: &mut fmt::Formatter<'_>, cells: usize) -> fmt::Result {
    for _ in 0..cells {
        write!(f, "+{}", "-".repeat(CELL_WIDTH))?;
    }
    writeln!(f, "+")
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: impl Iterator<Item = String>) -> fmt::Result {
    for cell in cells {
        write!(f, "|{:^width$}", cell, width = CELL_WIDTH)?;
    }
    writeln!(f, "|")
}

impl fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.frames().len();
        writeln!(f, "{}:", self.player())?;
        write_border(f, cells)?;
        write_row(f, self.frames().iter().map(marks_cell))?;
        write_border(f, cells)?;
        write_row(f, self.frames().iter().map(|fr| fr.cumulative_total.to_string()))?;
        write_border(f, cells)
    }
}

/// Every bowler's card, in turn order, separated by blank lines.
#[derive(Clone, Copy, Debug)]
pub struct ScoreSheet<'a> {
    cards: &'a [ScoreCard],
}

impl<'a> ScoreSheet<'a> {
    #[must_use]
    pub fn new(cards: &'a [ScoreCard]) -> Self {
        Self { cards }
    }
}

impl fmt::Display for ScoreSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
