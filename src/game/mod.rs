//! Game setup, turn scheduling and whole-game play.
//!
//! ## Example
//!
//! ```
//! use rust_bowling::core::{GameConfig, RollPolicy};
//! use rust_bowling::game::play_game;
//!
//! let config = GameConfig::new(3).unwrap().with_policy(RollPolicy::Perfect);
//! let cards = play_game(&config).unwrap();
//!
//! assert_eq!(cards.len(), 3);
//! assert!(cards.iter().all(|card| card.total() == 300));
//! ```

mod scheduler;
mod state;

pub use scheduler::{TurnScheduler, Visit};
pub use state::Game;

use tracing::info;

use crate::core::{GameConfig, Result};
use crate::scoring::{ScoreCard, ScoreResolver};

/// Play a whole game for `config` and resolve every bowler's score.
///
/// Cards come back in turn order.
pub fn play_game(config: &GameConfig) -> Result<Vec<ScoreCard>> {
    let mut game = Game::from_config(config)?;
    let mut scheduler = TurnScheduler::new(config.roll_source());
    scheduler.play_to_completion(&mut game)?;

    let cards = ScoreResolver::new().resolve_game(&mut game)?;
    let totals: Vec<u16> = cards.iter().map(ScoreCard::total).collect();
    info!(seed = config.seed, policy = ?config.policy, ?totals, "game scored");
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RollPolicy;

    #[test]
    fn test_play_game_random_is_reproducible() {
        let config = GameConfig::new(4).unwrap().with_seed(1234);
        let first = play_game(&config).unwrap();
        let second = play_game(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_play_game_perfect() {
        let config = GameConfig::new(2).unwrap().with_policy(RollPolicy::Perfect);
        for card in play_game(&config).unwrap() {
            assert_eq!(card.total(), 300);
        }
    }
}
