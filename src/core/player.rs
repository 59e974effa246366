//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe bowler identifier. Ids are assigned once at setup and
//! double as the fixed turn order.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, iterated in turn
//! order and indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Bowler identifier.
///
/// Indices are 0-based: the first bowler is `PlayerId(0)` and is shown
/// as "Player 1".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The bowler after this one in a game of `player_count`, wrapping
    /// back to the first.
    ///
    /// ```
    /// use rust_bowling::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage in turn order.
///
/// ## Example
///
/// ```
/// use rust_bowling::core::{PlayerId, PlayerMap};
///
/// let mut pins: PlayerMap<u16> = PlayerMap::new(4, |_| 0);
/// pins[PlayerId::new(1)] = 9;
/// assert_eq!(pins[PlayerId::new(1)], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player, in turn order.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over values in turn order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
        assert_eq!(format!("{}", p1), "Player 2");
    }

    #[test]
    fn test_player_id_next_wraps() {
        for count in [2, 3, 4] {
            let mut player = PlayerId::new(0);
            let mut seen = Vec::new();
            for _ in 0..count * 2 {
                seen.push(player.index());
                player = player.next(count);
            }
            let expected: Vec<_> = (0..count).chain(0..count).collect();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_iter_in_turn_order() {
        let map: PlayerMap<usize> = PlayerMap::new(3, |p| p.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));

        let ids: Vec<_> = map.player_ids().collect();
        assert_eq!(ids, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u16> = PlayerMap::new(2, |_| 0);
        map[PlayerId::new(1)] = 20;
        for value in map.values_mut() {
            *value += 1;
        }
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![1, 21]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u16> = PlayerMap::new(2, |p| p.index() as u16 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u16> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u16> = PlayerMap::new(0, |_| 0);
    }
}
