use serde::{Deserialize, Serialize};

use super::direction::Coord;

/// Configuration for one game.
///
/// The playable area is ringed by one cell of wall on every side, so the
/// allocated grid is two cells wider and taller than these dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playable area
    pub playable_width: usize,
    /// Height of the playable area
    pub playable_height: usize,
    /// Starting head cell; the body extends two cells below it
    pub start_x: i32,
    pub start_y: i32,
    /// Length of a pre-generated fruit plan, and so the most fruits a
    /// recorded game can ever place
    pub max_game_score: usize,
    /// Move ceiling for recorded and replayed games
    pub max_sequence_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playable_width: 20,
            playable_height: 10,
            start_x: 5,
            start_y: 5,
            max_game_score: 1000,
            max_sequence_len: 10000,
        }
    }
}

impl GameConfig {
    /// Starting head coordinate
    pub fn start(&self) -> Coord {
        Coord::new(self.start_x, self.start_y)
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self {
            playable_width: 8,
            playable_height: 6,
            start_x: 4,
            start_y: 2,
            max_game_score: 50,
            max_sequence_len: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.playable_width, 20);
        assert_eq!(config.playable_height, 10);
        assert_eq!(config.start(), Coord::new(5, 5));
        assert_eq!(config.max_game_score, 1000);
        assert_eq!(config.max_sequence_len, 10000);
    }

    #[test]
    fn test_small_start_fits_on_board() {
        let config = GameConfig::small();
        // head plus two body cells below it must stay inside the walls
        assert!(config.start_y as usize + 2 <= config.playable_height);
        assert!((config.start_x as usize) <= config.playable_width);
    }
}
