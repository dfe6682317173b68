use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::board::{Board, Cell};
use super::config::GameConfig;
use super::direction::Coord;
use super::error::GameError;

/// Bounded number of random placement attempts before giving up for the
/// tick. On a congested board the game simply has no fruit until the
/// next spawn.
const SPAWN_ATTEMPTS: usize = 10;

/// Pre-generated fruit locations, sampled against an empty board, that
/// make a simulated game reproducible across replays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitPlan {
    coords: Vec<Coord>,
}

impl FruitPlan {
    /// Sample `config.max_game_score` locations from the empty starting
    /// board. Spawning during a game only walks this list forward, so two
    /// sessions sharing a plan see identical fruit placement.
    pub fn generate<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        let board = Board::new(config.playable_width, config.playable_height);
        let mut coords = Vec::with_capacity(config.max_game_score);
        while coords.len() < config.max_game_score {
            if let Some(at) = random_empty(&board, rng) {
                coords.push(at);
            }
        }
        Self { coords }
    }

    pub fn from_coords(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Where the next fruit comes from: random placement during live play,
/// or a pre-generated plan during simulation and replay.
#[derive(Debug)]
pub enum FruitSource {
    /// Bounded random search over the interior
    Live(StdRng),
    /// Cursor over a pre-generated location list
    Recorded { plan: FruitPlan, cursor: usize },
}

impl FruitSource {
    pub fn live() -> Self {
        Self::Live(StdRng::from_entropy())
    }

    pub fn live_seeded(seed: u64) -> Self {
        Self::Live(StdRng::seed_from_u64(seed))
    }

    pub fn recorded(plan: FruitPlan) -> Self {
        Self::Recorded { plan, cursor: 0 }
    }

    /// Pick the next fruit location. `Ok(None)` means the bounded random
    /// search found no empty cell this tick; `SequenceExhausted` means a
    /// replay ran past its plan, which is caller misuse.
    pub fn next_fruit(&mut self, board: &Board) -> Result<Option<Coord>, GameError> {
        match self {
            Self::Live(rng) => Ok(random_empty(board, rng)),
            Self::Recorded { plan, cursor } => {
                let at = plan
                    .coords
                    .get(*cursor)
                    .copied()
                    .ok_or(GameError::SequenceExhausted)?;
                *cursor += 1;
                Ok(Some(at))
            }
        }
    }
}

fn random_empty<R: Rng>(board: &Board, rng: &mut R) -> Option<Coord> {
    for _ in 0..SPAWN_ATTEMPTS {
        let x = rng.gen_range(1..=board.playable_width()) as i32;
        let y = rng.gen_range(1..=board.playable_height()) as i32;
        let at = Coord::new(x, y);
        if board.at(at) == Cell::Empty {
            return Some(at);
        }
    }
    None
}
