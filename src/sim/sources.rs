use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Direction, GameSession, Obstacle};

/// Supplies the direction for each tick of a driven game
pub trait MoveSource {
    fn next_move(&mut self, session: &GameSession) -> Direction;
}

/// Uniform random move, rejecting only reversals into the neck.
///
/// "Valid" does not mean safe: walls and body cells are fair picks, so
/// a random game eventually dies on its own.
pub struct RandomMoves<R: Rng> {
    rng: R,
}

impl RandomMoves<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoves<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MoveSource for RandomMoves<R> {
    fn next_move(&mut self, session: &GameSession) -> Direction {
        loop {
            let direction = match self.rng.gen_range(0..4) {
                0 => Direction::Up,
                1 => Direction::Down,
                2 => Direction::Left,
                _ => Direction::Right,
            };
            let (allowed, obstacle) = session.probe(direction);
            if allowed || obstacle != Obstacle::Neck {
                return direction;
            }
        }
    }
}
