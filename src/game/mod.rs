//! Core game logic: board, snake, fruit spawning and the tick state
//! machine, with no I/O or rendering dependencies. Sessions own all of
//! their state, so independent games can run side by side.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod session;
pub mod snake;
pub mod spawn;

// Re-export commonly used types
pub use board::{Board, Cell, HEAD_RANK, NECK_RANK};
pub use config::GameConfig;
pub use direction::{Coord, Direction};
pub use error::GameError;
pub use session::{GameSession, SessionStatus, TickResult};
pub use snake::{Obstacle, Snake};
pub use spawn::{FruitPlan, FruitSource};
