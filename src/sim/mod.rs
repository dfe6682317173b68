//! Move-sequence recording and deterministic replay.
//!
//! A recorded game is a list of directions plus the fruit plan it was
//! played against; replaying both reproduces the trajectory exactly,
//! and a replay can keep going with fresh moves once the prefix runs
//! out.

pub mod recorder;
pub mod sources;

pub use recorder::{record_session, replay_session, GameSequence};
pub use sources::{MoveSource, RandomMoves};
