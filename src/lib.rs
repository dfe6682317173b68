//! serpent - the classic snake game in text mode
//!
//! This library provides:
//! - Core game logic (game module): rank-encoded board, snake
//!   movement/growth, fruit spawning, tick state machine
//! - Move-sequence recording and deterministic replay (sim module)
//! - TUI rendering (render module) and key mapping (input module)
//! - Interactive and autonomous execution modes (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod sim;
