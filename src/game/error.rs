use thiserror::Error;

/// Errors raised by the game core.
///
/// Death is not an error: collisions end the session through a normal
/// state transition and are reported as a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Cell access outside the allocated grid. The wall border makes this
    /// unreachable in normal play; hitting it means a logic bug.
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// A replay ran past the end of its pre-generated fruit plan.
    #[error("fruit plan exhausted during replay")]
    SequenceExhausted,
}
