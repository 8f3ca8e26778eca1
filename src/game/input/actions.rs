//! Input Actions
//!
//! Discrete events the range reacts to. Window callbacks only produce these;
//! their effects are applied on the next frame update.

/// High-level input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Start turning the cannon counter-clockwise
    RotateLeftDown,
    RotateLeftUp,
    /// Start turning the cannon clockwise
    RotateRightDown,
    RotateRightUp,
    /// Fire, if no shot is in flight
    Fire,
    /// End the session
    Quit,
    SpeedUp,
    SpeedDown,
}
