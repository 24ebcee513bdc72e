use bevy::prelude::*;

/// Run lifecycle state.
/// Idle -> Running (start key) -> Over (terminal collision) -> Idle (timed reset)
///
/// Spawning and scoring systems are gated on `Running`; nothing gameplay-
/// related runs in the other two states.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Waiting for the start key; gravity disabled on the player.
    #[default]
    Idle,
    /// Active play: gravity, flapping, spawning and pass-detection.
    Running,
    /// Terminal collision happened; world frozen until the auto-reset fires.
    Over,
}

/// Current run score. Monotonically non-decreasing while `Running`,
/// zeroed on full reset.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct Score(pub f32);

/// Best score across runs, loaded from the score store at startup and
/// re-persisted whenever a run ends above it.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct HighScore(pub f32);
