use bevy::prelude::*;

/// The player sprite. One instance for the process lifetime; repositioned,
/// never recreated, on reset.
#[derive(Component)]
pub struct Bird;

/// One pipe of a top/bottom pair.
#[derive(Component, Default)]
pub struct Pipe {
    /// Latched once the pipe scrolls behind the player; used exactly once
    /// to award score.
    pub passed: bool,
}

#[derive(Component)]
pub struct Enemy;

/// Anything that ends the run on contact and is bulk-cleared on reset.
#[derive(Component)]
pub struct Obstacle;
