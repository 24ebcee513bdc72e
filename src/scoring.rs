use bevy::prelude::*;

use crate::components::{Bird, Pipe};
use crate::config::GameConfig;
use crate::state::{GameState, Score};
use crate::system_order::ScoringSet;

/// Pass-detection: once per pipe, when its trailing edge scrolls behind the
/// player's leading edge, latch `passed` and award the configured increment.
/// Purely positional and idempotent; evaluation order across pipes within a
/// frame does not matter.
pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            detect_pipe_passes
                .run_if(in_state(GameState::Running))
                .in_set(ScoringSet),
        );
    }
}

fn detect_pipe_passes(
    cfg: Res<GameConfig>,
    mut score: ResMut<Score>,
    birds: Query<(&Transform, &Sprite), With<Bird>>,
    mut pipes: Query<(&Transform, &Sprite, &mut Pipe), Without<Bird>>,
) {
    let Ok((bird_tf, bird_sprite)) = birds.single() else {
        return;
    };
    let bird_half_w = bird_sprite.custom_size.map(|s| s.x * 0.5).unwrap_or(0.0);
    let bird_left = bird_tf.translation.x - bird_half_w;
    for (tf, sprite, mut pipe) in &mut pipes {
        if pipe.passed {
            continue;
        }
        let half_w = sprite.custom_size.map(|s| s.x * 0.5).unwrap_or(0.0);
        if tf.translation.x + half_w < bird_left {
            pipe.passed = true;
            score.0 += cfg.scoring.pass_increment;
            debug!(target: "scoring", "pipe passed, score {}", score.0);
        }
    }
}
