//! Spawning is a no-op outside `Running`, no matter how often the timers
//! would fire.

mod common;

use bevy::prelude::*;
use skydodge::components::{Enemy, Obstacle, Pipe};
use skydodge::spawn::WorldBounds;
use skydodge::{GameConfig, GameState, ScoreStore};

fn zero_period_config() -> GameConfig {
    let mut cfg = GameConfig::default();
    // Zero-duration repeating timers fire on every tick, so any gating gap
    // shows up after a single update.
    cfg.pipes.spawn_period = 0.0;
    cfg.enemies.spawn_period = 0.0;
    cfg
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), F>()
        .iter(app.world())
        .count()
}

#[test]
fn no_spawns_while_idle() {
    let mut app = common::app_with(zero_period_config(), ScoreStore::disabled());
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(count::<With<Pipe>>(&mut app), 0);
    assert_eq!(count::<With<Enemy>>(&mut app), 0);
}

#[test]
fn spawning_begins_in_running() {
    let mut app = common::app_with(zero_period_config(), ScoreStore::disabled());
    common::set_state(&mut app, GameState::Running);
    app.update();
    assert!(count::<With<Pipe>>(&mut app) >= 2, "a full pair should spawn");
    assert!(count::<With<Enemy>>(&mut app) >= 1);
}

#[test]
fn pipes_spawn_at_right_world_edge() {
    let mut app = common::app_with(zero_period_config(), ScoreStore::disabled());
    common::set_state(&mut app, GameState::Running);

    let half_width = app.world().resource::<WorldBounds>().half_width;
    let mut pipes = app
        .world_mut()
        .query_filtered::<(&Transform, &Sprite), With<Pipe>>();
    let mut seen = 0;
    for (tf, sprite) in pipes.iter(app.world()) {
        let half_w = sprite.custom_size.unwrap().x * 0.5;
        // Small allowance for the single physics step since the spawn.
        assert!(
            tf.translation.x - half_w >= half_width - 25.0,
            "pipe left edge {} inside the play field (half_width {half_width})",
            tf.translation.x - half_w
        );
        seen += 1;
    }
    assert_eq!(seen, 2, "exactly one pair after one running tick");
}

#[test]
fn degenerate_spawn_ranges_stay_playable() {
    // A fixed hole position and a margin swallowing the whole viewport must
    // not take the game down on the first spawn tick.
    let mut cfg = zero_period_config();
    cfg.pipes.hole_center.min = 100.0;
    cfg.pipes.hole_center.max = 100.0;
    cfg.enemies.margin = cfg.window.height;
    let mut app = common::app_with(cfg, ScoreStore::disabled());
    common::set_state(&mut app, GameState::Running);
    for _ in 0..3 {
        app.update();
    }
    assert!(count::<With<Pipe>>(&mut app) >= 2);
    assert!(count::<With<Enemy>>(&mut app) >= 1);

    // Inverted enemy range degrades to its midpoint, the viewport center.
    let mut enemies = app
        .world_mut()
        .query_filtered::<&Transform, With<Enemy>>();
    for tf in enemies.iter(app.world()) {
        assert_eq!(tf.translation.y, 0.0);
    }
}

#[test]
fn no_spawns_after_game_over() {
    let mut app = common::app_with(zero_period_config(), ScoreStore::disabled());
    common::set_state(&mut app, GameState::Running);
    app.update();
    common::set_state(&mut app, GameState::Over);
    assert_eq!(common::current_state(&mut app), GameState::Over);

    let before = count::<With<Obstacle>>(&mut app);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(count::<With<Obstacle>>(&mut app), before);
}
