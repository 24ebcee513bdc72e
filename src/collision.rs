use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{Bird, Obstacle};
use crate::config::GameConfig;
use crate::player::{BIRD_COLOR, HIT_TINT};
use crate::score_store::ScoreStore;
use crate::state::{GameState, HighScore, Score};

/// One-shot delay between a terminal collision and the automatic full
/// reset. Armed on entering `Over`; not cancellable.
#[derive(Resource)]
pub struct ResetTimer(pub Timer);

/// Terminal-collision handling. The event handler only performs the state
/// transition; every game-over effect (freeze, tint, high-score recording,
/// reset arming) lives in `OnEnter(Over)` systems so the pipe and enemy
/// collision paths are identical.
pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_reset_timer)
            .add_systems(
                Update,
                handle_collisions.run_if(in_state(GameState::Running)),
            )
            .add_systems(
                OnEnter(GameState::Over),
                (freeze_world, record_high_score, arm_reset_timer),
            )
            .add_systems(Update, tick_reset.run_if(in_state(GameState::Over)));
    }
}

fn init_reset_timer(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(ResetTimer(Timer::from_seconds(
        cfg.reset_delay,
        TimerMode::Once,
    )));
}

fn handle_collisions(
    mut collisions: EventReader<CollisionEvent>,
    birds: Query<Entity, With<Bird>>,
    obstacles: Query<(), With<Obstacle>>,
    score: Res<Score>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Ok(bird) = birds.single() else { return };
    for ev in collisions.read() {
        let CollisionEvent::Started(a, b, _) = ev else {
            continue;
        };
        let other = if *a == bird {
            *b
        } else if *b == bird {
            *a
        } else {
            continue;
        };
        if obstacles.get(other).is_err() {
            continue;
        }
        info!(target: "game_state", "terminal collision at score {}", score.0);
        next.set(GameState::Over);
        return;
    }
}

/// All motion stops: every velocity zeroed (the physics pipeline itself is
/// paused by the physics plugin) and the bird shows its hit tint.
fn freeze_world(
    mut velocities: Query<&mut Velocity>,
    mut birds: Query<&mut Sprite, With<Bird>>,
) {
    for mut vel in &mut velocities {
        *vel = Velocity::zero();
    }
    for mut sprite in &mut birds {
        sprite.color = HIT_TINT;
    }
}

/// Terminal-score comparison, performed once per run. The persisted value
/// never decreases; write failures degrade to a warning.
fn record_high_score(score: Res<Score>, mut high: ResMut<HighScore>, store: Res<ScoreStore>) {
    if score.0 <= high.0 {
        return;
    }
    high.0 = score.0;
    if let Err(e) = store.save(high.0) {
        warn!(target: "score_store", "failed to persist high score: {e}");
    } else {
        info!(target: "score_store", "new high score {}", high.0);
    }
}

fn arm_reset_timer(mut timer: ResMut<ResetTimer>) {
    timer.0.reset();
}

/// Unconditional time-delayed reset back to `Idle`: obstacles cleared, score
/// zeroed, bird repositioned with zero velocity, zero rotation, tint cleared
/// and gravity off again.
fn tick_reset(
    time: Res<Time>,
    mut timer: ResMut<ResetTimer>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    obstacles: Query<Entity, With<Obstacle>>,
    mut birds: Query<(&mut Transform, &mut Velocity, &mut Sprite, &mut GravityScale), With<Bird>>,
    mut score: ResMut<Score>,
    mut next: ResMut<NextState<GameState>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    for entity in &obstacles {
        commands.entity(entity).despawn();
    }
    for (mut tf, mut vel, mut sprite, mut gravity) in &mut birds {
        tf.translation = Vec3::new(cfg.player.start_x, cfg.player.start_y, 1.0);
        tf.rotation = Quat::IDENTITY;
        *vel = Velocity::zero();
        sprite.color = BIRD_COLOR;
        gravity.0 = 0.0;
    }
    score.0 = 0.0;
    info!(target: "game_state", "full reset");
    next.set(GameState::Idle);
}
