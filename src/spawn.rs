use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::components::{Enemy, Obstacle, Pipe};
use crate::config::{GameConfig, PipeConfig};
use crate::state::GameState;

const PIPE_COLOR: Color = Color::srgb(0.18, 0.65, 0.25);
const ENEMY_COLOR: Color = Color::srgb(0.75, 0.15, 0.2);

/// Half-extents of the visible play field, captured once at startup from the
/// primary window (config dimensions when headless). No resize handling.
#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldBounds {
    pub half_width: f32,
    pub half_height: f32,
}

#[derive(Resource)]
pub struct PipeSpawnTimer(pub Timer);

#[derive(Resource)]
pub struct EnemySpawnTimer(pub Timer);

/// Periodic obstacle generation plus off-screen culling. Both spawners are
/// pure generators parameterized by uniform draws from config ranges; the
/// two timers are independent of each other.
pub struct SpawnPlugin;

impl Plugin for SpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (init_world_bounds, init_spawn_timers))
            .add_systems(OnEnter(GameState::Running), rearm_spawn_timers)
            .add_systems(
                Update,
                (spawn_pipes, spawn_enemies).run_if(in_state(GameState::Running)),
            )
            .add_systems(Update, cull_offscreen);
    }
}

fn init_world_bounds(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let (width, height) = windows
        .single()
        .map(|w| (w.width(), w.height()))
        .unwrap_or((cfg.window.width, cfg.window.height));
    commands.insert_resource(WorldBounds {
        half_width: width * 0.5,
        half_height: height * 0.5,
    });
}

fn init_spawn_timers(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(PipeSpawnTimer(Timer::from_seconds(
        cfg.pipes.spawn_period,
        TimerMode::Repeating,
    )));
    commands.insert_resource(EnemySpawnTimer(Timer::from_seconds(
        cfg.enemies.spawn_period,
        TimerMode::Repeating,
    )));
}

/// Spawn cadence restarts from zero on every run start.
fn rearm_spawn_timers(mut pipes: ResMut<PipeSpawnTimer>, mut enemies: ResMut<EnemySpawnTimer>) {
    pipes.0.reset();
    enemies.0.reset();
}

/// Center and size of one pipe sprite, derived from the pair geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeRect {
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePairLayout {
    pub top: PipeRect,
    pub bottom: PipeRect,
}

/// Pure pair geometry: both pipes sit just past `right_edge`, the top pipe's
/// bottom opening at `hole_center + half_gap` extending upward, the bottom
/// pipe's top opening at `hole_center - half_gap` extending downward. Height
/// scales only stretch the pipes away from the hole; the opening gap is
/// always exactly `2 * half_gap`.
pub fn pipe_pair_layout(
    cfg: &PipeConfig,
    right_edge: f32,
    hole_center: f32,
    top_scale: i32,
    bottom_scale: i32,
) -> PipePairLayout {
    let x = right_edge + cfg.width * 0.5;
    let top_height = cfg.segment_height * top_scale as f32;
    let bottom_height = cfg.segment_height * bottom_scale as f32;
    PipePairLayout {
        top: PipeRect {
            center: Vec2::new(x, hole_center + cfg.half_gap + top_height * 0.5),
            size: Vec2::new(cfg.width, top_height),
        },
        bottom: PipeRect {
            center: Vec2::new(x, hole_center - cfg.half_gap - bottom_height * 0.5),
            size: Vec2::new(cfg.width, bottom_height),
        },
    }
}

/// Uniform draw tolerating degenerate intervals: a single-point or inverted
/// range yields its midpoint instead of panicking, so a fixed-hole or
/// oversized-margin config stays playable.
fn sample_range(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if min < max {
        rng.gen_range(min..max)
    } else {
        (min + max) * 0.5
    }
}

fn spawn_pipes(
    time: Res<Time>,
    mut timer: ResMut<PipeSpawnTimer>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    bounds: Res<WorldBounds>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let p = &cfg.pipes;
    let mut rng = rand::thread_rng();
    let hole_center = sample_range(&mut rng, p.hole_center.min, p.hole_center.max);
    let top_scale = rng.gen_range(p.height_scale.min..=p.height_scale.max);
    let bottom_scale = rng.gen_range(p.height_scale.min..=p.height_scale.max);

    let layout = pipe_pair_layout(p, bounds.half_width, hole_center, top_scale, bottom_scale);
    spawn_pipe(&mut commands, p, layout.top);
    spawn_pipe(&mut commands, p, layout.bottom);
    debug!(target: "spawn", "pipe pair at hole {hole_center:.0} scales {top_scale}/{bottom_scale}");
}

fn spawn_pipe(commands: &mut Commands, cfg: &PipeConfig, rect: PipeRect) {
    commands.spawn((
        Pipe::default(),
        Obstacle,
        Sprite {
            color: PIPE_COLOR,
            custom_size: Some(rect.size),
            ..default()
        },
        Transform::from_translation(rect.center.extend(0.0)),
        RigidBody::KinematicVelocityBased,
        // Narrower than the visual to keep the hitbox tight; full height.
        Collider::cuboid(rect.size.x * cfg.hitbox_width_frac * 0.5, rect.size.y * 0.5),
        Sensor,
        Velocity::linear(Vec2::new(cfg.scroll_speed, 0.0)),
        GravityScale(0.0),
    ));
}

fn spawn_enemies(
    time: Res<Time>,
    mut timer: ResMut<EnemySpawnTimer>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    bounds: Res<WorldBounds>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let e = &cfg.enemies;
    let (y_min, y_max) = enemy_spawn_range(bounds.half_height, e.margin);
    let mut rng = rand::thread_rng();
    let y = sample_range(&mut rng, y_min, y_max);

    commands.spawn((
        Enemy,
        Obstacle,
        Sprite {
            color: ENEMY_COLOR,
            custom_size: Some(Vec2::new(e.width, e.height)),
            // Mirrored to face the player.
            flip_x: true,
            ..default()
        },
        Transform::from_translation(Vec3::new(bounds.half_width + e.width * 0.5, y, 0.0)),
        RigidBody::KinematicVelocityBased,
        // Half the visual dimensions, centered.
        Collider::cuboid(e.width * e.hitbox_scale * 0.5, e.height * e.hitbox_scale * 0.5),
        Sensor,
        Velocity::linear(Vec2::new(e.scroll_speed, 0.0)),
        GravityScale(0.0),
    ));
    debug!(target: "spawn", "enemy at y {y:.0}");
}

/// Margin-bounded vertical range enemies may spawn in.
pub fn enemy_spawn_range(half_height: f32, margin: f32) -> (f32, f32) {
    (-half_height + margin, half_height - margin)
}

/// World-bounds despawn: an obstacle whose trailing edge has left the play
/// field on the left is destroyed.
fn cull_offscreen(
    mut commands: Commands,
    bounds: Option<Res<WorldBounds>>,
    obstacles: Query<(Entity, &Transform, &Sprite), With<Obstacle>>,
) {
    let Some(bounds) = bounds else { return };
    for (entity, tf, sprite) in &obstacles {
        let half_w = sprite.custom_size.map(|s| s.x * 0.5).unwrap_or(0.0);
        if tf.translation.x + half_w < -bounds.half_width {
            commands.entity(entity).despawn();
        }
    }
}
