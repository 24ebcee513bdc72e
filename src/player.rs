use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::Bird;
use crate::config::GameConfig;
use crate::spawn::WorldBounds;
use crate::state::GameState;
use crate::system_order::{InputSet, MovementSet};

pub const BIRD_COLOR: Color = Color::srgb(0.95, 0.8, 0.2);
pub const HIT_TINT: Color = Color::srgb(1.0, 0.1, 0.1);

/// Player entity and its per-frame control: polled start trigger in `Idle`,
/// flap-while-held in `Running`, velocity-derived tilt and a world-bounds
/// clamp. The flap key is deliberately level-triggered: holding space
/// re-applies the impulse every frame it is down.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bird)
            .add_systems(OnEnter(GameState::Running), enable_gravity)
            .add_systems(
                Update,
                (
                    start_input.run_if(in_state(GameState::Idle)),
                    flap_input.run_if(in_state(GameState::Running)),
                )
                    .in_set(InputSet),
            )
            .add_systems(
                Update,
                (tilt_bird, clamp_to_bounds)
                    .run_if(in_state(GameState::Running))
                    .in_set(MovementSet),
            );
    }
}

fn spawn_bird(mut commands: Commands, cfg: Res<GameConfig>) {
    let p = &cfg.player;
    commands.spawn((
        Bird,
        Sprite {
            color: BIRD_COLOR,
            custom_size: Some(Vec2::new(p.width, p.height)),
            ..default()
        },
        Transform::from_translation(Vec3::new(p.start_x, p.start_y, 1.0)),
        RigidBody::Dynamic,
        Collider::cuboid(p.width * p.hitbox_scale * 0.5, p.height * p.hitbox_scale * 0.5),
        Velocity::zero(),
        // Gravity stays off until the run starts.
        GravityScale(0.0),
        LockedAxes::ROTATION_LOCKED,
        ActiveEvents::COLLISION_EVENTS,
        Ccd::enabled(),
    ));
}

fn enable_gravity(mut birds: Query<&mut GravityScale, With<Bird>>) {
    for mut scale in &mut birds {
        scale.0 = 1.0;
    }
}

/// Polled (not edge-triggered) start detection, matching the flap key.
fn start_input(keys: Res<ButtonInput<KeyCode>>, mut next: ResMut<NextState<GameState>>) {
    if keys.pressed(KeyCode::Space) {
        info!(target: "game_state", "run started");
        next.set(GameState::Running);
    }
}

fn flap_input(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut birds: Query<&mut Velocity, With<Bird>>,
) {
    if !keys.pressed(KeyCode::Space) {
        return;
    }
    for mut vel in &mut birds {
        vel.linvel.y = cfg.player.flap_speed;
    }
}

/// Visual tilt from the vertical velocity sign: nose up while rising, nose
/// down while falling, level otherwise.
fn tilt_bird(cfg: Res<GameConfig>, mut birds: Query<(&Velocity, &mut Transform), With<Bird>>) {
    for (vel, mut tf) in &mut birds {
        let tilt = if vel.linvel.y > 0.0 {
            cfg.player.tilt
        } else if vel.linvel.y < 0.0 {
            -cfg.player.tilt
        } else {
            0.0
        };
        tf.rotation = Quat::from_rotation_z(tilt);
    }
}

/// The bird may not leave the play field vertically.
fn clamp_to_bounds(
    cfg: Res<GameConfig>,
    bounds: Option<Res<WorldBounds>>,
    mut birds: Query<(&mut Transform, &mut Velocity), With<Bird>>,
) {
    let Some(bounds) = bounds else { return };
    let half_h = cfg.player.height * 0.5;
    for (mut tf, mut vel) in &mut birds {
        let floor = -bounds.half_height + half_h;
        let ceiling = bounds.half_height - half_h;
        if tf.translation.y < floor {
            tf.translation.y = floor;
            vel.linvel.y = vel.linvel.y.max(0.0);
        } else if tf.translation.y > ceiling {
            tf.translation.y = ceiling;
            vel.linvel.y = vel.linvel.y.min(0.0);
        }
    }
}
