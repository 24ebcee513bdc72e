use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::GameConfig;
use crate::state::GameState;

/// Wrapper configuring Rapier: global downward gravity from config, plus
/// pipeline pause/resume tied to the game state. Per-entity gravity is
/// controlled separately through `GravityScale`.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(PostStartup, configure_gravity)
            .add_systems(OnEnter(GameState::Over), pause_physics)
            .add_systems(OnEnter(GameState::Idle), resume_physics);
    }
}

fn configure_gravity(mut rapier_cfg: Query<&mut RapierConfiguration>, game_cfg: Res<GameConfig>) {
    if let Ok(mut cfg) = rapier_cfg.single_mut() {
        cfg.gravity = Vect::new(0.0, game_cfg.gravity.y);
    }
}

fn pause_physics(mut rapier_cfg: Query<&mut RapierConfiguration>) {
    if let Ok(mut cfg) = rapier_cfg.single_mut() {
        cfg.physics_pipeline_active = false;
    }
}

fn resume_physics(mut rapier_cfg: Query<&mut RapierConfiguration>) {
    if let Ok(mut cfg) = rapier_cfg.single_mut() {
        cfg.physics_pipeline_active = true;
    }
}
