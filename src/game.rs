use bevy::prelude::*;

use crate::camera::CameraPlugin;
use crate::collision::CollisionPlugin;
use crate::hud::HudPlugin;
use crate::player::PlayerPlugin;
use crate::rapier_physics::PhysicsSetupPlugin;
use crate::score_store::ScoreStore;
use crate::scoring::ScoringPlugin;
use crate::spawn::SpawnPlugin;
use crate::state::{GameState, HighScore, Score};
use crate::system_order::{InputSet, MovementSet, ScoringSet};

/// Top-level aggregation: state machine, tick ordering, and the per-concern
/// plugins. Expects `GameConfig` to be inserted before this plugin; a
/// `ScoreStore` may be inserted beforehand (tests do), otherwise the
/// platform store is opened, degrading to a disabled store on failure.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ScoreStore>() {
            let store = match ScoreStore::open() {
                Ok(store) => store,
                Err(e) => {
                    warn!(target: "score_store", "high score store unavailable: {e}");
                    ScoreStore::disabled()
                }
            };
            app.insert_resource(store);
        }
        app.init_state::<GameState>()
            .init_resource::<Score>()
            .init_resource::<HighScore>()
            .configure_sets(
                Update,
                (
                    InputSet,
                    MovementSet.after(InputSet),
                    ScoringSet.after(MovementSet),
                ),
            )
            .add_systems(Startup, load_high_score)
            .add_plugins((
                CameraPlugin,
                PhysicsSetupPlugin,
                PlayerPlugin,
                SpawnPlugin,
                ScoringPlugin,
                CollisionPlugin,
                HudPlugin,
            ));
    }
}

fn load_high_score(store: Res<ScoreStore>, mut high: ResMut<HighScore>) {
    high.0 = store.load();
    info!(target: "score_store", "loaded high score {}", high.0);
}
