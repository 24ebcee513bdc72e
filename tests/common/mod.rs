use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use skydodge::{GameConfig, GamePlugin, GameState, ScoreStore};

/// Headless app: no windowing or rendering, real physics and state plugins.
/// World bounds fall back to the configured window size.
pub fn app_with(cfg: GameConfig, store: ScoreStore) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, TransformPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(cfg);
    app.insert_resource(store);
    app.add_plugins(GamePlugin);
    // Run startup and settle the initial state.
    app.update();
    app
}

pub fn app_default() -> App {
    app_with(GameConfig::default(), ScoreStore::disabled())
}

pub fn set_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

pub fn current_state(app: &mut App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}
