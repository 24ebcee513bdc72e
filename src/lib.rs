pub mod camera;
pub mod collision;
pub mod components;
pub mod config;
pub mod game;
pub mod hud;
pub mod player;
pub mod rapier_physics;
pub mod score_store;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod system_order;

// Curated re-exports
pub use config::GameConfig;
pub use game::GamePlugin;
pub use score_store::ScoreStore;
pub use state::{GameState, HighScore, Score};
