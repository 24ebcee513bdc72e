use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Sky Dodge".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -900.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_x: f32,
    pub start_y: f32,
    pub width: f32,
    pub height: f32,
    /// Instantaneous upward velocity applied every frame the flap key is held.
    pub flap_speed: f32,
    /// Visual tilt (radians) applied while rising / falling.
    pub tilt: f32,
    /// Collider size as a fraction of the visual sprite size.
    pub hitbox_scale: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: -300.0,
            start_y: 0.0,
            width: 48.0,
            height: 36.0,
            flap_speed: 300.0,
            tilt: 0.1,
            hitbox_scale: 0.8,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PipeConfig {
    /// Seconds between pipe-pair spawns.
    pub spawn_period: f32,
    /// Constant horizontal velocity (negative = leftward scroll).
    pub scroll_speed: f32,
    /// Vertical range the hole center is drawn from (world coordinates).
    pub hole_center: SpawnRange<f32>,
    /// Distance from the hole center to each pipe opening. The vertical gap
    /// between the two openings is always exactly twice this value.
    pub half_gap: f32,
    /// Visual width of a pipe sprite.
    pub width: f32,
    /// Height of one pipe segment; total height = segment_height * scale.
    pub segment_height: f32,
    /// Integer height-scale range, drawn independently per pipe (inclusive).
    pub height_scale: SpawnRange<i32>,
    /// Collider width as a fraction of the visual width (hitbox kept tight
    /// against the sprite).
    pub hitbox_width_frac: f32,
}
impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            spawn_period: 1.5,
            scroll_speed: -400.0,
            hole_center: SpawnRange {
                min: -150.0,
                max: 150.0,
            },
            half_gap: 150.0,
            width: 80.0,
            segment_height: 64.0,
            height_scale: SpawnRange { min: 2, max: 5 },
            hitbox_width_frac: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnemyConfig {
    /// Seconds between enemy spawns.
    pub spawn_period: f32,
    pub scroll_speed: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical margin kept from the top/bottom world edges when spawning.
    pub margin: f32,
    /// Collider size as a fraction of the visual sprite size.
    pub hitbox_scale: f32,
}
impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            spawn_period: 2.0,
            scroll_speed: -200.0,
            width: 48.0,
            height: 48.0,
            margin: 50.0,
            hitbox_scale: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score added per passed pipe object. A pair is two pipes sharing one
    /// hole, so a cleared pair is worth twice this value.
    pub pass_increment: f32,
}
impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pass_increment: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub player: PlayerConfig,
    pub pipes: PipeConfig,
    pub enemies: EnemyConfig,
    pub scoring: ScoringConfig,
    /// Seconds between a terminal collision and the automatic full reset.
    pub reset_delay: f32,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            player: Default::default(),
            pipes: Default::default(),
            enemies: Default::default(),
            scoring: Default::default(),
            reset_delay: 1.5,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Sanity-check ranges and periods. Returns human-readable warnings;
    /// never fatal (the game runs with whatever it was given).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.pipes.spawn_period < 0.0 {
            warnings.push("pipes.spawn_period is negative".into());
        }
        if self.enemies.spawn_period < 0.0 {
            warnings.push("enemies.spawn_period is negative".into());
        }
        if self.reset_delay < 0.0 {
            warnings.push("reset_delay is negative".into());
        }
        if self.pipes.hole_center.min >= self.pipes.hole_center.max {
            warnings.push("pipes.hole_center range is empty (hole position will not vary)".into());
        }
        if self.pipes.height_scale.min > self.pipes.height_scale.max {
            warnings.push("pipes.height_scale min exceeds max".into());
        }
        if self.pipes.height_scale.min < 1 {
            warnings.push("pipes.height_scale.min below 1".into());
        }
        if self.pipes.half_gap <= 0.0 {
            warnings.push("pipes.half_gap must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.pipes.hitbox_width_frac) {
            warnings.push("pipes.hitbox_width_frac outside [0, 1]".into());
        }
        if self.pipes.scroll_speed >= 0.0 {
            warnings.push("pipes.scroll_speed is not leftward (expected negative)".into());
        }
        if self.enemies.scroll_speed >= 0.0 {
            warnings.push("enemies.scroll_speed is not leftward (expected negative)".into());
        }
        if self.scoring.pass_increment < 0.0 {
            warnings.push("scoring.pass_increment is negative".into());
        }
        if self.enemies.margin * 2.0 >= self.window.height {
            warnings.push("enemies.margin leaves no vertical room to spawn".into());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_design_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.pipes.spawn_period, 1.5);
        assert_eq!(cfg.enemies.spawn_period, 2.0);
        assert_eq!(cfg.reset_delay, 1.5);
        assert_eq!(cfg.pipes.half_gap, 150.0);
        assert_eq!(cfg.pipes.height_scale.min, 2);
        assert_eq!(cfg.pipes.height_scale.max, 5);
        assert_eq!(cfg.scoring.pass_increment, 0.5);
        assert!(cfg.validate().is_empty(), "defaults must validate cleanly");
    }

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 1024.0, height: 768.0, title: "Test"),
            gravity: (y: -600.0),
            player: (
                start_x: -200.0,
                start_y: 10.0,
                width: 40.0,
                height: 30.0,
                flap_speed: 250.0,
                tilt: 0.15,
                hitbox_scale: 0.75,
            ),
            pipes: (
                spawn_period: 2.5,
                scroll_speed: -300.0,
                hole_center: (min: -100.0, max: 100.0),
                half_gap: 120.0,
                width: 64.0,
                segment_height: 48.0,
                height_scale: (min: 2, max: 4),
                hitbox_width_frac: 0.4,
            ),
            enemies: (
                spawn_period: 3.0,
                scroll_speed: -150.0,
                width: 32.0,
                height: 32.0,
                margin: 40.0,
                hitbox_scale: 0.5,
            ),
            scoring: (pass_increment: 1.0),
            reset_delay: 2.0,
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 1024.0);
        assert_eq!(cfg.pipes.spawn_period, 2.5);
        assert_eq!(cfg.pipes.height_scale.max, 4);
        assert_eq!(cfg.enemies.margin, 40.0);
        assert_eq!(cfg.scoring.pass_increment, 1.0);
        assert_eq!(cfg.reset_delay, 2.0);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        // Sections and fields are all optional; unknown sections absent.
        let cfg: GameConfig = ron::from_str("(pipes: (spawn_period: 0.5))").expect("parse");
        assert_eq!(cfg.pipes.spawn_period, 0.5);
        assert_eq!(cfg.pipes.half_gap, 150.0);
        assert_eq!(cfg.window.width, 800.0);
    }

    #[test]
    fn missing_file_yields_defaults_with_error() {
        let (cfg, err) = GameConfig::load_or_default("definitely/not/here.ron");
        assert_eq!(cfg, GameConfig::default());
        assert!(err.is_some());
    }

    #[test]
    fn validate_detects_warnings() {
        let mut cfg = GameConfig::default();
        cfg.pipes.hole_center.min = 200.0;
        cfg.pipes.hole_center.max = -200.0;
        cfg.pipes.scroll_speed = 400.0;
        cfg.reset_delay = -1.0;
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 3, "warnings: {warnings:?}");
    }

    #[test]
    fn validate_flags_degenerate_spawn_ranges() {
        // A fixed hole position and an oversized enemy margin are accepted
        // (the game keeps running) but must be called out.
        let mut cfg = GameConfig::default();
        cfg.pipes.hole_center.min = 100.0;
        cfg.pipes.hole_center.max = 100.0;
        cfg.enemies.margin = 300.0;
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 2, "warnings: {warnings:?}");
        assert!(warnings.iter().any(|w| w.contains("hole_center")));
        assert!(warnings.iter().any(|w| w.contains("enemies.margin")));
    }
}
