use anyhow::{Context, Result};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Persisted best-score record: a single scalar under a fixed key, surviving
/// process restarts. Missing or corrupt data is never fatal; it reads as 0.
#[derive(Resource, Debug, Clone)]
pub struct ScoreStore {
    path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Default)]
struct HighScoreRecord {
    high_score: f32,
}

impl ScoreStore {
    /// Store backed by the platform data directory (created on demand).
    pub fn open() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "skydodge")
            .context("could not determine a data directory")?;
        let dir = dirs.data_dir();
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self::at_path(dir.join("high_score.ron")))
    }

    /// Store backed by an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store that reads 0 and discards writes. Used when no data directory
    /// is available, so persistence problems never block play.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Read the persisted best score; absent or unreadable records yield 0.
    pub fn load(&self) -> f32 {
        let Some(path) = &self.path else { return 0.0 };
        match read_record(path) {
            Ok(Some(record)) => record.high_score.max(0.0),
            Ok(None) => 0.0,
            Err(e) => {
                warn!(target: "score_store", "ignoring unreadable high score ({e}); starting at 0");
                0.0
            }
        }
    }

    pub fn save(&self, high_score: f32) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = ron::ser::to_string(&HighScoreRecord { high_score })
            .context("serialize high score")?;
        fs::write(path, data).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

fn read_record(path: &Path) -> Result<Option<HighScoreRecord>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
    };
    let record = ron::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(record))
}
