//! Game settings
//!
//! Level list and tuning knobs, persisted as JSON. Level and brick names stay
//! strings here and are resolved by [`Settings::level_specs`], so a bad name
//! is reported when the session is built, never mid-game.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::geom::Bounds;
use crate::sim::level::{LevelLayout, LevelSpec};

/// One level as written in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub kind: String,
    pub type_a: String,
    pub type_b: String,
}

impl LevelConfig {
    pub fn new(kind: &str, type_a: &str, type_b: &str) -> Self {
        Self {
            kind: kind.to_string(),
            type_a: type_a.to_string(),
            type_b: type_b.to_string(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name recorded on the leaderboard
    pub player_name: String,

    // === Levels ===
    pub levels: Vec<LevelConfig>,
    pub brick_count: usize,
    pub line_count: usize,
    /// Brick width divided by brick height
    pub brick_size_ratio: f32,

    // === Play ===
    /// Balls per game
    pub ball_count: u32,
    /// Paddle pixels per tick
    pub paddle_step: f32,
    /// Start in bot mode
    pub bot_mode: bool,

    // === Clones ===
    /// Chance that breaking a brick spawns a clone ball
    pub clone_chance: f64,
    pub max_clones: usize,
    /// Clone lifetime in ticks
    pub clone_lifetime_ticks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),

            levels: vec![
                LevelConfig::new("straight_lines", "clay", "clay"),
                LevelConfig::new("chain", "clay", "cement"),
                LevelConfig::new("two_lines", "clay", "steel"),
                LevelConfig::new("chain", "steel", "cement"),
                LevelConfig::new("random", "clay", "clay"),
                LevelConfig::new("two_lines", "reinforced_steel", "cement"),
            ],
            brick_count: BRICK_COUNT,
            line_count: LINE_COUNT,
            brick_size_ratio: BRICK_SIZE_RATIO,

            ball_count: BALL_COUNT,
            paddle_step: PADDLE_STEP,
            bot_mode: false,

            clone_chance: 0.1,
            max_clones: 3,
            clone_lifetime_ticks: 20 * TICKS_PER_SEC as u32,
        }
    }
}

impl Settings {
    /// Resolve every configured level, failing on the first bad name
    pub fn level_specs(&self) -> Result<Vec<LevelSpec>, GameError> {
        if self.levels.is_empty() {
            return Err(GameError::NoLevels);
        }
        self.levels
            .iter()
            .map(|l| LevelSpec::parse(&l.kind, &l.type_a, &l.type_b))
            .collect()
    }

    /// Clone spawn chance clamped to `[0, 1]`; NaN or infinite is an error
    pub fn clone_chance(&self) -> Result<f64, GameError> {
        if !self.clone_chance.is_finite() {
            return Err(GameError::InvalidCloneChance {
                chance: self.clone_chance.to_string(),
            });
        }
        Ok(self.clone_chance.clamp(0.0, 1.0))
    }

    /// Check names, wall dimensions and tuning without building anything
    pub fn validate(&self) -> Result<(), GameError> {
        self.level_specs()?;
        self.clone_chance()?;
        let area = Bounds::new(0.0, 0.0, AREA_WIDTH, AREA_HEIGHT);
        LevelLayout::new(&area, self.brick_count, self.line_count, self.brick_size_ratio)?;
        Ok(())
    }

    /// Read settings from a JSON file
    pub fn try_load(path: &Path) -> Result<Self, GameError> {
        let json = fs::read_to_string(path).map_err(|e| GameError::storage(path, e))?;
        serde_json::from_str(&json).map_err(|e| GameError::storage(path, e))
    }

    /// Read settings, falling back to defaults if the file is missing or bad
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| GameError::storage(path, e))?;
        fs::write(path, json).map_err(|e| GameError::storage(path, e))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
