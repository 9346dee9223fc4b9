//! Level-time leaderboard
//!
//! Each completed level produces a record. Higher levels rank first; within a
//! level the faster time wins. Persisted as JSON, top 10 kept.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Maximum number of records to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub player: String,
    /// Level completed (1-based)
    pub level: u32,
    /// Time spent on that level
    pub elapsed_secs: f64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

impl HighScoreEntry {
    /// True if a record with this level/time should sort above `self`
    fn is_beaten_by(&self, level: u32, elapsed_secs: f64) -> bool {
        level > self.level || (level == self.level && elapsed_secs < self.elapsed_secs)
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Index a record would be inserted at
    fn insertion_point(&self, level: u32, elapsed_secs: f64) -> usize {
        self.entries
            .iter()
            .position(|e| e.is_beaten_by(level, elapsed_secs))
            .unwrap_or(self.entries.len())
    }

    /// Check if a record would make the leaderboard
    pub fn qualifies(&self, level: u32, elapsed_secs: f64) -> bool {
        if level == 0 || !elapsed_secs.is_finite() {
            return false;
        }
        self.insertion_point(level, elapsed_secs) < MAX_HIGH_SCORES
    }

    /// Get the rank a record would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, level: u32, elapsed_secs: f64) -> Option<usize> {
        self.qualifies(level, elapsed_secs)
            .then(|| self.insertion_point(level, elapsed_secs) + 1)
    }

    /// Merge a new record into the leaderboard (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_record(
        &mut self,
        player: &str,
        level: u32,
        elapsed_secs: f64,
        timestamp: f64,
    ) -> Option<usize> {
        let rank = self.potential_rank(level, elapsed_secs)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                player: player.to_string(),
                level,
                elapsed_secs,
                timestamp,
            },
        );

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best record (if any)
    pub fn top(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    /// Load the leaderboard, starting fresh if the file is missing or unreadable
    pub fn load(path: &Path) -> Self {
        let loaded = fs::read_to_string(path)
            .map_err(|e| GameError::storage(path, e))
            .and_then(|json| {
                serde_json::from_str::<HighScores>(&json).map_err(|e| GameError::storage(path, e))
            });
        match loaded {
            Ok(scores) => {
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Err(e) => {
                log::info!("No high scores found ({e}), starting fresh");
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| GameError::storage(path, e))?;
        fs::write(path, json).map_err(|e| GameError::storage(path, e))?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

/// Format seconds as `mm:ss`
pub fn format_time(elapsed_secs: f64) -> String {
    let secs = elapsed_secs.max(0.0) as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
