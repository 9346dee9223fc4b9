//! Errors surfaced to the caller
//!
//! Only configuration and storage problems are errors. Everything that can go
//! wrong inside a tick is handled locally by the simulation.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Level type name did not match any generator
    UnknownLevel { name: String },
    /// Brick material name did not match any brick kind
    UnknownBrick { name: String },
    /// Brick/line counts cannot produce a single full row
    InvalidLayout { brick_count: usize, line_count: usize },
    /// Brick size ratio must be positive and finite
    InvalidRatio { ratio: String },
    /// Clone spawn chance must be a finite number
    InvalidCloneChance { chance: String },
    /// Settings contained no levels to play
    NoLevels,
    /// Reading or writing a settings/leaderboard file failed
    Storage { path: String, reason: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLevel { name } => write!(f, "unrecognized level type: '{name}'"),
            Self::UnknownBrick { name } => write!(f, "unrecognized brick kind: '{name}'"),
            Self::InvalidLayout {
                brick_count,
                line_count,
            } => write!(
                f,
                "invalid level layout: {brick_count} bricks cannot fill {line_count} lines"
            ),
            Self::InvalidRatio { ratio } => {
                write!(f, "invalid brick size ratio: {ratio} (must be > 0)")
            }
            Self::InvalidCloneChance { chance } => {
                write!(f, "invalid clone chance: {chance} (must be finite)")
            }
            Self::NoLevels => write!(f, "no levels configured"),
            Self::Storage { path, reason } => write!(f, "storage error at {path}: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}

impl GameError {
    pub(crate) fn storage(path: &std::path::Path, reason: impl fmt::Display) -> Self {
        Self::Storage {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}
