//! Brickfall - A brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, levels, game state)
//! - `timer`: Elapsed-time tracking for levels
//! - `highscores`: Leaderboard merge and persistence
//! - `settings`: Data-driven game configuration
//! - `error`: Configuration and storage errors

pub mod error;
pub mod highscores;
pub mod settings;
pub mod sim;
pub mod timer;

pub use error::GameError;
pub use highscores::HighScores;
pub use settings::Settings;
pub use timer::GameTimer;

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval in milliseconds (100 Hz)
    pub const TICK_MS: u64 = 10;
    /// Ticks per second of simulated time
    pub const TICKS_PER_SEC: u64 = 1000 / TICK_MS;

    /// Play area dimensions
    pub const AREA_WIDTH: f32 = 600.0;
    pub const AREA_HEIGHT: f32 = 450.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Pixels moved per tick while a direction key is held
    pub const PADDLE_STEP: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Upper bound on either speed component (pixels per tick)
    pub const MAX_BALL_SPEED: i32 = 5;

    /// Where paddle (top center) and ball (center) start each round
    pub const START_X: f32 = 300.0;
    pub const START_Y: f32 = 430.0;

    /// Brick wall defaults
    pub const BRICK_COUNT: usize = 30;
    pub const LINE_COUNT: usize = 3;
    pub const BRICK_SIZE_RATIO: f32 = 3.0;

    /// Balls per game
    pub const BALL_COUNT: u32 = 3;

    /// Crack defaults
    pub const CRACK_DEPTH: i32 = 1;
    pub const CRACK_STEPS: usize = 35;
}
