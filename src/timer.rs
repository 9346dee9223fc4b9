//! Level timer
//!
//! Counts simulation ticks rather than wall-clock time, so pausing is just
//! not advancing it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{TICK_MS, TICKS_PER_SEC};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameTimer {
    elapsed_ticks: u64,
    running: bool,
}

impl GameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop and zero the timer
    pub fn reset(&mut self) {
        self.elapsed_ticks = 0;
        self.running = false;
    }

    /// Advance by one tick if running
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_ticks += 1;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ticks * TICK_MS
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ticks as f64 / TICKS_PER_SEC as f64
    }
}

/// Formats as `mm:ss`
impl fmt::Display for GameTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed_ticks / TICKS_PER_SEC;
        write!(f, "{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_only_counts_while_running() {
        let mut timer = GameTimer::new();
        timer.tick();
        assert_eq!(timer.elapsed_ticks(), 0);

        timer.start();
        for _ in 0..250 {
            timer.tick();
        }
        timer.pause();
        timer.tick();
        assert_eq!(timer.elapsed_ticks(), 250);
        assert_eq!(timer.elapsed_ms(), 2500);
        assert!((timer.elapsed_secs() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_timer_display() {
        let mut timer = GameTimer::new();
        timer.start();
        for _ in 0..(TICKS_PER_SEC * 75) {
            timer.tick();
        }
        assert_eq!(timer.to_string(), "01:15");
        timer.reset();
        assert_eq!(timer.to_string(), "00:00");
        assert!(!timer.is_running());
    }
}
