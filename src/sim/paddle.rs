//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geom::Bounds;
use super::traits::Movable;
use crate::consts::{PADDLE_HEIGHT, PADDLE_STEP, PADDLE_WIDTH};

/// Horizontal movement intent from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleCommand {
    Left,
    Right,
    Stop,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    bounds: Bounds,
    /// Signed pixels moved per tick
    move_amount: f32,
    step: f32,
    lowest_x: f32,
    highest_x: f32,
}

impl Paddle {
    /// Build a paddle whose top edge is centered on `start`, confined to `area`
    pub fn new(start: Vec2, area: &Bounds) -> Self {
        Self::with_size(start, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT), PADDLE_STEP, area)
    }

    pub fn with_size(start: Vec2, size: Vec2, step: f32, area: &Bounds) -> Self {
        let lowest_x = area.x();
        let highest_x = (area.right() - size.x).max(lowest_x);
        Self {
            bounds: Bounds::new(start.x - size.x / 2.0, start.y, size.x, size.y),
            move_amount: 0.0,
            step: step.abs(),
            lowest_x,
            highest_x,
        }
    }

    #[inline]
    pub fn move_amount(&self) -> f32 {
        self.move_amount
    }

    /// Allowed range for the paddle's left edge
    pub fn travel_range(&self) -> (f32, f32) {
        (self.lowest_x, self.highest_x)
    }

    pub fn center_x(&self) -> f32 {
        self.bounds.x() + self.bounds.width() / 2.0
    }

    pub fn command(&mut self, command: PaddleCommand) {
        self.move_amount = match command {
            PaddleCommand::Left => -self.step,
            PaddleCommand::Right => self.step,
            PaddleCommand::Stop => 0.0,
        };
    }

    /// A ball bounces off the paddle only while both its center and its
    /// bottom point are inside, so a ball already past the top edge is not
    /// bounced again.
    pub fn impact(&self, ball: &Ball) -> bool {
        self.bounds.contains(ball.center()) && self.bounds.contains(ball.contacts().down)
    }
}

impl Movable for Paddle {
    /// Shift by `move_amount`; refused outright if it would leave the travel range
    fn step(&mut self) {
        let x = self.bounds.x() + self.move_amount;
        if x < self.lowest_x || x > self.highest_x {
            return;
        }
        self.bounds.pos.x = x;
    }

    fn move_to(&mut self, pos: Vec2) {
        self.bounds.pos = Vec2::new(pos.x - self.bounds.width() / 2.0, pos.y);
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}
