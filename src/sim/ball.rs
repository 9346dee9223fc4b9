//! Ball entity
//!
//! Balls move in whole-pixel steps. Collision code never looks at the ball's
//! circle, only at its four cardinal contact points.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::Bounds;
use super::traits::Movable;
use crate::consts::{BALL_RADIUS, MAX_BALL_SPEED};

/// Main ball or disposable clone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallKind {
    /// The ball whose loss costs a life
    Main,
    /// Bonus ball, discarded when it leaves the play area or expires
    Clone { ttl_ticks: u32 },
}

/// Points on the ball's rim used for collision tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactPoints {
    pub up: Vec2,
    pub down: Vec2,
    pub left: Vec2,
    pub right: Vec2,
}

impl ContactPoints {
    fn around(center: Vec2, radius: f32) -> Self {
        Self {
            up: center - Vec2::new(0.0, radius),
            down: center + Vec2::new(0.0, radius),
            left: center - Vec2::new(radius, 0.0),
            right: center + Vec2::new(radius, 0.0),
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub kind: BallKind,
    center: Vec2,
    radius: f32,
    speed_x: i32,
    speed_y: i32,
    contacts: ContactPoints,
}

impl Ball {
    /// Create a ball at `center` with a fresh upward speed
    pub fn new<R: Rng>(id: u32, kind: BallKind, center: Vec2, rng: &mut R) -> Self {
        let mut ball = Self {
            id,
            kind,
            center,
            radius: BALL_RADIUS,
            speed_x: 1,
            speed_y: -1,
            contacts: ContactPoints::around(center, BALL_RADIUS),
        };
        ball.set_random_speed(rng);
        ball
    }

    /// Create a ball with an explicit speed (zero components become 1 / -1)
    pub fn with_speed(id: u32, kind: BallKind, center: Vec2, speed_x: i32, speed_y: i32) -> Self {
        let mut ball = Self {
            id,
            kind,
            center,
            radius: BALL_RADIUS,
            speed_x: 1,
            speed_y: -1,
            contacts: ContactPoints::around(center, BALL_RADIUS),
        };
        ball.set_speed(speed_x, speed_y);
        ball
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn speed(&self) -> (i32, i32) {
        (self.speed_x, self.speed_y)
    }

    #[inline]
    pub fn contacts(&self) -> &ContactPoints {
        &self.contacts
    }

    pub fn is_clone(&self) -> bool {
        matches!(self.kind, BallKind::Clone { .. })
    }

    pub fn reverse_x(&mut self) {
        self.speed_x = -self.speed_x;
    }

    pub fn reverse_y(&mut self) {
        self.speed_y = -self.speed_y;
    }

    /// Draw a new launch speed: any horizontal direction, always upward.
    ///
    /// Zero draws are re-rolled so the ball never travels on a pure axis.
    pub fn set_random_speed<R: Rng>(&mut self, rng: &mut R) {
        self.speed_x = loop {
            let x = rng.random_range(-MAX_BALL_SPEED..=MAX_BALL_SPEED);
            if x != 0 {
                break x;
            }
        };
        self.speed_y = loop {
            let y = -rng.random_range(0..=MAX_BALL_SPEED);
            if y != 0 {
                break y;
            }
        };
    }

    /// Set speed directly (debug console). Components are clamped to the speed
    /// limit; a zero component keeps its previous value.
    pub fn set_speed(&mut self, speed_x: i32, speed_y: i32) {
        let speed_x = speed_x.clamp(-MAX_BALL_SPEED, MAX_BALL_SPEED);
        let speed_y = speed_y.clamp(-MAX_BALL_SPEED, MAX_BALL_SPEED);
        if speed_x != 0 {
            self.speed_x = speed_x;
        }
        if speed_y != 0 {
            self.speed_y = speed_y;
        }
    }

    /// Count down a clone's lifetime. Returns false once it has expired.
    pub fn age(&mut self) -> bool {
        match &mut self.kind {
            BallKind::Main => true,
            BallKind::Clone { ttl_ticks } => {
                *ttl_ticks = ttl_ticks.saturating_sub(1);
                *ttl_ticks > 0
            }
        }
    }
}

impl Movable for Ball {
    fn step(&mut self) {
        self.center += Vec2::new(self.speed_x as f32, self.speed_y as f32);
        self.contacts = ContactPoints::around(self.center, self.radius);
    }

    fn move_to(&mut self, pos: Vec2) {
        self.center = pos;
        self.contacts = ContactPoints::around(self.center, self.radius);
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_pos_size(
            self.center - Vec2::splat(self.radius),
            Vec2::splat(self.radius * 2.0),
        )
    }
}
