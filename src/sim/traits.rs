//! Capability interfaces for entities
//!
//! Paddle and balls move; bricks take impacts. Collision code only talks to
//! these two traits.

use glam::Vec2;
use rand::Rng;

use super::ball::Ball;
use super::brick::Impact;
use super::geom::Bounds;

/// An entity that advances its own position each tick
pub trait Movable {
    /// Advance one tick
    fn step(&mut self);
    /// Teleport to a new reference position (center for balls, top center for paddles)
    fn move_to(&mut self, pos: Vec2);
    /// Current collision box
    fn bounds(&self) -> Bounds;
}

/// An entity that can be hit by a ball
pub trait Impactable {
    /// Classify which side of the entity the ball is touching, if any
    fn find_impact(&self, ball: &Ball) -> Option<Impact>;
    /// Apply one hit at `point`. Returns true if the entity is now broken.
    fn set_impact<R: Rng>(&mut self, point: Vec2, impact: Impact, rng: &mut R) -> bool;
    /// Restore to undamaged state
    fn repair(&mut self);
    fn is_broken(&self) -> bool;
}
