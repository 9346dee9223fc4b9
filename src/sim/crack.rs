//! Crack paths drawn on damaged bricks
//!
//! Purely cosmetic. Collision always uses the brick's rectangle.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::brick::Impact;
use super::geom::Bounds;

/// Paths are split into this many sections; only the middle ones jump
const CRACK_SECTIONS: usize = 3;
/// Chance that a middle vertex jumps further than the normal jitter
const JUMP_CHANCE: f64 = 0.3;
/// Jump distance as a multiple of crack depth
const JUMP_FACTOR: i32 = 5;

/// Jagged polylines accumulated on one brick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Crack {
    depth: i32,
    steps: usize,
    paths: Vec<Vec<Vec2>>,
}

impl Crack {
    pub fn new(depth: i32, steps: usize) -> Self {
        Self {
            depth: depth.max(0),
            steps: steps.max(1),
            paths: Vec::new(),
        }
    }

    /// All crack polylines, oldest first
    pub fn paths(&self) -> &[Vec<Vec2>] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn reset(&mut self) {
        self.paths.clear();
    }

    /// Add a crack running from `point` to a random spot on the side of
    /// `bounds` opposite the one that was hit.
    pub fn make_crack<R: Rng>(
        &mut self,
        point: Vec2,
        impact: Impact,
        bounds: &Bounds,
        rng: &mut R,
    ) {
        let target_side = impact.side().opposite();
        let (from, to) = bounds.side(target_side);
        let end = if target_side.is_horizontal() {
            Vec2::new(random_between(from.x, to.x, rng), from.y)
        } else {
            Vec2::new(from.x, random_between(from.y, to.y, rng))
        };

        // Cracks heading across a horizontal side travel vertically, so they
        // wobble in x; the others wobble in y.
        let jitter_x = target_side.is_horizontal();
        let path = self.jagged_line(point, end, jitter_x, rng);
        log::debug!(
            "crack from ({:.0}, {:.0}) toward {:?} side, {} vertices",
            point.x,
            point.y,
            target_side,
            path.len()
        );
        self.paths.push(path);
    }

    fn jagged_line<R: Rng>(
        &self,
        start: Vec2,
        end: Vec2,
        jitter_x: bool,
        rng: &mut R,
    ) -> Vec<Vec2> {
        let steps = self.steps;
        let delta = (end - start) / steps as f32;
        let mut path = Vec::with_capacity(steps + 1);
        path.push(start);

        for i in 1..steps {
            let mut offset = random_in_bounds(self.depth, rng);
            if in_middle(i, CRACK_SECTIONS, steps) && rng.random_bool(JUMP_CHANCE) {
                offset += random_in_bounds(self.depth * JUMP_FACTOR, rng);
            }
            let mut vertex = start + delta * i as f32;
            if jitter_x {
                vertex.x += offset as f32;
            } else {
                vertex.y += offset as f32;
            }
            path.push(vertex);
        }

        path.push(end);
        path
    }
}

/// Uniform integer in `[-bound, bound]`
fn random_in_bounds<R: Rng>(bound: i32, rng: &mut R) -> i32 {
    if bound <= 0 {
        return 0;
    }
    rng.random_range(-bound..=bound)
}

fn random_between<R: Rng>(a: f32, b: f32, rng: &mut R) -> f32 {
    if b > a { rng.random_range(a..b) } else { a }
}

fn in_middle(i: usize, divisions: usize, steps: usize) -> bool {
    let low = steps / divisions;
    let up = low * (divisions - 1);
    i > low && i < up
}
