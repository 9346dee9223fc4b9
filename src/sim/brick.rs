//! Bricks and their materials
//!
//! A brick is a rectangle with a strength counter. Materials differ in
//! strength, whether they crack and how often a hit actually lands.

use std::str::FromStr;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::crack::Crack;
use super::geom::{Bounds, Side};
use super::traits::Impactable;
use crate::consts::{CRACK_DEPTH, CRACK_STEPS};
use crate::error::GameError;

/// Which face of a brick the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    /// Ball came from above (its down point is inside)
    Up,
    /// Ball came from below (its up point is inside)
    Down,
    /// Ball came from the left (its right point is inside)
    Left,
    /// Ball came from the right (its left point is inside)
    Right,
}

impl Impact {
    /// The brick face that was struck
    pub fn side(self) -> Side {
        match self {
            Impact::Up => Side::Top,
            Impact::Down => Side::Bottom,
            Impact::Left => Side::Left,
            Impact::Right => Side::Right,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Impact::Left | Impact::Right)
    }

    /// The ball's contact point that produced this impact
    pub fn contact_point(self, ball: &Ball) -> Vec2 {
        let c = ball.contacts();
        match self {
            Impact::Up => c.down,
            Impact::Down => c.up,
            Impact::Left => c.right,
            Impact::Right => c.left,
        }
    }
}

/// Brick materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    #[default]
    Clay,
    Cement,
    Steel,
    ReinforcedSteel,
}

impl BrickKind {
    pub const ALL: [BrickKind; 4] = [
        BrickKind::Clay,
        BrickKind::Cement,
        BrickKind::Steel,
        BrickKind::ReinforcedSteel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrickKind::Clay => "clay",
            BrickKind::Cement => "cement",
            BrickKind::Steel => "steel",
            BrickKind::ReinforcedSteel => "reinforced_steel",
        }
    }

    /// Hits needed to break a fresh brick
    pub fn strength(&self) -> u8 {
        match self {
            BrickKind::Clay => 1,
            BrickKind::Cement => 2,
            BrickKind::Steel => 3,
            BrickKind::ReinforcedSteel => 4,
        }
    }

    /// Probability that a hit deals damage
    pub fn hit_chance(&self) -> f64 {
        match self {
            BrickKind::ReinforcedSteel => 0.3,
            _ => 1.0,
        }
    }

    pub fn cracks(&self) -> bool {
        !matches!(self, BrickKind::Clay)
    }

    /// Inner fill color (0xRRGGBB)
    pub fn inner_color(&self) -> u32 {
        match self {
            BrickKind::Clay => 0x7C1818,
            BrickKind::Cement => 0x939393,
            BrickKind::Steel => 0xCBCBC9,
            BrickKind::ReinforcedSteel => 0x6E7B8B,
        }
    }

    /// Border color (0xRRGGBB)
    pub fn border_color(&self) -> u32 {
        match self {
            BrickKind::Clay => 0x808080,
            BrickKind::Cement => 0xD9C7AF,
            BrickKind::Steel => 0x000000,
            BrickKind::ReinforcedSteel => 0x1C1C1C,
        }
    }
}

impl FromStr for BrickKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "clay" => Ok(BrickKind::Clay),
            "cement" => Ok(BrickKind::Cement),
            "steel" => Ok(BrickKind::Steel),
            "reinforced_steel" | "reinforced" => Ok(BrickKind::ReinforcedSteel),
            _ => Err(GameError::UnknownBrick { name: s.to_string() }),
        }
    }
}

/// A brick entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub kind: BrickKind,
    pub bounds: Bounds,
    max_strength: u8,
    strength: u8,
    broken: bool,
    /// Present only for materials that crack
    crack: Option<Crack>,
}

impl Brick {
    pub fn new(id: u32, kind: BrickKind, pos: Vec2, size: Vec2) -> Self {
        let strength = kind.strength();
        Self {
            id,
            kind,
            bounds: Bounds::from_pos_size(pos, size),
            max_strength: strength,
            strength,
            broken: false,
            crack: kind.cracks().then(|| Crack::new(CRACK_DEPTH, CRACK_STEPS)),
        }
    }

    #[inline]
    pub fn strength(&self) -> u8 {
        self.strength
    }

    #[inline]
    pub fn max_strength(&self) -> u8 {
        self.max_strength
    }

    pub fn crack(&self) -> Option<&Crack> {
        self.crack.as_ref()
    }

    pub fn inner_color(&self) -> u32 {
        self.kind.inner_color()
    }

    pub fn border_color(&self) -> u32 {
        self.kind.border_color()
    }
}

impl Impactable for Brick {
    /// Contact points are tested right, left, up, down; the first one inside
    /// the brick decides the impact.
    fn find_impact(&self, ball: &Ball) -> Option<Impact> {
        if self.broken {
            return None;
        }
        let c = ball.contacts();
        if self.bounds.contains(c.right) {
            Some(Impact::Left)
        } else if self.bounds.contains(c.left) {
            Some(Impact::Right)
        } else if self.bounds.contains(c.up) {
            Some(Impact::Down)
        } else if self.bounds.contains(c.down) {
            Some(Impact::Up)
        } else {
            None
        }
    }

    fn set_impact<R: Rng>(&mut self, point: Vec2, impact: Impact, rng: &mut R) -> bool {
        if self.broken {
            return false;
        }
        let chance = self.kind.hit_chance();
        if chance < 1.0 && !rng.random_bool(chance) {
            log::debug!("brick {} absorbed hit", self.id);
            return false;
        }

        self.strength = self.strength.saturating_sub(1);
        self.broken = self.strength == 0;
        if !self.broken {
            if let Some(crack) = self.crack.as_mut() {
                crack.make_crack(point, impact, &self.bounds, rng);
            }
        }
        self.broken
    }

    fn repair(&mut self) {
        self.strength = self.max_strength;
        self.broken = false;
        if let Some(crack) = self.crack.as_mut() {
            crack.reset();
        }
    }

    fn is_broken(&self) -> bool {
        self.broken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ball::BallKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::with_speed(1, BallKind::Main, Vec2::new(x, y), 1, 1)
    }

    fn brick(kind: BrickKind) -> Brick {
        Brick::new(1, kind, Vec2::ZERO, Vec2::new(50.0, 20.0))
    }

    #[test]
    fn test_clay_breaks_on_top_hit() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut b = brick(BrickKind::Clay);
        // Only the down point is inside the brick
        let ball = ball_at(25.0, -2.0);
        let impact = b.find_impact(&ball);
        assert_eq!(impact, Some(Impact::Up));
        assert!(b.set_impact(ball.contacts().down, Impact::Up, &mut rng));
        assert!(b.is_broken());
        assert!(b.crack().is_none());
    }

    #[test]
    fn test_impact_priority_order() {
        let b = brick(BrickKind::Clay);
        // Center inside: every contact point is inside, right point wins
        assert_eq!(b.find_impact(&ball_at(25.0, 10.0)), Some(Impact::Left));
        // Ball to the right of the brick: only the left point is inside
        assert_eq!(b.find_impact(&ball_at(53.0, 10.0)), Some(Impact::Right));
        // Ball below: only the up point is inside
        assert_eq!(b.find_impact(&ball_at(25.0, 22.0)), Some(Impact::Down));
        // Far away
        assert_eq!(b.find_impact(&ball_at(200.0, 200.0)), None);
    }

    #[test]
    fn test_broken_brick_never_reports_impact() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut b = brick(BrickKind::Clay);
        b.set_impact(Vec2::ZERO, Impact::Up, &mut rng);
        assert_eq!(b.find_impact(&ball_at(25.0, 10.0)), None);
        assert!(!b.set_impact(Vec2::ZERO, Impact::Up, &mut rng));
    }

    #[test]
    fn test_cement_cracks_then_breaks() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut b = brick(BrickKind::Cement);
        assert!(!b.set_impact(Vec2::new(25.0, 0.0), Impact::Up, &mut rng));
        assert_eq!(b.strength(), 1);
        assert_eq!(b.crack().map(|c| c.paths().len()), Some(1));
        assert!(b.set_impact(Vec2::new(25.0, 0.0), Impact::Up, &mut rng));
        assert_eq!(b.strength(), 0);
        // No new crack on the breaking hit
        assert_eq!(b.crack().map(|c| c.paths().len()), Some(1));
    }

    #[test]
    fn test_reinforced_steel_absorbs_some_hits() {
        let mut rng = Pcg32::seed_from_u64(42);
        let trials = 2_000;
        let mut landed = 0;
        let mut absorbed = 0;
        for _ in 0..trials {
            let mut b = brick(BrickKind::ReinforcedSteel);
            let cracks = b.crack().map(|c| c.paths().len());
            let broken = b.set_impact(Vec2::new(25.0, 0.0), Impact::Up, &mut rng);
            assert!(!broken);
            if b.strength() == b.max_strength() {
                // Absorbed: no damage and no new crack
                assert_eq!(b.crack().map(|c| c.paths().len()), cracks);
                absorbed += 1;
            } else {
                assert_eq!(b.strength(), b.max_strength() - 1);
                assert_eq!(b.crack().map(|c| c.paths().len()), Some(1));
                landed += 1;
            }
        }
        assert!(absorbed > 0);
        let rate = landed as f64 / trials as f64;
        assert!((0.25..0.35).contains(&rate), "landed rate {rate}");
    }

    #[test]
    fn test_reinforced_steel_breaks_after_four_landed_hits() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut b = brick(BrickKind::ReinforcedSteel);
        let mut landed = 0;
        for _ in 0..10_000 {
            let before = b.strength();
            let broken = b.set_impact(Vec2::new(25.0, 0.0), Impact::Up, &mut rng);
            if b.strength() < before {
                landed += 1;
            }
            assert_eq!(broken, b.strength() == 0);
            if broken {
                break;
            }
        }
        assert!(b.is_broken());
        assert_eq!(landed, 4);
    }

    #[test]
    fn test_repair_restores_brick() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut b = brick(BrickKind::Steel);
        for _ in 0..3 {
            b.set_impact(Vec2::new(0.0, 10.0), Impact::Left, &mut rng);
        }
        assert!(b.is_broken());
        b.repair();
        assert!(!b.is_broken());
        assert_eq!(b.strength(), b.max_strength());
        assert!(b.crack().is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn test_brick_kind_from_str() {
        assert_eq!("Clay".parse::<BrickKind>(), Ok(BrickKind::Clay));
        assert_eq!(
            "reinforced-steel".parse::<BrickKind>(),
            Ok(BrickKind::ReinforcedSteel)
        );
        assert!(matches!(
            "glass".parse::<BrickKind>(),
            Err(GameError::UnknownBrick { .. })
        ));
    }
}
