//! Collision detection and response for axis-aligned geometry
//!
//! Discrete checks only: each tick the ball has already moved, and we look at
//! where it ended up. Responses are plain axis reversals.

use rand::Rng;

use super::ball::Ball;
use super::brick::{Brick, Impact};
use super::geom::Bounds;
use super::paddle::Paddle;
use super::traits::Impactable;

/// Result of a ball hitting a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    /// Index into the wall
    pub index: usize,
    pub brick_id: u32,
    pub impact: Impact,
    /// True if this hit broke the brick
    pub broken: bool,
}

/// Bounce a ball off the left, right and top edges of the play area.
///
/// Returns true if the ball's center has dropped below the bottom edge.
/// Reversal only happens while the ball is still heading out, so a ball that
/// is already on its way back is left alone.
pub fn ball_edge_collision(ball: &mut Ball, area: &Bounds) -> bool {
    let center = ball.center();
    let (speed_x, speed_y) = ball.speed();

    if (center.x < area.x() && speed_x < 0) || (center.x > area.right() && speed_x > 0) {
        ball.reverse_x();
    }
    if center.y < area.y() && speed_y < 0 {
        ball.reverse_y();
    }
    center.y > area.bottom()
}

/// Resolve at most one brick impact for this ball.
///
/// Bricks are scanned in wall order and the first one reporting an impact
/// wins, even if the ball overlaps several.
pub fn ball_brick_collision<R: Rng>(
    ball: &mut Ball,
    bricks: &mut [Brick],
    rng: &mut R,
) -> Option<BrickHit> {
    let (index, impact) = bricks
        .iter()
        .enumerate()
        .find_map(|(i, brick)| brick.find_impact(ball).map(|impact| (i, impact)))?;

    let point = impact.contact_point(ball);
    if impact.is_horizontal() {
        ball.reverse_x();
    } else {
        ball.reverse_y();
    }

    let brick = &mut bricks[index];
    let broken = brick.set_impact(point, impact, rng);
    Some(BrickHit {
        index,
        brick_id: brick.id,
        impact,
        broken,
    })
}

/// Bounce a descending ball off the paddle. Returns true on a bounce.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    let (_, speed_y) = ball.speed();
    if speed_y > 0 && paddle.impact(ball) {
        ball.reverse_y();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ball::BallKind;
    use crate::sim::brick::BrickKind;
    use crate::sim::traits::Movable;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn area() -> Bounds {
        Bounds::new(0.0, 0.0, 600.0, 450.0)
    }

    fn ball(x: f32, y: f32, sx: i32, sy: i32) -> Ball {
        Ball::with_speed(1, BallKind::Main, Vec2::new(x, y), sx, sy)
    }

    #[test]
    fn test_side_walls_reverse_x() {
        let mut b = ball(-1.0, 100.0, -3, 2);
        assert!(!ball_edge_collision(&mut b, &area()));
        assert_eq!(b.speed(), (3, 2));

        let mut b = ball(601.0, 100.0, 4, -2);
        ball_edge_collision(&mut b, &area());
        assert_eq!(b.speed(), (-4, -2));
    }

    #[test]
    fn test_top_wall_reverses_y() {
        let mut b = ball(100.0, -2.0, 1, -5);
        assert!(!ball_edge_collision(&mut b, &area()));
        assert_eq!(b.speed(), (1, 5));
    }

    #[test]
    fn test_ball_leaving_wall_not_reversed_twice() {
        let mut b = ball(-1.0, 100.0, 3, 2);
        ball_edge_collision(&mut b, &area());
        assert_eq!(b.speed(), (3, 2));
    }

    #[test]
    fn test_bottom_edge_reports_loss() {
        let mut b = ball(100.0, 451.0, 2, 5);
        assert!(ball_edge_collision(&mut b, &area()));
        // Bottom edge never bounces
        assert_eq!(b.speed(), (2, 5));
    }

    #[test]
    fn test_first_brick_in_order_wins() {
        let mut rng = Pcg32::seed_from_u64(1);
        let size = Vec2::new(50.0, 20.0);
        let mut bricks = vec![
            Brick::new(1, BrickKind::Clay, Vec2::new(0.0, 0.0), size),
            Brick::new(2, BrickKind::Clay, Vec2::new(50.0, 0.0), size),
        ];
        // Straddles both bricks: left point in brick 1, right point in brick 2
        let mut b = ball(50.0, 10.0, 2, -2);
        let hit = ball_brick_collision(&mut b, &mut bricks, &mut rng).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.impact, Impact::Right);
        assert!(hit.broken);
        assert_eq!(b.speed(), (-2, -2));
        assert!(!bricks[1].is_broken());

        // Next scan skips the broken brick
        let hit = ball_brick_collision(&mut b, &mut bricks, &mut rng).unwrap();
        assert_eq!(hit.brick_id, 2);
        assert_eq!(hit.impact, Impact::Left);
    }

    #[test]
    fn test_vertical_impact_reverses_y() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut bricks = vec![Brick::new(
            1,
            BrickKind::Cement,
            Vec2::ZERO,
            Vec2::new(50.0, 20.0),
        )];
        let mut b = ball(25.0, 23.0, 1, -3);
        let hit = ball_brick_collision(&mut b, &mut bricks, &mut rng).unwrap();
        assert_eq!(hit.impact, Impact::Down);
        assert!(!hit.broken);
        assert_eq!(b.speed(), (1, 3));
    }

    #[test]
    fn test_paddle_bounce_only_when_descending() {
        let a = area();
        let paddle = Paddle::new(Vec2::new(300.0, 430.0), &a);
        let mut b = ball(300.0, 431.0, 2, 4);
        assert!(ball_paddle_collision(&mut b, &paddle));
        assert_eq!(b.speed(), (2, -4));
        // Already rising: left alone
        assert!(!ball_paddle_collision(&mut b, &paddle));
        b.step();
        assert_eq!(b.center().y, 427.0);
    }
}
