//! Collision tests for the rectangular playfield
//!
//! Every response is a sign flip of one direction component. Paddle and
//! brick contacts always invert the vertical axis regardless of where the
//! ball meets them.

use glam::Vec2;

use super::state::{Brick, Paddle};

/// Outcome of the vertical bound check for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// Nothing crossed
    None,
    /// Ball would leave through the top edge
    Ceiling,
    /// Ball reached the paddle plane over the paddle
    Paddle,
    /// Ball reached the paddle plane beside the paddle
    Missed,
}

/// Whether a tentative x leaves `[radius, width - radius]`
#[inline]
pub fn exits_horizontal(x: f32, radius: f32, width: f32) -> bool {
    x < radius || x > width - radius
}

/// Classify the vertical move of the ball this tick.
///
/// `tentative_y` is where the ball would end up; `ball_x` is its current
/// horizontal position, tested against the paddle's current span.
pub fn vertical_contact(
    tentative_y: f32,
    ball_x: f32,
    radius: f32,
    paddle_plane: f32,
    paddle: &Paddle,
) -> VerticalContact {
    if tentative_y < radius {
        VerticalContact::Ceiling
    } else if tentative_y > paddle_plane {
        if paddle.spans(ball_x) {
            VerticalContact::Paddle
        } else {
            VerticalContact::Missed
        }
    } else {
        VerticalContact::None
    }
}

/// Index of the first active brick (grid order) containing `center`
pub fn first_brick_hit(bricks: &[Brick], center: Vec2) -> Option<usize> {
    bricks
        .iter()
        .position(|brick| brick.is_active() && brick.contains(center))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BrickStatus;

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            x,
            width: 100.0,
            height: 10.0,
            speed: 500.0,
        }
    }

    #[test]
    fn test_exits_horizontal() {
        assert!(!exits_horizontal(350.0, 10.0, 700.0));
        assert!(exits_horizontal(9.0, 10.0, 700.0));
        assert!(exits_horizontal(691.0, 10.0, 700.0));
        // Exactly on the bound stays inside
        assert!(!exits_horizontal(10.0, 10.0, 700.0));
        assert!(!exits_horizontal(690.0, 10.0, 700.0));
    }

    #[test]
    fn test_vertical_contact() {
        let paddle = paddle_at(300.0);
        assert_eq!(
            vertical_contact(5.0, 350.0, 10.0, 480.0, &paddle),
            VerticalContact::Ceiling
        );
        assert_eq!(
            vertical_contact(200.0, 350.0, 10.0, 480.0, &paddle),
            VerticalContact::None
        );
        assert_eq!(
            vertical_contact(485.0, 350.0, 10.0, 480.0, &paddle),
            VerticalContact::Paddle
        );
        assert_eq!(
            vertical_contact(485.0, 100.0, 10.0, 480.0, &paddle),
            VerticalContact::Missed
        );
    }

    #[test]
    fn test_paddle_span_is_inclusive() {
        let paddle = paddle_at(300.0);
        for x in [300.0, 400.0] {
            assert_eq!(
                vertical_contact(485.0, x, 10.0, 480.0, &paddle),
                VerticalContact::Paddle
            );
        }
        for x in [299.0, 401.0] {
            assert_eq!(
                vertical_contact(485.0, x, 10.0, 480.0, &paddle),
                VerticalContact::Missed
            );
        }
        // Touching the plane is not crossing it
        assert_eq!(
            vertical_contact(480.0, 50.0, 10.0, 480.0, &paddle),
            VerticalContact::None
        );
    }

    #[test]
    fn test_ceiling_wins_over_paddle_plane() {
        // A surface so short the plane sits above the ceiling bound
        let paddle = paddle_at(300.0);
        assert_eq!(
            vertical_contact(7.0, 50.0, 10.0, 5.0, &paddle),
            VerticalContact::Ceiling
        );
    }

    #[test]
    fn test_first_brick_hit_skips_destroyed() {
        let mut bricks = vec![
            Brick {
                pos: Vec2::new(0.0, 0.0),
                size: Vec2::new(50.0, 20.0),
                status: BrickStatus::Active,
            },
            Brick {
                pos: Vec2::new(0.0, 0.0),
                size: Vec2::new(50.0, 20.0),
                status: BrickStatus::Active,
            },
        ];
        let center = Vec2::new(25.0, 10.0);
        assert_eq!(first_brick_hit(&bricks, center), Some(0));

        bricks[0].status = BrickStatus::Destroyed;
        assert_eq!(first_brick_hit(&bricks, center), Some(1));

        bricks[1].status = BrickStatus::Destroyed;
        assert_eq!(first_brick_hit(&bricks, center), None);
    }
}
