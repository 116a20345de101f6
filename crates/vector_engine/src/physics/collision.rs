//! Intersection tests

use crate::foundation::math::{distance_to_line_squared, Vec2, Vec2Ext};

/// Whether two circles overlap
///
/// Circles whose centers are exactly `radius_a + radius_b` apart do not collide.
pub fn circles_collide(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    let radius_sum = radius_a + radius_b;
    center_a.distance_squared_to(&center_b) < radius_sum * radius_sum
}

/// Whether a circle touches the infinite line through a rotated segment
///
/// `start` and `end` are in the line's local frame; they are rotated by
/// `rotation` and offset by `origin` before measuring. The test is against the
/// unbounded line, so circles past either endpoint along it still register.
pub fn line_intersects_circle(
    origin: Vec2,
    rotation: f32,
    start: Vec2,
    end: Vec2,
    center: Vec2,
    radius: f32,
) -> bool {
    let world_start = origin + start.rotated(rotation);
    let world_end = origin + end.rotated(rotation);
    distance_to_line_squared(world_start, world_end, center) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::PI;

    #[test]
    fn test_circle_boundary_is_exclusive() {
        let a = Vec2::new(0.0, 0.0);
        assert!(!circles_collide(a, 3.0, Vec2::new(5.0, 0.0), 2.0));
        assert!(circles_collide(a, 3.0, Vec2::new(5.0 - 1e-3, 0.0), 2.0));
    }

    #[test]
    fn test_circle_collision_is_symmetric() {
        let cases = [
            (Vec2::new(0.0, 0.0), 1.0, Vec2::new(1.5, 0.5), 0.8),
            (Vec2::new(-3.0, 2.0), 2.0, Vec2::new(4.0, 2.0), 4.0),
            (Vec2::new(10.0, 10.0), 0.5, Vec2::new(10.0, 10.0), 0.5),
        ];
        for (a, ra, b, rb) in cases {
            assert_eq!(circles_collide(a, ra, b, rb), circles_collide(b, rb, a, ra));
        }
    }

    #[test]
    fn test_line_uses_rotation_and_origin() {
        let start = Vec2::new(10.0, 0.0);
        let end = Vec2::new(110.0, 0.0);
        let origin = Vec2::new(50.0, 50.0);

        // Unrotated the line runs along y = 50
        assert!(line_intersects_circle(origin, 0.0, start, end, Vec2::new(100.0, 52.0), 3.0));
        assert!(!line_intersects_circle(origin, 0.0, start, end, Vec2::new(100.0, 60.0), 3.0));

        // Rotated a quarter turn it runs along x = 50
        assert!(line_intersects_circle(origin, PI / 2.0, start, end, Vec2::new(51.0, 120.0), 3.0));
        assert!(!line_intersects_circle(origin, PI / 2.0, start, end, Vec2::new(100.0, 52.0), 3.0));
    }

    #[test]
    fn test_line_hits_past_segment_end() {
        let hit = line_intersects_circle(
            Vec2::zeros(),
            0.0,
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(500.0, 1.0),
            2.0,
        );
        assert!(hit);
    }
}
