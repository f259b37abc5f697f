//! Axis-aligned boxes and one-way platform landing.
//!
//! All coordinates are screen space: origin top-left, y grows downward. Actor positions are
//! sprite centers.

use bevy::math::{Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub half_extents: Vec2,
}

impl Collider {
    pub fn from_size(size: Vec2) -> Self {
        Self {
            half_extents: size * 0.5,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    pub fn bounds(&self, center: Vec2) -> Rect {
        Rect::from_center_half_size(center, self.half_extents)
    }
}

/// Strict overlap: boxes that only share an edge do not touch.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}

/// Static scenery piece. Never moves after the level is built.
#[derive(Debug, Clone)]
pub struct Platform {
    pub image: String,
    pub position: Vec2,
    pub collider: Collider,
}

impl Platform {
    pub fn new(image: impl Into<String>, position: Vec2, size: Vec2) -> Self {
        Self {
            image: image.into(),
            position,
            collider: Collider::from_size(size),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.collider.bounds(self.position)
    }

    pub fn top(&self) -> f32 {
        self.position.y - self.collider.half_extents.y
    }
}

/// Finds the platform a falling body lands on this tick and returns its top edge.
///
/// A platform qualifies when the body overlaps it, the body is moving down and its anchor was at
/// or above the platform top before this tick's vertical step. The first qualifying platform wins.
pub fn landing_surface(
    body: Rect,
    anchor_y: f32,
    velocity_y: f32,
    platforms: &[Platform],
) -> Option<f32> {
    if velocity_y <= 0.0 {
        return None;
    }

    let previous_y = anchor_y - velocity_y;
    platforms
        .iter()
        .find(|platform| overlaps(body, platform.bounds()) && previous_y <= platform.top())
        .map(Platform::top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledge() -> Platform {
        Platform::new("platform/platform-4", Vec2::new(200.0, 400.0), Vec2::new(96.0, 24.0))
    }

    #[test]
    fn edge_contact_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert!(!overlaps(a, b));
        assert!(overlaps(a, Rect::new(9.5, 9.5, 20.0, 20.0)));
    }

    #[test]
    fn platform_top_is_upper_edge() {
        assert_eq!(ledge().top(), 388.0);
    }

    #[test]
    fn falling_body_from_above_lands() {
        let collider = Collider::from_size(Vec2::new(48.0, 40.0));
        let center = Vec2::new(200.0, 372.0);
        let top = landing_surface(collider.bounds(center), center.y, 5.0, &[ledge()]);
        assert_eq!(top, Some(388.0));
    }

    #[test]
    fn rising_body_passes_through() {
        let collider = Collider::from_size(Vec2::new(48.0, 40.0));
        let center = Vec2::new(200.0, 372.0);
        assert_eq!(
            landing_surface(collider.bounds(center), center.y, -5.0, &[ledge()]),
            None
        );
    }

    #[test]
    fn side_approach_does_not_snap() {
        // Anchor already below the top on the previous tick: the body came in from the side.
        let collider = Collider::from_size(Vec2::new(48.0, 40.0));
        let center = Vec2::new(160.0, 400.0);
        assert_eq!(
            landing_surface(collider.bounds(center), center.y, 1.0, &[ledge()]),
            None
        );
    }

    #[test]
    fn first_qualifying_platform_wins() {
        let lower = Platform::new(
            "platform/platform-3",
            Vec2::new(200.0, 410.0),
            Vec2::new(192.0, 24.0),
        );
        let collider = Collider::from_size(Vec2::new(48.0, 40.0));
        let center = Vec2::new(200.0, 380.0);
        let top = landing_surface(collider.bounds(center), center.y, 6.0, &[ledge(), lower]);
        assert_eq!(top, Some(388.0));
    }
}
