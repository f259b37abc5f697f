//! Yarn balls scattered over the level.

use bevy::math::{Rect, Vec2};
use rand::Rng;

use crate::collision::Collider;
use crate::config::ANIM_SPEED;

#[derive(Debug, Clone)]
pub struct Collectible {
    /// Stable identity so the renderer can drop the matching sprite once picked up.
    pub id: usize,
    pub position: Vec2,
    pub collider: Collider,
    frames: Vec<String>,
    frame_index: usize,
    frame_timer: u32,
}

impl Collectible {
    /// `frames` must not be empty; the level builder resolves them from an asset key.
    pub fn new(id: usize, position: Vec2, size: Vec2, frames: Vec<String>) -> Self {
        debug_assert!(!frames.is_empty(), "collectible without frames");
        Self {
            id,
            position,
            collider: Collider::from_size(size),
            frames,
            frame_index: 0,
            frame_timer: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.collider.bounds(self.position)
    }

    /// Every `ANIM_SPEED` ticks the ball shows a random frame of its sequence.
    pub fn animate(&mut self, rng: &mut impl Rng) {
        self.frame_timer += 1;
        if self.frame_timer >= ANIM_SPEED {
            self.frame_timer = 0;
            self.frame_index = rng.gen_range(0..self.frames.len());
        }
    }

    pub fn current_frame(&self) -> &str {
        &self.frames[self.frame_index % self.frames.len()]
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn ball() -> Collectible {
        let frames = (1..=3).map(|i| format!("items/ball-{i}")).collect();
        Collectible::new(0, Vec2::new(100.0, 100.0), Vec2::splat(24.0), frames)
    }

    #[test]
    fn frame_holds_between_timer_expiries() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ball = ball();
        for _ in 0..ANIM_SPEED - 1 {
            ball.animate(&mut rng);
            assert_eq!(ball.current_frame(), "items/ball-1");
        }
    }

    #[test]
    fn frames_stay_within_sequence() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ball = ball();
        for _ in 0..500 {
            ball.animate(&mut rng);
            assert!(ball.current_frame().starts_with("items/ball-"));
        }
    }
}
