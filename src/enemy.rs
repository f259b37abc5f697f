//! Patrolling grandmas. They walk back and forth around their spawn point and stop to attack
//! for a fixed number of ticks after catching the kitten.

use bevy::log::debug;
use bevy::math::{Rect, Vec2};

use crate::animation::{AnimInputs, Animator, FrameTable, Side};
use crate::collision::Collider;
use crate::config::{ATTACK_TICKS, ENEMY_HITBOX_OFFSET, ENEMY_HITBOX_SIZE, ENEMY_SIZE, ENEMY_SPEED};

#[derive(Debug, Clone)]
pub struct Enemy {
    pub position: Vec2,
    pub start_x: f32,
    pub patrol_radius: f32,
    /// +1 walking right, -1 walking left.
    pub direction: f32,
    pub speed: f32,
    pub is_attacking: bool,
    pub attack_timer: u32,
    pub hit_side: Option<Side>,
    pub collider: Collider,
    pub animator: Animator,
}

impl Enemy {
    pub fn new(position: Vec2, patrol_radius: f32, frames: FrameTable) -> Self {
        Self {
            position,
            start_x: position.x,
            patrol_radius,
            direction: 1.0,
            speed: ENEMY_SPEED,
            is_attacking: false,
            attack_timer: 0,
            hit_side: None,
            collider: Collider::from_size(ENEMY_SIZE),
            animator: Animator::new(frames),
        }
    }

    /// Expanded combat box centered on the enemy.
    pub fn hitbox(&self) -> Rect {
        let min = self.position + ENEMY_HITBOX_OFFSET;
        Rect::from_corners(min, min + ENEMY_HITBOX_SIZE)
    }

    pub fn update(&mut self) {
        if self.is_attacking {
            self.attack_timer = self.attack_timer.saturating_sub(1);
            if self.attack_timer == 0 {
                self.is_attacking = false;
            }
        } else {
            self.position.x += self.speed * self.direction;
            if (self.position.x - self.start_x).abs() >= self.patrol_radius {
                self.direction = -self.direction;
                debug!("Enemy turned around at x={}", self.position.x);
            }
        }

        // Grandmas never leave the ground.
        self.animator.update(&AnimInputs {
            is_dead: false,
            is_attacking: self.is_attacking,
            hit_side: self.hit_side,
            is_moving: !self.is_attacking,
            on_ground: true,
            velocity: Vec2::new(self.direction, 0.0),
        });
    }

    /// Freezes the patrol and plays the attack facing `side`.
    pub fn begin_attack(&mut self, side: Side) {
        self.hit_side = Some(side);
        self.is_attacking = true;
        self.attack_timer = ATTACK_TICKS;
        self.animator.reset_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimState;
    use crate::assets::grandma_frames;

    fn grandma(x: f32, radius: f32) -> Enemy {
        Enemy::new(Vec2::new(x, 496.0), radius, grandma_frames().unwrap())
    }

    #[test]
    fn patrol_reverses_exactly_at_radius() {
        let mut enemy = grandma(300.0, 50.0);

        for _ in 0..50 {
            enemy.update();
        }
        assert_eq!(enemy.position.x, 350.0);
        assert_eq!(enemy.direction, -1.0);

        for _ in 0..100 {
            enemy.update();
        }
        assert_eq!(enemy.position.x, 250.0);
        assert_eq!(enemy.direction, 1.0);
    }

    #[test]
    fn patrol_stays_within_bounds() {
        let mut enemy = grandma(300.0, 50.0);
        for _ in 0..1000 {
            enemy.update();
            assert!((250.0..=350.0).contains(&enemy.position.x));
        }
    }

    #[test]
    fn walk_animation_follows_direction() {
        let mut enemy = grandma(300.0, 50.0);
        enemy.update();
        assert_eq!(enemy.animator.state(), AnimState::RightWalk);

        for _ in 0..50 {
            enemy.update();
        }
        assert_eq!(enemy.animator.state(), AnimState::LeftWalk);
    }

    #[test]
    fn attacking_enemy_holds_position_until_timer_runs_out() {
        let mut enemy = grandma(300.0, 50.0);
        enemy.begin_attack(Side::Right);
        let x = enemy.position.x;

        for _ in 0..ATTACK_TICKS - 1 {
            enemy.update();
            assert!(enemy.is_attacking);
            assert_eq!(enemy.position.x, x);
            assert_eq!(enemy.animator.state(), AnimState::AttackRight);
        }

        enemy.update();
        assert!(!enemy.is_attacking);
        assert_eq!(enemy.position.x, x);
        assert_eq!(enemy.animator.state(), AnimState::RightWalk);

        enemy.update();
        assert_eq!(enemy.position.x, x + 1.0);
    }

    #[test]
    fn hitbox_is_centered_and_expanded() {
        let enemy = grandma(300.0, 50.0);
        let hitbox = enemy.hitbox();
        assert_eq!(hitbox.center(), enemy.position);
        assert_eq!(hitbox.size(), Vec2::new(90.0, 100.0));
        assert!(hitbox.contains(enemy.collider.bounds(enemy.position).min));
    }
}
