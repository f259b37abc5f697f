//! The kitten: gravity, horizontal input, one-way platforms, pickups and screen clamping.
//!
//! The controller only mutates its own state plus the shared collectible set it is handed. Hits
//! and respawns are applied from outside through `take_hit` and `respawn`.

use bevy::log::{debug, info};
use bevy::math::{Rect, Vec2};

use crate::animation::{AnimInputs, AnimState, Animator, FrameTable};
use crate::collectible::Collectible;
use crate::collision::{landing_surface, overlaps, Collider, Platform};
use crate::config::{
    GRAVITY, JUMP_IMPULSE, LANDING_SNAP, MAX_LIVES, PLAYER_HITBOX_OFFSET, PLAYER_HITBOX_SIZE,
    PLAYER_SIZE, PLAYER_SPEED, SCREEN_WIDTH,
};

/// Continuous (held) horizontal input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub spawn: Vec2,
    pub velocity_y: f32,
    pub gravity: f32,
    pub speed: f32,
    pub on_ground: bool,
    pub is_moving: bool,
    /// Set by a hit; blocks further damage until the respawn fires.
    pub is_dead: bool,
    pub lives: u32,
    pub collected: u32,
    pub collider: Collider,
    pub animator: Animator,
}

impl Player {
    pub fn new(spawn: Vec2, frames: FrameTable) -> Self {
        Self {
            position: spawn,
            spawn,
            velocity_y: 0.0,
            gravity: GRAVITY,
            speed: PLAYER_SPEED,
            on_ground: false,
            is_moving: false,
            is_dead: false,
            lives: MAX_LIVES,
            collected: 0,
            collider: Collider::from_size(PLAYER_SIZE),
            animator: Animator::new(frames),
        }
    }

    /// Sprite-sized box used for platforms and pickups.
    pub fn bounds(&self) -> Rect {
        self.collider.bounds(self.position)
    }

    /// Expanded combat box. Sits slightly above the sprite center.
    pub fn hitbox(&self) -> Rect {
        let min = self.position + PLAYER_HITBOX_OFFSET;
        Rect::from_corners(min, min + PLAYER_HITBOX_SIZE)
    }

    /// Advances the kitten one tick. Returns how many collectibles were picked up.
    pub fn update(
        &mut self,
        held: HeldKeys,
        platforms: &[Platform],
        collectibles: &mut Vec<Collectible>,
    ) -> u32 {
        self.is_moving = false;
        self.on_ground = false;

        self.velocity_y += self.gravity;
        self.position.y += self.velocity_y;

        let mut velocity_x = 0.0;
        // The death pose freezes horizontal control from the tick after the hit.
        if self.animator.state() != AnimState::Death {
            if held.right {
                velocity_x = self.speed;
                self.is_moving = true;
            } else if held.left {
                velocity_x = -self.speed;
                self.is_moving = true;
            }
            self.position.x += velocity_x;
        }

        if let Some(top) =
            landing_surface(self.bounds(), self.position.y, self.velocity_y, platforms)
        {
            self.position.y = top + LANDING_SNAP - self.collider.half_extents.y;
            self.velocity_y = 0.0;
            self.on_ground = true;
        }

        let picked = self.pick_up(collectibles);

        let half_width = self.collider.half_extents.x;
        if self.position.x - half_width < 0.0 {
            self.position.x = half_width;
        }
        if self.position.x + half_width > SCREEN_WIDTH {
            self.position.x = SCREEN_WIDTH - half_width;
        }

        self.animator.update(&AnimInputs {
            is_dead: self.is_dead,
            is_attacking: false,
            hit_side: None,
            is_moving: self.is_moving,
            on_ground: self.on_ground,
            velocity: Vec2::new(velocity_x, self.velocity_y),
        });

        picked
    }

    fn pick_up(&mut self, collectibles: &mut Vec<Collectible>) -> u32 {
        let bounds = self.bounds();
        let before = collectibles.len();
        collectibles.retain(|item| {
            let touched = overlaps(bounds, item.bounds());
            if touched {
                info!("Collected item {} at {:?}", item.id, item.position);
            }
            !touched
        });

        let picked = (before - collectibles.len()) as u32;
        self.collected += picked;
        picked
    }

    /// Jump request from a key-press event. Only honored while standing on something.
    pub fn try_jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }

        self.velocity_y = JUMP_IMPULSE;
        self.animator.reset_frame();
        self.on_ground = false;
        debug!("Jump from {:?}", self.position);
        true
    }

    /// Marks the kitten as caught. Callers check `is_dead` first.
    pub fn take_hit(&mut self) {
        self.is_dead = true;
        self.lives = self.lives.saturating_sub(1);
        self.animator.reset_frame();
    }

    pub fn respawn(&mut self) {
        self.is_dead = false;
        self.velocity_y = 0.0;
        self.position = self.spawn;
        info!("Respawned at {:?} with {} lives left", self.spawn, self.lives);
    }
}
