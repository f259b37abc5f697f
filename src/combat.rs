//! Contact between the kitten and the grandmas, and the respawn countdown that follows a hit.

use bevy::log::info;

use crate::animation::Side;
use crate::collision::overlaps;
use crate::enemy::Enemy;
use crate::player::Player;

/// Outcome of a contact that cost the kitten a life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub enemy: usize,
    pub side: Side,
}

/// Expanded boxes overlap and the kitten is not already caught.
pub fn in_contact(player: &Player, enemy: &Enemy) -> bool {
    !player.is_dead && overlaps(player.hitbox(), enemy.hitbox())
}

/// Applies a hit: the kitten dies and loses a life, the enemy attacks toward the kitten's side.
pub fn apply_hit(player: &mut Player, enemy: &mut Enemy, index: usize) -> Hit {
    player.take_hit();

    let side = if player.position.x > enemy.position.x {
        Side::Right
    } else {
        Side::Left
    };
    enemy.begin_attack(side);

    info!(
        "Kitten caught by enemy {} on its {:?} side, {} lives left",
        index, side, player.lives
    );
    Hit { enemy: index, side }
}

/// One-shot countdown driving the respawn. Scheduling again replaces a pending countdown, so
/// two hits inside the window still produce a single respawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RespawnTimer {
    remaining: Option<u32>,
}

impl RespawnTimer {
    pub fn schedule(&mut self, ticks: u32) {
        self.remaining = Some(ticks);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Counts one tick down. Returns `true` exactly once, on the tick the countdown ends.
    pub fn advance(&mut self) -> bool {
        match self.remaining {
            Some(ticks) if ticks <= 1 => {
                self.remaining = None;
                true
            }
            Some(ticks) => {
                self.remaining = Some(ticks - 1);
                false
            }
            None => false,
        }
    }
}
