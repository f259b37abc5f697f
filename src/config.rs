//! Fixed tuning values for the single level plus the host-level `GameConfig` resource.
//!
//! The simulation reads the constants directly. Nothing here is editable while the game runs;
//! `GameConfig` only gathers the knobs the Bevy host needs when it builds the app.

use bevy::color::Color;
use bevy::math::Vec2;
use bevy::prelude::Resource;

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Simulation rate. Every timer below that counts ticks assumes this rate.
pub const TICK_HZ: f64 = 60.0;

// Player physics.
pub const GRAVITY: f32 = 0.6;
pub const PLAYER_SPEED: f32 = 4.0;
pub const JUMP_IMPULSE: f32 = -15.0;
/// How far the player's feet sink into a platform when landing.
pub const LANDING_SNAP: f32 = 3.0;
pub const PLAYER_SIZE: Vec2 = Vec2::new(48.0, 40.0);
pub const MAX_LIVES: u32 = 3;

// Enemies.
pub const ENEMY_SPEED: f32 = 1.0;
pub const ENEMY_SIZE: Vec2 = Vec2::new(64.0, 80.0);
pub const ATTACK_TICKS: u32 = 72;

/// Ticks between two frame advances of any animation.
pub const ANIM_SPEED: u32 = 10;

// Expanded combat hitboxes, as (offset of the top-left corner from the anchor, size).
pub const ENEMY_HITBOX_OFFSET: Vec2 = Vec2::new(-45.0, -50.0);
pub const ENEMY_HITBOX_SIZE: Vec2 = Vec2::new(90.0, 100.0);
pub const PLAYER_HITBOX_OFFSET: Vec2 = Vec2::new(-28.0, -30.0);
pub const PLAYER_HITBOX_SIZE: Vec2 = Vec2::new(56.0, 50.0);

pub const RESPAWN_DELAY_SECS: f32 = 1.2;

/// Respawn delay expressed in ticks at the given tick rate.
pub fn respawn_ticks(tick_hz: f64) -> u32 {
    (f64::from(RESPAWN_DELAY_SECS) * tick_hz).round() as u32
}

// Menu hit-regions, as centers + sizes in screen coordinates.
pub const TITLE_POS: Vec2 = Vec2::new(400.0, 150.0);
pub const START_BUTTON_POS: Vec2 = Vec2::new(400.0, 320.0);
pub const EXIT_BUTTON_POS: Vec2 = Vec2::new(400.0, 400.0);
pub const MENU_BUTTON_SIZE: Vec2 = Vec2::new(200.0, 60.0);
pub const SOUND_BUTTON_POS: Vec2 = Vec2::new(750.0, 50.0);
pub const SOUND_BUTTON_SIZE: Vec2 = Vec2::new(48.0, 48.0);

// HUD.
pub const HUD_ICON_SPACING: f32 = 35.0;
pub const HUD_TOP: f32 = 10.0;
pub const HUD_ICON_SIZE: Vec2 = Vec2::new(30.0, 30.0);

// End-of-session modal.
pub const MODAL_POS: Vec2 = Vec2::new(150.0, 175.0);
pub const MODAL_SIZE: Vec2 = Vec2::new(500.0, 250.0);
pub const MODAL_BACKGROUND: Color = Color::srgba(0.08, 0.06, 0.12, 0.92);
pub const MODAL_MESSAGE_COLOR: Color = Color::srgb(0.92, 0.92, 0.92);
pub const MODAL_INSTRUCTION_COLOR: Color = Color::srgb(0.7, 0.7, 0.75);
pub const WIN_TITLE_COLOR: Color = Color::srgb(1.0, 0.84, 0.0);
pub const WIN_EDGE_COLOR: Color = Color::srgb(0.85, 0.65, 0.13);
pub const DEFEAT_TITLE_COLOR: Color = Color::srgb(0.86, 0.08, 0.24);
pub const DEFEAT_EDGE_COLOR: Color = Color::srgb(0.55, 0.0, 0.0);
pub const MODAL_INSTRUCTION_TEXT: &str = "Press ESC to quit";

pub const DEBUG_HITBOX_COLOR: Color = Color::srgb(1.0, 0.0, 1.0);

/// Host-level settings handed to the Bevy app at startup. Cloned freely; only primitives and
/// static strings live here.
#[derive(Resource, Clone)]
pub struct GameConfig {
    pub title: &'static str,
    pub tick_hz: f64,
    pub music_volume: f32,
    pub debug_hitboxes: bool,
    pub level_source: &'static str,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Kitten & the Yarn Balls",
            tick_hz: TICK_HZ,
            music_volume: 0.1,
            debug_hitboxes: false,
            level_source: include_str!("../assets/levels/level1.ron"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respawn_delay_follows_the_tick_rate() {
        assert_eq!(respawn_ticks(TICK_HZ), 72);
        assert_eq!(respawn_ticks(30.0), 36);
    }
}
