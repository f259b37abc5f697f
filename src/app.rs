//! High-level plugin composition and the fixed-rate frame driver.
//!
//! `PlatformerPlugin` registers every screen/presentation plugin and the one system that mutates
//! the simulation: `run_tick`, scheduled in `FixedUpdate` so a tick lasts the same time however
//! fast frames render.

use bevy::prelude::*;

use crate::audio::GameAudioPlugin;
use crate::config::GameConfig;
use crate::controls::{held_keys, ControlsPlugin};
use crate::level::LevelPlugin;
use crate::render::PresentationPlugin;
use crate::session::Session;
use crate::state::{sync_game_state, GameSet, GameState};
use crate::ui::UiPlugin;

pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        // Respect a config inserted by the host before this plugin.
        app.init_resource::<GameConfig>();
        let tick_hz = app.world().resource::<GameConfig>().tick_hz;

        app.init_state::<GameState>()
            .insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .add_plugins((
                LevelPlugin,        // Parses the level and inserts the Session.
                ControlsPlugin,     // Presses -> session events.
                PresentationPlugin, // Camera, level sprites, HUD, debug hitboxes.
                UiPlugin,           // Menu screen and end modal.
                GameAudioPlugin,    // Background loop following the sound flag.
            ))
            // Nothing touching the session may run before the level is loaded. `chain()` keeps
            // input handling ahead of drawing within a frame.
            .configure_sets(
                Update,
                (GameSet::Input, GameSet::Presentation)
                    .chain()
                    .run_if(resource_exists::<Session>),
            )
            .add_systems(FixedUpdate, run_tick.run_if(resource_exists::<Session>))
            .add_systems(
                Update,
                sync_game_state
                    .after(GameSet::Input)
                    .before(GameSet::Presentation)
                    .run_if(resource_exists::<Session>),
            );
    }
}

/// Frame loop driver: one simulation tick per fixed step.
fn run_tick(keyboard: Res<ButtonInput<KeyCode>>, mut session: ResMut<Session>) {
    session.tick(held_keys(&keyboard), &mut rand::thread_rng());
}
