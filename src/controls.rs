//! Keyboard and mouse input: held movement keys for the fixed tick, edge presses for the session.

use bevy::app::AppExit;
use bevy::input::keyboard::KeyCode;
use bevy::input::mouse::MouseButton;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::player::HeldKeys;
use crate::session::{Flow, Press, Session};
use crate::state::GameSet;

/// Turns Bevy input into session events. Held movement keys are sampled by the fixed tick;
/// presses are delivered here, once per frame, in the order they are listed.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, deliver_presses.in_set(GameSet::Input));
    }
}

pub fn held_keys(keyboard: &ButtonInput<KeyCode>) -> HeldKeys {
    HeldKeys {
        left: keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
        right: keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
    }
}

fn collect_presses(
    keyboard: &ButtonInput<KeyCode>,
    mouse: &ButtonInput<MouseButton>,
    cursor: Option<Vec2>,
) -> Vec<Press> {
    let mut presses = Vec::new();
    if keyboard.just_pressed(KeyCode::Space) {
        presses.push(Press::Jump);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        presses.push(Press::Quit);
    }
    if mouse.just_pressed(MouseButton::Left) {
        // Window coordinates share the simulation's top-left origin.
        if let Some(point) = cursor {
            presses.push(Press::Click(point));
        }
    }
    presses
}

fn deliver_presses(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut session: ResMut<Session>,
    mut exit: EventWriter<AppExit>,
) {
    let cursor = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position());

    for press in collect_presses(&keyboard, &mouse, cursor) {
        if session.handle_press(press) == Flow::Exit {
            exit.send(AppExit::Success);
            return;
        }
    }
}
