//! Application entry point: window, default plugins and the game plugin.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::render::texture::ImagePlugin;
use bevy::window::{Window, WindowResolution};
use kitten_platformer::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use kitten_platformer::{GameConfig, PlatformerPlugin};

fn main() {
    // Without the hook a wasm panic only aborts; this routes the message to the browser console.
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    console_error_panic_hook::set_once();

    let config = GameConfig::default();

    // Fixed logical size: the level layout and the menu hit-regions are in these pixels.
    let primary_window = Window {
        title: config.title.to_owned(),
        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        resizable: false,
        canvas: cfg!(all(target_arch = "wasm32", feature = "web"))
            .then(|| "#bevy-canvas".to_owned()),
        ..default()
    };

    let default_plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(primary_window),
            ..default()
        })
        .set(ImagePlugin::default_nearest())
        .set(AssetPlugin {
            file_path: "assets".to_owned(),
            watch_for_changes_override: Some(cfg!(not(target_arch = "wasm32"))),
            ..default()
        });

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.53, 0.81, 0.92)))
        .insert_resource(config)
        .add_plugins(default_plugins)
        .add_plugins(PlatformerPlugin)
        .run();
}
