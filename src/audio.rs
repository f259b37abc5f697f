//! Background music. One looping track, paused and resumed by the session's sound flag.
//!
//! Bevy inserts the `AudioSink` once the clip has decoded; until then the follow system simply
//! finds nothing to steer.

use bevy::audio::{AudioSinkPlayback, PlaybackMode, Volume};
use bevy::prelude::*;

use crate::config::GameConfig;
use crate::session::Session;
use crate::state::GameSet;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_background_music).add_systems(
            Update,
            follow_sound_flag.in_set(GameSet::Presentation),
        );
    }
}

#[derive(Component)]
struct BackgroundMusic;

fn start_background_music(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    commands.spawn((
        Name::new("BackgroundMusic"),
        BackgroundMusic,
        AudioBundle {
            source: asset_server.load("audio/background.ogg"),
            settings: PlaybackSettings {
                mode: PlaybackMode::Loop,
                volume: Volume::new(config.music_volume),
                ..default()
            },
        },
    ));
    info!("Queued background music at volume {}", config.music_volume);
}

fn follow_sound_flag(session: Res<Session>, sinks: Query<&AudioSink, With<BackgroundMusic>>) {
    for sink in &sinks {
        match (session.sound_on, sink.is_paused()) {
            (true, true) => sink.play(),
            (false, false) => sink.pause(),
            _ => {}
        }
    }
}
