//! Menu screen and end-of-session modal.
//!
//! The menu is made of sprites so its hit-regions and its pictures share the same screen-space
//! layout from `screens`. The modal is a Bevy UI node; once spawned it stays until the app exits,
//! since WIN and GAME_OVER are never left.

use bevy::prelude::*;

use crate::assets;
use crate::config::{
    MODAL_BACKGROUND, MODAL_INSTRUCTION_COLOR, MODAL_INSTRUCTION_TEXT, MODAL_MESSAGE_COLOR,
    MODAL_POS, MODAL_SIZE, TITLE_POS,
};
use crate::error::GameError;
use crate::render::image_sprite;
use crate::screens::{EndScreen, MenuButton};
use crate::session::Session;
use crate::state::{GameSet, GameState};

const Z_MENU: f32 = 5.0;
const TITLE_SIZE: Vec2 = Vec2::new(420.0, 120.0);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Menu), spawn_menu)
            .add_systems(OnExit(GameState::Menu), despawn_menu)
            .add_systems(
                Update,
                update_sound_button
                    .in_set(GameSet::Presentation)
                    .run_if(in_state(GameState::Menu)),
            )
            .add_systems(OnEnter(GameState::Win), spawn_end_modal)
            .add_systems(OnEnter(GameState::GameOver), spawn_end_modal);
    }
}

#[derive(Component)]
struct MenuScreen;

/// Sound button sprite, remembering which flag value its picture shows.
#[derive(Component)]
struct SoundToggle(bool);

fn spawn_menu(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut exit: EventWriter<AppExit>,
) {
    if let Err(e) = try_spawn_menu(&mut commands, &asset_server) {
        error!("Unable to build the menu: {}", e);
        exit.send(AppExit::error());
    }
}

fn try_spawn_menu(commands: &mut Commands, asset_server: &AssetServer) -> Result<(), GameError> {
    let title = assets::image("title")?;
    commands.spawn((
        MenuScreen,
        Name::new("Title"),
        image_sprite(asset_server, &title, TITLE_POS, TITLE_SIZE, Z_MENU),
    ));

    for button in MenuButton::ALL {
        let region = button.region();
        let image = assets::image(button.asset_key(true))?;
        let mut entity = commands.spawn((
            MenuScreen,
            Name::new(format!("{button:?}Button")),
            image_sprite(asset_server, &image, region.center(), region.size(), Z_MENU),
        ));
        if button == MenuButton::Sound {
            entity.insert(SoundToggle(true));
        }
    }
    Ok(())
}

fn update_sound_button(
    asset_server: Res<AssetServer>,
    session: Res<Session>,
    mut buttons: Query<(&mut SoundToggle, &mut Handle<Image>)>,
) {
    for (mut shown, mut texture) in &mut buttons {
        if shown.0 == session.sound_on {
            continue;
        }
        match assets::image(MenuButton::Sound.asset_key(session.sound_on)) {
            Ok(image) => {
                *texture = asset_server.load(assets::image_path(&image));
                shown.0 = session.sound_on;
            }
            Err(e) => warn!("Sound button image unavailable: {}", e),
        }
    }
}

fn despawn_menu(mut commands: Commands, query: Query<Entity, With<MenuScreen>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// Builds the WIN / GAME_OVER modal. Any other state reaching this is a wiring bug and ends the
/// process.
fn spawn_end_modal(
    mut commands: Commands,
    state: Res<State<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    let screen = match EndScreen::for_state(*state.get()) {
        Ok(screen) => screen,
        Err(e) => {
            error!("Cannot draw end screen: {}", e);
            exit.send(AppExit::error());
            return;
        }
    };

    commands
        .spawn((
            Name::new("EndModal"),
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    left: Val::Px(MODAL_POS.x),
                    top: Val::Px(MODAL_POS.y),
                    width: Val::Px(MODAL_SIZE.x),
                    height: Val::Px(MODAL_SIZE.y),
                    border: UiRect::all(Val::Px(3.0)),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::SpaceEvenly,
                    ..default()
                },
                background_color: BackgroundColor(MODAL_BACKGROUND),
                border_color: BorderColor(screen.edge_color),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                screen.title,
                TextStyle {
                    font_size: 56.0,
                    color: screen.title_color,
                    ..default()
                },
            ));
            parent.spawn(TextBundle::from_section(
                screen.message,
                TextStyle {
                    font_size: 22.0,
                    color: MODAL_MESSAGE_COLOR,
                    ..default()
                },
            ));
            parent.spawn(TextBundle::from_section(
                MODAL_INSTRUCTION_TEXT,
                TextStyle {
                    font_size: 18.0,
                    color: MODAL_INSTRUCTION_COLOR,
                    ..default()
                },
            ));
        });
}
