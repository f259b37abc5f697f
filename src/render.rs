//! Sprite presentation of the session. Reads only; the simulation never sees these entities.
//!
//! The simulation works in screen pixels with a top-left origin and y pointing down. Sprites live
//! in Bevy world space centered on the default 2D camera, so every position goes through
//! `to_world`.

use bevy::prelude::*;

use crate::assets;
use crate::config::{
    GameConfig, DEBUG_HITBOX_COLOR, HUD_ICON_SIZE, MAX_LIVES, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::screens::{heart_pos, score_icon_pos};
use crate::session::Session;
use crate::state::{GameSet, GameState};

const Z_BACKGROUND: f32 = 0.0;
const Z_PLATFORM: f32 = 1.0;
const Z_ENEMY: f32 = 2.0;
const Z_ITEM: f32 = 3.0;
const Z_PLAYER: f32 = 4.0;
const Z_HUD: f32 = 10.0;

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, spawn_background))
            .add_systems(OnEnter(GameState::Playing), spawn_level_sprites)
            .add_systems(
                Update,
                (
                    sync_actor_sprites,
                    sync_hud,
                    draw_hitboxes.run_if(|config: Res<GameConfig>| config.debug_hitboxes),
                )
                    .in_set(GameSet::Presentation)
                    .run_if(not(in_state(GameState::Menu))),
            );
    }
}

/// Screen pixels (top-left origin, y down) to world space (centered, y up).
pub fn to_world(point: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        point.x - SCREEN_WIDTH * 0.5,
        SCREEN_HEIGHT * 0.5 - point.y,
        z,
    )
}

/// Which simulated object a sprite shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Player,
    Enemy(usize),
    Collectible(usize),
}

/// Image currently assigned to a sprite, so handles are only swapped when the frame changes.
#[derive(Component, Debug, Default)]
struct ShownFrame(String);

/// Slot of a collected-item icon in the HUD, shown once that many items are picked up.
#[derive(Component, Debug, Clone, Copy)]
struct ScoreIcon(u32);

/// Slot of a heart in the HUD, counted from the right edge.
#[derive(Component, Debug, Clone, Copy)]
struct Heart(u32);

fn setup_camera(mut commands: Commands) {
    commands.spawn((Name::new("MainCamera"), Camera2dBundle::default()));
}

pub fn image_sprite(
    asset_server: &AssetServer,
    image: &str,
    center: Vec2,
    size: Vec2,
    z: f32,
) -> SpriteBundle {
    SpriteBundle {
        texture: asset_server.load(assets::image_path(image)),
        sprite: Sprite {
            custom_size: Some(size),
            ..default()
        },
        transform: Transform::from_translation(to_world(center, z)),
        ..default()
    }
}

fn spawn_background(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut exit: EventWriter<AppExit>,
) {
    let image = match assets::image("background") {
        Ok(image) => image,
        Err(e) => {
            error!("Background unavailable: {}", e);
            exit.send(AppExit::error());
            return;
        }
    };

    let size = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    commands.spawn((
        Name::new("Background"),
        image_sprite(&asset_server, &image, size * 0.5, size, Z_BACKGROUND),
    ));
}

fn spawn_level_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    session: Res<Session>,
) {
    let level = &session.level;

    for platform in &level.platforms {
        commands.spawn((
            Name::new("Platform"),
            image_sprite(
                &asset_server,
                &platform.image,
                platform.position,
                platform.collider.size(),
                Z_PLATFORM,
            ),
        ));
    }

    for (index, enemy) in level.enemies.iter().enumerate() {
        let frame = enemy.animator.current_frame();
        commands.spawn((
            Name::new(format!("Enemy{index}")),
            Actor::Enemy(index),
            ShownFrame(frame.to_owned()),
            image_sprite(&asset_server, frame, enemy.position, enemy.collider.size(), Z_ENEMY),
        ));
    }

    for item in &level.collectibles {
        let frame = item.current_frame();
        commands.spawn((
            Name::new(format!("Collectible{}", item.id)),
            Actor::Collectible(item.id),
            ShownFrame(frame.to_owned()),
            image_sprite(&asset_server, frame, item.position, item.collider.size(), Z_ITEM),
        ));
    }

    let player = &level.player;
    let frame = player.animator.current_frame();
    commands.spawn((
        Name::new("Player"),
        Actor::Player,
        ShownFrame(frame.to_owned()),
        image_sprite(&asset_server, frame, player.position, player.collider.size(), Z_PLAYER),
    ));

    let (Ok(score), Ok(heart)) = (assets::image("collected-ball"), assets::image("life-on")) else {
        warn!("HUD images missing from the asset table; skipping HUD");
        return;
    };
    let half_icon = HUD_ICON_SIZE * 0.5;
    for index in 0..level.total_items {
        let mut icon = image_sprite(
            &asset_server,
            &score,
            score_icon_pos(index) + half_icon,
            HUD_ICON_SIZE,
            Z_HUD,
        );
        icon.visibility = Visibility::Hidden;
        commands.spawn((Name::new("ScoreIcon"), ScoreIcon(index), icon));
    }
    for index in 0..MAX_LIVES {
        commands.spawn((
            Name::new("Heart"),
            Heart(index),
            ShownFrame(heart.clone()),
            image_sprite(
                &asset_server,
                &heart,
                heart_pos(index) + half_icon,
                HUD_ICON_SIZE,
                Z_HUD,
            ),
        ));
    }
}

fn sync_actor_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    session: Res<Session>,
    mut sprites: Query<(Entity, &Actor, &mut ShownFrame, &mut Handle<Image>, &mut Transform)>,
) {
    let level = &session.level;

    for (entity, actor, mut shown, mut texture, mut transform) in &mut sprites {
        let (position, frame) = match *actor {
            Actor::Player => (level.player.position, level.player.animator.current_frame()),
            Actor::Enemy(index) => match level.enemies.get(index) {
                Some(enemy) => (enemy.position, enemy.animator.current_frame()),
                None => continue,
            },
            Actor::Collectible(id) => match level.collectibles.iter().find(|item| item.id == id) {
                Some(item) => (item.position, item.current_frame()),
                None => {
                    // Picked up: the item left the active set.
                    commands.entity(entity).despawn_recursive();
                    continue;
                }
            },
        };

        transform.translation = to_world(position, transform.translation.z);
        if shown.0 != frame {
            shown.0 = frame.to_owned();
            *texture = asset_server.load(assets::image_path(frame));
        }
    }
}

fn sync_hud(
    asset_server: Res<AssetServer>,
    session: Res<Session>,
    mut scores: Query<(&ScoreIcon, &mut Visibility)>,
    mut hearts: Query<(&Heart, &mut ShownFrame, &mut Handle<Image>)>,
) {
    let player = &session.level.player;

    for (icon, mut visibility) in &mut scores {
        let wanted = if icon.0 < player.collected {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != wanted {
            *visibility = wanted;
        }
    }

    for (heart, mut shown, mut texture) in &mut hearts {
        let key = if heart.0 < player.lives { "life-on" } else { "life-off" };
        let Ok(image) = assets::image(key) else {
            continue;
        };
        if shown.0 != image {
            *texture = asset_server.load(assets::image_path(&image));
            shown.0 = image;
        }
    }
}

fn draw_hitboxes(mut gizmos: Gizmos, session: Res<Session>) {
    let level = &session.level;
    let boxes = std::iter::once(level.player.hitbox())
        .chain(level.enemies.iter().map(|enemy| enemy.hitbox()));

    for rect in boxes {
        let center = to_world(rect.center(), 0.0).truncate();
        gizmos.rect_2d(center, 0.0, rect.size(), DEBUG_HITBOX_COLOR);
    }
}
