//! The single level: layout data, the actors it owns and one simulation step over them.
//!
//! The layout ships as RON next to the other assets and is embedded at compile time through
//! `GameConfig::level_source`. Parsing happens once at startup; any bad asset key or malformed
//! entry stops the app before the first tick.

use bevy::app::AppExit;
use bevy::log::{error, info};
use bevy::math::Vec2;
use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;

use crate::assets;
use crate::collectible::Collectible;
use crate::collision::Platform;
use crate::combat::{self, Hit};
use crate::config::{GameConfig, SCREEN_WIDTH};
use crate::enemy::Enemy;
use crate::error::GameError;
use crate::player::{HeldKeys, Player};
use crate::session::Session;

/// Parses the embedded level once and hands the resulting `Session` to the ECS.
pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_level);
    }
}

fn load_level(mut commands: Commands, config: Res<GameConfig>, mut exit: EventWriter<AppExit>) {
    match Level::parse(config.level_source) {
        Ok(level) => {
            info!(
                "Level ready: {} platforms, {} enemies, {} collectibles",
                level.platforms.len(),
                level.enemies.len(),
                level.total_items
            );
            commands.insert_resource(Session::new(level).with_tick_rate(config.tick_hz));
        }
        Err(e) => {
            error!("Unable to build the level: {}", e);
            exit.send(AppExit::error());
        }
    }
}

type Point = (f32, f32);

fn vec(point: Point) -> Vec2 {
    Vec2::new(point.0, point.1)
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelLayout {
    pub player_spawn: Point,
    pub enemies: Vec<EnemySpawn>,
    pub floor: FloorStrip,
    pub platforms: Vec<PlatformSpawn>,
    pub collectibles: CollectibleSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnemySpawn {
    pub position: Point,
    pub patrol_radius: f32,
}

/// Row of floor tiles covering the whole screen width. Tile images cycle through the asset's
/// frame list.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorStrip {
    pub asset: String,
    pub y: f32,
    pub tile_size: Point,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformSpawn {
    pub asset: String,
    pub position: Point,
    pub size: Point,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectibleSet {
    pub asset: String,
    pub size: Point,
    pub positions: Vec<Point>,
}

#[derive(Debug, Clone)]
pub struct Level {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub platforms: Vec<Platform>,
    /// Items still waiting to be picked up.
    pub collectibles: Vec<Collectible>,
    pub total_items: u32,
}

impl Level {
    pub fn parse(source: &str) -> Result<Self, GameError> {
        let layout: LevelLayout = ron::from_str(source)?;
        Self::from_layout(&layout)
    }

    pub fn from_layout(layout: &LevelLayout) -> Result<Self, GameError> {
        let player = Player::new(vec(layout.player_spawn), assets::kitten_frames()?);

        let enemies = layout
            .enemies
            .iter()
            .map(|spawn| -> Result<Enemy, GameError> {
                Ok(Enemy::new(
                    vec(spawn.position),
                    spawn.patrol_radius,
                    assets::grandma_frames()?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut platforms = floor_tiles(&layout.floor)?;
        for spawn in &layout.platforms {
            platforms.push(Platform::new(
                assets::image(&spawn.asset)?,
                vec(spawn.position),
                vec(spawn.size),
            ));
        }

        let frames = assets::lookup(&layout.collectibles.asset)?.into_frames();
        let size = vec(layout.collectibles.size);
        let collectibles: Vec<Collectible> = layout
            .collectibles
            .positions
            .iter()
            .enumerate()
            .map(|(id, &position)| Collectible::new(id, vec(position), size, frames.clone()))
            .collect();

        Ok(Self::new(player, enemies, platforms, collectibles))
    }

    pub fn new(
        player: Player,
        enemies: Vec<Enemy>,
        platforms: Vec<Platform>,
        collectibles: Vec<Collectible>,
    ) -> Self {
        let total_items = collectibles.len() as u32;
        Self {
            player,
            enemies,
            platforms,
            collectibles,
            total_items,
        }
    }

    pub fn all_collected(&self) -> bool {
        self.player.collected >= self.total_items
    }

    /// One PLAYING tick: kitten, collectible animation, then each enemy followed by its contact
    /// check. Returns the hit if the kitten got caught this tick.
    pub fn update(&mut self, held: HeldKeys, rng: &mut impl Rng) -> Option<Hit> {
        self.player.update(held, &self.platforms, &mut self.collectibles);

        for item in &mut self.collectibles {
            item.animate(rng);
        }

        let mut hit = None;
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            enemy.update();
            if combat::in_contact(&self.player, enemy) {
                hit = Some(combat::apply_hit(&mut self.player, enemy, index));
            }
        }
        hit
    }
}

fn floor_tiles(floor: &FloorStrip) -> Result<Vec<Platform>, GameError> {
    let images = assets::lookup(&floor.asset)?.into_frames();

    let size = vec(floor.tile_size);
    let mut tiles = Vec::new();
    let mut x = 0.0;
    while x < SCREEN_WIDTH + size.x {
        let image = images[tiles.len() % images.len()].clone();
        tiles.push(Platform::new(image, Vec2::new(x, floor.y), size));
        x += size.x;
    }
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const SOURCE: &str = include_str!("../assets/levels/level1.ron");

    #[test]
    fn shipped_level_parses() {
        let level = Level::parse(SOURCE).unwrap();
        assert_eq!(level.total_items, 3);
        assert_eq!(level.enemies.len(), 2);
        // 14 floor tiles (x = 0..=832 step 64) plus six floating platforms.
        assert_eq!(level.platforms.len(), 14 + 6);
        assert_eq!(level.platforms[5].image, "floor/platform-mid-1");
        assert_eq!(level.player.lives, 3);
    }

    #[test]
    fn unknown_platform_asset_aborts_the_load() {
        let source = SOURCE.replace("long-platform", "lava-platform");
        let err = Level::parse(&source).unwrap_err();
        assert!(matches!(err, GameError::UnknownAsset(ref key) if key == "lava-platform"));
    }

    #[test]
    fn malformed_layout_is_a_parse_error() {
        let err = Level::parse("(player_spawn: oops)").unwrap_err();
        assert!(matches!(err, GameError::LevelParse(_)));
    }

    #[test]
    fn spawned_kitten_lands_on_the_floor() {
        let mut level = Level::parse(SOURCE).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..60 {
            level.update(HeldKeys::default(), &mut rng);
        }
        assert!(level.player.on_ground);
        assert_eq!(level.player.bounds().max.y, 539.0);
        assert!(!level.player.is_dead);
    }
}
