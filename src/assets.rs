//! Asset-key lookup and the frame tables of the animated actors.
//!
//! Names returned here are image paths relative to `assets/images/`, without extension. Level
//! data refers to scenery by key, so an unknown key surfaces while the level is being built.

use crate::animation::{AnimState, FrameTable};
use crate::error::GameError;

/// What a key resolves to: one static image or an ordered frame list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    Single(String),
    Frames(Vec<String>),
}

impl AssetRef {
    /// Frame list view. A single image is a one-frame sequence.
    pub fn into_frames(self) -> Vec<String> {
        match self {
            AssetRef::Single(name) => vec![name],
            AssetRef::Frames(frames) => frames,
        }
    }
}

fn numbered(prefix: &str, numbers: impl IntoIterator<Item = u32>) -> Vec<String> {
    numbers
        .into_iter()
        .map(|i| format!("{prefix}-{i}"))
        .collect()
}

pub fn lookup(key: &str) -> Result<AssetRef, GameError> {
    let single = |name: &str| -> Result<AssetRef, GameError> {
        Ok(AssetRef::Single(name.to_owned()))
    };
    match key {
        "floor" => Ok(AssetRef::Frames(numbered("floor/platform-mid", 1..=5))),
        "short-platform" => single("platform/platform-4"),
        "long-platform" => single("platform/platform-3"),
        "collectable-balls" => Ok(AssetRef::Frames(numbered("items/ball", 1..=3))),
        "collected-ball" => single("items/ball-blue"),
        "life-on" => single("items/life-on"),
        "life-off" => single("items/life-off"),
        "background" => single("background/lvl01-bg"),
        "title" => single("menu/title"),
        "start" => single("menu/start-btn"),
        "exit" => single("menu/exit-btn"),
        "sound-on" => single("menu/sound-on-btn"),
        "sound-off" => single("menu/sound-off-btn"),
        other => Err(GameError::UnknownAsset(other.to_owned())),
    }
}

/// Single-image lookup for keys that are never animated.
pub fn image(key: &str) -> Result<String, GameError> {
    match lookup(key)? {
        AssetRef::Single(name) => Ok(name),
        AssetRef::Frames(mut frames) => Ok(frames.swap_remove(0)),
    }
}

/// Asset-server path for an image name.
pub fn image_path(name: &str) -> String {
    format!("images/{name}.png")
}

pub fn kitten_frames() -> Result<FrameTable, GameError> {
    Ok(FrameTable::new(
        numbered("kitten/idle/idle", [4, 5]),
        numbered("kitten/walk-right/walk-right", 1..=8),
        numbered("kitten/walk-left/walk-left", 1..=8),
    )?
    .with(AnimState::Death, numbered("kitten/hit/hit", 1..=4))
    .with(AnimState::RightJump, numbered("kitten/right-jump/jump", 1..=5))
    .with(AnimState::LeftJump, numbered("kitten/left-jump/jump", 1..=5))
    .with(AnimState::IdleJump, numbered("kitten/idle-jump/jump", 1..=5)))
}

pub fn grandma_frames() -> Result<FrameTable, GameError> {
    Ok(FrameTable::new(
        numbered("enemy/idle/enemy-idle", [1, 4]),
        numbered("enemy/walk-right/enemy-walk-right", 1..=4),
        numbered("enemy/walk-left/enemy-walk-left", 1..=4),
    )?
    .with(
        AnimState::AttackRight,
        numbered("enemy/attack-right/enemy-attack", 1..=3),
    )
    .with(
        AnimState::AttackLeft,
        numbered("enemy/attack-left/enemy-attack", 1..=3),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(
            lookup("short-platform").unwrap(),
            AssetRef::Single("platform/platform-4".into())
        );
        let AssetRef::Frames(floor) = lookup("floor").unwrap() else {
            panic!("floor should be a frame list");
        };
        assert_eq!(floor.len(), 5);
        assert_eq!(floor[0], "floor/platform-mid-1");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = lookup("lava").unwrap_err();
        assert!(matches!(err, GameError::UnknownAsset(ref key) if key == "lava"));
        assert!(image("lava").is_err());
    }

    #[test]
    fn actor_tables_fill_their_optional_states() {
        let kitten = kitten_frames().unwrap();
        assert_eq!(kitten.frames(AnimState::Death).len(), 4);
        assert_eq!(kitten.frames(AnimState::AttackLeft), kitten.frames(AnimState::Idle));

        let grandma = grandma_frames().unwrap();
        assert_eq!(grandma.frames(AnimState::AttackRight).len(), 3);
        assert_eq!(grandma.frames(AnimState::IdleJump), grandma.frames(AnimState::Idle));
    }

    #[test]
    fn image_paths_live_under_images() {
        assert_eq!(image_path("menu/title"), "images/menu/title.png");
    }
}
