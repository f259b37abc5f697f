//! Single-screen kitten platformer.
//!
//! The simulation (`session`, `level`, `player`, `enemy`, `combat`, `animation`) is plain Rust
//! over `bevy::math` types and can be ticked without an `App`. The Bevy side (`app`, `controls`,
//! `render`, `ui`, `audio`) samples input, drives the fixed tick and draws the result.

pub mod animation;
pub mod app;
pub mod assets;
pub mod audio;
pub mod collectible;
pub mod collision;
pub mod combat;
pub mod config;
pub mod controls;
pub mod enemy;
pub mod error;
pub mod level;
pub mod player;
pub mod render;
pub mod screens;
pub mod session;
pub mod state;
pub mod ui;

pub use app::PlatformerPlugin;
pub use config::GameConfig;
pub use error::GameError;
pub use session::Session;
