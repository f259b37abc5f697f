//! The explicit world/context threaded through every tick and input handler.
//!
//! `Session` owns the level, the top-level `GameState`, the sound flag and the respawn
//! countdown. Nothing else in the crate holds mutable game state, so one `tick` is atomic with
//! respect to rendering and input.

use bevy::log::{debug, info};
use bevy::math::Vec2;
use bevy::prelude::Resource;
use rand::Rng;

use crate::combat::RespawnTimer;
use crate::config::{respawn_ticks, TICK_HZ};
use crate::level::Level;
use crate::player::HeldKeys;
use crate::screens::{button_at, MenuButton};
use crate::state::GameState;

/// Discrete input events, delivered between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Press {
    Jump,
    Quit,
    /// Mouse press at a screen-space position.
    Click(Vec2),
}

/// Whether the host should keep running after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Resource, Debug, Clone)]
pub struct Session {
    pub state: GameState,
    pub level: Level,
    pub respawn: RespawnTimer,
    /// Ticks between a hit and the respawn, derived from the tick rate.
    pub respawn_delay: u32,
    pub sound_on: bool,
    pub ticks: u64,
}

impl Session {
    pub fn new(level: Level) -> Self {
        Self {
            state: GameState::Menu,
            level,
            respawn: RespawnTimer::default(),
            respawn_delay: respawn_ticks(TICK_HZ),
            sound_on: true,
            ticks: 0,
        }
    }

    /// Rescales the respawn delay for a host running the fixed tick at `tick_hz`.
    pub fn with_tick_rate(mut self, tick_hz: f64) -> Self {
        self.respawn_delay = respawn_ticks(tick_hz);
        self
    }

    /// One fixed-rate step. Lives are checked before the win condition, and entities only move
    /// while PLAYING.
    pub fn tick(&mut self, held: HeldKeys, rng: &mut impl Rng) {
        self.ticks += 1;

        if self.respawn.advance() {
            self.level.player.respawn();
        }

        if self.level.player.lives == 0 {
            self.set_state(GameState::GameOver);
        } else if self.level.all_collected() {
            self.set_state(GameState::Win);
        } else if self.state == GameState::Playing {
            if let Some(hit) = self.level.update(held, rng) {
                self.respawn.schedule(self.respawn_delay);
                debug!(
                    "Respawn in {} ticks after enemy {} struck from the {:?}",
                    self.respawn_delay, hit.enemy, hit.side
                );
            }
        }
    }

    pub fn handle_press(&mut self, press: Press) -> Flow {
        match (self.state, press) {
            (GameState::Playing, Press::Jump) => {
                self.level.player.try_jump();
            }
            (state, Press::Quit) if state.is_terminal() => {
                info!("Quit requested from {:?}", state);
                return Flow::Exit;
            }
            (GameState::Menu, Press::Click(point)) => match button_at(point) {
                Some(MenuButton::Start) => self.set_state(GameState::Playing),
                Some(MenuButton::Exit) => {
                    info!("Exit chosen from the menu");
                    return Flow::Exit;
                }
                Some(MenuButton::Sound) => {
                    self.sound_on = !self.sound_on;
                    info!("Sound {}", if self.sound_on { "on" } else { "off" });
                }
                None => {}
            },
            _ => {}
        }
        Flow::Continue
    }

    fn set_state(&mut self, next: GameState) {
        if self.state != next {
            info!("Game state {:?} -> {:?} at tick {}", self.state, next, self.ticks);
            self.state = next;
            // End screens show the last gameplay frame, so a pending respawn never lands.
            if next.is_terminal() {
                self.respawn.cancel();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::START_BUTTON_POS;

    const SOURCE: &str = include_str!("../assets/levels/level1.ron");

    fn session() -> Session {
        Session::new(Level::parse(SOURCE).unwrap())
    }

    #[test]
    fn starts_in_menu_and_stays_there() {
        let mut session = session();
        let spawn = session.level.player.position;
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            session.tick(HeldKeys::default(), &mut rng);
        }
        assert_eq!(session.state, GameState::Menu);
        assert_eq!(session.level.player.position, spawn);
    }

    #[test]
    fn respawn_delay_tracks_the_tick_rate() {
        assert_eq!(session().respawn_delay, 72);
        assert_eq!(session().with_tick_rate(120.0).respawn_delay, 144);
    }

    #[test]
    fn reaching_an_end_screen_drops_the_pending_respawn() {
        let mut session = session();
        session.state = GameState::Playing;
        session.respawn.schedule(session.respawn_delay);
        session.level.player.lives = 0;

        session.tick(HeldKeys::default(), &mut StdRng::seed_from_u64(5));
        assert_eq!(session.state, GameState::GameOver);
        assert!(!session.respawn.is_pending());
    }

    #[test]
    fn start_button_begins_play() {
        let mut session = session();
        assert_eq!(session.handle_press(Press::Click(START_BUTTON_POS)), Flow::Continue);
        assert_eq!(session.state, GameState::Playing);
    }

    #[test]
    fn sound_button_toggles_flag() {
        let mut session = session();
        let sound = crate::config::SOUND_BUTTON_POS;
        session.handle_press(Press::Click(sound));
        assert!(!session.sound_on);
        session.handle_press(Press::Click(sound));
        assert!(session.sound_on);
        assert_eq!(session.state, GameState::Menu);
    }

    #[test]
    fn quit_only_works_on_end_screens() {
        let mut session = session();
        assert_eq!(session.handle_press(Press::Quit), Flow::Continue);

        session.state = GameState::Playing;
        assert_eq!(session.handle_press(Press::Quit), Flow::Continue);

        session.state = GameState::GameOver;
        assert_eq!(session.handle_press(Press::Quit), Flow::Exit);

        session.state = GameState::Win;
        assert_eq!(session.handle_press(Press::Quit), Flow::Exit);
    }

    #[test]
    fn jump_is_ignored_outside_play() {
        let mut session = session();
        session.level.player.on_ground = true;
        session.handle_press(Press::Jump);
        assert_eq!(session.level.player.velocity_y, 0.0);
    }

    #[test]
    fn clicks_do_nothing_once_playing() {
        let mut session = session();
        session.handle_press(Press::Click(START_BUTTON_POS));
        let exit = crate::config::EXIT_BUTTON_POS;
        assert_eq!(session.handle_press(Press::Click(exit)), Flow::Continue);
        assert_eq!(session.state, GameState::Playing);
    }
}
