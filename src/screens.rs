//! Screen-space layout for the menu buttons, the HUD and the end-of-session modal.

use bevy::color::Color;
use bevy::math::{Rect, Vec2};

use crate::config::{
    DEFEAT_EDGE_COLOR, DEFEAT_TITLE_COLOR, EXIT_BUTTON_POS, HUD_ICON_SPACING, HUD_TOP,
    MENU_BUTTON_SIZE, SCREEN_WIDTH, SOUND_BUTTON_POS, SOUND_BUTTON_SIZE, START_BUTTON_POS,
    WIN_EDGE_COLOR, WIN_TITLE_COLOR,
};
use crate::error::GameError;
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Exit,
    Sound,
}

impl MenuButton {
    pub const ALL: [MenuButton; 3] = [MenuButton::Start, MenuButton::Exit, MenuButton::Sound];

    pub fn region(self) -> Rect {
        let (center, size) = match self {
            MenuButton::Start => (START_BUTTON_POS, MENU_BUTTON_SIZE),
            MenuButton::Exit => (EXIT_BUTTON_POS, MENU_BUTTON_SIZE),
            MenuButton::Sound => (SOUND_BUTTON_POS, SOUND_BUTTON_SIZE),
        };
        Rect::from_center_size(center, size)
    }

    /// Asset key of the button image. The sound button reflects the current flag.
    pub fn asset_key(self, sound_on: bool) -> &'static str {
        match self {
            MenuButton::Start => "start",
            MenuButton::Exit => "exit",
            MenuButton::Sound if sound_on => "sound-on",
            MenuButton::Sound => "sound-off",
        }
    }
}

pub fn button_at(point: Vec2) -> Option<MenuButton> {
    MenuButton::ALL
        .into_iter()
        .find(|button| button.region().contains(point))
}

/// Top-left corner of the icon for the `index`-th collected item, counted from 0. The row
/// starts one spacing left of x = 40, so the first icon sits at x = 5.
pub fn score_icon_pos(index: u32) -> Vec2 {
    Vec2::new(40.0 + (index as f32 - 1.0) * HUD_ICON_SPACING, HUD_TOP)
}

/// Top-left corner of the `index`-th heart, counted from the right edge.
pub fn heart_pos(index: u32) -> Vec2 {
    Vec2::new(SCREEN_WIDTH - (index as f32 + 1.0) * HUD_ICON_SPACING, HUD_TOP)
}

/// Text and palette of the modal shown when the session ends.
#[derive(Debug, Clone, PartialEq)]
pub struct EndScreen {
    pub title: &'static str,
    pub message: &'static str,
    pub title_color: Color,
    pub edge_color: Color,
}

impl EndScreen {
    pub fn for_state(state: GameState) -> Result<Self, GameError> {
        match state {
            GameState::Win => Ok(Self {
                title: "You won!",
                message: "The kitten gathered plenty of yarn to play with.",
                title_color: WIN_TITLE_COLOR,
                edge_color: WIN_EDGE_COLOR,
            }),
            GameState::GameOver => Ok(Self {
                title: "You lost!",
                message: "The kitten got far too wet to carry on...",
                title_color: DEFEAT_TITLE_COLOR,
                edge_color: DEFEAT_EDGE_COLOR,
            }),
            other => Err(GameError::NotAnEndScreen(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_hit_the_right_button() {
        assert_eq!(button_at(START_BUTTON_POS), Some(MenuButton::Start));
        assert_eq!(button_at(EXIT_BUTTON_POS + Vec2::new(90.0, 0.0)), Some(MenuButton::Exit));
        assert_eq!(button_at(SOUND_BUTTON_POS), Some(MenuButton::Sound));
        assert_eq!(button_at(Vec2::new(5.0, 590.0)), None);
    }

    #[test]
    fn sound_button_image_follows_flag() {
        assert_eq!(MenuButton::Sound.asset_key(true), "sound-on");
        assert_eq!(MenuButton::Sound.asset_key(false), "sound-off");
        assert_eq!(MenuButton::Start.asset_key(false), "start");
    }

    #[test]
    fn hearts_fill_from_the_right_edge() {
        assert_eq!(heart_pos(0).x, SCREEN_WIDTH - 35.0);
        assert_eq!(heart_pos(2).x, SCREEN_WIDTH - 105.0);
    }

    #[test]
    fn first_score_icon_hugs_the_left_edge() {
        assert_eq!(score_icon_pos(0), Vec2::new(5.0, HUD_TOP));
        assert_eq!(score_icon_pos(2).x, 75.0);
    }

    #[test]
    fn only_terminal_states_have_end_screens() {
        assert_eq!(EndScreen::for_state(GameState::Win).unwrap().title, "You won!");
        assert_eq!(EndScreen::for_state(GameState::GameOver).unwrap().title, "You lost!");
        assert!(matches!(
            EndScreen::for_state(GameState::Menu),
            Err(GameError::NotAnEndScreen(GameState::Menu))
        ));
        assert!(EndScreen::for_state(GameState::Playing).is_err());
    }
}
