//! Top-level game state. The session owns the authoritative value and changes it during its
//! tick or from input handlers; `sync_game_state` copies it into Bevy's state machine so the
//! screen plugins can hang spawn/despawn work off `OnEnter`/`OnExit`.

use bevy::prelude::*;

use crate::session::Session;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Win,
    GameOver,
}

impl GameState {
    /// WIN and GAME_OVER end the session; only quitting leaves them.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Win | GameState::GameOver)
    }
}

/// Named system sets to structure the frame. Input handlers run before the fixed tick reads the
/// session, and presentation only reads what the tick produced.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Presentation,
}

pub fn sync_game_state(
    session: Res<Session>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if *state.get() != session.state {
        next_state.set(session.state);
    }
}
