//! Animation state machine shared by the kitten and the grandmas.
//!
//! Each actor owns an `Animator`: a `FrameTable` mapping logical states to frame sequences, the
//! state picked on the last tick, and the frame counter. Selecting a state never resets the
//! frame counter; only explicit `reset_frame` calls (jump start, taking a hit, starting an
//! attack) do, so a switch between two looping sequences keeps the running count.

use std::collections::HashMap;

use bevy::math::Vec2;

use crate::config::ANIM_SPEED;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnimState {
    #[default]
    Idle,
    RightWalk,
    LeftWalk,
    RightJump,
    LeftJump,
    IdleJump,
    Death,
    AttackRight,
    AttackLeft,
}

/// Which side of an enemy the kitten was on when it got caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Snapshot of everything state selection depends on.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimInputs {
    pub is_dead: bool,
    pub is_attacking: bool,
    /// `None` until the first hit decides a side.
    pub hit_side: Option<Side>,
    pub is_moving: bool,
    pub on_ground: bool,
    pub velocity: Vec2,
}

/// Vertical speed above which an airborne actor counts as jumping or falling.
const AIRBORNE_SPEED: f32 = 2.0;

/// Picks the logical state for one tick. First match wins: death, attack, airborne, walk, idle.
pub fn select_state(inputs: &AnimInputs) -> AnimState {
    if inputs.is_dead {
        return AnimState::Death;
    }

    if inputs.is_attacking {
        return match inputs.hit_side {
            Some(Side::Right) => AnimState::AttackRight,
            _ => AnimState::AttackLeft,
        };
    }

    if !inputs.on_ground && inputs.velocity.y.abs() > AIRBORNE_SPEED {
        return if inputs.velocity.x > 0.0 {
            AnimState::RightJump
        } else if inputs.velocity.x < 0.0 {
            AnimState::LeftJump
        } else {
            AnimState::IdleJump
        };
    }

    if inputs.is_moving {
        return if inputs.velocity.x > 0.0 {
            AnimState::RightWalk
        } else {
            AnimState::LeftWalk
        };
    }

    AnimState::Idle
}

/// Frame sequences per state. Idle and both walks are mandatory; every other state falls back
/// to idle when it has no sequence of its own.
#[derive(Debug, Clone)]
pub struct FrameTable {
    idle: Vec<String>,
    sequences: HashMap<AnimState, Vec<String>>,
}

impl FrameTable {
    pub fn new(
        idle: Vec<String>,
        right_walk: Vec<String>,
        left_walk: Vec<String>,
    ) -> Result<Self, GameError> {
        for (state, frames) in [
            (AnimState::Idle, &idle),
            (AnimState::RightWalk, &right_walk),
            (AnimState::LeftWalk, &left_walk),
        ] {
            if frames.is_empty() {
                return Err(GameError::EmptyFrames(state));
            }
        }

        let mut sequences = HashMap::new();
        sequences.insert(AnimState::RightWalk, right_walk);
        sequences.insert(AnimState::LeftWalk, left_walk);

        Ok(Self { idle, sequences })
    }

    /// Adds an optional sequence. An empty list leaves the state on the idle fallback.
    pub fn with(mut self, state: AnimState, frames: Vec<String>) -> Self {
        if !frames.is_empty() && state != AnimState::Idle {
            self.sequences.insert(state, frames);
        }
        self
    }

    pub fn frames(&self, state: AnimState) -> &[String] {
        self.sequences
            .get(&state)
            .map(Vec::as_slice)
            .unwrap_or(&self.idle)
    }
}

#[derive(Debug, Clone)]
pub struct Animator {
    table: FrameTable,
    state: AnimState,
    frame_index: usize,
    frame_timer: u32,
    anim_speed: u32,
}

impl Animator {
    pub fn new(table: FrameTable) -> Self {
        Self {
            table,
            state: AnimState::Idle,
            frame_index: 0,
            frame_timer: 0,
            anim_speed: ANIM_SPEED,
        }
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn reset_frame(&mut self) {
        self.frame_index = 0;
    }

    /// Selects this tick's state and advances the frame timer.
    pub fn update(&mut self, inputs: &AnimInputs) -> AnimState {
        self.state = select_state(inputs);

        self.frame_timer += 1;
        if self.frame_timer >= self.anim_speed {
            self.frame_timer = 0;
            self.frame_index += 1;
        }

        self.state
    }

    /// Image name to draw for the current state. Sequences wrap, so this loops forever.
    pub fn current_frame(&self) -> &str {
        let frames = self.table.frames(self.state);
        &frames[self.frame_index % frames.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(prefix: &str, count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("{prefix}-{i}")).collect()
    }

    fn table() -> FrameTable {
        FrameTable::new(names("idle", 2), names("right", 8), names("left", 8))
            .unwrap()
            .with(AnimState::IdleJump, names("jump", 5))
    }

    fn airborne(vx: f32, vy: f32) -> AnimInputs {
        AnimInputs {
            velocity: Vec2::new(vx, vy),
            ..default_inputs()
        }
    }

    fn default_inputs() -> AnimInputs {
        AnimInputs {
            on_ground: false,
            ..Default::default()
        }
    }

    #[test]
    fn death_beats_everything() {
        let inputs = AnimInputs {
            is_dead: true,
            is_attacking: true,
            is_moving: true,
            velocity: Vec2::new(4.0, -10.0),
            ..Default::default()
        };
        assert_eq!(select_state(&inputs), AnimState::Death);
    }

    #[test]
    fn attack_side_follows_hit_side() {
        let mut inputs = AnimInputs {
            is_attacking: true,
            hit_side: Some(Side::Right),
            ..Default::default()
        };
        assert_eq!(select_state(&inputs), AnimState::AttackRight);

        inputs.hit_side = Some(Side::Left);
        assert_eq!(select_state(&inputs), AnimState::AttackLeft);

        inputs.hit_side = None;
        assert_eq!(select_state(&inputs), AnimState::AttackLeft);
    }

    #[test]
    fn airborne_branches_on_horizontal_velocity() {
        assert_eq!(select_state(&airborne(4.0, 5.0)), AnimState::RightJump);
        assert_eq!(select_state(&airborne(-4.0, 5.0)), AnimState::LeftJump);
        assert_eq!(select_state(&airborne(0.0, -14.4)), AnimState::IdleJump);
    }

    #[test]
    fn slow_vertical_motion_is_not_a_jump() {
        let inputs = AnimInputs {
            is_moving: true,
            velocity: Vec2::new(-4.0, 0.6),
            ..default_inputs()
        };
        assert_eq!(select_state(&inputs), AnimState::LeftWalk);
        assert_eq!(select_state(&airborne(0.0, 2.0)), AnimState::Idle);
    }

    #[test]
    fn selection_is_deterministic() {
        let inputs = AnimInputs {
            is_moving: true,
            on_ground: true,
            velocity: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        let first = select_state(&inputs);
        for _ in 0..10 {
            assert_eq!(select_state(&inputs), first);
        }
        assert_eq!(first, AnimState::RightWalk);
    }

    #[test]
    fn mandatory_sequences_must_not_be_empty() {
        let err = FrameTable::new(Vec::new(), names("r", 1), names("l", 1)).unwrap_err();
        assert!(matches!(err, GameError::EmptyFrames(AnimState::Idle)));

        let err = FrameTable::new(names("i", 1), names("r", 1), Vec::new()).unwrap_err();
        assert!(matches!(err, GameError::EmptyFrames(AnimState::LeftWalk)));
    }

    #[test]
    fn missing_sequences_fall_back_to_idle() {
        let table = table().with(AnimState::Death, Vec::new());
        assert_eq!(table.frames(AnimState::Death), names("idle", 2).as_slice());
        assert_eq!(table.frames(AnimState::AttackRight), names("idle", 2).as_slice());
        assert_eq!(table.frames(AnimState::IdleJump).len(), 5);
    }

    #[test]
    fn displayed_frame_wraps_every_sequence_length() {
        let mut animator = Animator::new(table());
        let walking = AnimInputs {
            is_moving: true,
            on_ground: true,
            velocity: Vec2::new(4.0, 0.0),
            ..Default::default()
        };

        for k in 1..=200usize {
            animator.update(&walking);
            let expected = format!("right-{}", (k / ANIM_SPEED as usize) % 8 + 1);
            assert_eq!(animator.current_frame(), expected, "tick {k}");
        }
    }

    #[test]
    fn switching_state_keeps_frame_index() {
        let mut animator = Animator::new(table());
        let idle = AnimInputs {
            on_ground: true,
            ..Default::default()
        };
        for _ in 0..25 {
            animator.update(&idle);
        }
        assert_eq!(animator.frame_index(), 2);

        animator.update(&airborne(0.0, -10.0));
        assert_eq!(animator.state(), AnimState::IdleJump);
        assert_eq!(animator.frame_index(), 2);
        assert_eq!(animator.current_frame(), "jump-3");

        animator.reset_frame();
        assert_eq!(animator.current_frame(), "jump-1");
    }
}
