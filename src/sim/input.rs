//! Unified input state
//!
//! Keyboard, mouse and touch handlers all funnel through [`InputState::apply`],
//! which resolves the browser key identifier to an [`Action`] and records
//! whether it is held. The simulation only ever reads this state.

use serde::{Deserialize, Serialize};

const ACTION_COUNT: usize = 6;

/// Logical buttons the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Jump,
    /// Secondary jump button (`z`); tracked but not bound to anything yet
    AltJump,
}

impl Action {
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Jump,
        Action::AltJump,
    ];

    /// Resolve a browser key identifier (`KeyboardEvent.key` or a button's
    /// `data-key` attribute)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Action::Up),
            "ArrowDown" => Some(Action::Down),
            "ArrowLeft" => Some(Action::Left),
            "ArrowRight" => Some(Action::Right),
            " " | "Space" => Some(Action::Jump),
            "z" => Some(Action::AltJump),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
            Action::Jump => 4,
            Action::AltJump => 5,
        }
    }
}

/// Where an input event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Mouse,
    Touch,
}

/// A raw press/release from any source, still carrying the browser key name
#[derive(Debug, Clone)]
pub struct InputEvent {
    pub source: InputSource,
    pub key: String,
    pub pressed: bool,
}

impl InputEvent {
    pub fn new(source: InputSource, key: impl Into<String>, pressed: bool) -> Self {
        Self {
            source,
            key: key.into(),
            pressed,
        }
    }
}

/// Held state of every [`Action`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    held: [bool; ACTION_COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single setter every input source goes through
    pub fn set(&mut self, action: Action, pressed: bool) {
        self.held[action.index()] = pressed;
    }

    /// Apply an event from any source. Unknown keys are ignored and yield `None`.
    pub fn apply(&mut self, event: &InputEvent) -> Option<Action> {
        let Some(action) = Action::from_key(&event.key) else {
            log::trace!("Ignoring unknown key {:?} from {:?}", event.key, event.source);
            return None;
        };
        self.set(action, event.pressed);
        Some(action)
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    /// Up and Jump both request a jump
    pub fn jump_requested(&self) -> bool {
        self.is_pressed(Action::Up) || self.is_pressed(Action::Jump)
    }

    /// Net horizontal direction: -1, 0 or 1. Left and Right together cancel.
    pub fn horizontal(&self) -> i8 {
        self.is_pressed(Action::Right) as i8 - self.is_pressed(Action::Left) as i8
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held = [false; ACTION_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_press_and_release() {
        let mut input = InputState::new();
        let down = InputEvent::new(InputSource::Keyboard, "ArrowRight", true);
        assert_eq!(input.apply(&down), Some(Action::Right));
        assert!(input.is_pressed(Action::Right));

        let up = InputEvent::new(InputSource::Keyboard, "ArrowRight", false);
        input.apply(&up);
        assert!(!input.is_pressed(Action::Right));
    }

    #[test]
    fn test_space_aliases_map_to_jump() {
        assert_eq!(Action::from_key(" "), Some(Action::Jump));
        assert_eq!(Action::from_key("Space"), Some(Action::Jump));
        assert_eq!(Action::from_key("z"), Some(Action::AltJump));
        assert_eq!(Action::from_key("Z"), None);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut input = InputState::new();
        input.set(Action::Left, true);
        let before = input;

        let event = InputEvent::new(InputSource::Keyboard, "Escape", true);
        assert_eq!(input.apply(&event), None);
        assert_eq!(input, before);
    }

    #[test]
    fn test_all_sources_share_one_state() {
        let mut input = InputState::new();
        input.apply(&InputEvent::new(InputSource::Touch, "ArrowLeft", true));
        input.apply(&InputEvent::new(InputSource::Mouse, "Space", true));
        assert!(input.is_pressed(Action::Left));
        assert!(input.jump_requested());

        // Releasing via keyboard clears a touch press
        input.apply(&InputEvent::new(InputSource::Keyboard, "ArrowLeft", false));
        assert!(!input.is_pressed(Action::Left));
    }

    #[test]
    fn test_horizontal_cancels() {
        let mut input = InputState::new();
        assert_eq!(input.horizontal(), 0);
        input.set(Action::Left, true);
        assert_eq!(input.horizontal(), -1);
        input.set(Action::Right, true);
        assert_eq!(input.horizontal(), 0);
        input.set(Action::Left, false);
        assert_eq!(input.horizontal(), 1);
    }

    #[test]
    fn test_alt_jump_does_not_request_jump() {
        let mut input = InputState::new();
        input.set(Action::AltJump, true);
        assert!(!input.jump_requested());
        input.set(Action::Up, true);
        assert!(input.jump_requested());
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        for action in Action::ALL {
            input.set(action, true);
        }
        assert!(Action::ALL.iter().all(|&a| input.is_pressed(a)));
        input.release_all();
        assert_eq!(input, InputState::default());
    }
}
