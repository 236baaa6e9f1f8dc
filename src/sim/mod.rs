//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per frame, no wall-clock time
//! - State is owned by `GameState` and passed in explicitly
//! - No rendering or platform dependencies

pub mod input;
pub mod rect;
pub mod state;
pub mod tick;

pub use input::{Action, InputEvent, InputSource, InputState};
pub use rect::Rect;
pub use state::{DEFAULT_PLATFORMS, GameEvent, GameState, Platform, Player};
pub use tick::tick;
