//! Game state and core simulation types
//!
//! Everything the simulation mutates is owned by [`GameState`] and passed into
//! [`super::tick`] explicitly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// The default level: ground plus three ledges
pub const DEFAULT_PLATFORMS: [Platform; 4] = [
    Platform::new(0.0, 350.0, 1000.0, 50.0), // Ground
    Platform::new(200.0, 250.0, 100.0, 20.0),
    Platform::new(400.0, 180.0, 100.0, 20.0),
    Platform::new(600.0, 100.0, 200.0, 20.0),
];

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }
}

/// The player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in screen pixels
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/frame, positive is down)
    pub vel_y: f32,
    pub speed: f32,
    pub jump_power: f32,
    pub gravity: f32,
    /// Landed on a platform this frame
    pub grounded: bool,
    pub spawn: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

impl Player {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        let spawn = Vec2::new(tuning.spawn_x, tuning.spawn_y);
        Self {
            pos: spawn,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vel_y: 0.0,
            speed: tuning.player_speed,
            jump_power: tuning.jump_power,
            gravity: tuning.gravity,
            grounded: false,
            spawn,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Put the player back at the spawn point, at rest
    pub fn respawn(&mut self) {
        self.pos = self.spawn;
        self.vel_y = 0.0;
    }
}

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// Landed on the platform at this index
    Landed(usize),
    /// Fell below the viewport and was moved back to spawn
    Respawned,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Fixed for the lifetime of the state
    pub platforms: Vec<Platform>,
    /// Visible area in pixels; falling past its height respawns the player
    pub viewport: (u32, u32),
    /// Extra depth below a platform that still counts as landing
    pub landing_tolerance: f32,
    /// Simulation frame counter
    pub frame: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Default level with default tuning
    pub fn new(viewport: (u32, u32)) -> Self {
        Self::with_tuning(viewport, &Tuning::default())
    }

    pub fn with_tuning(viewport: (u32, u32), tuning: &Tuning) -> Self {
        Self::with_platforms(viewport, tuning, DEFAULT_PLATFORMS.to_vec())
    }

    pub fn with_platforms(viewport: (u32, u32), tuning: &Tuning, platforms: Vec<Platform>) -> Self {
        Self {
            player: Player::from_tuning(tuning),
            platforms,
            viewport,
            landing_tolerance: tuning.landing_tolerance,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Track a canvas resize
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport.1 as f32
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new((MAX_VIEWPORT_WIDTH, MAX_VIEWPORT_HEIGHT))
    }
}
