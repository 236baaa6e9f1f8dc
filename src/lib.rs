//! Tiny Platformer - a minimal 2D platformer prototype
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input state, player physics, platforms)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven physics constants

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Largest canvas the game will size itself to
    pub const MAX_VIEWPORT_WIDTH: u32 = 800;
    pub const MAX_VIEWPORT_HEIGHT: u32 = 600;

    /// Player defaults
    pub const PLAYER_SIZE: Vec2 = Vec2::new(30.0, 30.0);
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Initial vertical velocity of a jump (negative is up)
    pub const JUMP_POWER: f32 = -12.0;
    /// Downward acceleration added every frame
    pub const GRAVITY: f32 = 0.6;

    /// Where the player starts and respawns after falling off the world
    pub const SPAWN_POINT: Vec2 = Vec2::new(50.0, 200.0);

    /// Extra depth below a platform's bottom edge that still counts as landing
    pub const LANDING_TOLERANCE: f32 = 20.0;
}

/// Clamp the browser's inner size to the largest canvas the game uses.
#[inline]
pub fn clamp_viewport(inner_width: u32, inner_height: u32) -> (u32, u32) {
    (
        inner_width.min(consts::MAX_VIEWPORT_WIDTH),
        inner_height.min(consts::MAX_VIEWPORT_HEIGHT),
    )
}

/// Convert a screen-space pixel position (y down) to normalized device
/// coordinates (y up) for a viewport of the given size.
#[inline]
pub fn pixel_to_ndc(pos: Vec2, viewport: (u32, u32)) -> Vec2 {
    let (w, h) = (viewport.0.max(1) as f32, viewport.1.max(1) as f32);
    Vec2::new(pos.x / w * 2.0 - 1.0, 1.0 - pos.y / h * 2.0)
}
