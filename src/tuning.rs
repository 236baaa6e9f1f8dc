//! Data-driven physics tuning
//!
//! Defaults match the constants in [`crate::consts`]. A page can override any
//! subset of them with an inline JSON blob; missing fields keep their default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a tuning blob was rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning value `{field}` must be finite")]
    NotFinite { field: &'static str },
    #[error("tuning value `{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("tuning value `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("jump_power must be negative (up), got {0}")]
    JumpNotUpward(f32),
}

/// Physics constants for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal pixels moved per frame while a direction is held
    pub player_speed: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_power: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Depth below a platform's bottom edge that still lands the player
    pub landing_tolerance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            jump_power: JUMP_POWER,
            gravity: GRAVITY,
            player_width: PLAYER_SIZE.x,
            player_height: PLAYER_SIZE.y,
            spawn_x: SPAWN_POINT.x,
            spawn_y: SPAWN_POINT.y,
            landing_tolerance: LANDING_TOLERANCE,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override blob
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("player_speed", self.player_speed),
            ("jump_power", self.jump_power),
            ("gravity", self.gravity),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
            ("landing_tolerance", self.landing_tolerance),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NotFinite { field });
        }

        let positive = [
            ("player_speed", self.player_speed),
            ("gravity", self.gravity),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(TuningError::NotPositive { field, value });
        }

        if self.landing_tolerance < 0.0 {
            return Err(TuningError::Negative {
                field: "landing_tolerance",
                value: self.landing_tolerance,
            });
        }

        if self.jump_power >= 0.0 {
            return Err(TuningError::JumpNotUpward(self.jump_power));
        }
        Ok(())
    }

    /// Element id of the optional inline JSON override
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "tuning";

    /// Load overrides from `<script id="tuning" type="application/json">` (WASM only).
    /// Falls back to defaults when the element is absent or invalid.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning overrides: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
