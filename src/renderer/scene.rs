//! Scene assembly: game state to pixel-space triangles

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{Action, GameState, InputState};

/// Eye square size in pixels
const EYE_SIZE: f32 = 8.0;
/// Eye offset from the player's top-left when facing left / right
const EYE_OFFSET_LEFT: Vec2 = Vec2::new(2.0, 5.0);
const EYE_OFFSET_RIGHT: Vec2 = Vec2::new(20.0, 5.0);

/// Build the frame: platforms, then the player, then its eye.
///
/// The eye looks left only while Left is held, so it reads input directly.
pub fn build(state: &GameState, input: &InputState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((state.platforms.len() + 2) * 6);

    for platform in &state.platforms {
        vertices.extend(shapes::rect(&platform.rect, colors::EARTH));
    }

    let player = &state.player;
    vertices.extend(shapes::rect(&player.bounds(), colors::PLAYER));

    let eye_offset = if input.is_pressed(Action::Left) {
        EYE_OFFSET_LEFT
    } else {
        EYE_OFFSET_RIGHT
    };
    vertices.extend(shapes::quad(
        player.pos + eye_offset,
        Vec2::splat(EYE_SIZE),
        colors::EYE,
    ));

    vertices
}
