//! Per-frame simulation step
//!
//! One call per animation frame. Velocities are in pixels per frame, so there
//! is no timestep parameter.

use super::input::InputState;
use super::state::{GameEvent, GameState};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &InputState) {
    state.events.clear();
    state.frame += 1;

    let floor = state.viewport_height();
    let player = &mut state.player;

    // Horizontal movement; left and right together cancel out
    player.pos.x += player.speed * f32::from(input.horizontal());

    // Jump
    if input.jump_requested() && player.grounded {
        player.vel_y = player.jump_power;
        player.grounded = false;
        state.events.push(GameEvent::Jumped);
    }

    // Gravity
    player.vel_y += player.gravity;
    player.pos.y += player.vel_y;

    // Landing. Grounded only survives the frame if a platform catches us.
    // Platforms are one-way: only a falling player is resolved.
    player.grounded = false;
    for (i, platform) in state.platforms.iter().enumerate() {
        if !platform
            .rect
            .landing_overlap(&player.bounds(), state.landing_tolerance)
        {
            continue;
        }
        if player.vel_y > 0.0 {
            player.vel_y = 0.0;
            player.pos.y = platform.rect.top() - player.size.y;
            player.grounded = true;
            state.events.push(GameEvent::Landed(i));
        }
    }

    // Screen bounds
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
    }
    if player.pos.y > floor {
        player.respawn();
        state.events.push(GameEvent::Respawned);
    }

    for event in &state.events {
        log::debug!("frame {}: {:?}", state.frame, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::input::Action;
    use crate::sim::state::Platform;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn pressed(actions: &[Action]) -> InputState {
        let mut input = InputState::new();
        for &a in actions {
            input.set(a, true);
        }
        input
    }

    #[test]
    fn test_falling_onto_ground_snaps_to_top() {
        let mut state = GameState::default();
        state.player.pos = Vec2::new(50.0, 348.0);
        state.player.vel_y = 5.0;

        tick(&mut state, &InputState::new());

        assert_eq!(state.player.pos.y, 320.0);
        assert_eq!(state.player.vel_y, 0.0);
        assert!(state.player.grounded);
        assert_eq!(state.events, vec![GameEvent::Landed(0)]);
    }

    #[test]
    fn test_resting_on_platform_stays_grounded() {
        let mut state = GameState::default();
        // Exactly on top of the 200,250 ledge
        state.player.pos = Vec2::new(220.0, 250.0 - PLAYER_SIZE.y);
        state.player.vel_y = 0.0;

        for _ in 0..10 {
            tick(&mut state, &InputState::new());
            assert!(state.player.grounded);
            assert_eq!(state.player.vel_y, 0.0);
            assert_eq!(state.player.pos.y, 220.0);
        }
    }

    #[test]
    fn test_jump_from_ground() {
        let mut state = GameState::default();
        state.player.pos = Vec2::new(50.0, 320.0);
        tick(&mut state, &InputState::new());
        assert!(state.player.grounded);

        tick(&mut state, &pressed(&[Action::Jump]));
        assert!(!state.player.grounded);
        assert_eq!(state.player.vel_y, JUMP_POWER + GRAVITY);
        assert_eq!(state.player.pos.y, 320.0 + (JUMP_POWER + GRAVITY));
        assert_eq!(state.events, vec![GameEvent::Jumped]);

        // Holding jump in the air does nothing more
        let vel = state.player.vel_y;
        tick(&mut state, &pressed(&[Action::Up]));
        assert_eq!(state.player.vel_y, vel + GRAVITY);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut state = GameState::default();
        assert!(!state.player.grounded);
        tick(&mut state, &pressed(&[Action::Up, Action::Jump]));
        assert_eq!(state.player.vel_y, GRAVITY);
    }

    #[test]
    fn test_alt_jump_is_not_bound() {
        let mut state = GameState::default();
        state.player.pos = Vec2::new(50.0, 320.0);
        tick(&mut state, &InputState::new());

        tick(&mut state, &pressed(&[Action::AltJump]));
        assert!(state.player.grounded);
        assert_eq!(state.player.vel_y, 0.0);
    }

    #[test]
    fn test_horizontal_movement() {
        let mut state = GameState::default();
        tick(&mut state, &pressed(&[Action::Right]));
        assert_eq!(state.player.pos.x, 55.0);
        tick(&mut state, &pressed(&[Action::Left]));
        assert_eq!(state.player.pos.x, 50.0);
        tick(&mut state, &pressed(&[Action::Left, Action::Right]));
        assert_eq!(state.player.pos.x, 50.0);
    }

    #[test]
    fn test_left_edge_clamp() {
        let mut state = GameState::default();
        state.player.pos.x = 2.0;
        tick(&mut state, &pressed(&[Action::Left]));
        assert_eq!(state.player.pos.x, 0.0);
        tick(&mut state, &pressed(&[Action::Left]));
        assert_eq!(state.player.pos.x, 0.0);
    }

    #[test]
    fn test_fall_out_of_world_respawns() {
        let mut state = GameState::default();
        // Past the right end of the ground
        state.player.pos = Vec2::new(1200.0, 601.0);
        state.player.vel_y = 3.0;

        tick(&mut state, &InputState::new());

        assert_eq!(state.player.pos, SPAWN_POINT);
        assert_eq!(state.player.vel_y, 0.0);
        assert_eq!(state.events, vec![GameEvent::Respawned]);
    }

    #[test]
    fn test_respawn_follows_viewport_height() {
        let mut state = GameState::new((400, 300));
        state.player.pos = Vec2::new(1200.0, 300.0);
        tick(&mut state, &InputState::new());
        assert_eq!(state.player.pos, SPAWN_POINT);

        state.set_viewport(800, 600);
        state.player.pos = Vec2::new(1200.0, 300.0);
        tick(&mut state, &InputState::new());
        assert!(state.player.pos.y > 300.0);
    }

    #[test]
    fn test_jumping_up_through_ledge() {
        let mut state = GameState::default();
        // Directly below the 200,250 ledge, moving up fast
        state.player.pos = Vec2::new(220.0, 245.0);
        state.player.vel_y = -10.0;
        tick(&mut state, &InputState::new());
        assert!(!state.player.grounded);
        assert!(state.player.pos.y < 245.0);
    }

    #[test]
    fn test_stacked_platforms_first_catch_wins() {
        let tuning = Tuning::default();
        let platforms = vec![
            Platform::new(0.0, 100.0, 100.0, 20.0),
            Platform::new(0.0, 110.0, 100.0, 20.0),
        ];
        let mut state = GameState::with_platforms((800, 600), &tuning, platforms);
        state.player.pos = Vec2::new(10.0, 80.0);
        state.player.vel_y = 4.0;

        tick(&mut state, &InputState::new());

        // First platform snaps to y=70 and zeroes velocity, so the second
        // never sees a falling player
        assert_eq!(state.player.pos.y, 70.0);
        assert_eq!(state.events, vec![GameEvent::Landed(0)]);
    }

    #[test]
    fn test_frame_counter() {
        let mut state = GameState::default();
        for _ in 0..5 {
            tick(&mut state, &InputState::new());
        }
        assert_eq!(state.frame, 5);
    }

    fn arb_input() -> impl Strategy<Value = InputState> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(l, r, j)| {
            let mut input = InputState::new();
            input.set(Action::Left, l);
            input.set(Action::Right, r);
            input.set(Action::Jump, j);
            input
        })
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(inputs in prop::collection::vec(arb_input(), 1..400)) {
            let mut state = GameState::default();
            let height = state.viewport_height();
            for input in &inputs {
                tick(&mut state, input);
                prop_assert!(state.player.pos.x >= 0.0);
                prop_assert!(state.player.pos.y <= height);
                if state.player.grounded {
                    prop_assert_eq!(state.player.vel_y, 0.0);
                }
            }
        }
    }
}
