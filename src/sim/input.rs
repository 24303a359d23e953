//! Event-driven player movement and push resolution
//!
//! The player advances one full step per directional input event - there is
//! no per-tick player physics. Every event resolves against the cargo, the
//! cones, and the world bounds before (or after) committing, in a fixed
//! order that must not be reshuffled: the cone recheck runs last and can
//! undo a move the push branch already allowed, while the cargo's step
//! stays committed.

use glam::Vec2;

use super::state::{GamePhase, GameState, RoundOutcome};

/// A discrete directional input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step vector (y grows downward)
    #[inline]
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Map a DOM `KeyboardEvent.key` value; anything else is not a move
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Resolve one directional input event.
///
/// Order of checks:
/// 1. apply the full step, clamped into the arena
/// 2. on cargo contact, push the cargo one step or roll the player back
/// 3. recheck the player against the cones and roll back if blocked
/// 4. run the goal check
///
/// Events arriving outside `Playing` are ignored.
pub fn apply_input(state: &mut GameState, direction: Direction) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let step = direction.delta() * state.config.move_speed;
    let old_pos = state.player.pos;

    state.player.pos += step;
    let max = state.config.max_pos(state.player.size);
    state.player.pos = state.player.pos.clamp(Vec2::ZERO, max);

    if state.player.overlaps(&state.cargo) {
        if can_push_cargo(state, direction) {
            state.cargo.pos += step;
        } else {
            // Whole move cancelled, never partially applied
            state.player.pos = old_pos;
        }
    }

    // Last check wins: this rollback can override a move the push branch
    // let through, and the pushed cargo does not move back.
    if state.blocked_by_cones(&state.player) {
        state.player.pos = old_pos;
    }

    check_goal(state);
}

/// Whether the cargo can advance one step: inside the arena and clear of
/// every cone.
fn can_push_cargo(state: &GameState, direction: Direction) -> bool {
    let step = direction.delta() * state.config.move_speed;
    let candidate = state.cargo.translated(step);
    candidate.within(state.config.bounds) && !state.blocked_by_cones(&candidate)
}

/// One-shot win detection, run synchronously after every input resolution.
pub fn check_goal(state: &mut GameState) {
    if state.flags.goal_reached {
        return;
    }
    if state.cargo.overlaps(&state.config.goal) {
        state.score += 1;
        state.flags.goal_reached = true;
        state.game_over(RoundOutcome::Win);
    }
}
