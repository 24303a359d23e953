//! Fixed-rate simulation advance
//!
//! Two host-driven cadences mutate the world: `tick` (nominally 20 Hz)
//! advances every hazard and re-evaluates terminal collisions, `countdown`
//! (nominally 1 Hz) decrements the round timer. Both run to completion
//! before the next operation; hazards advance in spawn order within a tick.

use super::state::{GamePhase, GameState, RoundOutcome};

/// Advance the world by one hazard tick. No-op outside `Playing`.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    // Age the time-limited hazards and drop the expired ones before moving
    // anything; expiry is independent of collision outcomes.
    for hazard in &mut state.hazards {
        if let Some(ttl) = hazard.ttl_ticks.as_mut() {
            *ttl = ttl.saturating_sub(1);
        }
    }
    let before = state.hazards.len();
    state.hazards.retain(|h| h.ttl_ticks.is_none_or(|t| t > 0));
    if state.hazards.len() < before {
        log::info!("rat lifetime expired");
    }

    let mut terminal_hit = false;
    for i in 0..state.hazards.len() {
        let hazard = state.hazards[i];
        let speed = hazard.speed(&state.config);

        // Advance along the locked axis; a blocked candidate flips the
        // direction and re-advances from the pre-step rectangle.
        let mut direction = hazard.direction;
        let mut candidate = hazard.rect.translated(hazard.axis.unit() * direction * speed);
        let blocked =
            !candidate.within(state.config.bounds) || state.blocked_by_cones(&candidate);
        if blocked {
            direction = -direction;
            candidate = hazard.rect.translated(hazard.axis.unit() * direction * speed);
        }

        // Commit unconditionally - even a reversed candidate moves this
        // tick; hazards never hold still.
        state.hazards[i].rect = candidate;
        state.hazards[i].direction = direction;

        // Terminal contact with the player or the cargo ends the round
        // once; the remaining hazards still advance this tick.
        if (candidate.overlaps(&state.player) || candidate.overlaps(&state.cargo))
            && !state.flags.hazard_hit
        {
            state.flags.hazard_hit = true;
            terminal_hit = true;
        }
    }

    if terminal_hit {
        state.game_over(RoundOutcome::HazardHit);
    }
}

/// Decrement the round timer by one unit. At zero the round ends with
/// "Time's up!" and further countdown calls are no-ops.
pub fn countdown(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_remaining = state.time_remaining.saturating_sub(1);
    if state.time_remaining == 0 {
        state.game_over(RoundOutcome::TimeUp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Axis, Cone, Hazard, HazardKind};
    use glam::Vec2;

    /// A playing state with an empty floor; tests place entities by hand.
    fn bare_arena() -> GameState {
        let mut state = GameState::new(1);
        state.start();
        state.despawn_all();
        state
    }

    fn worker(id: u32, x: f32, y: f32, axis: Axis, direction: f32) -> Hazard {
        Hazard {
            id,
            kind: HazardKind::Worker,
            rect: Rect::new(x, y, 30.0, 30.0),
            axis,
            direction,
            ttl_ticks: None,
        }
    }

    #[test]
    fn test_hazard_advances_along_axis() {
        let mut state = bare_arena();
        state
            .hazards
            .push(worker(1, 400.0, 200.0, Axis::Horizontal, 1.0));
        tick(&mut state);
        assert_eq!(state.hazards[0].rect.pos, Vec2::new(404.0, 200.0));
        tick(&mut state);
        assert_eq!(state.hazards[0].rect.pos, Vec2::new(408.0, 200.0));
    }

    #[test]
    fn test_bounce_at_boundary() {
        let mut state = bare_arena();
        // At the left wall and heading out: one tick reverses and moves
        state
            .hazards
            .push(worker(1, 0.0, 200.0, Axis::Horizontal, -1.0));
        tick(&mut state);
        let hazard = &state.hazards[0];
        assert_eq!(hazard.direction, 1.0);
        assert_eq!(hazard.rect.pos, Vec2::new(4.0, 200.0));
        assert!(hazard.rect.within(state.config.bounds));
    }

    #[test]
    fn test_bounce_at_far_wall() {
        let mut state = bare_arena();
        let max_x = state.config.bounds.x - 30.0;
        state
            .hazards
            .push(worker(1, max_x, 200.0, Axis::Horizontal, 1.0));
        tick(&mut state);
        let hazard = &state.hazards[0];
        assert_eq!(hazard.direction, -1.0);
        assert_eq!(hazard.rect.pos, Vec2::new(max_x - 4.0, 200.0));
    }

    #[test]
    fn test_bounce_off_cone() {
        let mut state = bare_arena();
        state.cones.push(Cone {
            id: 50,
            rect: Rect::new(430.0, 195.0, 30.0, 30.0),
        });
        state
            .hazards
            .push(worker(1, 400.0, 200.0, Axis::Horizontal, 1.0));
        tick(&mut state);
        // The advanced rectangle (404..434) clips the cone, so it reverses
        let hazard = &state.hazards[0];
        assert_eq!(hazard.direction, -1.0);
        assert_eq!(hazard.rect.pos.x, 396.0);
    }

    #[test]
    fn test_terminal_collision_ends_round_once() {
        let mut state = bare_arena();
        state.player.pos = Vec2::new(400.0, 200.0);
        // Two workers converging on the player in the same tick
        state
            .hazards
            .push(worker(1, 368.0, 200.0, Axis::Horizontal, 1.0));
        state
            .hazards
            .push(worker(2, 442.0, 200.0, Axis::Horizontal, -1.0));

        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message(), Some("Game Over!"));
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_cargo_contact_is_terminal_too() {
        let mut state = bare_arena();
        state.cargo.pos = Vec2::new(400.0, 200.0);
        state
            .hazards
            .push(worker(1, 368.0, 200.0, Axis::Horizontal, 1.0));
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message(), Some("Game Over!"));
    }

    #[test]
    fn test_rat_expires_mid_round() {
        let mut state = bare_arena();
        state.hazards.push(Hazard {
            id: 1,
            kind: HazardKind::Rat,
            rect: Rect::new(300.0, 300.0, 32.0, 32.0),
            axis: Axis::Vertical,
            direction: 1.0,
            ttl_ticks: Some(3),
        });

        tick(&mut state);
        tick(&mut state);
        assert_eq!(state.hazards.len(), 1);
        tick(&mut state);
        assert!(state.hazards.is_empty());
        // The round carries on without the rat
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_tick_is_noop_outside_playing() {
        let mut state = GameState::new(1);
        tick(&mut state);
        assert_eq!(state.time_ticks, 0);

        state.start();
        state.game_over(RoundOutcome::Win);
        let ticks = state.time_ticks;
        tick(&mut state);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_countdown_to_times_up() {
        let mut state = bare_arena();
        assert_eq!(state.time_remaining, 30);

        for _ in 0..29 {
            countdown(&mut state);
        }
        assert_eq!(state.time_remaining, 1);
        assert_eq!(state.phase, GamePhase::Playing);

        countdown(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message(), Some("Time's up!"));

        // Countdown halts once the round has ended
        countdown(&mut state);
        assert_eq!(state.time_remaining, 0);
        assert_eq!(state.outcome, Some(RoundOutcome::TimeUp));
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and operation sequence agree
        let mut a = GameState::new(424242);
        let mut b = GameState::new(424242);
        a.start();
        b.start();

        for i in 0..200u32 {
            tick(&mut a);
            tick(&mut b);
            if i % 20 == 0 {
                countdown(&mut a);
                countdown(&mut b);
            }
        }

        assert_eq!(a.snapshot(), b.snapshot());
    }
}
