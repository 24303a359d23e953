//! Per-round entity placement
//!
//! Cones, workers, and the rat are placed by rejection sampling: draw
//! uniform positions until the candidate clears the reserved zones and
//! everything placed before it, or the attempt budget runs out. Exhausting
//! the budget never fails the round - the cones and workers accept the last
//! sample as-is, the rat falls back to a fixed corner spot.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::state::{Axis, Cone, GameState, Hazard, HazardKind};
use crate::consts::PLACEMENT_ATTEMPTS;

/// Uniform random top-left position keeping `size` inside the arena
fn sample_rect(rng: &mut Pcg32, max_pos: Vec2, size: Vec2) -> Rect {
    Rect {
        pos: Vec2::new(
            rng.random_range(0.0..max_pos.x),
            rng.random_range(0.0..max_pos.y),
        ),
        size,
    }
}

/// Whether a candidate clears the reserved zones and all prior placements
fn is_clear(candidate: &Rect, reserved: &[Rect], placed: &[Rect]) -> bool {
    !candidate.overlaps_any(reserved.iter()) && !candidate.overlaps_any(placed.iter())
}

/// Sample until clear or the budget runs out; returns the last candidate
/// and how many attempts were spent.
fn place(
    rng: &mut Pcg32,
    max_pos: Vec2,
    size: Vec2,
    reserved: &[Rect],
    placed: &[Rect],
) -> (Rect, u32) {
    let mut candidate = sample_rect(rng, max_pos, size);
    let mut attempts = 1;
    while !is_clear(&candidate, reserved, placed) && attempts < PLACEMENT_ATTEMPTS {
        candidate = sample_rect(rng, max_pos, size);
        attempts += 1;
    }
    (candidate, attempts)
}

/// Random axis lock and direction sign for a freshly spawned hazard
fn roll_heading(rng: &mut Pcg32) -> (Axis, f32) {
    let axis = if rng.random_bool(0.5) {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };
    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    (axis, direction)
}

/// Place the round's traffic cones, avoiding the reserved zones and each
/// other. A cone that exhausts the budget keeps its last sampled spot.
pub fn spawn_cones(state: &mut GameState, rng: &mut Pcg32) {
    let size = Vec2::splat(state.config.cone_size);
    let max_pos = state.config.max_pos(size);
    let reserved = state.config.reserved_zones();

    let mut placed: Vec<Rect> = Vec::with_capacity(state.config.cone_count);
    for _ in 0..state.config.cone_count {
        let (rect, attempts) = place(rng, max_pos, size, &reserved, &placed);
        if attempts >= PLACEMENT_ATTEMPTS {
            log::warn!("cone placement budget exhausted, accepting last sample");
        }
        placed.push(rect);
    }

    for rect in placed {
        let id = state.next_entity_id();
        state.cones.push(Cone { id, rect });
    }
}

/// Spawn a random number of workers, each avoiding the reserved zones, the
/// cones, and workers placed before it.
pub fn spawn_workers(state: &mut GameState, rng: &mut Pcg32) {
    let count = rng.random_range(state.config.worker_count_min..=state.config.worker_count_max);
    let size = Vec2::splat(state.config.worker_size);
    let max_pos = state.config.max_pos(size);

    let mut reserved: Vec<Rect> = state.config.reserved_zones().to_vec();
    reserved.extend(state.cones.iter().map(|c| c.rect));

    let mut placed: Vec<Rect> = Vec::with_capacity(count as usize);
    let mut headings = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (rect, attempts) = place(rng, max_pos, size, &reserved, &placed);
        if attempts >= PLACEMENT_ATTEMPTS {
            log::warn!("worker placement budget exhausted, accepting last sample");
        }
        headings.push(roll_heading(rng));
        placed.push(rect);
    }

    for (rect, (axis, direction)) in placed.into_iter().zip(headings) {
        let id = state.next_entity_id();
        state.hazards.push(Hazard {
            id,
            kind: HazardKind::Worker,
            rect,
            axis,
            direction,
            ttl_ticks: None,
        });
    }
}

/// Spawn the time-limited rat. Its reserved zones additionally cover the
/// cone footprints; if the budget runs out it takes the fixed fallback spot.
pub fn spawn_rat(state: &mut GameState, rng: &mut Pcg32) {
    let size = Vec2::splat(state.config.rat_size);
    let max_pos = state.config.max_pos(size);

    let mut reserved: Vec<Rect> = state.config.reserved_zones().to_vec();
    reserved.extend(state.cones.iter().map(|c| c.rect));

    let (mut rect, attempts) = place(rng, max_pos, size, &reserved, &[]);
    if attempts >= PLACEMENT_ATTEMPTS {
        log::warn!("rat placement budget exhausted, using fallback spot");
        rect = Rect {
            pos: state.config.rat_fallback,
            size,
        };
    }

    let (axis, direction) = roll_heading(rng);
    let id = state.next_entity_id();
    state.hazards.push(Hazard {
        id,
        kind: HazardKind::Rat,
        rect,
        axis,
        direction,
        ttl_ticks: Some(state.config.rat_lifetime_ticks),
    });
}
