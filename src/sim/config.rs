//! Arena configuration
//!
//! World bounds, reserved-zone geometry, and entity tuning are fixed at
//! initialization and never renegotiated mid-round. The presentation layer
//! may construct a custom arena; the defaults reproduce the stock warehouse.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Fixed arena geometry and entity tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// World extent; all entities live in `[0, bounds]`
    pub bounds: Vec2,

    // === Reserved zones ===
    /// Player spawn rectangle
    pub player_spawn: Rect,
    /// Cargo spawn rectangle
    pub cargo_spawn: Rect,
    /// Drop zone; the cargo overlapping this wins the round
    pub goal: Rect,

    // === Movement ===
    /// Pixels per directional input event (player and pushed cargo)
    pub move_speed: f32,

    // === Static obstacles ===
    pub cone_count: usize,
    pub cone_size: f32,

    // === Hazards ===
    pub worker_size: f32,
    /// Pixels per tick
    pub worker_speed: f32,
    pub worker_count_min: u32,
    pub worker_count_max: u32,
    pub rat_size: f32,
    pub rat_speed: f32,
    /// Ticks before the rat despawns on its own
    pub rat_lifetime_ticks: u32,
    /// Spawn position accepted when rejection sampling finds no clear spot
    pub rat_fallback: Vec2,

    // === Round ===
    /// Countdown units per round (one unit per countdown event)
    pub round_seconds: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            player_spawn: Rect::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_SIZE, PLAYER_SIZE),
            cargo_spawn: Rect::new(CARGO_SPAWN_X, CARGO_SPAWN_Y, CARGO_SIZE, CARGO_SIZE),
            goal: Rect::new(GOAL_X, GOAL_Y, GOAL_WIDTH, GOAL_HEIGHT),
            move_speed: MOVE_SPEED,
            cone_count: CONE_COUNT,
            cone_size: CONE_SIZE,
            worker_size: WORKER_SIZE,
            worker_speed: WORKER_SPEED,
            worker_count_min: WORKER_COUNT_MIN,
            worker_count_max: WORKER_COUNT_MAX,
            rat_size: RAT_SIZE,
            rat_speed: RAT_SPEED,
            rat_lifetime_ticks: RAT_LIFETIME_TICKS,
            rat_fallback: Vec2::new(RAT_FALLBACK_X, RAT_FALLBACK_Y),
            round_seconds: ROUND_SECONDS,
        }
    }
}

impl ArenaConfig {
    /// Zones spawn placement must keep clear: player spawn, cargo spawn, goal
    pub fn reserved_zones(&self) -> [Rect; 3] {
        [self.player_spawn, self.cargo_spawn, self.goal]
    }

    /// Largest top-left position keeping a rectangle of `size` in bounds
    #[inline]
    pub fn max_pos(&self, size: Vec2) -> Vec2 {
        self.bounds - size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = ArenaConfig::default();
        assert_eq!(config.bounds, Vec2::new(800.0, 500.0));
        // The drop zone must cover the bottom-right probe region
        assert!(config.goal.overlaps(&Rect::new(700.0, 450.0, 50.0, 40.0)));
        assert!(config.player_spawn.within(config.bounds));
        assert!(config.cargo_spawn.within(config.bounds));
        assert!(config.goal.within(config.bounds));
    }

    #[test]
    fn test_reserved_zones_are_disjoint() {
        let config = ArenaConfig::default();
        let zones = config.reserved_zones();
        for (i, a) in zones.iter().enumerate() {
            for b in zones.iter().skip(i + 1) {
                assert!(!a.overlaps(b));
            }
        }
    }
}
