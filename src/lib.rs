//! Forklift Rush - a warehouse box-pushing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, round state)
//!
//! Rendering, input devices, and audio live in the host presentation layer;
//! the core only exposes entity rectangles, score, timer, and phase, and
//! consumes directional input plus start/restart triggers.

pub mod sim;

pub use sim::{ArenaConfig, Direction, GamePhase, GameState, Rect, RoundOutcome};

/// Game configuration constants
pub mod consts {
    /// Hazard simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 20;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Player forklift - spawns in the top-left corner
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPAWN_X: f32 = 0.0;
    pub const PLAYER_SPAWN_Y: f32 = 0.0;
    /// Pixels moved per directional key event (player and pushed cargo)
    pub const MOVE_SPEED: f32 = 7.0;

    /// Cargo box
    pub const CARGO_SIZE: f32 = 40.0;
    pub const CARGO_SPAWN_X: f32 = 100.0;
    pub const CARGO_SPAWN_Y: f32 = 100.0;

    /// Drop zone in the bottom-right corner
    pub const GOAL_X: f32 = 700.0;
    pub const GOAL_Y: f32 = 440.0;
    pub const GOAL_WIDTH: f32 = 100.0;
    pub const GOAL_HEIGHT: f32 = 60.0;

    /// Traffic cones (static obstacles)
    pub const CONE_COUNT: usize = 3;
    pub const CONE_SIZE: f32 = 30.0;

    /// Warehouse workers (autonomous hazards)
    pub const WORKER_SIZE: f32 = 30.0;
    /// Pixels per tick
    pub const WORKER_SPEED: f32 = 4.0;
    pub const WORKER_COUNT_MIN: u32 = 2;
    pub const WORKER_COUNT_MAX: u32 = 5;

    /// Rat (time-limited hazard, slower than workers)
    pub const RAT_SIZE: f32 = 32.0;
    pub const RAT_SPEED: f32 = 2.0;
    /// 5 seconds at 20 Hz
    pub const RAT_LIFETIME_TICKS: u32 = 5 * TICK_HZ;
    /// Spawn position used when no clear spot is found
    pub const RAT_FALLBACK_X: f32 = 50.0;
    pub const RAT_FALLBACK_Y: f32 = 50.0;

    /// Attempts before rejection sampling gives up on a clear position
    pub const PLACEMENT_ATTEMPTS: u32 = 50;

    /// Round length in countdown units (one unit per countdown event)
    pub const ROUND_SECONDS: u32 = 30;
}
