//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit host-driven operations only (`tick`, `countdown`, `apply_input`)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod config;
pub mod input;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use config::ArenaConfig;
pub use input::{Direction, apply_input, check_goal};
pub use rect::Rect;
pub use spawn::{spawn_cones, spawn_rat, spawn_workers};
pub use state::{
    Axis, Cone, GamePhase, GameState, Hazard, HazardKind, RngState, RoundFlags, RoundOutcome,
};
pub use tick::{countdown, tick};
