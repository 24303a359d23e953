//! Game state and core simulation types
//!
//! All state that must be shown by the presentation layer or replayed for
//! determinism lives here. One `GameState` owns every entity record by
//! stable id; nothing hides in module-level variables.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::ArenaConfig;
use super::rect::Rect;
use super::spawn;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing spawned
    Start,
    /// Active round
    Playing,
    /// Round ended; only a full restart leaves this phase
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "start",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Cargo delivered to the drop zone
    Win,
    /// A hazard touched the player or the cargo
    HazardHit,
    /// Countdown reached zero
    TimeUp,
}

impl RoundOutcome {
    /// Canonical result text shown on the game-over screen
    pub fn message(&self) -> &'static str {
        match self {
            RoundOutcome::Win => "You won!",
            RoundOutcome::HazardHit => "Game Over!",
            RoundOutcome::TimeUp => "Time's up!",
        }
    }
}

/// Movement axis a hazard is locked to at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Unit vector along the axis (y grows downward)
    #[inline]
    pub fn unit(&self) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::X,
            Axis::Vertical => Vec2::Y,
        }
    }
}

/// Hazard classes - workers are fast, the rat is slow but spawns anywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Worker,
    Rat,
}

/// An autonomous hazard entity
///
/// Moves along a single axis, bounces off world bounds and cones, and ends
/// the round on contact with the player or the cargo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub kind: HazardKind,
    pub rect: Rect,
    pub axis: Axis,
    /// +1 or -1; the only part of movement state that changes after spawn
    pub direction: f32,
    /// Remaining lifetime in ticks (rat only); `None` lives until round end
    pub ttl_ticks: Option<u32>,
}

impl Hazard {
    /// Pixels advanced per tick for this hazard class
    #[inline]
    pub fn speed(&self, config: &ArenaConfig) -> f32 {
        match self.kind {
            HazardKind::Worker => config.worker_speed,
            HazardKind::Rat => config.rat_speed,
        }
    }
}

/// A static traffic cone; never moves after placement
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cone {
    pub id: u32,
    pub rect: Rect,
}

/// Per-round one-shot guards, reset atomically on round entry
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RoundFlags {
    /// Win already triggered this round
    pub goal_reached: bool,
    /// Terminal hazard collision already triggered this round
    pub hazard_hit: bool,
}

/// RNG state wrapper for serialization
///
/// The stream advances once per round so successive rounds draw fresh
/// placements while the seed alone replays the whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// RNG for the next spawn sequence; bumps the stream
    pub fn round_rng(&mut self) -> Pcg32 {
        self.stream += 1;
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Arena geometry, fixed at initialization
    pub config: ArenaConfig,
    /// Current phase
    pub phase: GamePhase,
    /// How the round ended (set only in `GameOver`)
    pub outcome: Option<RoundOutcome>,
    /// Boxes delivered this round
    pub score: u32,
    /// Countdown units left in the round
    pub time_remaining: u32,
    /// Hazard ticks advanced this round
    pub time_ticks: u64,
    /// Player forklift
    pub player: Rect,
    /// Pushable cargo box
    pub cargo: Rect,
    /// Static obstacles (spawned per round)
    pub cones: Vec<Cone>,
    /// Autonomous hazards in spawn order (workers, then the rat)
    pub hazards: Vec<Hazard>,
    /// One-shot guards
    pub flags: RoundFlags,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the stock arena and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(ArenaConfig::default(), seed)
    }

    /// Create a new session with a custom arena
    pub fn with_config(config: ArenaConfig, seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            player: config.player_spawn,
            cargo: config.cargo_spawn,
            config,
            phase: GamePhase::Start,
            outcome: None,
            score: 0,
            time_remaining: 0,
            time_ticks: 0,
            cones: Vec::new(),
            hazards: Vec::new(),
            flags: RoundFlags::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start (or restart) a round: reset player, cargo, score, timer and
    /// flags, then respawn cones and hazards.
    ///
    /// Idempotent: a repeated trigger despawns before respawning, so the
    /// world never holds a doubled entity set.
    pub fn start(&mut self) {
        self.despawn_all();
        self.flags = RoundFlags::default();
        self.outcome = None;
        self.score = 0;
        self.time_remaining = self.config.round_seconds;
        self.time_ticks = 0;
        self.player = self.config.player_spawn;
        self.cargo = self.config.cargo_spawn;
        self.phase = GamePhase::Playing;

        let mut rng = self.rng_state.round_rng();
        spawn::spawn_cones(self, &mut rng);
        spawn::spawn_workers(self, &mut rng);
        spawn::spawn_rat(self, &mut rng);

        log::info!(
            "Round started: {} cones, {} hazards, {} on the clock",
            self.cones.len(),
            self.hazards.len(),
            self.time_remaining
        );
    }

    /// Full reset with page-reload semantics: every transient, including the
    /// accumulated score, is cleared and the session returns to the start
    /// screen. The RNG stream position survives so the next round does not
    /// replay the previous placements.
    pub fn restart(&mut self) {
        let rng_state = self.rng_state.clone();
        *self = Self::with_config(self.config.clone(), self.seed);
        self.rng_state = rng_state;
        log::info!("Session restarted");
    }

    /// End the current round. No-op unless `Playing`; a round ends at most
    /// once no matter how many triggers fire in the same tick.
    pub fn game_over(&mut self, outcome: RoundOutcome) {
        if self.phase != GamePhase::Playing {
            return;
        }
        log::info!("Round over: {}", outcome.message());
        self.phase = GamePhase::GameOver;
        self.outcome = Some(outcome);
        self.despawn_all();
        // Terminal-collision guard clears on round exit; the goal guard
        // holds until the next round entry.
        self.flags.hazard_hit = false;
    }

    /// Remove every per-round entity. Safe to call on an empty world.
    pub fn despawn_all(&mut self) {
        self.cones.clear();
        self.hazards.clear();
    }

    /// Whether a rectangle overlaps any cone
    pub fn blocked_by_cones(&self, rect: &Rect) -> bool {
        self.cones.iter().any(|cone| cone.rect.overlaps(rect))
    }

    /// Result text for the game-over screen, if the round has ended
    pub fn message(&self) -> Option<&'static str> {
        self.outcome.map(|o| o.message())
    }

    /// Full world snapshot as JSON for the presentation layer
    pub fn snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_spawns_one_entity_set() {
        let mut state = GameState::new(7);
        state.start();
        state.start(); // repeated trigger must not double-populate

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.cones.len(), state.config.cone_count);

        let workers = state
            .hazards
            .iter()
            .filter(|h| h.kind == HazardKind::Worker)
            .count() as u32;
        let rats = state
            .hazards
            .iter()
            .filter(|h| h.kind == HazardKind::Rat)
            .count();
        assert!(workers >= state.config.worker_count_min);
        assert!(workers <= state.config.worker_count_max);
        assert_eq!(rats, 1);
    }

    #[test]
    fn test_start_resets_round_state() {
        let mut state = GameState::new(7);
        state.start();
        state.score = 3;
        state.flags.goal_reached = true;
        state.player.pos = Vec2::new(400.0, 200.0);

        state.start();
        assert_eq!(state.score, 0);
        assert!(!state.flags.goal_reached);
        assert_eq!(state.player, state.config.player_spawn);
        assert_eq!(state.cargo, state.config.cargo_spawn);
        assert_eq!(state.time_remaining, state.config.round_seconds);
    }

    #[test]
    fn test_game_over_once_and_despawns() {
        let mut state = GameState::new(7);
        state.start();
        state.game_over(RoundOutcome::HazardHit);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message(), Some("Game Over!"));
        assert!(state.hazards.is_empty());
        assert!(state.cones.is_empty());

        // Later triggers cannot overwrite the outcome
        state.game_over(RoundOutcome::TimeUp);
        assert_eq!(state.outcome, Some(RoundOutcome::HazardHit));
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut state = GameState::new(7);
        state.start();
        state.score = 5;
        state.game_over(RoundOutcome::Win);

        state.restart();
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.outcome, None);
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_restart_advances_placements() {
        let mut state = GameState::new(7);
        state.start();
        let first: Vec<_> = state.cones.iter().map(|c| c.rect).collect();

        state.restart();
        state.start();
        let second: Vec<_> = state.cones.iter().map(|c| c.rect).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_despawn_all_is_idempotent() {
        let mut state = GameState::new(7);
        state.despawn_all();
        state.despawn_all();
        assert!(state.hazards.is_empty());
        assert!(state.cones.is_empty());
    }
}
