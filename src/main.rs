//! Forklift Rush entry point
//!
//! Handles platform-specific initialization. The browser presentation layer
//! drives the exported `Game` wrapper; the native build runs a headless
//! smoke round.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;

    use forklift_rush::sim::{Direction, GameState, apply_input, countdown, tick};

    /// Host-facing handle around the simulation
    ///
    /// The presentation layer owns the scheduling: it calls `tick` at the
    /// hazard rate, `countdown` once a second, and `input` per key event,
    /// then reads `snapshot` (or the scalar getters) to draw.
    #[wasm_bindgen]
    pub struct Game {
        state: GameState,
    }

    #[wasm_bindgen]
    impl Game {
        /// New session seeded from the wall clock
        #[wasm_bindgen(constructor)]
        pub fn new() -> Game {
            Game {
                state: GameState::new(js_sys::Date::now() as u64),
            }
        }

        /// New session with an explicit seed (replays deterministically)
        pub fn with_seed(seed: u64) -> Game {
            Game {
                state: GameState::new(seed),
            }
        }

        /// Start trigger: enter `Playing` and spawn the round
        pub fn start(&mut self) {
            self.state.start();
        }

        /// Restart trigger: page-reload semantics, back to the start screen
        pub fn restart(&mut self) {
            self.state.restart();
        }

        /// Advance hazards by one tick (call at 20 Hz)
        pub fn tick(&mut self) {
            tick(&mut self.state);
        }

        /// Decrement the round timer (call at 1 Hz)
        pub fn countdown(&mut self) {
            countdown(&mut self.state);
        }

        /// Feed a `KeyboardEvent.key` value; unrecognized keys are ignored
        pub fn input(&mut self, key: &str) {
            if let Some(direction) = Direction::from_key(key) {
                apply_input(&mut self.state, direction);
            }
        }

        /// Full world snapshot as JSON (entity rects, score, timer, phase)
        pub fn snapshot(&self) -> String {
            self.state.snapshot()
        }

        pub fn phase(&self) -> String {
            self.state.phase.as_str().to_string()
        }

        pub fn score(&self) -> u32 {
            self.state.score
        }

        pub fn time_remaining(&self) -> u32 {
            self.state.time_remaining
        }

        /// Result text once the round has ended
        pub fn message(&self) -> Option<String> {
            self.state.message().map(str::to_string)
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Forklift Rush core loaded");
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Forklift Rush (native) starting...");
    log::info!("Native mode is headless - use the web build for the playable game");

    println!("\nRunning delivery smoke round...");
    smoke_delivery_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a scripted round end to end: shove the cargo right, then down into
/// the drop zone, and expect the win outcome.
#[cfg(not(target_arch = "wasm32"))]
fn smoke_delivery_round() {
    use forklift_rush::sim::{Direction, GamePhase, GameState, apply_input};
    use glam::Vec2;

    let mut state = GameState::new(0x464C52);
    state.start();
    // Clear the floor; this run exercises the push path, not the hazards
    state.despawn_all();

    state.player.pos = state.cargo.pos - Vec2::new(40.0, 0.0);
    while state.phase == GamePhase::Playing && state.cargo.pos.x < 667.0 {
        apply_input(&mut state, Direction::Right);
    }

    state.player.pos = state.cargo.pos - Vec2::new(0.0, 40.0);
    while state.phase == GamePhase::Playing {
        apply_input(&mut state, Direction::Down);
    }

    assert_eq!(state.message(), Some("You won!"), "delivery should win the round");
    println!("✓ Cargo delivered: score {}", state.score);
}
