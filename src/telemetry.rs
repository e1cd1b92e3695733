//! Structured gameplay telemetry.
//!
//! Discrete events go out at `info` level under the `asteroids::events`
//! target; per-tick state snapshots go out at `debug` level under
//! `asteroids::state`.  Both use Bevy's `LogPlugin`, so filtering follows
//! `RUST_LOG` (e.g. `RUST_LOG=asteroids::state=debug`).

use bevy::log::{debug, info};

/// Discrete gameplay events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AsteroidSplit,
    AsteroidShot,
    PlayerHit,
}

impl GameEvent {
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GameEvent::AsteroidSplit => "asteroid_split",
            GameEvent::AsteroidShot => "asteroid_shot",
            GameEvent::PlayerHit => "player_hit",
        }
    }
}

/// Snapshot of the running session, emitted once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSnapshot {
    pub frame: u64,
    pub asteroids: usize,
    pub shots: usize,
    pub score: u32,
    pub player_x: f32,
    pub player_y: f32,
}

pub fn log_event(event: GameEvent) {
    info!(target: "asteroids::events", event = event.name());
}

pub fn log_state(state: &StateSnapshot) {
    debug!(
        target: "asteroids::state",
        frame = state.frame,
        asteroids = state.asteroids,
        shots = state.shots,
        score = state.score,
        player_x = state.player_x,
        player_y = state.player_y
    );
}
