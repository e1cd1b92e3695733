//! The in-game state: fixed-rate session ticks, input, drawing, and game over.
//!
//! | System                       | Schedule                   |
//! |------------------------------|----------------------------|
//! | `keyboard_to_input_system`   | `Update`, in `Game`        |
//! | `draw_world_system`          | `Update`, in `Game`        |
//! | `hud_score_display_system`   | `Update`, in `Game`        |
//! | `session_tick_system`        | `FixedUpdate`, in `Game`   |
//! | `game_over_system`           | `FixedUpdate`, after tick  |
//! | `setup_hud_score`            | `OnEnter(Game)`            |
//!
//! `FixedUpdate` runs at `TICK_RATE_HZ`, so every tick sees the same `dt`.

use crate::config::GameConfig;
use crate::menu::{GameState, HighScoreScreen};
use crate::player::{keyboard_to_input_system, PlayerInput};
use crate::rendering::{draw_world_system, hud_score_display_system, setup_hud_score};
use crate::session::Session;
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(OnEnter(GameState::Game), setup_hud_score)
            .add_systems(
                Update,
                (
                    keyboard_to_input_system,
                    draw_world_system,
                    hud_score_display_system,
                )
                    .run_if(in_state(GameState::Game)),
            )
            .add_systems(
                FixedUpdate,
                (session_tick_system, game_over_system)
                    .chain()
                    .run_if(in_state(GameState::Game)),
            );
    }
}

/// Advance the session by one fixed step.
pub fn session_tick_system(
    mut session: ResMut<Session>,
    input: Res<PlayerInput>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    if !session.running {
        return;
    }
    let report = session.tick(time.delta_secs(), &input, &mut rand::thread_rng(), &config);
    if report.points > 0 {
        debug!(points = report.points, score = session.score, "Asteroids shot");
    }
}

/// Once the run has ended, record the score and exit.
///
/// A failed write is reported and turns the exit into an error exit.
pub fn game_over_system(
    session: Res<Session>,
    mut high_scores: ResMut<HighScoreScreen>,
    mut exit: MessageWriter<AppExit>,
    mut handled: Local<bool>,
) {
    if session.running || *handled {
        return;
    }
    *handled = true;
    match high_scores.record(session.score) {
        Ok(()) => {
            info!(score = session.score, "Score recorded");
            exit.write(AppExit::Success);
        }
        Err(e) => {
            error!("Could not record score {}: {e}", session.score);
            exit.write(AppExit::error());
        }
    }
}
