//! Runtime gameplay configuration loaded from `assets/asteroids.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  `main` calls [`GameConfig::load_or_default`] on
//! `assets/asteroids.toml` before the app is built, so every plugin sees the
//! final values.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the constants you care about.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{validate_non_negative, validate_positive, validate_range, GameResult};
use bevy::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime-tunable gameplay configuration.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Screen ────────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,

    // ── Player ────────────────────────────────────────────────────────────────
    pub player_radius: f32,
    pub player_turn_speed: f32,
    pub player_acceleration: f32,
    pub player_shoot_cooldown: f32,
    pub player_shoot_speed: f32,

    // ── Shots ─────────────────────────────────────────────────────────────────
    pub shot_radius: f32,

    // ── Asteroids ─────────────────────────────────────────────────────────────
    pub asteroid_min_radius: f32,
    pub asteroid_kinds: u32,
    pub asteroid_max_radius: f32,
    pub asteroid_spawn_rate: f32,
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    pub asteroid_spawn_jitter_deg: f32,
    pub split_speed_multiplier: f32,
    pub split_angle_min_deg: f32,
    pub split_angle_max_deg: f32,

    // ── Scoring ───────────────────────────────────────────────────────────────
    pub score_large_radius: f32,
    pub score_medium_radius: f32,
    pub score_large: u32,
    pub score_medium: u32,
    pub score_small: u32,

    // ── Files ─────────────────────────────────────────────────────────────────
    pub highscore_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Screen
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            // Player
            player_radius: PLAYER_RADIUS,
            player_turn_speed: PLAYER_TURN_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            player_shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            player_shoot_speed: PLAYER_SHOOT_SPEED,
            // Shots
            shot_radius: SHOT_RADIUS,
            // Asteroids
            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_kinds: ASTEROID_KINDS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
            asteroid_spawn_rate: ASTEROID_SPAWN_RATE,
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_spawn_jitter_deg: ASTEROID_SPAWN_JITTER_DEG,
            split_speed_multiplier: SPLIT_SPEED_MULTIPLIER,
            split_angle_min_deg: SPLIT_ANGLE_MIN_DEG,
            split_angle_max_deg: SPLIT_ANGLE_MAX_DEG,
            // Scoring
            score_large_radius: SCORE_LARGE_RADIUS,
            score_medium_radius: SCORE_MEDIUM_RADIUS,
            score_large: SCORE_LARGE,
            score_medium: SCORE_MEDIUM,
            score_small: SCORE_SMALL,
            // Files
            highscore_path: PathBuf::from(HIGHSCORE_PATH),
        }
    }
}

impl GameConfig {
    /// Reject values that would break the simulation (zero radii, zero spawn
    /// interval, negative speeds or jitter, inverted ranges).
    pub fn validate(&self) -> GameResult<()> {
        validate_positive("screen_width", self.screen_width)?;
        validate_positive("screen_height", self.screen_height)?;
        validate_positive("player_radius", self.player_radius)?;
        validate_positive("player_shoot_cooldown", self.player_shoot_cooldown)?;
        validate_positive("player_shoot_speed", self.player_shoot_speed)?;
        validate_positive("shot_radius", self.shot_radius)?;
        validate_positive("asteroid_min_radius", self.asteroid_min_radius)?;
        validate_positive("asteroid_kinds", self.asteroid_kinds as f32)?;
        // Spawn points sit this far outside the screen.
        validate_positive("asteroid_max_radius", self.asteroid_max_radius)?;
        validate_positive("asteroid_spawn_rate", self.asteroid_spawn_rate)?;
        validate_positive("asteroid_min_speed", self.asteroid_min_speed)?;
        validate_non_negative("asteroid_spawn_jitter_deg", self.asteroid_spawn_jitter_deg)?;
        validate_positive("split_speed_multiplier", self.split_speed_multiplier)?;
        validate_range(
            "asteroid_min_speed",
            self.asteroid_min_speed,
            self.asteroid_max_speed,
        )?;
        validate_range(
            "split_angle_min_deg",
            self.split_angle_min_deg,
            self.split_angle_max_deg,
        )?;
        Ok(())
    }

    /// Parse a TOML document on top of the compiled defaults and validate it.
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let loaded = toml::from_str::<GameConfig>(contents).map_err(|e| e.to_string())?;
        loaded.validate().map_err(|e| e.to_string())?;
        Ok(loaded)
    }

    /// Load `path`, falling back to defaults when the file is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(loaded) => {
                    eprintln!("[SETUP] Loaded game config from {}", path.display());
                    loaded
                }
                Err(e) => {
                    eprintln!("[SETUP] Failed to load {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!("[SETUP] No {} found; using compiled defaults", path.display());
                Self::default()
            }
        }
    }

    /// Convert a screen-space point (origin top-left, +Y down) to Bevy world
    /// space (origin at the window centre, +Y up).
    #[inline]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x - self.screen_width * 0.5,
            self.screen_height * 0.5 - screen.y,
        )
    }
}
