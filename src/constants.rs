//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found and modified in one
//! place.  [`crate::config::GameConfig::default`] mirrors every value, and
//! `assets/asteroids.toml` may override any subset at startup.
//!
//! Coordinates are screen pixels with the origin at the top-left corner and
//! +Y pointing down, matching the cursor coordinates reported by the window.

// ── Screen ────────────────────────────────────────────────────────────────────

/// Window width in logical pixels.
pub const SCREEN_WIDTH: f32 = 1280.0;

/// Window height in logical pixels.
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Fixed simulation rate (ticks per second).
pub const TICK_RATE_HZ: f64 = 60.0;

/// Outline thickness used for every entity.
pub const LINE_WIDTH: f32 = 2.0;

// ── Player ────────────────────────────────────────────────────────────────────

/// Collision radius of the ship.
pub const PLAYER_RADIUS: f32 = 20.0;

/// Rotation rate in degrees per second while a turn key is held.
pub const PLAYER_TURN_SPEED: f32 = 300.0;

/// Linear acceleration (px/s²) while a thrust key is held.
pub const PLAYER_ACCELERATION: f32 = 200.0;

/// Seconds between two consecutive shots.
pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;

/// Muzzle speed of a shot (px/s).
pub const PLAYER_SHOOT_SPEED: f32 = 500.0;

// ── Shots ─────────────────────────────────────────────────────────────────────

/// Collision radius of a shot.
pub const SHOT_RADIUS: f32 = 5.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Smallest asteroid radius; also the per-split shrink step.
///
/// An asteroid at or below this radius vanishes when hit instead of splitting.
pub const ASTEROID_MIN_RADIUS: f32 = 20.0;

/// Number of size tiers the field spawns (`ASTEROID_MIN_RADIUS * 1..=KINDS`).
pub const ASTEROID_KINDS: u32 = 3;

/// Largest spawned radius; spawn points sit this far outside the screen edge.
pub const ASTEROID_MAX_RADIUS: f32 = ASTEROID_MIN_RADIUS * ASTEROID_KINDS as f32;

/// Seconds between two field spawns.
pub const ASTEROID_SPAWN_RATE: f32 = 0.8;

/// Inclusive speed range (px/s) for freshly spawned asteroids.
pub const ASTEROID_MIN_SPEED: f32 = 40.0;
pub const ASTEROID_MAX_SPEED: f32 = 100.0;

/// Maximum angular jitter (degrees) applied to a spawn's inward heading.
pub const ASTEROID_SPAWN_JITTER_DEG: f32 = 30.0;

/// Children of a split move this much faster than their parent.
pub const SPLIT_SPEED_MULTIPLIER: f32 = 1.2;

/// Inclusive range (degrees) of the deflection applied to split children.
pub const SPLIT_ANGLE_MIN_DEG: f32 = 20.0;
pub const SPLIT_ANGLE_MAX_DEG: f32 = 50.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Asteroids with a radius above this count as "large".
///
/// The scoring scale is independent from `ASTEROID_MIN_RADIUS`.
pub const SCORE_LARGE_RADIUS: f32 = 40.0;

/// Asteroids with a radius above this (and not large) count as "medium".
pub const SCORE_MEDIUM_RADIUS: f32 = 20.0;

pub const SCORE_LARGE: u32 = 20;
pub const SCORE_MEDIUM: u32 = 50;
pub const SCORE_SMALL: u32 = 100;

// ── Menu ──────────────────────────────────────────────────────────────────────

/// Number of stars drifting behind the main menu.
pub const MENU_STAR_COUNT: usize = 100;

/// Star drift per menu update (px), i.e. 50 px/s at a nominal 60 FPS.
pub const MENU_STAR_STEP: f32 = 50.0 * 0.016;

/// Number of entries shown on the high-score screen.
pub const HIGHSCORE_DISPLAY_COUNT: usize = 10;

// ── Files ─────────────────────────────────────────────────────────────────────

/// Default location of the highscore list.
pub const HIGHSCORE_PATH: &str = "highscores.json";

/// Optional runtime override file for [`crate::config::GameConfig`].
pub const CONFIG_PATH: &str = "assets/asteroids.toml";
