//! Asteroids library
//!
//! A single-player arcade shooter: steer a ship, shoot drifting asteroids,
//! and watch them split into smaller ones.  The game model (`world`,
//! `session`, `asteroid`, ...) is plain Rust driven by Bevy systems in `game`
//! and `menu`.

pub mod asteroid;
pub mod asteroid_field;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod graphics;
pub mod highscore;
pub mod menu;
pub mod player;
pub mod rendering;
pub mod session;
pub mod shape;
pub mod shot;
pub mod telemetry;
pub mod world;
