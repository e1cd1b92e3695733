//! Asteroids: linear movers that split into two smaller, faster children when
//! shot.
//!
//! ## Split rules
//!
//! | Parent radius             | Result                                           |
//! |---------------------------|--------------------------------------------------|
//! | `<= asteroid_min_radius`  | destroyed, no children                           |
//! | `>  asteroid_min_radius`  | two children at the parent's position            |
//!
//! Children have radius `parent − asteroid_min_radius` and the parent
//! velocity rotated by `+θ` and `−θ` (θ uniform in `[20°, 50°]`) and scaled by
//! `split_speed_multiplier`.
//!
//! ## Scoring tiers
//!
//! | Radius                       | Tier     | Points |
//! |------------------------------|----------|--------|
//! | `> score_large_radius` (40)  | Large    | 20     |
//! | `> score_medium_radius` (20) | Medium   | 50     |
//! | otherwise                    | Small    | 100    |

use crate::config::GameConfig;
use crate::shape::CircleShape;
use crate::telemetry::{log_event, GameEvent};
use crate::world::{Entity, EntityId, EntityKind, Group, World};
use bevy::math::Vec2;
use rand::Rng;

/// Groups every asteroid joins when spawned.
pub const ASTEROID_GROUPS: [Group; 3] = [Group::Asteroids, Group::Updatable, Group::Drawable];

pub fn spawn_asteroid(world: &mut World, shape: CircleShape) -> EntityId {
    world.spawn(Entity::asteroid(shape), &ASTEROID_GROUPS)
}

/// Rotate `v` by `degrees` (positive is clockwise on screen).
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Result of [`split`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitOutcome {
    /// Newly spawned children; empty or exactly two.
    pub children: Vec<EntityId>,
    /// Deflection applied to the children, when any were produced.
    pub angle_deg: Option<f32>,
}

/// Destroy asteroid `id` and spawn its children.
///
/// Does nothing if `id` is dead or not an asteroid.
pub fn split(
    world: &mut World,
    id: EntityId,
    rng: &mut impl Rng,
    config: &GameConfig,
) -> SplitOutcome {
    if !matches!(world.get(id).map(|e| &e.kind), Some(EntityKind::Asteroid)) {
        return SplitOutcome::default();
    }
    let Some(Entity { shape: parent, .. }) = world.kill(id) else {
        return SplitOutcome::default();
    };

    if parent.radius <= config.asteroid_min_radius {
        return SplitOutcome::default();
    }

    log_event(GameEvent::AsteroidSplit);

    let angle = rng.gen_range(config.split_angle_min_deg..=config.split_angle_max_deg);
    let radius = parent.radius - config.asteroid_min_radius;
    let children = [angle, -angle]
        .into_iter()
        .map(|deflection| {
            let velocity =
                rotate_deg(parent.velocity, deflection) * config.split_speed_multiplier;
            spawn_asteroid(
                world,
                CircleShape::new(parent.position, radius).with_velocity(velocity),
            )
        })
        .collect();

    SplitOutcome {
        children,
        angle_deg: Some(angle),
    }
}

/// Score tier of an asteroid, judged by its radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Large,
    Medium,
    Small,
}

impl SizeTier {
    pub fn from_radius(radius: f32, config: &GameConfig) -> Self {
        if radius > config.score_large_radius {
            SizeTier::Large
        } else if radius > config.score_medium_radius {
            SizeTier::Medium
        } else {
            SizeTier::Small
        }
    }

    pub fn points(self, config: &GameConfig) -> u32 {
        match self {
            SizeTier::Large => config.score_large,
            SizeTier::Medium => config.score_medium,
            SizeTier::Small => config.score_small,
        }
    }
}

/// Points awarded for shooting an asteroid of `radius`.
#[inline]
pub fn score_for_radius(radius: f32, config: &GameConfig) -> u32 {
    SizeTier::from_radius(radius, config).points(config)
}
