//! Timer-driven asteroid spawner.
//!
//! The field counts down `spawn_timer`; each time it runs out, the timer is
//! reset to `asteroid_spawn_rate` and exactly one asteroid enters from a random
//! screen edge.  A single [`AsteroidField::update`] call never spawns more than
//! one asteroid, however large `dt` is.  There is no cap on live asteroids.

use crate::asteroid::{rotate_deg, spawn_asteroid};
use crate::config::GameConfig;
use crate::shape::CircleShape;
use crate::world::{EntityId, World};
use bevy::math::Vec2;
use rand::Rng;

/// One of the four screen edges an asteroid can enter from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Unit vector pointing into the play area.
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::X,
            Edge::Right => Vec2::NEG_X,
            Edge::Top => Vec2::Y,
            Edge::Bottom => Vec2::NEG_Y,
        }
    }

    /// Point along this edge at fraction `t ∈ [0, 1]`, pushed
    /// `asteroid_max_radius` outside the visible area.
    pub fn point(self, t: f32, config: &GameConfig) -> Vec2 {
        let margin = config.asteroid_max_radius;
        let (w, h) = (config.screen_width, config.screen_height);
        match self {
            Edge::Left => Vec2::new(-margin, t * h),
            Edge::Right => Vec2::new(w + margin, t * h),
            Edge::Top => Vec2::new(t * w, -margin),
            Edge::Bottom => Vec2::new(t * w, h + margin),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidField {
    /// Seconds until the next spawn.
    pub spawn_timer: f32,
}

impl AsteroidField {
    /// A field whose first spawn happens one full interval from now.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            spawn_timer: config.asteroid_spawn_rate,
        }
    }

    /// Count down and spawn at most one asteroid.
    pub fn update(
        &mut self,
        world: &mut World,
        dt: f32,
        rng: &mut impl Rng,
        config: &GameConfig,
    ) -> Option<EntityId> {
        self.spawn_timer -= dt;
        if self.spawn_timer > 0.0 {
            return None;
        }
        self.spawn_timer = config.asteroid_spawn_rate;
        Some(spawn_asteroid(world, random_spawn(rng, config)))
    }
}

/// Random edge position, size tier, and inward velocity for a new asteroid.
pub fn random_spawn(rng: &mut impl Rng, config: &GameConfig) -> CircleShape {
    let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
    let speed = rng.gen_range(config.asteroid_min_speed..=config.asteroid_max_speed);
    let jitter = rng.gen_range(-config.asteroid_spawn_jitter_deg..=config.asteroid_spawn_jitter_deg);
    let velocity = rotate_deg(edge.inward() * speed, jitter);
    let position = edge.point(rng.gen_range(0.0..=1.0), config);
    let kind = rng.gen_range(1..=config.asteroid_kinds);
    CircleShape::new(position, config.asteroid_min_radius * kind as f32).with_velocity(velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Group;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn no_spawn_before_interval() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut world = World::new();
        let mut field = AsteroidField::new(&config);
        assert!(field
            .update(&mut world, config.asteroid_spawn_rate * 0.5, &mut rng, &config)
            .is_none());
        assert_eq!(world.count(Group::Asteroids), 0);
    }

    #[test]
    fn one_spawn_per_elapsed_interval() {
        // 1 s interval at 0.125 s steps is exact in binary: a spawn every 8th step.
        let config = GameConfig {
            asteroid_spawn_rate: 1.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let mut world = World::new();
        let mut field = AsteroidField::new(&config);
        let spawn_steps: Vec<usize> = (1..=40)
            .filter(|_| field.update(&mut world, 0.125, &mut rng, &config).is_some())
            .collect();
        assert_eq!(spawn_steps, vec![8, 16, 24, 32, 40]);
        assert_eq!(world.count(Group::Asteroids), 5);
    }

    #[test]
    fn huge_dt_spawns_only_one() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut world = World::new();
        let mut field = AsteroidField::new(&config);
        let id = field.update(&mut world, 100.0, &mut rng, &config);
        assert!(id.is_some());
        assert_eq!(world.count(Group::Asteroids), 1);
        assert_eq!(field.spawn_timer, config.asteroid_spawn_rate);
    }

    #[test]
    fn spawns_start_off_screen_with_tiered_radius_and_inward_velocity() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..300 {
            let shape = random_spawn(&mut rng, &config);
            let p = shape.position;
            let off_screen = p.x < 0.0
                || p.x > config.screen_width
                || p.y < 0.0
                || p.y > config.screen_height;
            assert!(off_screen, "spawned on screen at {p:?}");

            let tier = shape.radius / config.asteroid_min_radius;
            assert!((1..=config.asteroid_kinds).any(|k| (k as f32 - tier).abs() < 1e-4));

            let speed = shape.velocity.length();
            assert!(speed >= config.asteroid_min_speed - 1e-3);
            assert!(speed <= config.asteroid_max_speed + 1e-3);

            let centre = Vec2::new(config.screen_width, config.screen_height) * 0.5;
            let towards_centre = (centre - p).normalize();
            assert!(
                shape.velocity.normalize().dot(towards_centre) > -0.5,
                "velocity {:?} points away from the screen at {p:?}",
                shape.velocity
            );
        }
    }

    #[test]
    fn edge_points_sit_outside_by_max_radius() {
        let config = GameConfig::default();
        let m = config.asteroid_max_radius;
        assert_eq!(Edge::Left.point(0.5, &config).x, -m);
        assert_eq!(Edge::Right.point(0.5, &config).x, config.screen_width + m);
        assert_eq!(Edge::Top.point(0.5, &config).y, -m);
        assert_eq!(Edge::Bottom.point(0.5, &config).y, config.screen_height + m);
    }
}
