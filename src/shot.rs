//! Player projectiles.
//!
//! A shot is a small circle that moves in a straight line.  It has no lifetime
//! of its own: the session removes it on its first asteroid contact.

use crate::config::GameConfig;
use crate::shape::CircleShape;
use crate::world::{Entity, EntityId, Group, World};
use bevy::math::Vec2;

/// Groups every shot joins when spawned.
pub const SHOT_GROUPS: [Group; 3] = [Group::Shots, Group::Updatable, Group::Drawable];

/// Shape of a shot leaving `origin` along the unit vector `direction`.
pub fn shot_shape(origin: Vec2, direction: Vec2, config: &GameConfig) -> CircleShape {
    CircleShape::new(origin, config.shot_radius)
        .with_velocity(direction.normalize_or_zero() * config.player_shoot_speed)
}

pub fn spawn_shot(world: &mut World, shape: CircleShape) -> EntityId {
    world.spawn(Entity::shot(shape), &SHOT_GROUPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerInput;

    #[test]
    fn shot_moves_linearly() {
        let config = GameConfig::default();
        let mut world = World::new();
        let id = spawn_shot(&mut world, shot_shape(Vec2::ZERO, Vec2::X, &config));
        world.update(0.1, &PlayerInput::default(), &config);
        let pos = world.get(id).unwrap().shape.position;
        assert!((pos.x - config.player_shoot_speed * 0.1).abs() < 1e-3);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn shot_joins_shot_groups() {
        let config = GameConfig::default();
        let mut world = World::new();
        let id = spawn_shot(&mut world, shot_shape(Vec2::ZERO, Vec2::Y, &config));
        for group in SHOT_GROUPS {
            assert!(world.members(group).contains(&id));
        }
        assert!(world.members(Group::Asteroids).is_empty());
    }
}
