//! Entity store with explicit group membership.
//!
//! Every entity is a [`CircleShape`] plus an [`EntityKind`] variant.  Callers
//! name the groups an entity joins when it is spawned ([`World::spawn`]) and
//! [`World::kill`] removes it from every one of them, so a dead entity never
//! receives another update or draw.
//!
//! | Group       | Members                     | Used by                    |
//! |-------------|-----------------------------|----------------------------|
//! | `Updatable` | player, asteroids, shots    | [`World::update`]          |
//! | `Drawable`  | player, asteroids, shots    | rendering                  |
//! | `Asteroids` | asteroids                   | collision passes           |
//! | `Shots`     | shots                       | collision passes           |

use crate::config::GameConfig;
use crate::player::{PlayerInput, Ship};
use crate::shape::CircleShape;
use crate::shot;
use std::collections::HashMap;

/// Stable handle to a spawned entity.  Ids are never reused within a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

/// Named entity collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Updatable,
    Drawable,
    Asteroids,
    Shots,
}

impl Group {
    pub const ALL: [Group; 4] = [
        Group::Updatable,
        Group::Drawable,
        Group::Asteroids,
        Group::Shots,
    ];

    #[inline]
    fn index(self) -> usize {
        match self {
            Group::Updatable => 0,
            Group::Drawable => 1,
            Group::Asteroids => 2,
            Group::Shots => 3,
        }
    }
}

/// Variant-specific state.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Player(Ship),
    Asteroid,
    Shot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub shape: CircleShape,
    pub kind: EntityKind,
}

impl Entity {
    pub fn asteroid(shape: CircleShape) -> Self {
        Self {
            shape,
            kind: EntityKind::Asteroid,
        }
    }

    pub fn shot(shape: CircleShape) -> Self {
        Self {
            shape,
            kind: EntityKind::Shot,
        }
    }

    pub fn player(shape: CircleShape) -> Self {
        Self {
            shape,
            kind: EntityKind::Player(Ship::default()),
        }
    }
}

#[derive(Debug, Default)]
pub struct World {
    entities: HashMap<EntityId, Entity>,
    /// Member lists in insertion order, indexed by [`Group::index`].
    groups: [Vec<EntityId>; 4],
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entity` and register it in each of `groups`.
    pub fn spawn(&mut self, entity: Entity, groups: &[Group]) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, entity);
        for group in groups {
            let members = &mut self.groups[group.index()];
            if !members.contains(&id) {
                members.push(id);
            }
        }
        id
    }

    /// Remove `id` from the store and from every group it joined.
    ///
    /// Returns the removed entity, or `None` if it was already dead.
    pub fn kill(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.entities.remove(&id)?;
        for members in self.groups.iter_mut() {
            members.retain(|member| *member != id);
        }
        Some(entity)
    }

    #[inline]
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Member ids of `group` in spawn order.
    #[inline]
    pub fn members(&self, group: Group) -> &[EntityId] {
        &self.groups[group.index()]
    }

    /// `(id, entity)` pairs of `group` in spawn order.
    pub fn iter(&self, group: Group) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.members(group)
            .iter()
            .filter_map(move |id| self.entities.get(id).map(|e| (*id, e)))
    }

    #[inline]
    pub fn count(&self, group: Group) -> usize {
        self.groups[group.index()].len()
    }

    /// Total number of live entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advance every `Updatable` entity by `dt` seconds.
    ///
    /// Shots fired by the player this step are spawned after the pass, so they
    /// first move on the next call.
    pub fn update(&mut self, dt: f32, input: &PlayerInput, config: &GameConfig) {
        let mut fired = Vec::new();
        for id in &self.groups[Group::Updatable.index()] {
            let Some(Entity { shape, kind }) = self.entities.get_mut(id) else {
                continue;
            };
            match kind {
                EntityKind::Player(ship) => {
                    if let Some(shot) = ship.update(shape, dt, input, config) {
                        fired.push(shot);
                    }
                }
                EntityKind::Asteroid | EntityKind::Shot => shape.advance(dt),
            }
        }
        for shape in fired {
            shot::spawn_shot(self, shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;

    fn circle(x: f32) -> CircleShape {
        CircleShape::new(Vec2::new(x, 0.0), 5.0)
    }

    #[test]
    fn spawn_registers_only_requested_groups() {
        let mut world = World::new();
        let id = world.spawn(Entity::asteroid(circle(0.0)), &[Group::Asteroids, Group::Updatable]);
        assert_eq!(world.members(Group::Asteroids), &[id]);
        assert_eq!(world.members(Group::Updatable), &[id]);
        assert!(world.members(Group::Drawable).is_empty());
        assert!(world.members(Group::Shots).is_empty());
    }

    #[test]
    fn duplicate_groups_register_once() {
        let mut world = World::new();
        world.spawn(Entity::shot(circle(0.0)), &[Group::Shots, Group::Shots]);
        assert_eq!(world.count(Group::Shots), 1);
    }

    #[test]
    fn kill_removes_from_every_group() {
        let mut world = World::new();
        let a = world.spawn(Entity::asteroid(circle(0.0)), &Group::ALL);
        let b = world.spawn(Entity::asteroid(circle(1.0)), &Group::ALL);
        assert!(world.kill(a).is_some());
        assert!(!world.is_alive(a));
        for group in Group::ALL {
            assert_eq!(world.members(group), &[b]);
        }
        assert!(world.kill(a).is_none(), "second kill is a no-op");
    }

    #[test]
    fn ids_are_not_reused() {
        let mut world = World::new();
        let a = world.spawn(Entity::asteroid(circle(0.0)), &[Group::Asteroids]);
        world.kill(a);
        let b = world.spawn(Entity::asteroid(circle(0.0)), &[Group::Asteroids]);
        assert_ne!(a, b);
    }

    #[test]
    fn update_moves_updatable_entities_only() {
        let mut world = World::new();
        let config = GameConfig::default();
        let moving = world.spawn(
            Entity::asteroid(circle(0.0).with_velocity(Vec2::new(10.0, 0.0))),
            &[Group::Updatable],
        );
        let frozen = world.spawn(
            Entity::asteroid(circle(0.0).with_velocity(Vec2::new(10.0, 0.0))),
            &[Group::Drawable],
        );
        world.update(1.0, &PlayerInput::default(), &config);
        assert_eq!(world.get(moving).unwrap().shape.position.x, 10.0);
        assert_eq!(world.get(frozen).unwrap().shape.position.x, 0.0);
    }

    #[test]
    fn iter_follows_spawn_order() {
        let mut world = World::new();
        let ids: Vec<_> = (0..5)
            .map(|i| world.spawn(Entity::asteroid(circle(i as f32)), &[Group::Asteroids]))
            .collect();
        world.kill(ids[2]);
        let seen: Vec<_> = world.iter(Group::Asteroids).map(|(id, _)| id).collect();
        assert_eq!(seen, vec![ids[0], ids[1], ids[3], ids[4]]);
    }
}
