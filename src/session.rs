//! One game run: the entity world, the spawner, the score, and the tick that
//! ties them together.
//!
//! ## Tick order
//!
//! 1. Advance every updatable entity, then the asteroid field.
//! 2. Emit the per-tick state snapshot.
//! 3. Player × asteroids: any overlap ends the run (`running = false`).
//! 4. Asteroids × shots: collect hits, then apply them (score, split, kill).
//!
//! Step 4 is two-phase.  Pairs are recorded while iterating and removals
//! happen afterwards; a shot or asteroid already paired in this pass is not
//! matched again, so one shot destroys at most one asteroid.

use crate::asteroid::{score_for_radius, split};
use crate::asteroid_field::AsteroidField;
use crate::config::GameConfig;
use crate::player::PlayerInput;
use crate::shape::CircleShape;
use crate::telemetry::{log_event, log_state, GameEvent, StateSnapshot};
use crate::world::{Entity, EntityId, Group, World};
use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;

/// Groups the player joins when spawned.
pub const PLAYER_GROUPS: [Group; 2] = [Group::Updatable, Group::Drawable];

/// A recorded asteroid–shot contact awaiting application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub asteroid: EntityId,
    pub shot: EntityId,
    pub radius: f32,
}

/// What happened during one [`Session::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub player_hit: bool,
    pub hits: Vec<Hit>,
    pub points: u32,
}

#[derive(Resource, Debug)]
pub struct Session {
    pub world: World,
    pub player: EntityId,
    pub field: AsteroidField,
    /// Process-scoped score; never reset during a run.
    pub score: u32,
    /// Cleared on the first player–asteroid contact.
    pub running: bool,
    pub frame: u64,
}

impl Session {
    /// A fresh run with the player parked at the screen centre.
    pub fn new(config: &GameConfig) -> Self {
        let mut world = World::new();
        let centre = Vec2::new(config.screen_width, config.screen_height) * 0.5;
        let player = world.spawn(
            Entity::player(CircleShape::new(centre, config.player_radius)),
            &PLAYER_GROUPS,
        );
        Self {
            world,
            player,
            field: AsteroidField::new(config),
            score: 0,
            running: true,
            frame: 0,
        }
    }

    /// The player's circle.
    pub fn player_shape(&self) -> Option<&CircleShape> {
        self.world.get(self.player).map(|e| &e.shape)
    }

    pub fn snapshot(&self) -> StateSnapshot {
        let player = self.player_shape().map(|s| s.position).unwrap_or_default();
        StateSnapshot {
            frame: self.frame,
            asteroids: self.world.count(Group::Asteroids),
            shots: self.world.count(Group::Shots),
            score: self.score,
            player_x: player.x,
            player_y: player.y,
        }
    }

    /// Advance the run by `dt` seconds.  Does nothing once the run has ended.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &PlayerInput,
        rng: &mut impl Rng,
        config: &GameConfig,
    ) -> TickReport {
        if !self.running {
            return TickReport::default();
        }

        self.world.update(dt, input, config);
        self.field.update(&mut self.world, dt, rng, config);
        self.frame += 1;
        log_state(&self.snapshot());

        let player_hit = self.player_collides();
        if player_hit {
            log_event(GameEvent::PlayerHit);
            info!("Game over! Final score: {}", self.score);
            self.running = false;
        }

        let hits = self.collect_shot_hits();
        let points = self.apply_shot_hits(&hits, rng, config);

        TickReport {
            player_hit,
            hits,
            points,
        }
    }

    /// `true` if any asteroid overlaps the player.
    pub fn player_collides(&self) -> bool {
        let Some(player) = self.player_shape() else {
            return false;
        };
        self.world
            .iter(Group::Asteroids)
            .any(|(_, asteroid)| asteroid.shape.collides_with(player))
    }

    /// Phase one: pair each asteroid with the first unclaimed shot it overlaps.
    pub fn collect_shot_hits(&self) -> Vec<Hit> {
        let mut claimed: HashSet<EntityId> = HashSet::new();
        let mut hits = Vec::new();
        for (asteroid_id, asteroid) in self.world.iter(Group::Asteroids) {
            let hit = self
                .world
                .iter(Group::Shots)
                .find(|(shot_id, shot)| {
                    !claimed.contains(shot_id) && asteroid.shape.collides_with(&shot.shape)
                })
                .map(|(shot_id, _)| shot_id);
            if let Some(shot_id) = hit {
                claimed.insert(shot_id);
                hits.push(Hit {
                    asteroid: asteroid_id,
                    shot: shot_id,
                    radius: asteroid.shape.radius,
                });
            }
        }
        hits
    }

    /// Phase two: score, split, and remove.  Returns the points awarded.
    pub fn apply_shot_hits(
        &mut self,
        hits: &[Hit],
        rng: &mut impl Rng,
        config: &GameConfig,
    ) -> u32 {
        let mut points = 0;
        for hit in hits {
            points += score_for_radius(hit.radius, config);
            log_event(GameEvent::AsteroidShot);
            split(&mut self.world, hit.asteroid, rng, config);
            self.world.kill(hit.shot);
        }
        self.score += points;
        points
    }
}
