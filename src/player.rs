//! Player ship: heading, thrust, and cooldown-gated firing.
//!
//! ## Input pipeline
//!
//! 1. [`keyboard_to_input_system`] translates held keys into the
//!    [`PlayerInput`] resource every frame.
//! 2. The session tick passes that snapshot to [`Ship::update`], which is the
//!    only place the ship's motion and firing are integrated.
//!
//! The input abstraction keeps the motion model testable: tests build a
//! `PlayerInput` directly and call `Ship::update`.
//!
//! | Key            | Effect                                   |
//! |----------------|------------------------------------------|
//! | `A` / `←`      | rotate counter-clockwise                 |
//! | `D` / `→`      | rotate clockwise                         |
//! | `W` / `↑`      | accelerate along the heading             |
//! | `S` / `↓`      | accelerate against the heading           |
//! | `Space`        | fire (gated by the shot cooldown)        |

use crate::config::GameConfig;
use crate::shape::CircleShape;
use crate::shot;
use bevy::prelude::*;

/// Per-frame snapshot of the player's controls.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_reverse: bool,
    pub fire: bool,
}

/// Player-only state carried by [`crate::world::EntityKind::Player`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ship {
    /// Heading in degrees; 0 points up the screen, positive turns clockwise.
    pub heading: f32,
    /// Seconds until the next shot is allowed; never negative.
    pub shot_cooldown: f32,
}

/// Unit vector for `heading` in screen space (+Y down).
#[inline]
pub fn forward(heading: f32) -> Vec2 {
    Vec2::from_angle(heading.to_radians()).rotate(Vec2::NEG_Y)
}

impl Ship {
    #[inline]
    pub fn forward(&self) -> Vec2 {
        forward(self.heading)
    }

    /// Integrate one step of player motion.
    ///
    /// Returns the shape of a newly fired shot when `input.fire` is held and
    /// the cooldown has run out.
    pub fn update(
        &mut self,
        shape: &mut CircleShape,
        dt: f32,
        input: &PlayerInput,
        config: &GameConfig,
    ) -> Option<CircleShape> {
        if input.rotate_left {
            self.heading -= config.player_turn_speed * dt;
        }
        if input.rotate_right {
            self.heading += config.player_turn_speed * dt;
        }
        self.heading = self.heading.rem_euclid(360.0);

        let forward = self.forward();
        if input.thrust_forward {
            shape.velocity += forward * config.player_acceleration * dt;
        }
        if input.thrust_reverse {
            shape.velocity -= forward * config.player_acceleration * dt;
        }
        shape.advance(dt);

        self.shot_cooldown = (self.shot_cooldown - dt).max(0.0);
        if !input.fire || self.shot_cooldown > 0.0 {
            return None;
        }
        self.shot_cooldown = config.player_shoot_cooldown;
        Some(shot::shot_shape(shape.position, forward, config))
    }
}

/// Translate held keys into [`PlayerInput`].
pub fn keyboard_to_input_system(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    *input = PlayerInput {
        rotate_left: keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
        rotate_right: keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
        thrust_forward: keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]),
        thrust_reverse: keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]),
        fire: keys.pressed(KeyCode::Space),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn ship_at_origin() -> (Ship, CircleShape) {
        (Ship::default(), CircleShape::new(Vec2::ZERO, 20.0))
    }

    fn fire() -> PlayerInput {
        PlayerInput {
            fire: true,
            ..Default::default()
        }
    }

    #[test]
    fn forward_at_zero_heading_points_up_the_screen() {
        let f = forward(0.0);
        assert!(f.abs_diff_eq(Vec2::new(0.0, -1.0), 1e-6), "{f:?}");
        let right = forward(90.0);
        assert!(right.abs_diff_eq(Vec2::new(1.0, 0.0), 1e-6), "{right:?}");
    }

    #[test]
    fn rotation_rate_matches_config() {
        let config = GameConfig::default();
        let (mut ship, mut shape) = ship_at_origin();
        let input = PlayerInput {
            rotate_right: true,
            ..Default::default()
        };
        ship.update(&mut shape, 0.1, &input, &config);
        assert!((ship.heading - config.player_turn_speed * 0.1).abs() < 1e-4);

        let input = PlayerInput {
            rotate_left: true,
            ..Default::default()
        };
        ship.update(&mut shape, 0.1, &input, &config);
        assert!(ship.heading.abs() < 1e-4);
    }

    #[test]
    fn thrust_accelerates_along_heading() {
        let config = GameConfig::default();
        let (mut ship, mut shape) = ship_at_origin();
        let input = PlayerInput {
            thrust_forward: true,
            ..Default::default()
        };
        ship.update(&mut shape, 0.5, &input, &config);
        let expected = Vec2::new(0.0, -config.player_acceleration * 0.5);
        assert!(shape.velocity.abs_diff_eq(expected, 1e-3), "{:?}", shape.velocity);
        assert!(shape.position.y < 0.0, "ship must have moved up");
    }

    #[test]
    fn reverse_thrust_opposes_heading() {
        let config = GameConfig::default();
        let (mut ship, mut shape) = ship_at_origin();
        let input = PlayerInput {
            thrust_reverse: true,
            ..Default::default()
        };
        ship.update(&mut shape, 0.5, &input, &config);
        assert!(shape.velocity.y > 0.0);
    }

    #[test]
    fn fire_spawns_shot_along_heading() {
        let config = GameConfig::default();
        let (mut ship, mut shape) = ship_at_origin();
        let shot = ship.update(&mut shape, DT, &fire(), &config).unwrap();
        assert_eq!(shot.radius, config.shot_radius);
        assert!((shot.velocity.length() - config.player_shoot_speed).abs() < 1e-3);
        assert!(shot.velocity.y < 0.0);
        assert_eq!(ship.shot_cooldown, config.player_shoot_cooldown);
    }

    #[test]
    fn fire_inside_cooldown_yields_one_shot() {
        let config = GameConfig::default();
        let (mut ship, mut shape) = ship_at_origin();
        let first = ship.update(&mut shape, DT, &fire(), &config);
        let second = ship.update(&mut shape, config.player_shoot_cooldown * 0.5, &fire(), &config);
        assert!(first.is_some());
        assert!(second.is_none());
    }

    #[test]
    fn fire_allowed_again_once_cooldown_elapses() {
        let config = GameConfig::default();
        let (mut ship, mut shape) = ship_at_origin();
        assert!(ship.update(&mut shape, DT, &fire(), &config).is_some());
        ship.update(&mut shape, config.player_shoot_cooldown, &PlayerInput::default(), &config);
        assert_eq!(ship.shot_cooldown, 0.0, "cooldown clamps at zero");
        assert!(ship.update(&mut shape, DT, &fire(), &config).is_some());
    }
}
