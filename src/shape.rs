//! Circle geometry shared by every entity.

use bevy::math::Vec2;

/// A moving circle: the collision and drawing footprint of every entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl CircleShape {
    /// A stationary circle at `position`.
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// `true` iff the circles overlap.  Touching circles do not collide.
    #[inline]
    pub fn collides_with(&self, other: &CircleShape) -> bool {
        self.position.distance(other.position) < self.radius + other.radius
    }

    /// Euler step: `position += velocity * dt`.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}
