//! Wireframe drawing for the game world and the in-game score HUD.
//!
//! Everything in the `Drawable` group is redrawn each frame with gizmos:
//! asteroids and shots as circle outlines, the player as a triangle pointing
//! along its heading.  Positions are converted from screen space with
//! [`GameConfig::to_world`] point by point, so shapes keep their on-screen
//! orientation.

use crate::config::GameConfig;
use crate::menu::HudScoreDisplay;
use crate::player::{forward, Ship};
use crate::session::Session;
use crate::shape::CircleShape;
use crate::world::{EntityKind, Group};
use bevy::prelude::*;

fn line_color() -> Color {
    Color::WHITE
}

fn hud_color() -> Color {
    Color::WHITE
}

/// Ship outline in screen space: nose first, then the two rear corners.
///
/// The nose sits one radius ahead of the centre; the rear corners sit one
/// radius behind, spread sideways by `radius / 1.5`.
pub fn ship_triangle(shape: &CircleShape, ship: &Ship) -> [Vec2; 3] {
    let fwd = ship.forward();
    let right = forward(ship.heading + 90.0) * shape.radius / 1.5;
    let nose = shape.position + fwd * shape.radius;
    let tail = shape.position - fwd * shape.radius;
    [nose, tail - right, tail + right]
}

// ── Update: world wireframes ────────────────────────────────────────────────

/// Draw every drawable entity of the current session.
pub fn draw_world_system(mut gizmos: Gizmos, session: Res<Session>, config: Res<GameConfig>) {
    for (_, entity) in session.world.iter(Group::Drawable) {
        let shape = &entity.shape;
        match &entity.kind {
            EntityKind::Player(ship) => {
                let [a, b, c] = ship_triangle(shape, ship).map(|p| config.to_world(p));
                gizmos.line_2d(a, b, line_color());
                gizmos.line_2d(b, c, line_color());
                gizmos.line_2d(c, a, line_color());
            }
            EntityKind::Asteroid | EntityKind::Shot => {
                gizmos.circle_2d(config.to_world(shape.position), shape.radius, line_color());
            }
        }
    }
}

// ── OnEnter(Game): score HUD ────────────────────────────────────────────────

/// Spawn the top-left score readout.
pub fn setup_hud_score(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudScoreDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(hud_color()),
            ));
        });
}

// ── Update: score HUD ───────────────────────────────────────────────────────

/// Refresh the score readout when the session changes.
pub fn hud_score_display_system(
    session: Res<Session>,
    parent_query: Query<&Children, With<HudScoreDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    if !session.is_changed() {
        return;
    }
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(format!("Score: {}", session.score));
            }
        }
    }
}
