use super::*;

pub(super) fn title_color() -> Color {
    Color::WHITE
}
pub(super) fn body_color() -> Color {
    Color::WHITE
}
pub(super) fn button_color() -> Color {
    Color::WHITE
}
pub(super) fn button_hover_color() -> Color {
    Color::srgb(1.0, 1.0, 0.0)
}
pub(super) fn star_color() -> Color {
    Color::WHITE
}

#[inline]
pub(super) fn button_tint(hovered: bool) -> Color {
    if hovered {
        button_hover_color()
    } else {
        button_color()
    }
}

pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

/// Spawn an outlined button at its absolute window rectangle.
pub(super) fn spawn_button(parent: &mut ChildSpawnerCommands<'_>, index: usize, button: &Button) {
    let color = button_tint(button.hovered);
    parent
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(button.rect.min.x),
                top: Val::Px(button.rect.min.y),
                width: Val::Px(button.rect.width()),
                height: Val::Px(button.rect.height()),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(LINE_WIDTH)),
                ..default()
            },
            BorderColor::all(color),
            ButtonIndex(index),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(button.label),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(color),
            ));
        });
}
