//! Menu, high-score, and settings screens, plus the `GameState` machine.
//!
//! Each screen is a plain [`Screen`] resource that owns its buttons and
//! reports the next state.  The Bevy systems here only translate window input
//! into [`UiEvent`]s, apply the reported state, and mirror the screen into UI
//! nodes.
//!
//! ## States
//!
//! | State        | Screen               | Reachable from        |
//! |--------------|----------------------|-----------------------|
//! | `Menu`       | [`MainMenu`]         | start, Back buttons   |
//! | `Game`       | (see `crate::game`)  | Start                 |
//! | `HighScores` | [`HighScoreScreen`]  | High Scores           |
//! | `Settings`   | [`SettingsScreen`]   | Settings              |
//! | `Exit`       | none                 | Exit                  |
//!
//! ## Systems (registered per screen by `MenuPlugin`)
//!
//! | System                    | Schedule              | Purpose                          |
//! |---------------------------|-----------------------|----------------------------------|
//! | `enter_screen_system`     | `OnEnter(state)`      | Clear any stale button press     |
//! | `spawn_screen_ui`         | `OnEnter(state)`      | Spawn title, body, buttons       |
//! | `despawn_screen_ui`       | `OnExit(state)`       | Despawn the screen's UI tree     |
//! | `screen_input_system`     | `Update / in state`   | Cursor + left click → `UiEvent`  |
//! | `screen_update_system`    | `Update / in state`   | Apply the screen's next state    |
//! | `button_style_system`     | `Update / in state`   | Yellow outline while hovered     |

use crate::config::GameConfig;
use crate::constants::{HIGHSCORE_DISPLAY_COUNT, LINE_WIDTH, MENU_STAR_COUNT, MENU_STAR_STEP};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

mod button;
mod common;
mod high_scores;
mod main_menu;
mod settings;
mod types;

use button::back_button;
use common::*;

pub use button::{Button, ButtonPanel, Screen};
pub use high_scores::HighScoreScreen;
pub use main_menu::MainMenu;
pub use settings::SettingsScreen;
pub use types::{ButtonIndex, GameState, HudScoreDisplay, ScreenRoot, UiEvent};

/// Registers `GameState`, every screen's systems, and the exit hook.
///
/// The screen resources ([`MainMenu`], [`HighScoreScreen`],
/// [`SettingsScreen`]) must be inserted before the app runs.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::Exit), exit_system)
            .add_systems(
                Update,
                main_menu::draw_stars_system.run_if(in_state(GameState::Menu)),
            );
        add_screen::<MainMenu>(app, GameState::Menu);
        add_screen::<HighScoreScreen>(app, GameState::HighScores);
        add_screen::<SettingsScreen>(app, GameState::Settings);
    }
}

fn add_screen<S: Screen>(app: &mut App, state: GameState) {
    app.add_systems(
        OnEnter(state),
        (enter_screen_system::<S>, spawn_screen_ui::<S>).chain(),
    )
    .add_systems(OnExit(state), despawn_screen_ui)
    .add_systems(
        Update,
        (
            screen_input_system::<S>,
            screen_update_system::<S>,
            button_style_system::<S>,
        )
            .chain()
            .run_if(in_state(state)),
    );
}

/// Convert one frame of pointer state into screen events.
///
/// Leaving the window reports a move to a point outside every button so hover
/// highlights clear.
pub fn pointer_events(last: Option<Vec2>, current: Option<Vec2>, pressed: bool) -> Vec<UiEvent> {
    let mut events = Vec::new();
    match current {
        Some(pos) => {
            if last != Some(pos) {
                events.push(UiEvent::PointerMoved(pos));
            }
            if pressed {
                events.push(UiEvent::PointerDown(pos));
            }
        }
        None => {
            if last.is_some() {
                events.push(UiEvent::PointerMoved(Vec2::splat(-1.0)));
            }
        }
    }
    events
}

pub fn enter_screen_system<S: Screen>(mut screen: ResMut<S>) {
    screen.on_enter();
}

/// Feed cursor movement and left clicks to the active screen.
pub fn screen_input_system<S: Screen>(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut last_cursor: Local<Option<Vec2>>,
    mut screen: ResMut<S>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let cursor = window.cursor_position();
    let events = pointer_events(*last_cursor, cursor, mouse.just_pressed(MouseButton::Left));
    *last_cursor = cursor;
    for event in &events {
        screen.handle_event(event);
    }
}

/// Apply the screen's reported state when it differs from the current one.
pub fn screen_update_system<S: Screen>(
    mut screen: ResMut<S>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let target = screen.update();
    if target != *state.get() {
        next_state.set(target);
    }
}

/// Spawn the full-screen UI tree for `S`.
pub fn spawn_screen_ui<S: Screen>(mut commands: Commands, screen: Res<S>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            ScreenRoot,
        ))
        .with_children(|root| {
            spacer(root, 60.0);
            root.spawn((
                Text::new(screen.title()),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color()),
            ));
            spacer(root, 30.0);
            for line in screen.body() {
                root.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 32.0,
                        ..default()
                    },
                    TextColor(body_color()),
                ));
                spacer(root, 6.0);
            }
            for (index, button) in screen.panel().buttons().enumerate() {
                spawn_button(root, index, button);
            }
        });
}

/// Recursively despawn the active screen's UI.
pub fn despawn_screen_ui(mut commands: Commands, query: Query<Entity, With<ScreenRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Mirror each button's hover flag into its outline and label colour.
pub fn button_style_system<S: Screen>(
    screen: Res<S>,
    mut buttons: Query<(&ButtonIndex, &mut BorderColor, &Children)>,
    mut labels: Query<&mut TextColor>,
) {
    if !screen.is_changed() {
        return;
    }
    let tints: Vec<Color> = screen
        .panel()
        .buttons()
        .map(|button| button_tint(button.hovered))
        .collect();
    for (index, mut border, children) in buttons.iter_mut() {
        let Some(tint) = tints.get(index.0).copied() else {
            continue;
        };
        *border = BorderColor::all(tint);
        for child in children.iter() {
            if let Ok(mut color) = labels.get_mut(child) {
                *color = TextColor(tint);
            }
        }
    }
}

/// Entering `Exit` ends the process.
pub fn exit_system(mut exit: MessageWriter<AppExit>) {
    info!("Exit selected; shutting down");
    exit.write(AppExit::Success);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_reports_position_then_only_changes() {
        let p = Vec2::new(10.0, 20.0);
        assert_eq!(pointer_events(None, Some(p), false), vec![UiEvent::PointerMoved(p)]);
        assert!(pointer_events(Some(p), Some(p), false).is_empty());
    }

    #[test]
    fn press_reports_down_at_cursor() {
        let p = Vec2::new(10.0, 20.0);
        assert_eq!(pointer_events(Some(p), Some(p), true), vec![UiEvent::PointerDown(p)]);
    }

    #[test]
    fn leaving_the_window_clears_hover_once() {
        let p = Vec2::new(10.0, 20.0);
        assert_eq!(
            pointer_events(Some(p), None, false),
            vec![UiEvent::PointerMoved(Vec2::splat(-1.0))]
        );
        assert!(pointer_events(None, None, true).is_empty());
    }
}
