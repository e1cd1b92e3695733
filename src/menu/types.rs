use bevy::prelude::*;

/// Top-level application state machine.
///
/// Transitions come only from the active screen's returned state, or from the
/// window closing.  `Exit` ends the process on entry.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title screen; shown on startup.
    #[default]
    Menu,
    /// Active run.  There is no way back to the menu from here.
    Game,
    /// Sorted list of recorded scores.
    HighScores,
    /// Placeholder settings page.
    Settings,
    /// Terminal state; entering it requests [`AppExit`].
    Exit,
}

/// Pointer input as seen by a screen, in window coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// The cursor moved to this position.
    PointerMoved(Vec2),
    /// The primary button went down at this position.
    PointerDown(Vec2),
}

/// Root node of the active screen's UI; despawned when the screen is left.
#[derive(Component)]
pub struct ScreenRoot;

/// Index of a button within its screen's [`super::ButtonPanel`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonIndex(pub usize);

/// Root node of the in-game score HUD.
#[derive(Component)]
pub struct HudScoreDisplay;
