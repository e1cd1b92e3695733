use super::*;

/// A clickable rectangle in window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    /// Whether the most recent pointer position lies inside `rect`.
    pub hovered: bool,
}

impl Button {
    pub fn new(label: &'static str, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            label,
            rect: Rect::from_corners(Vec2::new(x, y), Vec2::new(x + width, y + height)),
            hovered: false,
        }
    }

    /// Half-open hit test: the right and bottom edges are outside.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.rect.min.x
            && point.x < self.rect.max.x
            && point.y >= self.rect.min.y
            && point.y < self.rect.max.y
    }

    /// Update hover state and report whether `event` pressed this button.
    pub fn handle_event(&mut self, event: &UiEvent) -> bool {
        match *event {
            UiEvent::PointerMoved(pos) => {
                self.hovered = self.contains(pos);
                false
            }
            UiEvent::PointerDown(pos) => self.contains(pos),
        }
    }
}

/// A column of buttons, each leading to a target state, plus the state the
/// owning screen will report next.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonPanel {
    /// The owning screen's own state, reported while nothing is pressed.
    pub home: GameState,
    pub entries: Vec<(Button, GameState)>,
    pub next_state: GameState,
}

impl ButtonPanel {
    pub fn new(home: GameState, entries: Vec<(Button, GameState)>) -> Self {
        Self {
            home,
            entries,
            next_state: home,
        }
    }

    pub fn handle_event(&mut self, event: &UiEvent) {
        for (button, target) in self.entries.iter_mut() {
            if button.handle_event(event) {
                self.next_state = *target;
            }
        }
    }

    /// Forget any pending press.
    pub fn reset(&mut self) {
        self.next_state = self.home;
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.entries.iter().map(|(button, _)| button)
    }
}

/// Common behaviour of the non-game screens.
pub trait Screen: Resource {
    fn panel(&self) -> &ButtonPanel;
    fn panel_mut(&mut self) -> &mut ButtonPanel;
    fn title(&self) -> &'static str;

    /// Extra text lines rendered under the title.
    fn body(&self) -> Vec<String> {
        Vec::new()
    }

    fn handle_event(&mut self, event: &UiEvent) {
        self.panel_mut().handle_event(event);
    }

    /// Advance per-frame state and return the state to show next.
    fn update(&mut self) -> GameState {
        self.panel().next_state
    }

    /// Called when the screen becomes active.
    fn on_enter(&mut self) {
        self.panel_mut().reset();
    }
}

/// Back button shared by the secondary screens.
pub(super) fn back_button(screen_width: f32) -> (Button, GameState) {
    (
        Button::new("Back", screen_width / 2.0 - 100.0, 500.0, 200.0, 50.0),
        GameState::Menu,
    )
}
