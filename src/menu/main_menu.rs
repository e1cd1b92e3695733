use super::*;
use rand::Rng;

/// Title screen with Start / High Scores / Settings / Exit and a drifting
/// starfield.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │  .        ASTEROIDS          .       .      │
/// │        [     Start      ]                   │
/// │        [  High Scores   ]        .          │
/// │   .    [    Settings    ]                   │
/// │        [      Exit      ]    .              │
/// └─────────────────────────────────────────────┘
/// ```
#[derive(Resource, Debug, Clone)]
pub struct MainMenu {
    panel: ButtonPanel,
    pub stars: Vec<Vec2>,
    screen_width: f32,
    screen_height: f32,
}

impl MainMenu {
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let x = config.screen_width / 2.0 - 100.0;
        let entries = vec![
            (Button::new("Start", x, 200.0, 200.0, 50.0), GameState::Game),
            (
                Button::new("High Scores", x, 270.0, 200.0, 50.0),
                GameState::HighScores,
            ),
            (
                Button::new("Settings", x, 340.0, 200.0, 50.0),
                GameState::Settings,
            ),
            (Button::new("Exit", x, 410.0, 200.0, 50.0), GameState::Exit),
        ];
        let stars = (0..MENU_STAR_COUNT)
            .map(|_| {
                Vec2::new(
                    rng.gen_range(0.0..=config.screen_width),
                    rng.gen_range(0.0..=config.screen_height),
                )
            })
            .collect();
        Self {
            panel: ButtonPanel::new(GameState::Menu, entries),
            stars,
            screen_width: config.screen_width,
            screen_height: config.screen_height,
        }
    }

    /// Drift every star down by one step, wrapping past the bottom edge to the
    /// top at a fresh random column.
    pub fn advance_stars(&mut self, rng: &mut impl Rng) {
        for star in self.stars.iter_mut() {
            star.y += MENU_STAR_STEP;
            if star.y > self.screen_height {
                star.y = 0.0;
                star.x = rng.gen_range(0.0..=self.screen_width);
            }
        }
    }
}

impl Screen for MainMenu {
    fn panel(&self) -> &ButtonPanel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut ButtonPanel {
        &mut self.panel
    }

    fn title(&self) -> &'static str {
        "ASTEROIDS"
    }

    fn update(&mut self) -> GameState {
        self.advance_stars(&mut rand::thread_rng());
        self.panel.next_state
    }
}

/// Draw the starfield behind the menu UI.
pub(super) fn draw_stars_system(
    mut gizmos: Gizmos,
    menu: Res<MainMenu>,
    config: Res<GameConfig>,
) {
    for star in &menu.stars {
        gizmos.circle_2d(config.to_world(*star), 2.0, star_color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn menu() -> MainMenu {
        MainMenu::new(&GameConfig::default(), &mut StdRng::seed_from_u64(1))
    }

    fn centre(menu: &MainMenu, index: usize) -> Vec2 {
        menu.panel().entries[index].0.rect.center()
    }

    #[test]
    fn starts_on_menu_with_hundred_stars() {
        let mut menu = menu();
        assert_eq!(menu.stars.len(), MENU_STAR_COUNT);
        assert_eq!(menu.update(), GameState::Menu);
    }

    #[test]
    fn each_button_leads_to_its_state() {
        let expected = [
            GameState::Game,
            GameState::HighScores,
            GameState::Settings,
            GameState::Exit,
        ];
        for (index, state) in expected.into_iter().enumerate() {
            let mut menu = menu();
            let pos = centre(&menu, index);
            menu.handle_event(&UiEvent::PointerDown(pos));
            assert_eq!(menu.update(), state);
        }
    }

    #[test]
    fn click_between_buttons_does_nothing() {
        let mut menu = menu();
        // Gap between "Start" (200..250) and "High Scores" (270..320).
        menu.handle_event(&UiEvent::PointerDown(Vec2::new(640.0, 260.0)));
        assert_eq!(menu.update(), GameState::Menu);
    }

    #[test]
    fn on_enter_clears_a_pending_press() {
        let mut menu = menu();
        let pos = centre(&menu, 1);
        menu.handle_event(&UiEvent::PointerDown(pos));
        menu.on_enter();
        assert_eq!(menu.update(), GameState::Menu);
    }

    #[test]
    fn stars_drift_down_and_wrap() {
        let mut menu = menu();
        let mut rng = StdRng::seed_from_u64(2);
        menu.stars = vec![Vec2::new(10.0, 5.0), Vec2::new(20.0, 720.0)];
        menu.advance_stars(&mut rng);
        assert!((menu.stars[0].y - (5.0 + MENU_STAR_STEP)).abs() < 1e-4);
        assert_eq!(menu.stars[0].x, 10.0);
        assert_eq!(menu.stars[1].y, 0.0);
        assert!((0.0..=1280.0).contains(&menu.stars[1].x));
    }
}
