use super::*;

/// Placeholder settings page with a single Back button.
#[derive(Resource, Debug, Clone)]
pub struct SettingsScreen {
    panel: ButtonPanel,
}

impl SettingsScreen {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            panel: ButtonPanel::new(GameState::Settings, vec![back_button(config.screen_width)]),
        }
    }
}

impl Screen for SettingsScreen {
    fn panel(&self) -> &ButtonPanel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut ButtonPanel {
        &mut self.panel
    }

    fn title(&self) -> &'static str {
        "SETTINGS"
    }

    fn body(&self) -> Vec<String> {
        vec!["Volume / Controls / etc.".to_string()]
    }
}
