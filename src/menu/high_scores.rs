use super::*;
use crate::error::GameResult;
use crate::highscore::HighScores;
use std::path::PathBuf;

/// Shows the best scores, highest first, and owns the on-disk list.
#[derive(Resource, Debug, Clone)]
pub struct HighScoreScreen {
    panel: ButtonPanel,
    scores: HighScores,
    path: PathBuf,
}

impl HighScoreScreen {
    /// Build the screen around an already loaded list.
    pub fn new(scores: HighScores, config: &GameConfig) -> Self {
        Self {
            panel: ButtonPanel::new(
                GameState::HighScores,
                vec![back_button(config.screen_width)],
            ),
            scores,
            path: config.highscore_path.clone(),
        }
    }

    /// Load the list from `config.highscore_path`; a missing file is empty.
    pub fn load(config: &GameConfig) -> GameResult<Self> {
        Ok(Self::new(HighScores::load(&config.highscore_path)?, config))
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    /// Overwrite the file with the current list.
    pub fn save(&self) -> GameResult<()> {
        self.scores.save(&self.path)
    }

    /// Append `score` and persist the whole list.
    pub fn record(&mut self, score: u32) -> GameResult<()> {
        self.scores.record(score);
        self.save()
    }
}

impl Screen for HighScoreScreen {
    fn panel(&self) -> &ButtonPanel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut ButtonPanel {
        &mut self.panel
    }

    fn title(&self) -> &'static str {
        "HIGH SCORES"
    }

    fn body(&self) -> Vec<String> {
        self.scores
            .top(HIGHSCORE_DISPLAY_COUNT)
            .into_iter()
            .enumerate()
            .map(|(i, score)| format!("{}. {}", i + 1, score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_lists_top_ten_descending() {
        let scores = HighScores::new((1..=12).map(|s| s * 10).collect());
        let screen = HighScoreScreen::new(scores, &GameConfig::default());
        let body = screen.body();
        assert_eq!(body.len(), HIGHSCORE_DISPLAY_COUNT);
        assert_eq!(body[0], "1. 120");
        assert_eq!(body[9], "10. 30");
    }

    #[test]
    fn back_returns_to_menu() {
        let mut screen = HighScoreScreen::new(HighScores::default(), &GameConfig::default());
        assert_eq!(screen.update(), GameState::HighScores);
        screen.handle_event(&UiEvent::PointerDown(Vec2::new(640.0, 525.0)));
        assert_eq!(screen.update(), GameState::Menu);
    }
}
