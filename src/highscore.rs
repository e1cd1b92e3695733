//! Flat-file highscore list.
//!
//! The file is a bare JSON array of integers (`[300, 120, 50]`).  It is read
//! once at startup and rewritten wholesale on every save; there is no schema
//! version and no partial update.  A missing file is an empty list, anything
//! else that fails to read or parse is an error.

use crate::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    scores: Vec<u32>,
}

impl HighScores {
    pub fn new(scores: Vec<u32>) -> Self {
        Self { scores }
    }

    /// Read `path`; a missing file yields an empty list.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(GameError::HighScoreRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&contents).map_err(|source| GameError::HighScoreParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overwrite `path` with the full list.
    pub fn save(&self, path: impl AsRef<Path>) -> GameResult<()> {
        let path = path.as_ref();
        let serialized = serde_json::to_string(self)
            .map_err(|source| GameError::HighScoreSerialize { source })?;
        fs::write(path, serialized).map_err(|source| GameError::HighScoreWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn record(&mut self, score: u32) {
        self.scores.push(score);
    }

    /// All scores in stored order.
    #[inline]
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// The best `n` scores, highest first.
    pub fn top(&self, n: usize) -> Vec<u32> {
        let mut sorted = self.scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.truncate(n);
        sorted
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_sorts_descending_and_truncates() {
        let scores = HighScores::new(vec![30, 100, 50, 70]);
        assert_eq!(scores.top(3), vec![100, 70, 50]);
        assert_eq!(scores.top(10), vec![100, 70, 50, 30]);
        assert!(HighScores::default().top(10).is_empty());
    }

    #[test]
    fn record_appends() {
        let mut scores = HighScores::default();
        scores.record(20);
        scores.record(10);
        assert_eq!(scores.scores(), &[20, 10]);
    }

    #[test]
    fn serializes_as_bare_array() {
        let json = serde_json::to_string(&HighScores::new(vec![1, 2])).unwrap();
        assert_eq!(json, "[1,2]");
    }
}
