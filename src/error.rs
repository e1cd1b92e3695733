//! Game-specific error types.
//!
//! Only the file-backed collaborators can fail: the highscore list and the
//! optional TOML config.  The simulation tick itself is infallible.
//!
//! ## Usage
//!
//! ```rust
//! use asteroids::error::GameResult;
//! use asteroids::highscore::HighScores;
//!
//! fn load() -> GameResult<HighScores> {
//!     HighScores::load("highscores.json")
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// The highscore file exists but could not be read.
    HighScoreRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The highscore file is not a JSON array of integers.
    HighScoreParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The highscore list could not be encoded.
    HighScoreSerialize { source: serde_json::Error },

    /// The highscore file could not be written.
    HighScoreWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration value is outside its usable range.
    InvalidConfig {
        /// Name of the offending field.
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::HighScoreRead { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            GameError::HighScoreParse { path, source } => write!(
                f,
                "{} is not a JSON list of scores: {}",
                path.display(),
                source
            ),
            GameError::HighScoreSerialize { source } => {
                write!(f, "failed to encode highscores: {}", source)
            }
            GameError::HighScoreWrite { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(f, "config '{}' = {} must be {}", name, value, expected),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::HighScoreRead { source, .. } | GameError::HighScoreWrite { source, .. } => {
                Some(source)
            }
            GameError::HighScoreParse { source, .. } | GameError::HighScoreSerialize { source } => {
                Some(source)
            }
            GameError::InvalidConfig { .. } => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is strictly positive and finite.
pub fn validate_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "> 0",
        })
    }
}

/// Returns an error unless `value` is zero or positive and finite.
pub fn validate_non_negative(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: ">= 0",
        })
    }
}

/// Returns an error if `min` exceeds `max`.
pub fn validate_range(name: &'static str, min: f32, max: f32) -> GameResult<()> {
    if min <= max {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value: min,
            expected: "<= the matching maximum",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(validate_positive("x", 1.0).is_ok());
        assert!(validate_positive("x", 0.0).is_err());
        assert!(validate_positive("x", f32::NAN).is_err());
    }

    #[test]
    fn non_negative_accepts_zero_only_from_below() {
        assert!(validate_non_negative("jitter", 0.0).is_ok());
        assert!(validate_non_negative("jitter", 30.0).is_ok());
        let err = validate_non_negative("jitter", -5.0).unwrap_err();
        assert!(err.to_string().contains("jitter"));
        assert!(validate_non_negative("jitter", f32::INFINITY).is_err());
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(validate_range("speed", 40.0, 100.0).is_ok());
        assert!(validate_range("speed", 40.0, 40.0).is_ok());
        let err = validate_range("speed", 100.0, 40.0).unwrap_err();
        assert!(err.to_string().contains("speed"));
    }
}
