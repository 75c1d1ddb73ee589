//! Application configuration.

use serde::{Deserialize, Serialize};
use storagetutor_core::timing::{
    DEFAULT_ANIMATION_MS, DEFAULT_LOADING_DELAY_MS, DEFAULT_RESIZE_DEBOUNCE_MS, Duration,
};
use storagetutor_core::{PUZZLE_SUBSET_SIZE, TutorialOptions};

use crate::error::{AppError, AppResult};

/// Application configuration.
///
/// Missing JSON fields fall back to [`AppConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated loading delay before the first content render.
    pub loading_delay_ms: u64,
    /// How long carousel slide classes stay on a card.
    pub animation_ms: u64,
    /// Quiet period before a resize re-applies layout.
    pub resize_debounce_ms: u64,
    /// Scenarios drawn for the matching game.
    pub puzzle_subset: usize,
    /// Fixed shuffle seed, for reproducible sessions.
    pub seed: Option<u64>,
    /// Section id to open first.
    pub start_section: Option<String>,
    /// Viewport width assumed until the first resize event.
    pub initial_width: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
            animation_ms: DEFAULT_ANIMATION_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            puzzle_subset: PUZZLE_SUBSET_SIZE,
            seed: None,
            start_section: None,
            initial_width: 1280.0,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply overrides from a query string or hash, e.g.
    /// `?section=quiz&seed=42&subset=4`. Unknown keys are ignored.
    ///
    /// A value that fails to parse leaves its field untouched; the other
    /// pairs still apply. Returns the rejected pairs.
    pub fn apply_params(&mut self, query: &str) -> Vec<AppError> {
        let mut rejected = Vec::new();
        for (key, value) in parse_params(query) {
            if let Err(e) = self.apply_param(key, value) {
                log::warn!("{}", e);
                rejected.push(e);
            }
        }
        rejected
    }

    fn apply_param(&mut self, key: &str, value: &str) -> AppResult<()> {
        let invalid = || AppError::Param {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "section" => self.start_section = Some(value.to_string()),
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            "subset" => self.puzzle_subset = value.parse().map_err(|_| invalid())?,
            "loading" => self.loading_delay_ms = value.parse().map_err(|_| invalid())?,
            _ => log::debug!("ignoring parameter '{}'", key),
        }
        Ok(())
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn to_options(&self) -> TutorialOptions {
        TutorialOptions {
            puzzle_subset: self.puzzle_subset,
            seed: self.seed,
            start_section: self.start_section.clone(),
        }
    }
}

/// Split `?a=1&b=2` (or `#a=1&b=2`) into key/value pairs, skipping empty values.
pub fn parse_params(s: &str) -> Vec<(&str, &str)> {
    let s = s.trim_start_matches(['?', '#']);
    s.split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        assert_eq!(
            parse_params("?section=quiz&seed=42"),
            vec![("section", "quiz"), ("seed", "42")]
        );
        assert_eq!(parse_params("#seed=&x&y=1"), vec![("y", "1")]);
        assert!(parse_params("").is_empty());
    }

    #[test]
    fn test_apply_params() {
        let mut config = AppConfig::default();
        let rejected = config.apply_params("?section=puzzle&seed=7&subset=4&theme=dark");
        assert!(rejected.is_empty());
        assert_eq!(config.start_section.as_deref(), Some("puzzle"));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.puzzle_subset, 4);
    }

    #[test]
    fn test_apply_params_rejects_bad_numbers() {
        let mut config = AppConfig::default();
        let rejected = config.apply_params("seed=abc");
        assert_eq!(rejected.len(), 1);
        assert!(matches!(&rejected[0], AppError::Param { key, .. } if key == "seed"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_bad_param_does_not_drop_later_ones() {
        let mut config = AppConfig::default();
        let rejected = config.apply_params("?seed=abc&section=quiz&subset=4");
        assert_eq!(rejected.len(), 1);
        assert!(matches!(
            &rejected[0],
            AppError::Param { key, value } if key == "seed" && value == "abc"
        ));
        assert_eq!(config.seed, None);
        assert_eq!(config.start_section.as_deref(), Some("quiz"));
        assert_eq!(config.puzzle_subset, 4);
    }

    #[test]
    fn test_from_json_uses_defaults() {
        let config = AppConfig::from_json(r#"{ "seed": 3, "animation_ms": 50 }"#).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.animation(), Duration::from_millis(50));
        assert_eq!(config.loading_delay_ms, DEFAULT_LOADING_DELAY_MS);
        assert_eq!(config.puzzle_subset, PUZZLE_SUBSET_SIZE);

        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_to_options() {
        let config = AppConfig {
            seed: Some(9),
            start_section: Some("quiz".to_string()),
            ..Default::default()
        };
        let options = config.to_options();
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.start_section.as_deref(), Some("quiz"));
    }
}
