use serde::Deserialize;

use crate::error::{EditorError, EditorResult};
use crate::types::{Bounds, Dimensions};

/// Id of the optional JSON block in the host page that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "playground-config";

/// Runtime settings for the editor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub playground_width: f64,
    pub playground_height: f64,
    /// Side length of freshly dropped elements
    pub default_element_size: f64,
    /// Smallest width/height accepted from the property panel
    pub min_element_size: f64,
    pub storage_key: String,
    pub placeholder_image_base: String,
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            playground_width: 800.0,
            playground_height: 600.0,
            default_element_size: 100.0,
            min_element_size: 1.0,
            storage_key: "playgroundState".to_string(),
            placeholder_image_base: "https://picsum.photos/100/100".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(raw: &str) -> EditorResult<Self> {
        let config: EditorConfig =
            serde_json::from_str(raw).map_err(|e| EditorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> EditorResult<()> {
        if !(self.playground_width > 0.0 && self.playground_height > 0.0) {
            return Err(EditorError::Config(
                "playground dimensions must be positive".to_string(),
            ));
        }
        if !(self.min_element_size > 0.0) {
            return Err(EditorError::Config(
                "min_element_size must be positive".to_string(),
            ));
        }
        if self.default_element_size < self.min_element_size {
            return Err(EditorError::Config(
                "default_element_size is below min_element_size".to_string(),
            ));
        }
        if self.storage_key.is_empty() {
            return Err(EditorError::Config("storage_key is empty".to_string()));
        }
        Ok(())
    }

    /// Read overrides from the host page, falling back to defaults.
    ///
    /// Returns the error alongside so it can be logged once logging is up.
    pub fn from_page() -> (Self, Option<EditorError>) {
        let raw = gloo_utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.playground_width, self.playground_height)
    }

    pub fn default_size(&self) -> Dimensions {
        Dimensions::square(self.default_element_size)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.storage_key, "playgroundState");
        assert_eq!(config.default_size(), Dimensions::square(100.0));
        assert_eq!(config.bounds(), Bounds::new(800.0, 600.0));
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_partial_override() {
        let config =
            EditorConfig::from_json(r#"{"playground_width": 1024, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.playground_width, 1024.0);
        assert_eq!(config.playground_height, 600.0);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(EditorConfig::from_json(r#"{"playground_width": 0}"#).is_err());
        assert!(EditorConfig::from_json(r#"{"storage_key": ""}"#).is_err());
        assert!(EditorConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = EditorConfig::from_json(r#"{"log_level": "loud"}"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
