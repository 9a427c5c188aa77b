//! Editor settings
//!
//! Startup configuration for a session. Read from a JSON file when one is
//! provided, otherwise the defaults reproduce the classic starter scene.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::EditorError;

/// Editor settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    /// Initial canvas width (drawing area, sidebar excluded)
    pub canvas_width: f64,
    /// Initial canvas height
    pub canvas_height: f64,
    /// Width of the host's sidebar, used when deriving the canvas from a window size
    pub sidebar_width: f64,

    // === Starter scene ===
    /// Where the light starts
    pub light_position: (f64, f64),
    /// Light radius (used for collision, not for picking)
    pub light_radius: f64,
    /// Place the 70px starter circle at (500, 200)
    pub starter_circle: bool,

    // === Headless demo ===
    /// Seed for the demo pointer script
    pub demo_seed: u64,
    /// Number of scripted pointer gestures
    pub demo_steps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            sidebar_width: SIDEBAR_WIDTH,

            light_position: DEFAULT_LIGHT_POS,
            light_radius: DEFAULT_LIGHT_RADIUS,
            starter_circle: true,

            demo_seed: 12345,
            demo_steps: 32,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const ENV_VAR: &'static str = "LUMEN_SETTINGS";

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| EditorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `$LUMEN_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Check that sizes are usable
    pub fn validate(&self) -> Result<(), EditorError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(EditorError::InvalidConfig(format!(
                "canvas must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.light_radius > 0.0) {
            return Err(EditorError::InvalidConfig(format!(
                "light radius must be positive, got {}",
                self.light_radius
            )));
        }
        if self.sidebar_width < 0.0 {
            return Err(EditorError::InvalidConfig(format!(
                "sidebar width must not be negative, got {}",
                self.sidebar_width
            )));
        }
        Ok(())
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_starter_scene() {
        let settings = Settings::default();
        assert_eq!(settings.canvas_width, 800.0);
        assert_eq!(settings.canvas_height, 600.0);
        assert_eq!(settings.light_position, (150.0, 400.0));
        assert_eq!(settings.light_radius, 30.0);
        assert!(settings.starter_circle);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "canvas_width": 1024.0, "starter_circle": false }"#)
            .unwrap();
        assert_eq!(settings.canvas_width, 1024.0);
        assert_eq!(settings.canvas_height, 600.0);
        assert!(!settings.starter_circle);
    }

    #[test]
    fn test_invalid_canvas_rejected() {
        let result = Settings::from_json(r#"{ "canvas_height": 0.0 }"#);
        assert!(matches!(result, Err(EditorError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let result = Settings::from_json("{ not json");
        assert!(matches!(result, Err(EditorError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Settings::load_from("/nonexistent/lumen/settings.json");
        assert!(matches!(result, Err(EditorError::Io { .. })));
    }

    #[test]
    fn test_json_roundtrip_preserves_settings() {
        let mut settings = Settings::default();
        settings.light_position = (42.0, 84.0);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
