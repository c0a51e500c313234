//! Player preferences
//!
//! Persisted in LocalStorage on the web. Scores are never stored.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show FPS counter
    pub show_fps: bool,
    /// Large countdown number during the last seconds of a wave
    pub countdown_overlay: bool,
    /// Brighter, flatter palette
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            countdown_overlay: true,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dino_dodge_settings";

    /// Parse stored settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                None
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"high_contrast":true}"#).unwrap();
        assert!(settings.high_contrast);
        assert!(settings.countdown_overlay);
        assert!(settings.show_fps);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(Settings::from_json("[1,2"), None);
    }
}
