//! Player preferences
//!
//! Persisted separately from the score record in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::round::{DEFAULT_DIGITS, DEFAULT_MAX_GUESSES};

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button (shows what a click switches to)
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Sound feedback on guesses and round end
    pub sound_enabled: bool,
    /// Guesses allowed per round
    pub max_guesses: u32,
    /// Digits in the secret number
    pub digit_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sound_enabled: true,
            max_guesses: DEFAULT_MAX_GUESSES,
            digit_count: DEFAULT_DIGITS,
        }
    }
}

impl Settings {
    pub const MAX_GUESS_CAP: u32 = 99;
    pub const MAX_DIGITS: usize = 9;

    /// Clamp round limits into playable ranges
    pub fn sanitized(mut self) -> Self {
        self.max_guesses = self.max_guesses.clamp(1, Self::MAX_GUESS_CAP);
        self.digit_count = self.digit_count.clamp(1, Self::MAX_DIGITS);
        self
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "guess_the_number_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Settings>(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.sanitized();
                    }
                    Err(e) => log::warn!("Ignoring malformed settings: {}", e),
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
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to save settings");
                    return;
                }
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
    fn test_defaults_match_round() {
        let settings = Settings::default();
        assert_eq!(settings.max_guesses, 30);
        assert_eq!(settings.digit_count, 5);
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_sanitized_clamps() {
        let settings = Settings {
            max_guesses: 0,
            digit_count: 40,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(settings.max_guesses, 1);
        assert_eq!(settings.digit_count, Settings::MAX_DIGITS);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.max_guesses, 30);
    }

    #[test]
    fn test_theme_toggle() {
        let mut settings = Settings::default();
        settings.toggle_theme();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.theme.toggle_icon(), "☀️");
        assert_eq!(Theme::parse(" Light "), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
