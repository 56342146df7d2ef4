use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub key_bindings: KeyBindings,
    /// Frames a direction stays held after a key press on terminals that do
    /// not report key releases. Has to outlast the keyboard's auto-repeat
    /// delay or a held key stutters between the first press and the repeats.
    #[serde(default = "default_hold_frames")]
    pub hold_frames: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
    pub interact: String,
    pub quit: String,
}

/// Half a second at 60 fps, longer than the usual 250-500 ms repeat delay.
fn default_hold_frames() -> u32 {
    30
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            left: "Left".into(),
            right: "Right".into(),
            up: "Up".into(),
            down: "Down".into(),
            interact: "Space".into(),
            quit: "Esc".into(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            key_bindings: KeyBindings::default(),
            hold_frames: default_hold_frames(),
        }
    }
}

impl GameConfig {
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(json) => Self::parse(&json).unwrap_or_else(|e| {
                warn!(path = %config_path.display(), "invalid config ({e}), using defaults");
                Self::default()
            }),
            Err(_) => {
                info!(path = %config_path.display(), "no config file, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("studio-walk");
        path.push("config.json");
        path
    }
}

/// Check whether a crossterm `KeyEvent` matches a binding string from config.
pub fn matches_binding(binding: &str, event: &KeyEvent) -> bool {
    // Handle Alt- prefix
    if let Some(rest) = binding.strip_prefix("Alt-") {
        if !event.modifiers.contains(KeyModifiers::ALT) {
            return false;
        }
        return matches_key(rest, event.code);
    }

    // Handle Ctrl- prefix
    if let Some(rest) = binding.strip_prefix("Ctrl-") {
        if !event.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        return matches_key(rest, event.code);
    }

    // For non-Ctrl, non-Alt bindings, reject if Ctrl or Alt is held.
    // This keeps a plain "a" from firing on Alt-a.
    if event.modifiers.contains(KeyModifiers::CONTROL)
        || event.modifiers.contains(KeyModifiers::ALT)
    {
        return false;
    }

    matches_key(binding, event.code)
}

fn matches_key(key: &str, code: KeyCode) -> bool {
    match key {
        "Right" => code == KeyCode::Right,
        "Left" => code == KeyCode::Left,
        "Up" => code == KeyCode::Up,
        "Down" => code == KeyCode::Down,
        "Enter" => code == KeyCode::Enter,
        "Esc" => code == KeyCode::Esc,
        "Space" => code == KeyCode::Char(' '),
        "Tab" => code == KeyCode::Tab,
        "Backspace" => code == KeyCode::Backspace,
        "Home" => code == KeyCode::Home,
        "End" => code == KeyCode::End,
        s => {
            // F-key binding: "F1" through "F12" etc.
            if let Some(rest) = s.strip_prefix('F') {
                if let Ok(n) = rest.parse::<u8>() {
                    return code == KeyCode::F(n);
                }
            }
            // Single character binding, case-insensitive so Shift doesn't matter
            let mut chars = s.chars();
            match (chars.next(), chars.next(), code) {
                (Some(c), None, KeyCode::Char(pressed)) => {
                    c.eq_ignore_ascii_case(&pressed)
                }
                _ => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn named_keys_match() {
        assert!(matches_binding("Space", &key(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(matches_binding("Esc", &key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(matches_binding("F1", &key(KeyCode::F(1), KeyModifiers::NONE)));
        assert!(!matches_binding("Left", &key(KeyCode::Right, KeyModifiers::NONE)));
    }

    #[test]
    fn modifiers_must_agree() {
        let ctrl_q = key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(matches_binding("Ctrl-q", &ctrl_q));
        assert!(!matches_binding("q", &ctrl_q));
        assert!(!matches_binding("Alt-q", &ctrl_q));
        assert!(matches_binding("w", &key(KeyCode::Char('W'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn multi_char_unknown_binding_never_matches() {
        assert!(!matches_binding("wat", &key(KeyCode::Char('w'), KeyModifiers::NONE)));
    }

    #[test]
    fn partial_config_keeps_other_defaults() -> anyhow::Result<()> {
        let config = GameConfig::parse(r#"{ "key_bindings": { "left": "a", "right": "d" } }"#)?;
        assert_eq!(config.key_bindings.left, "a");
        assert_eq!(config.key_bindings.up, "Up");
        assert_eq!(config.key_bindings.interact, "Space");
        assert_eq!(config.hold_frames, 30);
        Ok(())
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(GameConfig::parse("{ nope").is_err());
    }
}
