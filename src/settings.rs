//! User settings read from a JSON file.
//!
//! The file lives at `$CELLUI_SETTINGS` or `<cache dir>/cellui/settings.json`.
//! Every field is optional; a missing or unreadable file yields the defaults.

use crate::ui::core::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::widgets::loading::DEFAULT_TICK;
use crate::ui::window::{Keymap, Placement};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SETTINGS_ENV: &str = "CELLUI_SETTINGS";
const APP_DIR: &str = "cellui";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySettings {
    pub quit: Vec<String>,
    pub next_focus: Vec<String>,
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            quit: vec!["esc".to_string(), "ctrl+c".to_string()],
            next_focus: vec!["tab".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub keys: KeySettings,
    pub loading_tick_ms: u64,
    pub placement: Placement,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keys: KeySettings::default(),
            loading_tick_ms: u64::try_from(DEFAULT_TICK.as_millis()).unwrap_or(100),
            placement: Placement::TopLeft,
        }
    }
}

impl Settings {
    /// Loads from the configured path, falling back to defaults.
    pub fn load() -> Self {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no settings file");
                return Self::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid settings, using defaults");
                Self::default()
            }
        }
    }

    /// Bindings that fail to parse are skipped; a slot left empty keeps its
    /// default bindings.
    pub fn keymap(&self) -> Keymap {
        let defaults = Keymap::default();
        let quit = parse_all(&self.keys.quit);
        let next_focus = parse_all(&self.keys.next_focus);
        Keymap {
            quit: if quit.is_empty() { defaults.quit } else { quit },
            next_focus: if next_focus.is_empty() {
                defaults.next_focus
            } else {
                next_focus
            },
        }
    }

    pub fn loading_tick(&self) -> Duration {
        Duration::from_millis(self.loading_tick_ms.max(1))
    }
}

fn parse_all(values: &[String]) -> Vec<KeyEvent> {
    values
        .iter()
        .filter_map(|value| {
            let key = parse_keybinding(value);
            if key.is_none() {
                tracing::warn!(binding = %value, "unrecognized key binding");
            }
            key
        })
        .collect()
}

/// Parses bindings such as `"ctrl+c"`, `"esc"`, `"shift+tab"` or `"F5"`.
pub fn parse_keybinding(value: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "super" | "meta" | "cmd" => modifiers |= KeyModifiers::SUPER,
            _ => key_part = Some(part),
        }
    }
    let code = parse_key_code(key_part?)?;
    if let KeyCode::Char(ch) = code {
        if ch.is_ascii_uppercase() {
            modifiers |= KeyModifiers::SHIFT;
        }
    }
    Some(KeyEvent::new(code, modifiers))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let lower = value.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ if lower.len() > 1 && lower.starts_with('f') => {
            KeyCode::F(lower.strip_prefix('f')?.parse::<u8>().ok()?)
        }
        _ => {
            let mut chars = value.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(code)
}

pub fn settings_path() -> Option<PathBuf> {
    resolve_settings_path(std::env::var_os(SETTINGS_ENV).map(PathBuf::from), cache_dir())
}

fn resolve_settings_path(explicit: Option<PathBuf>, cache: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    cache.map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

/// Log directory under the cache dir, created on demand.
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = cache_dir()
        .map(|dir| dir.join(APP_DIR).join("logs"))
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Cannot determine log directory",
            )
        })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
