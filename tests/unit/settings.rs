use super::*;
use std::io::Write;

fn write_settings(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write");
    file
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = Settings::load_from(&dir.path().join("nope.json"));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.loading_tick(), Duration::from_millis(100));
    assert_eq!(settings.keymap(), Keymap::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let file = write_settings(r#"{ "placement": "centered", "loading_tick_ms": 40 }"#);
    let settings = Settings::load_from(file.path());
    assert_eq!(settings.placement, Placement::Centered);
    assert_eq!(settings.loading_tick(), Duration::from_millis(40));
    assert_eq!(settings.keys, KeySettings::default());
}

#[test]
fn invalid_file_falls_back_to_defaults() {
    let file = write_settings("{ placement: ");
    assert_eq!(Settings::load_from(file.path()), Settings::default());

    let wrong_type = write_settings(r#"{ "placement": "bottom" }"#);
    assert_eq!(Settings::load_from(wrong_type.path()), Settings::default());
}

#[test]
fn custom_bindings_build_the_keymap() {
    let file = write_settings(r#"{ "keys": { "quit": ["q", "ctrl+x", "nonsense"], "next_focus": ["F2"] } }"#);
    let keymap = Settings::load_from(file.path()).keymap();
    assert_eq!(
        keymap.quit,
        vec![KeyEvent::plain(KeyCode::Char('q')), KeyEvent::ctrl('x')]
    );
    assert_eq!(keymap.next_focus, vec![KeyEvent::plain(KeyCode::F(2))]);
}

#[test]
fn unparsable_slot_keeps_default_bindings() {
    let file = write_settings(r#"{ "keys": { "quit": ["ctrl+"], "next_focus": [] } }"#);
    let keymap = Settings::load_from(file.path()).keymap();
    assert_eq!(keymap, Keymap::default());
}

#[test]
fn zero_tick_is_clamped() {
    let settings = Settings {
        loading_tick_ms: 0,
        ..Settings::default()
    };
    assert_eq!(settings.loading_tick(), Duration::from_millis(1));
}

#[test]
fn parses_modifiers_and_named_keys() {
    assert_eq!(parse_keybinding("ctrl+c"), Some(KeyEvent::ctrl('c')));
    assert_eq!(parse_keybinding(" Esc "), Some(KeyEvent::plain(KeyCode::Esc)));
    assert_eq!(
        parse_keybinding("shift+tab"),
        Some(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT))
    );
    assert_eq!(
        parse_keybinding("alt+space"),
        Some(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::ALT))
    );
    assert_eq!(
        parse_keybinding("Q"),
        Some(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT))
    );
    assert_eq!(parse_keybinding("f"), Some(KeyEvent::plain(KeyCode::Char('f'))));
    assert_eq!(parse_keybinding("f12"), Some(KeyEvent::plain(KeyCode::F(12))));
}

#[test]
fn rejects_malformed_bindings() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl"), None);
    assert_eq!(parse_keybinding("ctrl+ab"), None);
    assert_eq!(parse_keybinding("fx"), None);
}

#[test]
fn explicit_path_wins_over_cache_dir() {
    let explicit = PathBuf::from("/tmp/custom.json");
    let cache = PathBuf::from("/home/u/.cache");
    assert_eq!(
        resolve_settings_path(Some(explicit.clone()), Some(cache.clone())),
        Some(explicit)
    );
    assert_eq!(
        resolve_settings_path(Some(PathBuf::new()), Some(cache.clone())),
        Some(cache.join("cellui").join("settings.json"))
    );
    assert_eq!(resolve_settings_path(None, None), None);
}

#[test]
fn defaults_serialize_to_a_loadable_file() {
    let json = serde_json::to_string_pretty(&Settings::default()).expect("serialize");
    assert!(json.contains("\"top_left\""));
    let file = write_settings(&json);
    assert_eq!(Settings::load_from(file.path()), Settings::default());
}
