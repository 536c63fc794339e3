use super::*;
use crate::util::storage::{MemoryStore, StorageError};

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read { key: key.to_owned() })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.to_owned() })
    }
}

// =============================================================
// resolve_initial_theme
// =============================================================

#[test]
fn resolve_initial_theme_precedence_table() {
    let cases = [
        (Some(ThemeMode::Dark), true, ThemeMode::Dark),
        (Some(ThemeMode::Dark), false, ThemeMode::Dark),
        (Some(ThemeMode::Light), true, ThemeMode::Light),
        (Some(ThemeMode::Light), false, ThemeMode::Light),
        (None, true, ThemeMode::Dark),
        (None, false, ThemeMode::Light),
    ];
    for (stored, prefers_dark, expected) in cases {
        let resolved = resolve_initial_theme(|| stored, || prefers_dark);
        assert_eq!(resolved, expected, "stored={stored:?} prefers_dark={prefers_dark}");
    }
}

#[test]
fn resolve_initial_theme_skips_os_query_when_stored() {
    let resolved = resolve_initial_theme(
        || Some(ThemeMode::Light),
        || panic!("OS query should not run when a preference is stored"),
    );
    assert_eq!(resolved, ThemeMode::Light);
}

#[test]
fn malformed_stored_value_falls_through_to_os_preference() {
    let store = MemoryStore::with_entry(STORAGE_KEY, "solarized");
    assert_eq!(read_stored_theme(&store), None);
    assert_eq!(
        resolve_initial_theme(|| read_stored_theme(&store), || true),
        ThemeMode::Dark
    );
}

#[test]
fn unreadable_storage_is_treated_as_absent() {
    assert_eq!(read_stored_theme(&FailingStore), None);
    assert_eq!(
        resolve_initial_theme(|| read_stored_theme(&FailingStore), || false),
        ThemeMode::Light
    );
}

#[test]
fn read_stored_theme_parses_valid_values() {
    let store = MemoryStore::with_entry(STORAGE_KEY, "dark");
    assert_eq!(read_stored_theme(&store), Some(ThemeMode::Dark));
    let store = MemoryStore::with_entry(STORAGE_KEY, "light");
    assert_eq!(read_stored_theme(&store), Some(ThemeMode::Light));
}

#[test]
fn stored_values_are_case_sensitive() {
    let store = MemoryStore::with_entry(STORAGE_KEY, "Dark");
    assert_eq!(read_stored_theme(&store), None);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_mode() {
    let store = MemoryStore::new();
    assert_eq!(toggle(ThemeMode::Light, &store), ThemeMode::Dark);
    assert_eq!(toggle(ThemeMode::Dark, &store), ThemeMode::Light);
}

#[test]
fn toggle_twice_returns_original_mode() {
    let store = MemoryStore::new();
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(toggle(toggle(mode, &store), &store), mode);
    }
}

#[test]
fn toggle_persists_new_mode() {
    let store = MemoryStore::with_entry(STORAGE_KEY, "light");
    let next = toggle(ThemeMode::Light, &store);
    assert_eq!(store.get(STORAGE_KEY), Ok(Some("dark".to_owned())));
    assert_eq!(read_stored_theme(&store), Some(next));
}

#[test]
fn toggle_still_flips_when_write_fails() {
    assert_eq!(toggle(ThemeMode::Light, &FailingStore), ThemeMode::Dark);
    assert_eq!(toggle(ThemeMode::Dark, &FailingStore), ThemeMode::Light);
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_default_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

#[test]
fn theme_mode_display_matches_storage_value() {
    assert_eq!(ThemeMode::Dark.to_string(), "dark");
    assert_eq!(ThemeMode::Light.to_string(), "light");
}

#[test]
fn theme_mode_parse_rejects_unknown_values() {
    let err = "auto".parse::<ThemeMode>().unwrap_err();
    assert_eq!(err, ThemeParseError("auto".to_owned()));
}

#[test]
fn theme_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(mode, ThemeMode::Light);
}

// =============================================================
// Browser glue (non-hydrate builds)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_paths_default_to_light_outside_browser() {
    assert!(!system_prefers_dark());
    assert_eq!(initial_theme(), ThemeMode::Light);
    apply(ThemeMode::Dark);
}
