//! Integration tests for preference persistence.
//!
//! The dark-mode key is shared process state, so every assertion that
//! touches it lives in one test function.

use mannmitra::controller::ChatController;
use mannmitra::prefs;
use mannmitra::types::ThemeMode;

#[test]
fn test_preference_set_and_get() {
    let key = "test_pref_round_trip";

    prefs::preference_set(key, "value-1").expect("failed to set preference");
    assert_eq!(prefs::preference_get(key), Some("value-1".to_string()));

    prefs::preference_set(key, "value-2").expect("failed to overwrite preference");
    assert_eq!(prefs::preference_get(key), Some("value-2".to_string()));

    prefs::preference_delete(key).expect("failed to delete preference");
    assert_eq!(prefs::preference_get(key), None);
}

#[test]
fn test_preference_get_nonexistent() {
    assert_eq!(prefs::preference_get("test_pref_never_written"), None);
}

#[test]
fn dark_mode_defaults_toggles_and_persists() {
    // Absent value defaults to light mode.
    prefs::preference_delete("dark_mode").expect("failed to reset dark mode");
    assert!(!prefs::load_dark_mode());

    // Malformed value also defaults to light mode.
    prefs::preference_set("dark_mode", "maybe").expect("failed to seed dark mode");
    assert!(!prefs::load_dark_mode());

    // Stored value is honored at startup.
    prefs::store_dark_mode(true);
    assert!(prefs::load_dark_mode());
    let controller = ChatController::from_prefs();
    assert!(controller.dark_mode());
    assert_eq!(controller.theme_mode(), ThemeMode::Dark);

    // Each toggle is read-after-write visible, and two toggles return
    // the preference to its origin.
    let mut controller = controller;
    assert_eq!(controller.toggle_dark_mode(), ThemeMode::Light);
    assert!(!prefs::load_dark_mode());
    assert_eq!(controller.toggle_dark_mode(), ThemeMode::Dark);
    assert!(prefs::load_dark_mode());

    // Cleanup
    prefs::preference_delete("dark_mode").expect("failed to clean up");
}
