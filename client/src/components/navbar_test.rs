use super::*;

#[test]
fn nav_class_switches_once_scrolled() {
    assert_eq!(nav_class(false), "navbar");
    assert_eq!(nav_class(true), "navbar navbar--scrolled");
}

#[test]
fn menu_overlay_class_follows_open_flag() {
    assert!(menu_overlay_class(true).ends_with("--open"));
    assert!(menu_overlay_class(false).ends_with("--closed"));
}

#[test]
fn menu_button_label_describes_next_action() {
    assert_eq!(menu_button_label(false), "Open Menu");
    assert_eq!(menu_button_label(true), "Close Menu");
}

#[test]
fn menu_button_glyph_differs_by_state() {
    assert_ne!(menu_button_glyph(false), menu_button_glyph(true));
}

#[test]
fn theme_glyph_offers_opposite_mode() {
    assert_eq!(theme_glyph(ThemeMode::Dark).0, "☀");
    assert_eq!(theme_glyph(ThemeMode::Light).0, "☾");
    assert!(theme_glyph(ThemeMode::Dark).1.contains("sun"));
    assert!(theme_glyph(ThemeMode::Light).1.contains("moon"));
}
