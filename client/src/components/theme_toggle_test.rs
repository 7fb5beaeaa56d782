use super::*;

#[test]
fn theme_toggle_icon_shows_opposite_mode() {
    assert_eq!(theme_toggle_icon(ThemeMode::Light), "☾");
    assert_eq!(theme_toggle_icon(ThemeMode::Dark), "☀");
}
