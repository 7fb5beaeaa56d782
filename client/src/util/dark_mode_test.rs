#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn attribute_for_uses_mode_name() {
    assert_eq!(attribute_for(ThemeMode::Light), ("data-theme", "light"));
    assert_eq!(attribute_for(ThemeMode::Dark), ("data-theme", "dark"));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemeMode::Light);
    apply(ThemeMode::Dark);
}
