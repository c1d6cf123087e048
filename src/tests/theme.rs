use crate::tests::common;
use crate::utils::{resolve_initial, ThemeMode};

#[test]
fn toggle_flips_between_modes() {
    assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
}

#[test]
fn toggle_is_an_involution() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(mode.toggle().toggle(), mode);
    }
}

#[test]
fn stored_preference_wins_over_media_query() {
    assert_eq!(resolve_initial(Some("light"), Some(true)), ThemeMode::Light);
    assert_eq!(resolve_initial(Some("dark"), Some(false)), ThemeMode::Dark);
}

#[test]
fn media_query_decides_when_nothing_is_stored() {
    assert_eq!(resolve_initial(None, Some(true)), ThemeMode::Dark);
    assert_eq!(resolve_initial(None, Some(false)), ThemeMode::Light);
}

#[test]
fn defaults_to_dark_when_media_query_is_unavailable() {
    assert_eq!(resolve_initial(None, None), ThemeMode::Dark);
}

#[test]
fn unrecognized_stored_value_is_ignored() {
    assert_eq!(resolve_initial(Some("solarized"), Some(false)), ThemeMode::Light);
    assert_eq!(resolve_initial(Some(""), None), ThemeMode::Dark);
}

#[test]
fn wire_strings_round_trip() {
    assert_eq!(ThemeMode::from_str("light"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::from_str("dark"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::from_str("Dark"), None);
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(ThemeMode::from_str(mode.as_str()), Some(mode));
    }
}

#[test]
fn color_tokens_are_total() {
    common::setup();
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        let tokens = mode.tokens();
        assert!(!tokens.background.is_empty());
        assert!(!tokens.foreground.is_empty());
        assert!(!tokens.accent.is_empty());
        assert!(!tokens.icon.is_empty());
        assert!(!tokens.icon_hover.is_empty());
    }
    assert_ne!(
        ThemeMode::Light.tokens().background,
        ThemeMode::Dark.tokens().background
    );
}

#[test]
fn first_visit_on_a_dark_system() {
    let initial = resolve_initial(None, Some(true));
    assert_eq!(initial, ThemeMode::Dark);

    // One toggle later the preference that gets persisted is "light".
    let toggled = initial.toggle();
    assert_eq!(toggled, ThemeMode::Light);
    assert_eq!(toggled.as_str(), "light");
}

#[test]
fn returning_visit_overrides_a_dark_system() {
    assert_eq!(resolve_initial(Some("light"), Some(true)), ThemeMode::Light);
}
