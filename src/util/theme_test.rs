use super::*;

#[test]
fn toggling_flips_between_light_and_dark() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn only_dark_reports_dark() {
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

#[test]
fn stored_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(theme.stored_value()), Some(theme));
    }
    assert_eq!(Theme::from_stored("solarized"), None);
}

#[test]
fn preference_defaults_to_light_without_a_browser() {
    assert_eq!(load_preference(), Theme::Light);
}
