use super::*;

#[test]
fn ui_state_defaults_to_light_theme() {
    assert_eq!(UiState::default().theme, Theme::Light);
}
