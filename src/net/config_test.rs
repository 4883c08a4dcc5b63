use super::*;

#[test]
fn build_env_config_has_a_base_url() {
    let config = ApiConfig::from_build_env();
    assert!(!config.base_url.is_empty());
    assert!(config.base_url.starts_with("http"));
}

#[test]
fn default_matches_build_env() {
    assert_eq!(ApiConfig::default(), ApiConfig::from_build_env());
}
