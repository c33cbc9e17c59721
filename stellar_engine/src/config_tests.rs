use super::*;

#[test]
fn test_default_config() {
    let config = EngineConfig::default();
    assert_eq!(config.app_name, "Stellar Application");
    assert_eq!(config.content_root, PathBuf::from("content"));
    assert_eq!(config.clear_color, Color::CORNFLOWER_BLUE);
    assert!(config.register_default_passes);
    assert_eq!(config.log_level, None);
}

#[test]
fn test_builder_methods() {
    let config = EngineConfig::default()
        .with_app_name("Sandbox")
        .with_content_root("/tmp/assets")
        .with_clear_color(Color::BLACK)
        .with_log_level(LogSeverity::Warn)
        .without_default_passes();

    assert_eq!(config.app_name, "Sandbox");
    assert_eq!(config.content_root, PathBuf::from("/tmp/assets"));
    assert_eq!(config.clear_color, Color::BLACK);
    assert_eq!(config.log_level, Some(LogSeverity::Warn));
    assert!(!config.register_default_passes);
}
