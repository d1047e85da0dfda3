use super::*;

#[test]
fn test_defaults() {
    let config = RulesConfig::default();
    assert_eq!(config.default_promotion, Promotion::Queen);
    assert!(config.record_history);
    assert_eq!(RulesConfig::from_toml_str("").unwrap(), config);
}

#[test]
fn test_parse_toml() {
    let config = RulesConfig::from_toml_str(
        r#"
        default_promotion = "knight"
        record_history = false
        "#,
    )
    .unwrap();
    assert_eq!(config.default_promotion, Promotion::Knight);
    assert!(!config.record_history);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = RulesConfig::from_toml_str("default_promotion = \"rook\"").unwrap();
    assert_eq!(config.default_promotion, Promotion::Rook);
    assert!(config.record_history);
}

#[test]
fn test_bad_promotion_rejected() {
    let err = RulesConfig::from_toml_str("default_promotion = \"king\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_missing_file() {
    let err = RulesConfig::load(Path::new("/definitely/not/here/rules.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_file() {
    let path = std::env::temp_dir().join(format!("chess_rules_{}.toml", std::process::id()));
    std::fs::write(&path, "record_history = false\n").unwrap();
    let config = RulesConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(!config.record_history);
    assert_eq!(config.default_promotion, Promotion::Queen);
}
