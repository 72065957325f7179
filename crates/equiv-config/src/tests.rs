//! Tests for registry configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        register_builtins = true
        disabled_builtins = ["path", "atomic"]
        signed_zero = "equal"

        [own_equality]
        "app.lru-cache" = true
        "app.bag" = false
    "#;

    let config = RegistryConfig::from_toml_str(toml).unwrap();
    assert!(config.register_builtins);
    assert_eq!(config.signed_zero, SignedZero::Equal);
    assert!(!config.is_enabled(BuiltinGroup::Path));
    assert!(!config.is_enabled(BuiltinGroup::Atomic));
    assert!(config.is_enabled(BuiltinGroup::Decimal));
    assert_eq!(config.own_equality.len(), 2);
    assert_eq!(config.own_equality.get("app.bag"), Some(&false));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        register_builtins: false
        signed_zero: distinct
        own_equality:
          app.lru-cache: true
    "#;

    let config = RegistryConfig::from_yaml_str(yaml).unwrap();
    assert!(!config.register_builtins);
    assert!(!config.is_enabled(BuiltinGroup::Float));
    assert_eq!(config.signed_zero, SignedZero::Distinct);
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = RegistryConfig::from_toml_str("").unwrap();

    assert!(config.register_builtins);
    assert!(config.disabled_builtins.is_empty());
    assert_eq!(config.signed_zero, SignedZero::Distinct);
    for group in BuiltinGroup::ALL {
        assert!(config.is_enabled(group));
    }
}

#[test]
fn test_unknown_group_is_rejected() {
    let result = RegistryConfig::from_toml_str(r#"disabled_builtins = ["everything"]"#);
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_blank_override_name_is_invalid() {
    let result = RegistryConfig::from_yaml_str("own_equality:\n  \" \": true\n");
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = RegistryConfig::load("/nonexistent/equiv.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_builder() {
    let config = RegistryConfig::new()
        .without_builtin(BuiltinGroup::Locator)
        .without_builtin(BuiltinGroup::Locator)
        .with_signed_zero(SignedZero::Equal)
        .with_own_equality("app.lru-cache", true);

    assert_eq!(config.disabled_builtins, vec![BuiltinGroup::Locator]);
    assert_eq!(config.signed_zero, SignedZero::Equal);
    assert_eq!(config.own_equality.get("app.lru-cache"), Some(&true));
}

#[test]
fn test_empty_config_disables_every_group() {
    let config = RegistryConfig::empty();
    assert!(BuiltinGroup::ALL.iter().all(|g| !config.is_enabled(*g)));
}
