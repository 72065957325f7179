//! Configuration system for equiv.
//!
//! Load registry configuration from TOML or YAML to choose which built-in
//! strategies are registered, how floats treat signed zero, and which types
//! are forced to (or away from) their own equality.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use equiv_config::{BuiltinGroup, RegistryConfig, SignedZero};
//!
//! let config = RegistryConfig::from_toml_str(r#"
//!     signed_zero = "equal"
//!     disabled_builtins = ["locator"]
//!
//!     [own_equality]
//!     "app.lru-cache" = true
//! "#).unwrap();
//!
//! assert_eq!(config.signed_zero, SignedZero::Equal);
//! assert!(!config.is_enabled(BuiltinGroup::Locator));
//! assert_eq!(config.own_equality.get("app.lru-cache"), Some(&true));
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use equiv_config::RegistryConfig;
//!
//! let config = RegistryConfig::load("equiv.toml").unwrap_or_default();
//! assert!(config.register_builtins);
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RegistryConfig {
    /// Whether the built-in strategies are registered at construction.
    #[serde(default = "default_true")]
    pub register_builtins: bool,

    /// Built-in strategy groups to leave out.
    #[serde(default)]
    pub disabled_builtins: Vec<BuiltinGroup>,

    /// How the float strategy treats `+0.0` and `-0.0`.
    #[serde(default)]
    pub signed_zero: SignedZero,

    /// Per-type overrides of "declares its own equality", keyed by type name.
    #[serde(default)]
    pub own_equality: HashMap<String, bool>,
}

fn default_true() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            register_builtins: true,
            disabled_builtins: Vec::new(),
            signed_zero: SignedZero::default(),
            own_equality: HashMap::new(),
        }
    }
}

impl RegistryConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that registers no built-in strategies.
    pub fn empty() -> Self {
        Self {
            register_builtins: false,
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = self.own_equality.keys().find(|name| name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "own_equality override has an empty type name: {name:?}"
            )));
        }
        Ok(())
    }

    /// Leaves a built-in group out.
    pub fn without_builtin(mut self, group: BuiltinGroup) -> Self {
        if !self.disabled_builtins.contains(&group) {
            self.disabled_builtins.push(group);
        }
        self
    }

    /// Sets the signed zero policy.
    pub fn with_signed_zero(mut self, policy: SignedZero) -> Self {
        self.signed_zero = policy;
        self
    }

    /// Forces whether a type counts as declaring its own equality.
    pub fn with_own_equality(mut self, type_name: impl Into<String>, declares: bool) -> Self {
        self.own_equality.insert(type_name.into(), declares);
        self
    }

    /// Returns true if the built-in group is registered at construction.
    pub fn is_enabled(&self, group: BuiltinGroup) -> bool {
        self.register_builtins && !self.disabled_builtins.contains(&group)
    }
}

/// Groups of built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinGroup {
    /// Decimals compared by value.
    Decimal,

    /// Floats compared by bit pattern.
    Float,

    /// Text buffers compared by content.
    Text,

    /// Document nodes compared structurally.
    Node,

    /// Locators compared by external form.
    Locator,

    /// Atomics compared by current value.
    Atomic,

    /// Paths compared by canonical form.
    Path,

    /// Lists, queues, sets, maps, cursors and enumerations compared structurally.
    Containers,

    /// Primitive and object arrays compared element-wise.
    Arrays,
}

impl BuiltinGroup {
    /// All groups, in registration order.
    pub const ALL: [BuiltinGroup; 9] = [
        BuiltinGroup::Decimal,
        BuiltinGroup::Float,
        BuiltinGroup::Text,
        BuiltinGroup::Node,
        BuiltinGroup::Locator,
        BuiltinGroup::Atomic,
        BuiltinGroup::Path,
        BuiltinGroup::Containers,
        BuiltinGroup::Arrays,
    ];
}

/// Signed zero policy for float equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignedZero {
    /// `+0.0` and `-0.0` are different values.
    #[default]
    Distinct,

    /// `+0.0` and `-0.0` are the same value.
    Equal,
}
