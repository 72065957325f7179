//! Error types for equiv

use thiserror::Error;

use crate::types::TypeKey;

/// Main error type for equiv operations
#[derive(Debug, Error)]
pub enum EquivError {
    /// A strategy was registered for the universal base type.
    #[error("Configuration error: cannot bind an equality strategy to the universal base type `{0}`")]
    UniversalBaseType(TypeKey),

    /// A strategy was registered for a type that already has one.
    #[error("Configuration error: type `{0}` already has a registered equality strategy")]
    DuplicateBinding(TypeKey),

    /// A registration module failed while being installed.
    #[error("Configuration error in module `{module}`: {source}")]
    Module {
        module: String,
        #[source]
        source: Box<EquivError>,
    },

    /// Invalid configuration content
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller broke an operation's precondition.
    #[error("Contract violation: {0}")]
    ContractViolation(String),
}

impl EquivError {
    /// Returns true for errors raised while wiring the registry at startup.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, EquivError::ContractViolation(_))
    }

    /// Wraps this error with the name of the module that produced it.
    pub fn in_module(self, module: impl Into<String>) -> Self {
        EquivError::Module {
            module: module.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for equiv operations
pub type Result<T> = std::result::Result<T, EquivError>;
