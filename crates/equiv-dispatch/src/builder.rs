//! Registry construction.

use equiv_config::RegistryConfig;
use equiv_core::Result;
use tracing::info;

use crate::builtin::BuiltinModule;
use crate::module::RegistrationModule;
use crate::registry::EqualityRegistry;

/// Builds an [`EqualityRegistry`] from a configuration and a list of modules.
///
/// Own-equality overrides are applied first, then the built-in groups the
/// configuration enables, then each module in the order it was added.
///
/// # Examples
///
/// ```
/// use equiv_config::{BuiltinGroup, RegistryConfig};
/// use equiv_core::well_known;
/// use equiv_dispatch::{module_fn, strategy_fn, RegistryBuilder};
///
/// let registry = RegistryBuilder::new()
///     .with_config(RegistryConfig::new().without_builtin(BuiltinGroup::Path))
///     .with_module(module_fn("paths", |registry| {
///         registry.register_strategy(well_known::path(), strategy_fn("never", |_, _, _| false))
///     }))
///     .build()
///     .unwrap();
///
/// assert!(registry.is_registered(well_known::path()));
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    modules: Vec<Box<dyn RegistrationModule>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a module, installed after the built-ins.
    pub fn with_module(mut self, module: impl RegistrationModule + 'static) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    /// Builds the registry.
    ///
    /// # Errors
    ///
    /// Returns the first registration error, wrapped with the name of the
    /// module that raised it.
    pub fn build(self) -> Result<EqualityRegistry> {
        let registry = EqualityRegistry::new();
        for (type_name, declares) in &self.config.own_equality {
            registry.declare_own_equality(type_name.as_str(), *declares);
        }

        registry.install(&BuiltinModule::new(self.config))?;
        for module in &self.modules {
            registry.install(module.as_ref())?;
        }

        info!(
            event = "registry_ready",
            registered = registry.len(),
            modules = self.modules.len(),
        );
        Ok(registry)
    }
}
