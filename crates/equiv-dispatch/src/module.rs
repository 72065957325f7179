//! Registration modules.
//!
//! A module bundles strategy registrations so an application can wire its
//! own types into a registry in one step, after the built-ins.

use std::fmt;

use equiv_core::Result;

use crate::registry::EqualityRegistry;

/// A named unit of strategy registrations.
pub trait RegistrationModule: Send + Sync {
    /// Name reported in logs and wrapped into registration errors.
    fn name(&self) -> &str;

    fn register(&self, registry: &EqualityRegistry) -> Result<()>;
}

/// A module backed by a closure.
pub struct FnModule<F> {
    name: String,
    f: F,
}

impl<F> RegistrationModule for FnModule<F>
where
    F: Fn(&EqualityRegistry) -> Result<()> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&self, registry: &EqualityRegistry) -> Result<()> {
        (self.f)(registry)
    }
}

impl<F> fmt::Debug for FnModule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModule").field("name", &self.name).finish()
    }
}

/// Wraps a closure as a registration module.
///
/// # Examples
///
/// ```
/// use equiv_core::well_known;
/// use equiv_dispatch::{module_fn, strategy_fn, EqualityRegistry};
///
/// let module = module_fn("always-equal-strings", |registry| {
///     registry.register_strategy(well_known::string(), strategy_fn("always", |_, _, _| true))
/// });
///
/// let registry = EqualityRegistry::new();
/// registry.install(&module).unwrap();
/// assert!(registry.is_registered(well_known::string()));
/// ```
pub fn module_fn<F>(name: impl Into<String>, f: F) -> FnModule<F>
where
    F: Fn(&EqualityRegistry) -> Result<()> + Send + Sync,
{
    FnModule {
        name: name.into(),
        f,
    }
}
