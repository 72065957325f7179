//! Built-in equality strategies.
//!
//! | Group        | Bound to                                    | Compares by         |
//! |--------------|---------------------------------------------|---------------------|
//! | `decimal`    | `decimal`                                   | numeric value       |
//! | `float`      | `f32`, `f64`                                | bit pattern         |
//! | `text`       | `string-builder`                            | current content     |
//! | `node`       | the `node` interface                        | structure           |
//! | `locator`    | `url`                                       | external form       |
//! | `atomic`     | `atomic-bool`, `atomic-i32`, `atomic-i64`   | current value       |
//! | `path`       | `path`                                      | canonical path      |
//! | `containers` | the list, queue, set, map, cursor and enumeration interfaces | container structure |
//! | `arrays`     | the primitive and object array types        | elements in order   |

mod array;
mod atomic;
mod container;
mod node;
mod numeric;
mod resource;
mod text;

#[cfg(test)]
mod tests;

pub use array::ArrayStrategy;
pub use atomic::AtomicStrategy;
pub use container::ContainerStrategy;
pub use node::NodeStrategy;
pub use numeric::{DecimalStrategy, FloatStrategy};
pub use resource::{LocatorStrategy, PathStrategy};
pub use text::StringBuilderStrategy;

use std::sync::Arc;

use equiv_config::{BuiltinGroup, RegistryConfig};
use equiv_core::{well_known, Result, TypeRef};
use tracing::debug;

use crate::module::RegistrationModule;
use crate::registry::EqualityRegistry;
use crate::strategy::{EqualityStrategy, StrategyRef};

/// Returns the bindings a built-in group contributes.
pub fn group_bindings(
    group: BuiltinGroup,
    config: &RegistryConfig,
) -> Vec<(&'static TypeRef, StrategyRef)> {
    match group {
        BuiltinGroup::Decimal => single(well_known::decimal(), DecimalStrategy),
        BuiltinGroup::Float => {
            let floats: StrategyRef = Arc::new(FloatStrategy::new(config.signed_zero));
            vec![
                (well_known::float32(), floats.clone()),
                (well_known::float64(), floats),
            ]
        }
        BuiltinGroup::Text => single(well_known::string_builder(), StringBuilderStrategy),
        BuiltinGroup::Node => single(well_known::node(), NodeStrategy),
        BuiltinGroup::Locator => single(well_known::url(), LocatorStrategy),
        BuiltinGroup::Atomic => {
            let atomics: StrategyRef = Arc::new(AtomicStrategy);
            vec![
                (well_known::atomic_bool(), atomics.clone()),
                (well_known::atomic_i32(), atomics.clone()),
                (well_known::atomic_i64(), atomics),
            ]
        }
        BuiltinGroup::Path => single(well_known::path(), PathStrategy),
        BuiltinGroup::Containers => {
            let containers: StrategyRef = Arc::new(ContainerStrategy);
            [
                well_known::list(),
                well_known::queue(),
                well_known::set(),
                well_known::map(),
                well_known::cursor(),
                well_known::enumeration(),
            ]
            .into_iter()
            .map(|ty| (ty, containers.clone()))
            .collect()
        }
        BuiltinGroup::Arrays => {
            let arrays: StrategyRef = Arc::new(ArrayStrategy);
            well_known::primitive_array_types()
                .into_iter()
                .map(|ty| (ty, arrays.clone()))
                .collect()
        }
    }
}

fn single(
    ty: &'static TypeRef,
    strategy: impl EqualityStrategy + 'static,
) -> Vec<(&'static TypeRef, StrategyRef)> {
    let strategy: StrategyRef = Arc::new(strategy);
    vec![(ty, strategy)]
}

/// Registers the built-in groups enabled by a configuration.
#[derive(Debug, Clone, Default)]
pub struct BuiltinModule {
    config: RegistryConfig,
}

impl BuiltinModule {
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }
}

impl RegistrationModule for BuiltinModule {
    fn name(&self) -> &str {
        "builtin"
    }

    fn register(&self, registry: &EqualityRegistry) -> Result<()> {
        for group in BuiltinGroup::ALL {
            if !self.config.is_enabled(group) {
                debug!(event = "builtin_group_skipped", group = ?group);
                continue;
            }
            for (ty, strategy) in group_bindings(group, &self.config) {
                registry.register_strategy(ty, strategy)?;
            }
        }
        Ok(())
    }
}
