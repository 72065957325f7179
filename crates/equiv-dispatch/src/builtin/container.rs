//! Collection interfaces.

use equiv_core::Object;

use crate::compare::ContainerComparator;
use crate::registry::EqualityRegistry;
use crate::strategy::EqualityStrategy;

/// Compares same-type containers with the registry's structural comparator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainerStrategy;

impl EqualityStrategy for ContainerStrategy {
    fn name(&self) -> &str {
        "container-structure"
    }

    fn equals(&self, registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool {
        match (
            ContainerComparator::classify(a),
            ContainerComparator::classify(b),
        ) {
            (Some(left), Some(right)) => registry.comparator().compare(registry, &left, &right),
            // Implements a collection interface without exposing contents.
            _ => a.native_equals(b),
        }
    }
}
