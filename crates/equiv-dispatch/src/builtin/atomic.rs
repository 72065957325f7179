//! Atomic cells.

use equiv_core::value::{AtomicBoolValue, AtomicI32Value, AtomicI64Value};
use equiv_core::Object;

use crate::registry::EqualityRegistry;
use crate::strategy::{downcast_pair, EqualityStrategy};

/// Compares atomic cells by the values they hold at the time of comparison.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomicStrategy;

impl EqualityStrategy for AtomicStrategy {
    fn name(&self) -> &str {
        "atomic-value"
    }

    fn equals(&self, _registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool {
        if let Some((x, y)) = downcast_pair::<AtomicI32Value>(a, b) {
            return x.load() == y.load();
        }
        if let Some((x, y)) = downcast_pair::<AtomicI64Value>(a, b) {
            return x.load() == y.load();
        }
        if let Some((x, y)) = downcast_pair::<AtomicBoolValue>(a, b) {
            return x.load() == y.load();
        }
        a.native_equals(b)
    }
}
