//! Mutable text buffers.

use equiv_core::value::StringBuilderValue;
use equiv_core::Object;

use crate::registry::EqualityRegistry;
use crate::strategy::{downcast_pair, EqualityStrategy};

/// Compares string builders by current content.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringBuilderStrategy;

impl EqualityStrategy for StringBuilderStrategy {
    fn name(&self) -> &str {
        "string-builder-content"
    }

    fn equals(&self, _registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool {
        match downcast_pair::<StringBuilderValue>(a, b) {
            Some((x, y)) => x.with_contents(|left| y.with_contents(|right| left == right)),
            None => a.native_equals(b),
        }
    }
}
