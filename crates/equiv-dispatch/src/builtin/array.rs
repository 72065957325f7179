//! Arrays.

use equiv_core::{ContainerView, Element, Object};

use crate::registry::EqualityRegistry;
use crate::strategy::EqualityStrategy;

/// Compares arrays element by element, in order.
///
/// Elements go back through the registry, so nested arrays and arrays of
/// containers compare structurally.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArrayStrategy;

impl ArrayStrategy {
    pub fn elements_equal(registry: &EqualityRegistry, a: &[Element], b: &[Element]) -> bool {
        a.len() == b.len()
            && a
                .iter()
                .zip(b)
                .all(|(x, y)| registry.elements_equal(x, y))
    }
}

impl EqualityStrategy for ArrayStrategy {
    fn name(&self) -> &str {
        "array-elements"
    }

    fn equals(&self, registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool {
        match (a.contents(), b.contents()) {
            (Some(ContainerView::Array(left)), Some(ContainerView::Array(right))) => {
                Self::elements_equal(registry, &left, &right)
            }
            _ => a.native_equals(b),
        }
    }
}
