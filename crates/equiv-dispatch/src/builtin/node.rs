//! Document nodes.

use equiv_core::value::Node;
use equiv_core::Object;

use crate::registry::EqualityRegistry;
use crate::strategy::{downcast_pair, EqualityStrategy};

/// Compares document nodes structurally.
///
/// Two nodes are equal when kind, name, namespace, value and attributes
/// match and their children are equal in order.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeStrategy;

impl NodeStrategy {
    pub fn nodes_equal(a: &Node, b: &Node) -> bool {
        std::ptr::eq(a, b)
            || (a.kind() == b.kind()
                && a.name() == b.name()
                && a.namespace() == b.namespace()
                && a.value() == b.value()
                && a.attributes() == b.attributes()
                && a.children().len() == b.children().len()
                && a
                    .children()
                    .iter()
                    .zip(b.children())
                    .all(|(x, y)| Self::nodes_equal(x, y)))
    }
}

impl EqualityStrategy for NodeStrategy {
    fn name(&self) -> &str {
        "node-structure"
    }

    fn equals(&self, _registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool {
        match downcast_pair::<Node>(a, b) {
            Some((x, y)) => Self::nodes_equal(x, y),
            None => a.native_equals(b),
        }
    }
}
