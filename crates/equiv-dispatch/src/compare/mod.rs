//! Structural comparison of containers.
//!
//! Containers are compared by shape, not by concrete type: any two
//! sequences with pairwise equal elements are equal, whatever their list,
//! queue or cursor implementation. Sets compare by membership, maps by key
//! set and per-key values, and arrays position by position. Containers of
//! different shapes are never equal.
//!
//! Elements that are themselves containers are compared structurally;
//! everything else goes back through the registry.


use equiv_core::{same_object, ContainerView, Element, EquivError, Object, Result};
use tracing::debug;

use crate::builtin::ArrayStrategy;
use crate::registry::EqualityRegistry;

/// Compares containers by shape and contents.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainerComparator;

impl ContainerComparator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the contents of `object` if it is a container.
    ///
    /// An object counts as a container when its runtime type has a container
    /// shape and it exposes contents of that shape.
    pub fn classify(object: &dyn Object) -> Option<ContainerView<'_>> {
        let shape = object.runtime_type().container_shape()?;
        let view = object.contents()?;
        if view.shape() != shape {
            debug!(
                event = "container_shape_mismatch",
                type_name = object.runtime_type().name(),
                expected = ?shape,
                actual = ?view.shape(),
            );
            return None;
        }
        Some(view)
    }

    pub fn is_container(object: &dyn Object) -> bool {
        Self::classify(object).is_some()
    }

    /// Compares two containers.
    ///
    /// # Errors
    ///
    /// Returns [`EquivError::ContractViolation`] if either value is not a
    /// container.
    pub fn equals(
        &self,
        registry: &EqualityRegistry,
        a: &dyn Object,
        b: &dyn Object,
    ) -> Result<bool> {
        let left = Self::classify(a).ok_or_else(|| not_a_container(a))?;
        let right = Self::classify(b).ok_or_else(|| not_a_container(b))?;
        if same_object(a, b) {
            return Ok(true);
        }
        Ok(self.compare(registry, &left, &right))
    }

    pub(crate) fn compare(
        &self,
        registry: &EqualityRegistry,
        a: &ContainerView<'_>,
        b: &ContainerView<'_>,
    ) -> bool {
        if a.shape() != b.shape() || a.len() != b.len() {
            return false;
        }
        match (a, b) {
            (ContainerView::Sequence(left), ContainerView::Sequence(right)) => left
                .iter()
                .zip(right.iter())
                .all(|(x, y)| self.elements_equal(registry, x, y)),
            (ContainerView::UnorderedSet(left), ContainerView::UnorderedSet(right)) => {
                // members may be structurally equal to each other, so check both ways
                self.covers(registry, left, right) && self.covers(registry, right, left)
            }
            (ContainerView::KeyedMap(left), ContainerView::KeyedMap(right)) => {
                self.maps_equal(registry, left, right)
            }
            (ContainerView::Array(left), ContainerView::Array(right)) => {
                ArrayStrategy::elements_equal(registry, left, right)
            }
            _ => false,
        }
    }

    /// Returns true if every member of `set` has an equal member in `other`.
    fn covers(&self, registry: &EqualityRegistry, set: &[Element], other: &[Element]) -> bool {
        set.iter().all(|item| {
            other
                .iter()
                .any(|candidate| self.elements_equal(registry, item, candidate))
        })
    }

    fn maps_equal(
        &self,
        registry: &EqualityRegistry,
        left: &[(Element, Element)],
        right: &[(Element, Element)],
    ) -> bool {
        left.iter().all(|(key, value)| {
            let Some((_, other)) = right
                .iter()
                .find(|(candidate, _)| self.elements_equal(registry, key, candidate))
            else {
                return false;
            };
            match value {
                None => other.is_none(),
                Some(_) => self.elements_equal(registry, value, other),
            }
        })
    }

    /// Compares two container elements, recursing into nested containers.
    pub fn elements_equal(&self, registry: &EqualityRegistry, a: &Element, b: &Element) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                let (a, b) = (a.as_ref(), b.as_ref());
                if same_object(a, b) {
                    return true;
                }
                match (Self::classify(a), Self::classify(b)) {
                    (Some(left), Some(right)) => self.compare(registry, &left, &right),
                    _ => registry.objects_equal(a, b),
                }
            }
            _ => false,
        }
    }
}

fn not_a_container(object: &dyn Object) -> EquivError {
    EquivError::ContractViolation(format!(
        "values of type `{}` are not containers",
        object.runtime_type().name()
    ))
}
