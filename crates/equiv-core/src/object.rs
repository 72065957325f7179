//! The object model equality is dispatched over.
//!
//! Every value taking part in equality dispatch implements [`Object`]: it
//! reports its runtime type, its own (native) equality, and, for containers,
//! a [`ContainerView`] of its contents.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::types::TypeRef;

/// Shared handle to an object.
pub type ObjectRef = Arc<dyn Object>;

/// A possibly absent object, as stored in containers and passed to `are_equal`.
pub type Element = Option<ObjectRef>;

/// A value with a runtime type.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use equiv_core::{Object, TypeDescriptor, TypeRef};
///
/// #[derive(Debug)]
/// struct Point {
///     ty: TypeRef,
///     x: i32,
///     y: i32,
/// }
///
/// impl Object for Point {
///     fn runtime_type(&self) -> &TypeRef {
///         &self.ty
///     }
///
///     fn native_equals(&self, other: &dyn Object) -> bool {
///         other
///             .downcast_ref::<Point>()
///             .is_some_and(|o| o.x == self.x && o.y == self.y)
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let ty = TypeDescriptor::class("point").declares_equality().build();
/// let a = Point { ty: ty.clone(), x: 1, y: 2 };
/// let b = Point { ty, x: 1, y: 2 };
/// assert!(a.native_equals(&b));
/// ```
pub trait Object: Any + Send + Sync + fmt::Debug {
    /// Returns the runtime type of this object.
    fn runtime_type(&self) -> &TypeRef;

    /// The type's own equality operation. Defaults to identity.
    ///
    /// Only called with `other` of the same runtime type.
    fn native_equals(&self, other: &dyn Object) -> bool {
        std::ptr::addr_eq(self as *const Self, other as *const dyn Object)
    }

    /// Returns the contents of a container object.
    ///
    /// Must return a view whose shape matches the runtime type's
    /// [`container_shape`](crate::TypeDescriptor::container_shape).
    fn contents(&self) -> Option<ContainerView<'_>> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

impl dyn Object {
    /// Downcasts to a concrete object type.
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns true if the object's runtime type is the given type.
    pub fn is_instance_of(&self, ty: &TypeRef) -> bool {
        self.runtime_type().key() == ty.key()
    }
}

/// Returns true if `a` and `b` are the same object.
#[inline]
pub fn same_object(a: &dyn Object, b: &dyn Object) -> bool {
    std::ptr::addr_eq(a as *const dyn Object, b as *const dyn Object)
}

/// Returns true if two elements are both absent or are the same object.
#[inline]
pub fn same_element(a: &Element, b: &Element) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => same_object(a.as_ref(), b.as_ref()),
        _ => false,
    }
}

/// Classification of container values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerShape {
    /// Ordered, positionally compared (lists, queues, cursors, enumerations).
    Sequence,
    /// Membership compared.
    UnorderedSet,
    /// Key to value.
    KeyedMap,
    /// Fixed size, positionally compared, never substitutable for a sequence.
    Array,
}

/// The contents of a container, borrowed when the container allows it.
#[derive(Debug, Clone)]
pub enum ContainerView<'a> {
    Sequence(Cow<'a, [Element]>),
    UnorderedSet(Cow<'a, [Element]>),
    KeyedMap(Cow<'a, [(Element, Element)]>),
    Array(Cow<'a, [Element]>),
}

impl ContainerView<'_> {
    pub fn shape(&self) -> ContainerShape {
        match self {
            ContainerView::Sequence(_) => ContainerShape::Sequence,
            ContainerView::UnorderedSet(_) => ContainerShape::UnorderedSet,
            ContainerView::KeyedMap(_) => ContainerShape::KeyedMap,
            ContainerView::Array(_) => ContainerShape::Array,
        }
    }

    /// Returns the number of elements (entries, for maps).
    pub fn len(&self) -> usize {
        match self {
            ContainerView::Sequence(items)
            | ContainerView::UnorderedSet(items)
            | ContainerView::Array(items) => items.len(),
            ContainerView::KeyedMap(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
