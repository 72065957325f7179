//! Container values.
//!
//! Containers have identity as their own equality and expose their contents
//! through [`Object::contents`]. Sets and maps collapse duplicates on
//! construction using the elements' own equality, the way hashed
//! collections do.

use std::any::Any;
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

use parking_lot::Mutex;

use crate::object::{same_element, ContainerShape, ContainerView, Element, Object, ObjectRef};
use crate::types::{well_known, TypeDescriptor, TypeRef};

// Equality used to collapse duplicates in sets and map keys.
fn natively_equal(a: &Element, b: &Element) -> bool {
    if same_element(a, b) {
        return true;
    }
    match (a, b) {
        (Some(x), Some(y)) => {
            x.runtime_type().key() == y.runtime_type().key() && x.native_equals(y.as_ref())
        }
        _ => false,
    }
}

fn assert_shape(ty: &TypeRef, shape: ContainerShape) {
    debug_assert_eq!(
        ty.container_shape(),
        Some(shape),
        "type `{}` is not a {:?} container",
        ty.name(),
        shape
    );
}

// ============================================================================
// Sequences
// ============================================================================

/// An ordered list or queue.
#[derive(Debug, Clone)]
pub struct ListObject {
    ty: TypeRef,
    items: Vec<Element>,
}

impl ListObject {
    /// Creates a list of a custom sequence type.
    pub fn with_type(ty: &TypeRef, items: Vec<Element>) -> Self {
        assert_shape(ty, ContainerShape::Sequence);
        Self {
            ty: ty.clone(),
            items,
        }
    }

    pub fn vec_list(items: Vec<Element>) -> Self {
        Self::with_type(well_known::vec_list(), items)
    }

    pub fn linked_list(items: Vec<Element>) -> Self {
        Self::with_type(well_known::linked_list(), items)
    }

    pub fn deque(items: Vec<Element>) -> Self {
        Self::with_type(well_known::deque(), items)
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Object for ListObject {
    fn runtime_type(&self) -> &TypeRef {
        &self.ty
    }

    fn contents(&self) -> Option<ContainerView<'_>> {
        Some(ContainerView::Sequence(Cow::Borrowed(&self.items)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A one-shot cursor over a sequence of elements.
///
/// Its contents are the elements not yet consumed.
pub struct CursorObject {
    ty: TypeRef,
    remaining: Mutex<VecDeque<Element>>,
}

impl CursorObject {
    /// Creates a cursor of a custom cursor or enumeration type.
    pub fn with_type(ty: &TypeRef, items: Vec<Element>) -> Self {
        assert_shape(ty, ContainerShape::Sequence);
        Self {
            ty: ty.clone(),
            remaining: Mutex::new(items.into()),
        }
    }

    pub fn cursor(items: Vec<Element>) -> Self {
        Self::with_type(well_known::vec_cursor(), items)
    }

    pub fn enumeration(items: Vec<Element>) -> Self {
        Self::with_type(well_known::vec_enumeration(), items)
    }

    /// Consumes the next element. `None` when exhausted.
    pub fn next(&self) -> Option<Element> {
        self.remaining.lock().pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.lock().len()
    }
}

impl fmt::Debug for CursorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorObject")
            .field("ty", &self.ty.name())
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl Object for CursorObject {
    fn runtime_type(&self) -> &TypeRef {
        &self.ty
    }

    fn contents(&self) -> Option<ContainerView<'_>> {
        let snapshot: Vec<Element> = self.remaining.lock().iter().cloned().collect();
        Some(ContainerView::Sequence(Cow::Owned(snapshot)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Sets and maps
// ============================================================================

/// A set of distinct elements.
#[derive(Debug, Clone)]
pub struct SetObject {
    ty: TypeRef,
    items: Vec<Element>,
}

impl SetObject {
    /// Creates a set of a custom set type. Duplicates keep their first occurrence.
    pub fn with_type(ty: &TypeRef, items: impl IntoIterator<Item = Element>) -> Self {
        assert_shape(ty, ContainerShape::UnorderedSet);
        let mut distinct: Vec<Element> = Vec::new();
        for item in items {
            if !distinct.iter().any(|d| natively_equal(d, &item)) {
                distinct.push(item);
            }
        }
        Self {
            ty: ty.clone(),
            items: distinct,
        }
    }

    pub fn hash_set(items: impl IntoIterator<Item = Element>) -> Self {
        Self::with_type(well_known::hash_set(), items)
    }

    pub fn ordered_set(items: impl IntoIterator<Item = Element>) -> Self {
        Self::with_type(well_known::ordered_set(), items)
    }

    /// Native membership test, using the elements' own equality.
    pub fn contains(&self, item: &Element) -> bool {
        self.items.iter().any(|d| natively_equal(d, item))
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Object for SetObject {
    fn runtime_type(&self) -> &TypeRef {
        &self.ty
    }

    fn contents(&self) -> Option<ContainerView<'_>> {
        Some(ContainerView::UnorderedSet(Cow::Borrowed(&self.items)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A map from keys to possibly absent values.
#[derive(Debug, Clone)]
pub struct MapObject {
    ty: TypeRef,
    entries: Vec<(Element, Element)>,
}

impl MapObject {
    /// Creates a map of a custom map type. A repeated key replaces the
    /// earlier value in place.
    pub fn with_type(ty: &TypeRef, entries: impl IntoIterator<Item = (Element, Element)>) -> Self {
        assert_shape(ty, ContainerShape::KeyedMap);
        let mut distinct: Vec<(Element, Element)> = Vec::new();
        for (key, value) in entries {
            match distinct.iter_mut().find(|(k, _)| natively_equal(k, &key)) {
                Some(entry) => entry.1 = value,
                None => distinct.push((key, value)),
            }
        }
        Self {
            ty: ty.clone(),
            entries: distinct,
        }
    }

    pub fn hash_map(entries: impl IntoIterator<Item = (Element, Element)>) -> Self {
        Self::with_type(well_known::hash_map(), entries)
    }

    pub fn ordered_map(entries: impl IntoIterator<Item = (Element, Element)>) -> Self {
        Self::with_type(well_known::ordered_map(), entries)
    }

    /// Native lookup. `Some(None)` means the key is present with an absent value.
    pub fn get(&self, key: &Element) -> Option<&Element> {
        self.entries
            .iter()
            .find(|(k, _)| natively_equal(k, key))
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Element) -> bool {
        self.get(key).is_some()
    }

    pub fn entries(&self) -> &[(Element, Element)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Object for MapObject {
    fn runtime_type(&self) -> &TypeRef {
        &self.ty
    }

    fn contents(&self) -> Option<ContainerView<'_>> {
        Some(ContainerView::KeyedMap(Cow::Borrowed(&self.entries)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Arrays
// ============================================================================

/// A fixed-size array.
#[derive(Debug, Clone)]
pub struct ArrayObject {
    ty: TypeRef,
    items: Vec<Element>,
}

impl ArrayObject {
    /// Creates an array whose element type is `component`.
    pub fn new(component: &TypeRef, items: Vec<Element>) -> Self {
        let ty = well_known::primitive_array_types()
            .into_iter()
            .find(|t| t.component().is_some_and(|c| c.key() == component.key()))
            .cloned()
            .unwrap_or_else(|| TypeDescriptor::array_of(component));
        Self { ty, items }
    }

    pub fn of_bools(values: &[bool]) -> Self {
        Self::from_scalars(well_known::boolean(), values, super::boolean)
    }

    pub fn of_bytes(values: &[u8]) -> Self {
        Self::from_scalars(well_known::byte(), values, super::byte)
    }

    pub fn of_i32(values: &[i32]) -> Self {
        Self::from_scalars(well_known::int32(), values, super::int32)
    }

    pub fn of_i64(values: &[i64]) -> Self {
        Self::from_scalars(well_known::int64(), values, super::int64)
    }

    pub fn of_f32(values: &[f32]) -> Self {
        Self::from_scalars(well_known::float32(), values, super::float32)
    }

    pub fn of_f64(values: &[f64]) -> Self {
        Self::from_scalars(well_known::float64(), values, super::float64)
    }

    /// Creates an array of arbitrary objects (component type `object`).
    pub fn of_objects(items: Vec<Element>) -> Self {
        Self::new(well_known::object(), items)
    }

    fn from_scalars<T: Copy>(
        component: &TypeRef,
        values: &[T],
        make: impl Fn(T) -> ObjectRef,
    ) -> Self {
        Self::new(component, values.iter().map(|v| Some(make(*v))).collect())
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Object for ArrayObject {
    fn runtime_type(&self) -> &TypeRef {
        &self.ty
    }

    fn contents(&self) -> Option<ContainerView<'_>> {
        Some(ContainerView::Array(Cow::Borrowed(&self.items)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
