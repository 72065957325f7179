//! User container fixtures.

use std::any::Any;
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

use equiv_core::{
    well_known, ContainerView, Element, Object, ObjectRef, TypeDescriptor, TypeRef,
};

/// A map class that defines its own equality.
pub fn lru_cache_type() -> &'static TypeRef {
    static TYPE: OnceLock<TypeRef> = OnceLock::new();
    TYPE.get_or_init(|| {
        TypeDescriptor::class("app.lru-cache")
            .implements(well_known::map())
            .declares_equality()
            .build()
    })
}

fn bag_list_type() -> &'static TypeRef {
    static TYPE: OnceLock<TypeRef> = OnceLock::new();
    TYPE.get_or_init(|| {
        TypeDescriptor::class("app.bag-list")
            .implements(well_known::list())
            .build()
    })
}

fn opaque_list_type() -> &'static TypeRef {
    static TYPE: OnceLock<TypeRef> = OnceLock::new();
    TYPE.get_or_init(|| {
        TypeDescriptor::class("app.opaque-list")
            .implements(well_known::list())
            .build()
    })
}

/// A bounded map whose own equality also compares capacity.
///
/// Entries are compared with the values' native equality.
#[derive(Debug)]
pub struct LruCacheMap {
    capacity: usize,
    entries: Vec<(Element, Element)>,
}

impl LruCacheMap {
    /// Keeps at most the last `capacity` entries.
    pub fn new(capacity: usize, entries: Vec<(Element, Element)>) -> Self {
        let skip = entries.len().saturating_sub(capacity);
        Self {
            capacity,
            entries: entries.into_iter().skip(skip).collect(),
        }
    }

    pub fn shared(capacity: usize, entries: Vec<(Element, Element)>) -> ObjectRef {
        Arc::new(Self::new(capacity, entries))
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn natively_equal(a: &Element, b: &Element) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.runtime_type() == b.runtime_type() && a.native_equals(b.as_ref())
        }
        _ => false,
    }
}

impl Object for LruCacheMap {
    fn runtime_type(&self) -> &TypeRef {
        lru_cache_type()
    }

    fn native_equals(&self, other: &dyn Object) -> bool {
        let Some(other) = other.downcast_ref::<LruCacheMap>() else {
            return false;
        };
        self.capacity == other.capacity
            && self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((k1, v1), (k2, v2))| natively_equal(k1, k2) && natively_equal(v1, v2))
    }

    fn contents(&self) -> Option<ContainerView<'_>> {
        Some(ContainerView::KeyedMap(Cow::Borrowed(&self.entries)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A list class that inherits identity equality.
#[derive(Debug)]
pub struct BagList {
    items: Vec<Element>,
}

impl BagList {
    pub fn new(items: Vec<Element>) -> Self {
        Self { items }
    }

    pub fn shared(items: Vec<Element>) -> ObjectRef {
        Arc::new(Self::new(items))
    }

    /// The runtime type of every bag list.
    pub fn runtime_type_ref() -> &'static TypeRef {
        bag_list_type()
    }
}

impl Object for BagList {
    fn runtime_type(&self) -> &TypeRef {
        bag_list_type()
    }

    fn contents(&self) -> Option<ContainerView<'_>> {
        Some(ContainerView::Sequence(Cow::Borrowed(&self.items)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A list class that does not expose its contents.
#[derive(Debug, Default)]
pub struct OpaqueList;

impl OpaqueList {
    pub fn shared() -> ObjectRef {
        Arc::new(OpaqueList)
    }
}

impl Object for OpaqueList {
    fn runtime_type(&self) -> &TypeRef {
        opaque_list_type()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
