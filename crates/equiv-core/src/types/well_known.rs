//! Descriptors for the built-in types.
//!
//! Each function returns a process-wide descriptor created on first use.
//! Descriptors are immutable, so sharing them carries no registry state.

use std::sync::OnceLock;

use super::{TypeDescriptor, TypeKey, TypeRef};
use crate::object::ContainerShape;

/// Name of the universal base type.
pub const OBJECT: &str = "object";

pub const LIST: &str = "list";
pub const QUEUE: &str = "queue";
pub const CURSOR: &str = "cursor";
pub const ENUMERATION: &str = "enumeration";
pub const SET: &str = "set";
pub const MAP: &str = "map";

macro_rules! well_known_types {
    ($( $(#[$meta:meta])* $fn_name:ident => $build:expr; )*) => {
        $(
            $(#[$meta])*
            pub fn $fn_name() -> &'static TypeRef {
                static CELL: OnceLock<TypeRef> = OnceLock::new();
                CELL.get_or_init(|| $build)
            }
        )*
    };
}

well_known_types! {
    /// The type every class extends.
    object => TypeDescriptor::universal(OBJECT);

    // Scalars

    boolean => TypeDescriptor::class("bool").declares_equality().build();
    byte => TypeDescriptor::class("u8").declares_equality().build();
    int32 => TypeDescriptor::class("i32").declares_equality().build();
    int64 => TypeDescriptor::class("i64").declares_equality().build();
    /// IEEE single precision; its own equality is IEEE `==`.
    float32 => TypeDescriptor::class("f32").declares_equality().build();
    /// IEEE double precision; its own equality is IEEE `==`.
    float64 => TypeDescriptor::class("f64").declares_equality().build();
    string => TypeDescriptor::class("string").declares_equality().build();
    /// Arbitrary precision decimal; its own equality is scale sensitive.
    decimal => TypeDescriptor::class("decimal").declares_equality().build();
    /// Mutable text buffer with identity equality.
    string_builder => TypeDescriptor::class("string-builder").build();
    /// Network locator whose own equality resolves host names.
    url => TypeDescriptor::class("url").declares_equality().build();
    /// Filesystem path whose own equality compares the raw spelling.
    path => TypeDescriptor::class("path").declares_equality().build();
    atomic_bool => TypeDescriptor::class("atomic-bool").build();
    atomic_i32 => TypeDescriptor::class("atomic-i32").build();
    atomic_i64 => TypeDescriptor::class("atomic-i64").build();

    // Tree nodes

    node => TypeDescriptor::interface("node").build();
    dom_node => TypeDescriptor::class("dom-node").implements(node()).build();

    // Container interfaces

    collection => TypeDescriptor::interface("collection").build();
    list => TypeDescriptor::interface(LIST).extends(collection()).build();
    queue => TypeDescriptor::interface(QUEUE).extends(collection()).build();
    set => TypeDescriptor::interface(SET).extends(collection()).build();
    map => TypeDescriptor::interface(MAP).build();
    cursor => TypeDescriptor::interface(CURSOR).build();
    enumeration => TypeDescriptor::interface(ENUMERATION).build();

    // Container classes

    vec_list => TypeDescriptor::class("vec-list").implements(list()).build();
    linked_list => TypeDescriptor::class("linked-list")
        .implements(list())
        .implements(queue())
        .build();
    deque => TypeDescriptor::class("deque").implements(queue()).build();
    hash_set => TypeDescriptor::class("hash-set").implements(set()).build();
    ordered_set => TypeDescriptor::class("ordered-set").implements(set()).build();
    hash_map => TypeDescriptor::class("hash-map").implements(map()).build();
    ordered_map => TypeDescriptor::class("ordered-map").implements(map()).build();
    vec_cursor => TypeDescriptor::class("vec-cursor").implements(cursor()).build();
    vec_enumeration => TypeDescriptor::class("vec-enumeration")
        .implements(enumeration())
        .build();

    // Arrays with a built-in element-wise strategy

    bool_array => TypeDescriptor::array_of(boolean());
    byte_array => TypeDescriptor::array_of(byte());
    i32_array => TypeDescriptor::array_of(int32());
    i64_array => TypeDescriptor::array_of(int64());
    f32_array => TypeDescriptor::array_of(float32());
    f64_array => TypeDescriptor::array_of(float64());
    object_array => TypeDescriptor::array_of(object());
}

/// Returns the array types that get a dedicated built-in registration.
pub fn primitive_array_types() -> [&'static TypeRef; 7] {
    [
        bool_array(),
        byte_array(),
        i32_array(),
        i64_array(),
        f32_array(),
        f64_array(),
        object_array(),
    ]
}

// Maps a type and its ancestors to a container shape. Keyed maps win over
// sets, sets over sequences, for types implementing several container interfaces.
pub(super) fn shape_of(keys: &[TypeKey]) -> Option<ContainerShape> {
    let has = |name: &str| keys.iter().any(|k| k.as_str() == name);
    if has(MAP) {
        Some(ContainerShape::KeyedMap)
    } else if has(SET) {
        Some(ContainerShape::UnorderedSet)
    } else if has(LIST) || has(QUEUE) || has(CURSOR) || has(ENUMERATION) {
        Some(ContainerShape::Sequence)
    } else {
        None
    }
}
