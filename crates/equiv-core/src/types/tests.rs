//! Tests for type descriptors.

use super::*;
use crate::object::ContainerShape;

fn names(types: &[TypeRef]) -> Vec<&str> {
    types.iter().map(|t| t.name()).collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_class_extends_object_by_default() {
    let ty = TypeDescriptor::class("point").build();

    assert_eq!(ty.superclass().map(|s| s.name()), Some("object"));
    assert!(!ty.is_universal());
    assert!(!ty.declares_equality());
}

#[test]
fn test_object_is_universal() {
    let object = well_known::object();

    assert!(object.is_universal());
    assert!(object.superclass().is_none());
    assert!(object.ancestors().is_empty());
}

#[test]
fn test_universal_is_decided_by_name() {
    let class = TypeDescriptor::class(well_known::OBJECT).build();
    let iface = TypeDescriptor::interface(well_known::OBJECT).build();

    assert!(class.is_universal());
    assert!(iface.is_universal());
    assert!(!TypeDescriptor::interface("objects").build().is_universal());
}

#[test]
fn test_interface_has_no_superclass() {
    let base = TypeDescriptor::interface("shape").build();
    let iface = TypeDescriptor::interface("polygon").extends(&base).build();

    assert!(iface.is_interface());
    assert!(iface.superclass().is_none());
    assert_eq!(names(iface.interfaces()), vec!["shape"]);
}

#[test]
fn test_identity_is_the_name() {
    let a = TypeDescriptor::class("point").build();
    let b = TypeDescriptor::class("point").declares_equality().build();

    assert_eq!(a, b);
    assert_eq!(a.key(), b.key());
    assert_eq!(a.key().to_string(), "point");
}

#[test]
fn test_array_type_naming() {
    let ints = TypeDescriptor::array_of(well_known::int32());
    let nested = TypeDescriptor::array_of(&ints);

    assert_eq!(ints.name(), "[]i32");
    assert_eq!(nested.name(), "[][]i32");
    assert_eq!(&ints, well_known::i32_array());
    assert!(nested.is_array());
    assert_eq!(nested.component().map(|c| c.name()), Some("[]i32"));
    assert_eq!(nested.superclass().map(|s| s.name()), Some("object"));
}

// ============================================================================
// Ancestor walk
// ============================================================================

#[test]
fn test_ancestors_classes_before_interfaces() {
    let i3 = TypeDescriptor::interface("i3").build();
    let i2 = TypeDescriptor::interface("i2").extends(&i3).build();
    let i1 = TypeDescriptor::interface("i1").build();
    let a = TypeDescriptor::class("a").implements(&i1).build();
    let b = TypeDescriptor::class("b").extends(&a).build();
    let c = TypeDescriptor::class("c").extends(&b).implements(&i2).build();

    assert_eq!(
        names(&c.ancestors()),
        vec!["b", "a", "object", "i2", "i1", "i3"]
    );
}

#[test]
fn test_ancestors_deduplicate_diamonds() {
    let top = TypeDescriptor::interface("top").build();
    let left = TypeDescriptor::interface("left").extends(&top).build();
    let right = TypeDescriptor::interface("right").extends(&top).build();
    let leaf = TypeDescriptor::class("leaf")
        .implements(&left)
        .implements(&right)
        .build();

    assert_eq!(
        names(&leaf.ancestors()),
        vec!["object", "left", "right", "top"]
    );
}

#[test]
fn test_is_subtype_of() {
    let list = well_known::list();
    let vec_list = well_known::vec_list();

    assert!(vec_list.is_subtype_of(list));
    assert!(vec_list.is_subtype_of(well_known::collection()));
    assert!(vec_list.is_subtype_of(vec_list));
    assert!(!vec_list.is_subtype_of(well_known::set()));
}

// ============================================================================
// Container shapes
// ============================================================================

#[test]
fn test_builtin_container_shapes() {
    assert_eq!(
        well_known::vec_list().container_shape(),
        Some(ContainerShape::Sequence)
    );
    assert_eq!(
        well_known::deque().container_shape(),
        Some(ContainerShape::Sequence)
    );
    assert_eq!(
        well_known::vec_enumeration().container_shape(),
        Some(ContainerShape::Sequence)
    );
    assert_eq!(
        well_known::ordered_set().container_shape(),
        Some(ContainerShape::UnorderedSet)
    );
    assert_eq!(
        well_known::hash_map().container_shape(),
        Some(ContainerShape::KeyedMap)
    );
    assert_eq!(
        well_known::f64_array().container_shape(),
        Some(ContainerShape::Array)
    );
    assert_eq!(well_known::string().container_shape(), None);
    assert_eq!(well_known::dom_node().container_shape(), None);
}

#[test]
fn test_shape_inherited_through_superclass() {
    let base = TypeDescriptor::class("base-list")
        .implements(well_known::list())
        .build();
    let derived = TypeDescriptor::class("derived-list").extends(&base).build();

    assert_eq!(derived.container_shape(), Some(ContainerShape::Sequence));
}

#[test]
fn test_map_wins_over_sequence() {
    let odd = TypeDescriptor::class("list-map")
        .implements(well_known::list())
        .implements(well_known::map())
        .build();

    assert_eq!(odd.container_shape(), Some(ContainerShape::KeyedMap));
}
