//! Tests for built-in values.

use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::object::{ContainerShape, Object};
use crate::types::well_known;

// ============================================================================
// Scalars
// ============================================================================

mod scalars {
    use super::*;

    #[test]
    fn test_scalar_native_equality() {
        assert!(int32(7).native_equals(int32(7).as_ref()));
        assert!(!int32(7).native_equals(int32(8).as_ref()));
        assert!(string("a").native_equals(string("a").as_ref()));
        assert!(boolean(true).native_equals(boolean(true).as_ref()));
    }

    #[test]
    fn test_float_native_equality_is_ieee() {
        assert!(!float64(f64::NAN).native_equals(float64(f64::NAN).as_ref()));
        assert!(float64(0.0).native_equals(float64(-0.0).as_ref()));
        assert!(!float32(f32::NAN).native_equals(float32(f32::NAN).as_ref()));
    }

    #[test]
    fn test_decimal_native_equality_is_scale_sensitive() {
        let a = decimal("5.5").unwrap();
        let b = decimal("5.50").unwrap();
        let c = decimal("5.5").unwrap();

        assert!(!a.native_equals(b.as_ref()));
        assert!(a.native_equals(c.as_ref()));
        assert_eq!(b.downcast_ref::<DecimalValue>().unwrap().scale(), 2);
    }

    #[test]
    fn test_decimal_rejects_garbage() {
        assert!(decimal("five").is_err());
    }

    #[test]
    fn test_scalar_runtime_types() {
        assert_eq!(int64(1).runtime_type().name(), "i64");
        assert_eq!(byte(1).runtime_type().name(), "u8");
        assert_eq!(float32(1.0).runtime_type().name(), "f32");
        assert_eq!(decimal("1").unwrap().runtime_type().name(), "decimal");
    }
}

// ============================================================================
// Mutable values
// ============================================================================

mod mutable {
    use super::*;

    #[test]
    fn test_string_builder_identity_equality() {
        let a = string_builder("abc");
        let b = string_builder("abc");

        assert!(!a.native_equals(b.as_ref()));
        assert!(a.native_equals(a.as_ref()));
    }

    #[test]
    fn test_string_builder_mutation() {
        let sb = StringBuilderValue::from("ab");
        sb.push_str("cd");
        assert_eq!(sb.contents(), "abcd");
        assert_eq!(sb.len(), 4);

        sb.clear();
        assert!(sb.is_empty());
    }

    #[test]
    fn test_atomics() {
        let counter = AtomicI64Value::new(5);
        assert_eq!(counter.fetch_add(2), 5);
        assert_eq!(counter.load(), 7);

        let flag = AtomicBoolValue::new(false);
        flag.store(true);
        assert!(flag.load());
    }
}

// ============================================================================
// Paths and locators
// ============================================================================

mod external {
    use super::*;

    #[derive(Debug, Default)]
    struct FixedResolver {
        calls: AtomicUsize,
    }

    impl HostResolver for FixedResolver {
        fn resolve(&self, host: &str) -> Vec<IpAddr> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match host {
                "alias.test" | "origin.test" => vec!["10.0.0.1".parse().unwrap()],
                _ => Vec::new(),
            }
        }
    }

    #[test]
    fn test_path_native_equality_is_raw() {
        let a = FileHandle::new("a/../b.txt");
        let b = FileHandle::new("b.txt");

        assert!(!a.native_equals(&b));
        assert_eq!(a.canonical_form(), b.canonical_form());
    }

    #[test]
    fn test_path_canonical_form_is_absolute() {
        let handle = FileHandle::new("./x/./y");
        let cwd = std::env::current_dir().unwrap();

        assert_eq!(
            handle.canonical_form(),
            cwd.join("x").join("y").to_string_lossy()
        );
    }

    #[test]
    fn test_path_parent_above_root_stays_at_root() {
        let handle = FileHandle::new("/../etc");
        assert_eq!(handle.canonical_form(), "/etc");
    }

    #[test]
    fn test_locator_external_form_is_normalized() {
        let loc = Locator::parse("HTTP://Example.COM:80/a/../b").unwrap();
        assert_eq!(loc.external_form(), "http://example.com/b");

        let built = Locator::from_parts("http", "example.com", None, "b").unwrap();
        assert_eq!(built.external_form(), "http://example.com/b");
    }

    #[test]
    fn test_locator_native_equality_resolves_hosts() {
        let resolver = Arc::new(FixedResolver::default());
        let a = Locator::parse("http://alias.test/x")
            .unwrap()
            .with_resolver(resolver.clone());
        let b = Locator::parse("http://origin.test/x")
            .unwrap()
            .with_resolver(resolver.clone());

        assert!(a.native_equals(&b));
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_locator_native_equality_falls_back_to_host_names() {
        let resolver = Arc::new(FixedResolver::default());
        let a = Locator::parse("http://unknown.test/x")
            .unwrap()
            .with_resolver(resolver.clone());
        let b = Locator::parse("http://other.test/x")
            .unwrap()
            .with_resolver(resolver);

        assert!(!a.native_equals(&b));
    }
}

// ============================================================================
// Nodes
// ============================================================================

#[test]
fn test_node_builder() {
    let doc = Node::document().with_child(
        Node::element(Some("urn:x"), "root")
            .with_attribute("b", "2")
            .with_attribute("a", "1")
            .with_child(Node::text("hi")),
    );

    let root = &doc.children()[0];
    assert_eq!(root.kind(), NodeKind::Element);
    assert_eq!(root.namespace(), Some("urn:x"));
    let attrs: Vec<&str> = root.attributes().keys().map(|k| &**k).collect();
    assert_eq!(attrs, vec!["a", "b"]);
    assert_eq!(root.children()[0].value(), Some("hi"));
    assert_eq!(node(doc).runtime_type().name(), "dom-node");
}

// ============================================================================
// Collections
// ============================================================================

mod containers {
    use super::*;

    #[test]
    fn test_set_collapses_duplicates() {
        let set = SetObject::hash_set(ints(&[1, 2, 3, 3]));

        assert_eq!(set.len(), 3);
        assert!(set.contains(&Some(int32(2))));
        assert!(!set.contains(&Some(int32(4))));
    }

    #[test]
    fn test_map_repeated_key_replaces_value() {
        let map = MapObject::hash_map(vec![
            (Some(string("a")), Some(int32(1))),
            (Some(string("a")), None),
        ]);

        assert_eq!(map.len(), 1);
        assert!(matches!(map.get(&Some(string("a"))), Some(None)));
        assert!(map.get(&Some(string("b"))).is_none());
    }

    #[test]
    fn test_containers_have_identity_equality() {
        let a = list(ints(&[1]));
        let b = list(ints(&[1]));

        assert!(!a.native_equals(b.as_ref()));
        assert!(a.native_equals(a.as_ref()));
    }

    #[test]
    fn test_contents_shapes() {
        fn shape(obj: &ObjectRef) -> Option<ContainerShape> {
            obj.contents().map(|v| v.shape())
        }

        assert_eq!(shape(&deque(ints(&[1]))), Some(ContainerShape::Sequence));
        assert_eq!(shape(&cursor(ints(&[1]))), Some(ContainerShape::Sequence));
        assert_eq!(
            shape(&ordered_set(ints(&[1]))),
            Some(ContainerShape::UnorderedSet)
        );
        assert_eq!(shape(&ordered_map(Vec::new())), Some(ContainerShape::KeyedMap));
        assert_eq!(shape(&array(ints(&[1]))), Some(ContainerShape::Array));
        assert_eq!(shape(&int32(1)), None);
    }

    #[test]
    fn test_cursor_contents_are_remaining_elements() {
        let cur = CursorObject::cursor(ints(&[1, 2, 3]));
        assert!(cur.next().is_some());

        let view = cur.contents().unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(cur.remaining(), 2);
    }

    #[test]
    fn test_array_types() {
        assert_eq!(ArrayObject::of_i32(&[1]).runtime_type(), well_known::i32_array());
        assert_eq!(ArrayObject::of_f64(&[]).runtime_type().name(), "[]f64");
        assert_eq!(array(Vec::new()).runtime_type().name(), "[]object");

        let nested = ArrayObject::new(
            well_known::i32_array(),
            elements([Arc::new(ArrayObject::of_i32(&[1, 2])) as ObjectRef]),
        );
        assert_eq!(nested.runtime_type().name(), "[][]i32");
        assert_eq!(nested.len(), 1);
    }
}
