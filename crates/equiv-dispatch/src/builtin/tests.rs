//! Tests for the built-in strategies.

use std::sync::Arc;

use equiv_config::{BuiltinGroup, RegistryConfig, SignedZero};
use equiv_core::value::{self, AtomicI32Value, Locator, Node, StringBuilderValue};
use equiv_core::{well_known, EquivError, ObjectRef};
use equiv_test::containers::{BagList, LruCacheMap};
use equiv_test::resolver::CountingResolver;

use super::*;
use crate::registry::BindingOrigin;

fn eq(registry: &EqualityRegistry, a: &ObjectRef, b: &ObjectRef) -> bool {
    registry.are_equal(Some(a.as_ref()), Some(b.as_ref()))
}

fn builtins() -> EqualityRegistry {
    EqualityRegistry::with_builtins().unwrap()
}

// ============================================================================
// Installation
// ============================================================================

#[test]
fn test_every_group_is_registered() {
    let registry = builtins();

    for group in BuiltinGroup::ALL {
        for (ty, _) in group_bindings(group, &RegistryConfig::default()) {
            assert!(registry.is_registered(ty), "{} not registered", ty.name());
        }
    }
    assert_eq!(registry.len(), 23);
}

#[test]
fn test_disabled_group_is_skipped() {
    let config = RegistryConfig::new().without_builtin(BuiltinGroup::Decimal);
    let registry = EqualityRegistry::from_config(config).unwrap();

    assert!(!registry.is_registered(well_known::decimal()));
    assert!(registry.is_registered(well_known::float64()));

    let a = value::decimal("5.5").unwrap();
    let b = value::decimal("5.50").unwrap();
    assert!(!eq(&registry, &a, &b));
}

#[test]
fn test_empty_config_registers_nothing() {
    let registry = EqualityRegistry::from_config(RegistryConfig::empty()).unwrap();
    assert!(registry.is_empty());
}

#[test]
fn test_builtin_module_rejects_second_install() {
    let registry = builtins();
    let err = registry
        .install(&BuiltinModule::new(RegistryConfig::default()))
        .unwrap_err();

    match err {
        EquivError::Module { module, source } => {
            assert_eq!(module, "builtin");
            assert!(matches!(*source, EquivError::DuplicateBinding(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Numbers
// ============================================================================

mod numbers {
    use super::*;

    #[test]
    fn test_decimal_ignores_scale() {
        let registry = builtins();
        let a = value::decimal("5.5").unwrap();
        let b = value::decimal("5.50").unwrap();
        let c = value::decimal("5.51").unwrap();

        assert!(eq(&registry, &a, &b));
        assert!(!eq(&registry, &a, &c));
    }

    #[test]
    fn test_nan_equals_nan() {
        let registry = builtins();

        assert!(eq(&registry, &value::float64(f64::NAN), &value::float64(f64::NAN)));
        assert!(eq(&registry, &value::float32(f32::NAN), &value::float32(f32::NAN)));
        assert!(!eq(&registry, &value::float64(f64::NAN), &value::float64(1.0)));
    }

    #[test]
    fn test_signed_zero_distinct_by_default() {
        let registry = builtins();

        assert!(!eq(&registry, &value::float64(0.0), &value::float64(-0.0)));
        assert!(!eq(&registry, &value::float32(0.0), &value::float32(-0.0)));
        assert!(eq(&registry, &value::float64(-0.0), &value::float64(-0.0)));
    }

    #[test]
    fn test_signed_zero_equal_when_configured() {
        let config = RegistryConfig::new().with_signed_zero(SignedZero::Equal);
        let registry = EqualityRegistry::from_config(config).unwrap();

        assert!(eq(&registry, &value::float64(0.0), &value::float64(-0.0)));
        assert!(eq(&registry, &value::float64(f64::NAN), &value::float64(f64::NAN)));
    }

    #[test]
    fn test_float_strategy_bits() {
        let strategy = FloatStrategy::new(SignedZero::Distinct);

        assert!(strategy.f64_equal(1.5, 1.5));
        assert!(!strategy.f64_equal(1.5, 1.25));
        assert!(strategy.f32_equal(f32::INFINITY, f32::INFINITY));
        assert!(!strategy.f32_equal(f32::INFINITY, f32::NEG_INFINITY));
        assert_eq!(strategy.signed_zero(), SignedZero::Distinct);
    }
}

// ============================================================================
// Mutable values
// ============================================================================

mod mutable {
    use super::*;

    #[test]
    fn test_string_builders_compare_content() {
        let registry = builtins();
        let a = Arc::new(StringBuilderValue::from("ab"));
        let b = Arc::new(StringBuilderValue::from("a"));
        let a_ref: ObjectRef = a.clone();
        let b_ref: ObjectRef = b.clone();

        assert!(!eq(&registry, &a_ref, &b_ref));
        b.push_str("b");
        assert!(eq(&registry, &a_ref, &b_ref));
        a.clear();
        assert!(!eq(&registry, &a_ref, &b_ref));
    }

    #[test]
    fn test_atomics_compare_current_value() {
        let registry = builtins();
        let a = Arc::new(AtomicI32Value::new(1));
        let b = Arc::new(AtomicI32Value::new(2));
        let a_ref: ObjectRef = a.clone();
        let b_ref: ObjectRef = b.clone();

        assert!(!eq(&registry, &a_ref, &b_ref));
        a.fetch_add(1);
        assert!(eq(&registry, &a_ref, &b_ref));

        assert!(eq(&registry, &value::atomic_bool(true), &value::atomic_bool(true)));
        assert!(eq(&registry, &value::atomic_i64(7), &value::atomic_i64(7)));
    }
}

// ============================================================================
// Locators and paths
// ============================================================================

mod external {
    use super::*;

    #[test]
    fn test_locators_compare_external_form_without_resolving() {
        let registry = builtins();
        let resolver = Arc::new(
            CountingResolver::new()
                .with_host("alias.test", "10.0.0.1".parse().unwrap())
                .with_host("origin.test", "10.0.0.1".parse().unwrap()),
        );
        let locator = |spec: &str| -> ObjectRef {
            Arc::new(Locator::parse(spec).unwrap().with_resolver(resolver.clone()))
        };

        assert!(eq(
            &registry,
            &locator("HTTP://Example.com:80/a"),
            &locator("http://example.com/a")
        ));
        assert!(!eq(
            &registry,
            &locator("http://alias.test/x"),
            &locator("http://origin.test/x")
        ));
        assert_eq!(resolver.calls(), 0);
    }

    #[test]
    fn test_paths_compare_canonical_form() {
        let registry = builtins();

        assert!(eq(&registry, &value::path("a/../b.txt"), &value::path("./b.txt")));
        assert!(!eq(&registry, &value::path("a.txt"), &value::path("b.txt")));
    }
}

// ============================================================================
// Nodes
// ============================================================================

mod nodes {
    use super::*;

    fn sample(text: &str) -> Node {
        Node::document().with_child(
            Node::element(Some("urn:x"), "root")
                .with_attribute("id", "1")
                .with_child(Node::text(text))
                .with_child(Node::comment("note")),
        )
    }

    #[test]
    fn test_nodes_compare_structurally() {
        let registry = builtins();

        assert!(eq(
            &registry,
            &value::node(sample("hi")),
            &value::node(sample("hi"))
        ));
        assert!(!eq(
            &registry,
            &value::node(sample("hi")),
            &value::node(sample("bye"))
        ));
    }

    #[test]
    fn test_node_attributes_and_namespace_matter() {
        let plain = Node::element(None, "root");
        let spaced = Node::element(Some("urn:x"), "root");
        let attributed = Node::element(None, "root").with_attribute("a", "1");

        assert!(NodeStrategy::nodes_equal(&plain, &Node::element(None, "root")));
        assert!(!NodeStrategy::nodes_equal(&plain, &spaced));
        assert!(!NodeStrategy::nodes_equal(&plain, &attributed));
    }

    #[test]
    fn test_node_strategy_is_resolved_through_interface() {
        let registry = builtins();
        registry.resolve_strategy(well_known::dom_node());

        assert_eq!(
            registry.binding_origin(well_known::dom_node()),
            Some(BindingOrigin::Memoized)
        );
    }
}

// ============================================================================
// Containers
// ============================================================================

mod containers {
    use super::*;

    #[test]
    fn test_same_type_containers_compare_structurally() {
        let registry = builtins();
        let a = value::list(value::ints(&[1, 2]));
        let b = value::list(value::ints(&[1, 2]));

        assert!(eq(&registry, &a, &b));
        assert_eq!(
            registry.binding_origin(well_known::vec_list()),
            Some(BindingOrigin::Memoized)
        );
    }

    #[test]
    fn test_user_list_inherits_container_strategy() {
        let registry = builtins();
        let a = BagList::shared(value::strings(&["x", "y"]));
        let b = BagList::shared(value::strings(&["x", "y"]));

        assert!(eq(&registry, &a, &b));
    }

    #[test]
    fn test_own_equality_map_keeps_its_equality() {
        let registry = builtins();
        let entries = || vec![(Some(value::string("a")), Some(value::int32(1)))];
        let small = LruCacheMap::shared(1, entries());
        let large = LruCacheMap::shared(8, entries());
        let twin = LruCacheMap::shared(8, entries());

        assert!(!eq(&registry, &small, &large));
        assert!(eq(&registry, &large, &twin));
    }

    #[test]
    fn test_arrays_are_bound_to_array_strategy() {
        let registry = builtins();
        for ty in well_known::primitive_array_types() {
            assert_eq!(registry.resolve_strategy(ty).unwrap().name(), "array-elements");
        }

        let a = value::array(vec![None, Some(value::int32(1))]);
        let b = value::array(vec![None, Some(value::int32(1))]);
        assert!(eq(&registry, &a, &b));
    }
}

// ============================================================================
// Configuration files
// ============================================================================

#[test]
fn test_missing_config_file_is_config_error() {
    let result = EqualityRegistry::from_config_file("/nonexistent/equiv.toml");
    assert!(matches!(result, Err(EquivError::Config(_))));
}

#[test]
fn test_config_file_is_loaded() {
    let path = std::env::temp_dir().join(format!("equiv-config-{}.toml", std::process::id()));
    std::fs::write(&path, "disabled_builtins = [\"atomic\"]\n").unwrap();

    let registry = EqualityRegistry::from_config_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(!registry.is_registered(well_known::atomic_i32()));
    assert!(registry.is_registered(well_known::decimal()));
}
