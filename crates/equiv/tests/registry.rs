//! End-to-end tests through the public API.

use std::sync::Arc;

use equiv::prelude::*;
use equiv::{value, well_known, BindingOrigin, BuiltinGroup, EquivError, SignedZero};
use equiv_test::containers::{BagList, LruCacheMap};
use equiv_test::record::{record_type, RecordObject};

fn eq(registry: &EqualityRegistry, a: &ObjectRef, b: &ObjectRef) -> bool {
    registry.are_equal(Some(a.as_ref()), Some(b.as_ref()))
}

#[test]
fn test_config_file_drives_registry() {
    let config = RegistryConfig::from_toml_str(
        r#"
        disabled_builtins = ["path"]
        signed_zero = "equal"

        [own_equality]
        "app.lru-cache" = false
        "#,
    )
    .unwrap();
    let registry = EqualityRegistry::from_config(config).unwrap();

    assert!(!registry.is_registered(well_known::path()));
    assert!(eq(&registry, &value::float64(0.0), &value::float64(-0.0)));

    // With its own equality switched off the cache compares structurally.
    let entries = || vec![(Some(value::string("a")), Some(value::int32(1)))];
    let small = LruCacheMap::shared(1, entries());
    let large = LruCacheMap::shared(8, entries());
    assert!(eq(&registry, &small, &large));
}

#[test]
fn test_application_module_extends_builtins() {
    let money = record_type("app.money", false);
    let module_type = money.clone();
    let registry = RegistryBuilder::new()
        .with_config(RegistryConfig::new().without_builtin(BuiltinGroup::Locator))
        .with_module(module_fn("money", move |registry| {
            registry.register_strategy(
                &module_type,
                strategy_fn("money-label", |_, a, b| {
                    match (
                        a.downcast_ref::<RecordObject>(),
                        b.downcast_ref::<RecordObject>(),
                    ) {
                        (Some(a), Some(b)) => a.label() == b.label(),
                        _ => false,
                    }
                }),
            )
        }))
        .build()
        .unwrap();

    let a = RecordObject::shared(&money, "10 EUR");
    let b = RecordObject::shared(&money, "10 EUR");
    assert!(eq(&registry, &a, &b));
    assert_eq!(registry.binding_origin(&money), Some(BindingOrigin::Registered));
}

#[test]
fn test_failing_module_aborts_build() {
    let result = RegistryBuilder::new()
        .with_module(module_fn("clash", |registry| {
            registry.register_strategy(well_known::decimal(), strategy_fn("x", |_, _, _| true))
        }))
        .build();

    match result {
        Err(EquivError::Module { module, .. }) => assert_eq!(module, "clash"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_nested_mixed_containers() {
    let registry = EqualityRegistry::with_builtins().unwrap();
    let a = value::hash_map(vec![(
        Some(value::string("xs")),
        Some(value::list(vec![
            Some(value::decimal("1.0").unwrap()),
            Some(value::hash_set(value::ints(&[1, 2]))),
        ])),
    )]);
    let b = value::ordered_map(vec![(
        Some(value::string("xs")),
        Some(BagList::shared(vec![
            Some(value::decimal("1").unwrap()),
            Some(value::ordered_set(value::ints(&[2, 1]))),
        ])),
    )]);

    assert!(eq(&registry, &a, &b));
}

#[test]
fn test_signed_zero_default() {
    let registry = EqualityRegistry::with_builtins().unwrap();
    assert!(!eq(&registry, &value::float32(0.0), &value::float32(-0.0)));
    assert_eq!(RegistryConfig::new().signed_zero, SignedZero::Distinct);
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = Arc::new(EqualityRegistry::with_builtins().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let a = value::list(value::ints(&[i, i + 1]));
                let b = value::deque(value::ints(&[i, i + 1]));
                registry.are_equal(Some(a.as_ref()), Some(b.as_ref()))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
