//! Equiv - Hierarchy-Aware Equality in Rust
//!
//! Decide whether two arbitrary values are equal: pick the strategy bound to
//! their runtime type (or inherited from an ancestor), fall back to the
//! type's own equality, and compare containers by structure.
//!
//! # Example
//!
//! ```rust
//! use equiv::prelude::*;
//! use equiv::value;
//!
//! let registry = EqualityRegistry::with_builtins().unwrap();
//!
//! let list = value::list(value::ints(&[1, 2, 3]));
//! let deque = value::deque(value::ints(&[1, 2, 3]));
//! assert!(registry.are_equal(Some(list.as_ref()), Some(deque.as_ref())));
//!
//! let nan = value::float64(f64::NAN);
//! let other_nan = value::float64(f64::NAN);
//! assert!(registry.are_equal(Some(nan.as_ref()), Some(other_nan.as_ref())));
//! ```

// Object model
pub use equiv_core::{
    same_element, same_object, value, well_known, ContainerShape, ContainerView, Element,
    EquivError, Object, ObjectRef, Result, TypeBuilder, TypeDescriptor, TypeKey, TypeKind,
    TypeRef,
};

// Configuration
pub use equiv_config::{BuiltinGroup, ConfigError, RegistryConfig, SignedZero};

// Dispatch
pub use equiv_dispatch::{
    builtin, module_fn, strategy_fn, BindingOrigin, BuiltinModule, ContainerComparator,
    EqualityRegistry, EqualityStrategy, FnModule, FnStrategy, RegistrationModule,
    RegistryBuilder, RegistryStats, StrategyRef,
};

#[cfg(feature = "console")]
pub use equiv_console as console;

pub mod prelude {
    pub use super::{module_fn, strategy_fn};
    pub use super::{
        ContainerComparator, EqualityRegistry, EqualityStrategy, RegistrationModule,
        RegistryBuilder, RegistryConfig,
    };
    pub use super::{Element, Object, ObjectRef, TypeDescriptor, TypeRef};
}
