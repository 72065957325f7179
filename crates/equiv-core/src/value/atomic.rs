//! Atomic scalar cells.
//!
//! Atomics are mutable shared counters and flags. Their own equality is
//! identity; the registry compares their current values.

use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicI64, Ordering};

use crate::object::Object;
use crate::types::{well_known, TypeRef};

macro_rules! atomic_value {
    ($name:ident($atomic:ty, $payload:ty) => $ty:path) => {
        #[derive(Debug, Default)]
        pub struct $name(pub $atomic);

        impl $name {
            pub fn new(value: $payload) -> Self {
                $name(<$atomic>::new(value))
            }

            /// Returns the current value.
            pub fn load(&self) -> $payload {
                self.0.load(Ordering::SeqCst)
            }

            pub fn store(&self, value: $payload) {
                self.0.store(value, Ordering::SeqCst);
            }
        }

        impl Object for $name {
            fn runtime_type(&self) -> &TypeRef {
                $ty()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }
    };
}

atomic_value!(AtomicBoolValue(AtomicBool, bool) => well_known::atomic_bool);
atomic_value!(AtomicI32Value(AtomicI32, i32) => well_known::atomic_i32);
atomic_value!(AtomicI64Value(AtomicI64, i64) => well_known::atomic_i64);

impl AtomicI32Value {
    /// Adds to the current value, returning the previous one.
    pub fn fetch_add(&self, delta: i32) -> i32 {
        self.0.fetch_add(delta, Ordering::SeqCst)
    }
}

impl AtomicI64Value {
    /// Adds to the current value, returning the previous one.
    pub fn fetch_add(&self, delta: i64) -> i64 {
        self.0.fetch_add(delta, Ordering::SeqCst)
    }
}
