//! User record fixtures.
//!
//! A [`RecordObject`] carries a label and an arbitrary runtime type, so
//! tests can build whatever hierarchy they need around it.
//!
//! # Example
//!
//! ```
//! use equiv_core::Object;
//! use equiv_test::record::{record_type, RecordObject};
//!
//! let ty = record_type("app.point", true);
//! let a = RecordObject::new(&ty, "p");
//! let b = RecordObject::new(&ty, "p");
//! assert!(a.native_equals(&b));
//! ```

use std::any::Any;

use equiv_core::{Object, ObjectRef, TypeDescriptor, TypeRef};

/// Builds a class extending the universal base type.
pub fn record_type(name: &str, declares_equality: bool) -> TypeRef {
    let builder = TypeDescriptor::class(name);
    if declares_equality {
        builder.declares_equality().build()
    } else {
        builder.build()
    }
}

/// A labelled value of any user type.
///
/// Native equality compares labels when the runtime type declares its own
/// equality and falls back to identity otherwise.
#[derive(Debug, Clone)]
pub struct RecordObject {
    ty: TypeRef,
    label: String,
}

impl RecordObject {
    pub fn new(ty: &TypeRef, label: &str) -> Self {
        Self {
            ty: ty.clone(),
            label: label.to_string(),
        }
    }

    /// Creates a shared record.
    pub fn shared(ty: &TypeRef, label: &str) -> ObjectRef {
        std::sync::Arc::new(Self::new(ty, label))
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Object for RecordObject {
    fn runtime_type(&self) -> &TypeRef {
        &self.ty
    }

    fn native_equals(&self, other: &dyn Object) -> bool {
        if !self.ty.declares_equality() {
            return std::ptr::addr_eq(self as *const Self, other as *const dyn Object);
        }
        other
            .downcast_ref::<RecordObject>()
            .is_some_and(|o| o.label == self.label)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
