//! Equiv Core - runtime types and objects for equality dispatch
//!
//! This crate provides the model the equality registry works over:
//! - Type descriptors with class/interface/array hierarchies
//! - The `Object` trait and container views
//! - Built-in values (scalars, decimals, text buffers, locators, paths,
//!   atomics, document nodes, collections, arrays)
//! - Error types

pub mod error;
pub mod object;
pub mod types;
pub mod value;

pub use error::{EquivError, Result};
pub use object::{
    same_element, same_object, ContainerShape, ContainerView, Element, Object, ObjectRef,
};
pub use types::{well_known, TypeBuilder, TypeDescriptor, TypeKey, TypeKind, TypeRef};
