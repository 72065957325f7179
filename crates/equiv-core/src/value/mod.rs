//! Built-in values.
//!
//! The free functions in this module build shared [`ObjectRef`]s for the
//! built-in types:
//!
//! ```
//! use equiv_core::value;
//!
//! let list = value::list(value::ints(&[1, 2, 3]));
//! assert_eq!(list.runtime_type().name(), "vec-list");
//! ```

mod atomic;
mod collections;
mod file;
mod locator;
mod node;
mod scalar;
mod text;

#[cfg(test)]
mod tests;

pub use atomic::{AtomicBoolValue, AtomicI32Value, AtomicI64Value};
pub use collections::{ArrayObject, CursorObject, ListObject, MapObject, SetObject};
pub use file::FileHandle;
pub use locator::{HostResolver, Locator, SystemResolver};
pub use node::{Node, NodeKind};
pub use scalar::{
    BoolValue, ByteValue, DecimalValue, F32Value, F64Value, I32Value, I64Value, StringValue,
};
pub use text::StringBuilderValue;

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::object::{Element, ObjectRef};

pub fn boolean(value: bool) -> ObjectRef {
    Arc::new(BoolValue(value))
}

pub fn byte(value: u8) -> ObjectRef {
    Arc::new(ByteValue(value))
}

pub fn int32(value: i32) -> ObjectRef {
    Arc::new(I32Value(value))
}

pub fn int64(value: i64) -> ObjectRef {
    Arc::new(I64Value(value))
}

pub fn float32(value: f32) -> ObjectRef {
    Arc::new(F32Value(value))
}

pub fn float64(value: f64) -> ObjectRef {
    Arc::new(F64Value(value))
}

pub fn string(value: &str) -> ObjectRef {
    Arc::new(StringValue::from(value))
}

/// Parses a decimal literal, keeping its scale (`"5.50"` has scale 2).
pub fn decimal(literal: &str) -> Result<ObjectRef, rust_decimal::Error> {
    Ok(Arc::new(DecimalValue(Decimal::from_str(literal)?)))
}

pub fn string_builder(text: &str) -> ObjectRef {
    Arc::new(StringBuilderValue::from(text))
}

pub fn atomic_bool(value: bool) -> ObjectRef {
    Arc::new(AtomicBoolValue::new(value))
}

pub fn atomic_i32(value: i32) -> ObjectRef {
    Arc::new(AtomicI32Value::new(value))
}

pub fn atomic_i64(value: i64) -> ObjectRef {
    Arc::new(AtomicI64Value::new(value))
}

pub fn path(path: impl Into<PathBuf>) -> ObjectRef {
    Arc::new(FileHandle::new(path))
}

pub fn url(spec: &str) -> Result<ObjectRef, url::ParseError> {
    Ok(Arc::new(Locator::parse(spec)?))
}

pub fn node(node: Node) -> ObjectRef {
    Arc::new(node)
}

pub fn list(items: Vec<Element>) -> ObjectRef {
    Arc::new(ListObject::vec_list(items))
}

pub fn linked_list(items: Vec<Element>) -> ObjectRef {
    Arc::new(ListObject::linked_list(items))
}

pub fn deque(items: Vec<Element>) -> ObjectRef {
    Arc::new(ListObject::deque(items))
}

pub fn hash_set(items: Vec<Element>) -> ObjectRef {
    Arc::new(SetObject::hash_set(items))
}

pub fn ordered_set(items: Vec<Element>) -> ObjectRef {
    Arc::new(SetObject::ordered_set(items))
}

pub fn hash_map(entries: Vec<(Element, Element)>) -> ObjectRef {
    Arc::new(MapObject::hash_map(entries))
}

pub fn ordered_map(entries: Vec<(Element, Element)>) -> ObjectRef {
    Arc::new(MapObject::ordered_map(entries))
}

pub fn cursor(items: Vec<Element>) -> ObjectRef {
    Arc::new(CursorObject::cursor(items))
}

pub fn enumeration(items: Vec<Element>) -> ObjectRef {
    Arc::new(CursorObject::enumeration(items))
}

/// Builds an array of arbitrary objects.
pub fn array(items: Vec<Element>) -> ObjectRef {
    Arc::new(ArrayObject::of_objects(items))
}

/// Wraps objects as present elements.
pub fn elements(objects: impl IntoIterator<Item = ObjectRef>) -> Vec<Element> {
    objects.into_iter().map(Some).collect()
}

/// Builds `i32` elements.
pub fn ints(values: &[i32]) -> Vec<Element> {
    elements(values.iter().map(|v| int32(*v)))
}

/// Builds string elements.
pub fn strings(values: &[&str]) -> Vec<Element> {
    elements(values.iter().map(|v| string(v)))
}
