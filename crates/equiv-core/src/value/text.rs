//! Mutable text buffer.

use std::any::Any;
use std::fmt;

use parking_lot::RwLock;

use crate::object::Object;
use crate::types::{well_known, TypeRef};

/// A growable, shared text buffer.
///
/// Like most builder types it has no equality of its own: two buffers are
/// natively equal only when they are the same buffer.
#[derive(Default)]
pub struct StringBuilderValue {
    buf: RwLock<String>,
}

impl StringBuilderValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends text to the buffer.
    pub fn push_str(&self, text: &str) {
        self.buf.write().push_str(text);
    }

    /// Empties the buffer.
    pub fn clear(&self) {
        self.buf.write().clear();
    }

    /// Returns a copy of the current content.
    pub fn contents(&self) -> String {
        self.buf.read().clone()
    }

    /// Runs `f` with the current content without copying it.
    pub fn with_contents<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(&self.buf.read())
    }

    pub fn len(&self) -> usize {
        self.buf.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.read().is_empty()
    }
}

impl From<&str> for StringBuilderValue {
    fn from(text: &str) -> Self {
        Self {
            buf: RwLock::new(text.to_string()),
        }
    }
}

impl fmt::Debug for StringBuilderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StringBuilderValue")
            .field(&*self.buf.read())
            .finish()
    }
}

impl Object for StringBuilderValue {
    fn runtime_type(&self) -> &TypeRef {
        well_known::string_builder()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
