//! Locators and file paths.
//!
//! Both compare by a normalized textual form. Neither touches the network
//! or the file system.

use equiv_core::value::{FileHandle, Locator};
use equiv_core::Object;

use crate::registry::EqualityRegistry;
use crate::strategy::{downcast_pair, EqualityStrategy};

/// Compares locators by external form, never resolving host names.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocatorStrategy;

impl EqualityStrategy for LocatorStrategy {
    fn name(&self) -> &str {
        "locator-external-form"
    }

    fn equals(&self, _registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool {
        match downcast_pair::<Locator>(a, b) {
            Some((x, y)) => x.external_form() == y.external_form(),
            None => a.native_equals(b),
        }
    }
}

/// Compares file handles by canonical path.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathStrategy;

impl EqualityStrategy for PathStrategy {
    fn name(&self) -> &str {
        "path-canonical"
    }

    fn equals(&self, _registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool {
        match downcast_pair::<FileHandle>(a, b) {
            Some((x, y)) => x.canonical_form() == y.canonical_form(),
            None => a.native_equals(b),
        }
    }
}
