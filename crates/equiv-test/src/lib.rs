//! Shared test fixtures for equiv crates.
//!
//! This crate provides application-style types for testing equality
//! dispatch. It depends only on `equiv-core` so every other crate can use
//! it as a dev-dependency.
//!
//! - [`record`] - User classes with configurable hierarchies
//! - [`containers`] - User containers, including one that defines its own equality
//! - [`resolver`] - A host resolver that counts lookups
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! equiv-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use equiv_test::record::{RecordObject, record_type};
//! use equiv_test::resolver::CountingResolver;
//! ```

pub mod containers;
pub mod record;
pub mod resolver;

pub use containers::{lru_cache_type, BagList, LruCacheMap, OpaqueList};
pub use record::{record_type, RecordObject};
pub use resolver::CountingResolver;
