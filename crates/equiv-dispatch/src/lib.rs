//! Equiv Dispatch - hierarchy-aware equality
//!
//! This crate decides whether two arbitrary values are equal:
//! - [`EqualityRegistry`] maps runtime types to [`EqualityStrategy`] values,
//!   resolving through superclasses and interfaces and remembering answers
//! - [`ContainerComparator`] compares lists, sets, maps and arrays by
//!   structure, regardless of their concrete implementation
//! - Built-in strategies for decimals, floats, text buffers, document
//!   nodes, locators, atomics, paths, containers and arrays
//! - [`RegistrationModule`] and [`RegistryBuilder`] for wiring application
//!   types in at startup

pub mod builder;
pub mod builtin;
pub mod compare;
pub mod module;
pub mod registry;
pub mod strategy;

pub use builder::RegistryBuilder;
pub use builtin::BuiltinModule;
pub use compare::ContainerComparator;
pub use module::{module_fn, FnModule, RegistrationModule};
pub use registry::{BindingOrigin, EqualityRegistry, RegistryStats};
pub use strategy::{strategy_fn, EqualityStrategy, FnStrategy, StrategyRef};
