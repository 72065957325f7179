//! Equality strategies.

use std::fmt;
use std::sync::Arc;

use equiv_core::Object;

use crate::registry::EqualityRegistry;

/// Shared handle to a strategy.
pub type StrategyRef = Arc<dyn EqualityStrategy>;

/// A pluggable algorithm deciding equality of two values of the same runtime type.
///
/// The registry only calls a strategy with two distinct, non-null objects
/// whose runtime types match the type the strategy was resolved for. The
/// registry is passed along so strategies can compare nested values.
pub trait EqualityStrategy: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns true if `a` equals `b`.
    fn equals(&self, registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool;
}

/// A strategy backed by a closure.
pub struct FnStrategy<F> {
    name: String,
    f: F,
}

impl<F> EqualityStrategy for FnStrategy<F>
where
    F: Fn(&EqualityRegistry, &dyn Object, &dyn Object) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn equals(&self, registry: &EqualityRegistry, a: &dyn Object, b: &dyn Object) -> bool {
        (self.f)(registry, a, b)
    }
}

impl<F> fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy").field("name", &self.name).finish()
    }
}

/// Wraps a closure as a shared strategy.
///
/// # Examples
///
/// ```
/// use equiv_core::value::StringValue;
/// use equiv_dispatch::strategy_fn;
///
/// let case_insensitive = strategy_fn("case-insensitive", |_, a, b| {
///     match (a.downcast_ref::<StringValue>(), b.downcast_ref::<StringValue>()) {
///         (Some(a), Some(b)) => a.get().eq_ignore_ascii_case(b.get()),
///         _ => false,
///     }
/// });
/// assert_eq!(case_insensitive.name(), "case-insensitive");
/// ```
pub fn strategy_fn<F>(name: impl Into<String>, f: F) -> StrategyRef
where
    F: Fn(&EqualityRegistry, &dyn Object, &dyn Object) -> bool + Send + Sync + 'static,
{
    Arc::new(FnStrategy {
        name: name.into(),
        f,
    })
}

/// Downcasts both sides to `T`, or returns `None` if either is not a `T`.
pub(crate) fn downcast_pair<'a, T: Object>(
    a: &'a dyn Object,
    b: &'a dyn Object,
) -> Option<(&'a T, &'a T)> {
    Some((a.downcast_ref::<T>()?, b.downcast_ref::<T>()?))
}
