//! The equality strategy registry.
//!
//! [`EqualityRegistry`] maps runtime types to [`EqualityStrategy`] values and
//! answers "are these two values equal?" for arbitrary objects:
//!
//! 1. Two absent values are equal; an absent and a present value are not.
//! 2. The same object is equal to itself.
//! 3. Values of the same runtime type use the strategy resolved for that
//!    type, or the type's native equality when none applies.
//! 4. Values of different runtime types are equal only when both are
//!    containers with structurally equal contents.
//!
//! Strategy resolution prefers an exact binding. Otherwise it walks the
//! type's ancestors (superclass chain first, then interfaces breadth-first)
//! and takes the first registered strategy found, remembering the answer
//! under the queried type. A strategy inherited from an interface is ignored
//! when the type declares its own equality. Array types with no other
//! strategy fall back to element-wise comparison.
//!
//! The registry is safe to share across threads. Lookups take a read lock;
//! memoizing a resolution takes the write lock briefly.
//!
//! [`EqualityStrategy`]: crate::EqualityStrategy


use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use equiv_core::{same_object, Element, EquivError, Object, Result, TypeKey, TypeRef};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::builder::RegistryBuilder;
use crate::builtin::ArrayStrategy;
use crate::compare::ContainerComparator;
use crate::module::RegistrationModule;
use crate::strategy::StrategyRef;

/// Where a binding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingOrigin {
    /// Bound explicitly through [`EqualityRegistry::register_strategy`].
    Registered,
    /// Resolved from an ancestor's binding and remembered.
    Memoized,
}

#[derive(Clone)]
struct Binding {
    strategy: StrategyRef,
    origin: BindingOrigin,
}

impl Binding {
    fn is_registered(&self) -> bool {
        self.origin == BindingOrigin::Registered
    }
}

#[derive(Default)]
struct RegistryState {
    bindings: HashMap<TypeKey, Binding>,
    // Resolved "declares its own equality" answers.
    own_equality: HashMap<TypeKey, bool>,
    own_equality_overrides: HashMap<TypeKey, bool>,
    // Non-array types known to resolve to no strategy.
    absent: HashSet<TypeKey>,
    // Bumped whenever a change can alter a resolution.
    generation: u64,
}

impl RegistryState {
    fn invalidate_resolutions(&mut self) {
        self.bindings.retain(|_, binding| binding.is_registered());
        self.absent.clear();
        self.generation += 1;
    }
}

#[derive(Debug, Default)]
struct Counters {
    hierarchy_walks: AtomicU64,
    fast_path_hits: AtomicU64,
}

/// Snapshot of registry activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Lookups that had to walk the type hierarchy.
    pub hierarchy_walks: u64,
    /// Lookups answered from an exact, memoized or cached-absent entry.
    pub fast_path_hits: u64,
    /// Explicitly registered bindings.
    pub registered: usize,
    /// Bindings remembered from hierarchy walks.
    pub memoized: usize,
}

/// Registry of equality strategies keyed by runtime type.
///
/// # Examples
///
/// ```
/// use equiv_core::value;
/// use equiv_dispatch::EqualityRegistry;
///
/// let registry = EqualityRegistry::with_builtins().unwrap();
///
/// let a = value::decimal("5.5").unwrap();
/// let b = value::decimal("5.50").unwrap();
/// assert!(registry.are_equal(Some(a.as_ref()), Some(b.as_ref())));
///
/// // A list and a deque with equal elements are equal sequences.
/// let list = value::list(value::ints(&[1, 2, 3]));
/// let deque = value::deque(value::ints(&[1, 2, 3]));
/// assert!(registry.are_equal(Some(list.as_ref()), Some(deque.as_ref())));
/// ```
pub struct EqualityRegistry {
    state: RwLock<RegistryState>,
    counters: Counters,
    array_strategy: StrategyRef,
    comparator: ContainerComparator,
}

impl EqualityRegistry {
    /// Creates a registry with no bindings.
    ///
    /// Same-type values fall back to native equality and arrays to
    /// element-wise comparison until strategies are registered.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            counters: Counters::default(),
            array_strategy: Arc::new(ArrayStrategy),
            comparator: ContainerComparator::new(),
        }
    }

    /// Creates a registry with every built-in strategy registered.
    pub fn with_builtins() -> Result<Self> {
        Self::builder().build()
    }

    /// Creates a registry as described by `config`.
    pub fn from_config(config: equiv_config::RegistryConfig) -> Result<Self> {
        Self::builder().with_config(config).build()
    }

    /// Creates a registry from a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Unreadable or invalid files are reported as [`EquivError::Config`].
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = equiv_config::RegistryConfig::load(path)
            .map_err(|err| EquivError::Config(err.to_string()))?;
        Self::from_config(config)
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Binds `strategy` to exactly `ty`.
    ///
    /// A binding remembered from an earlier hierarchy walk is replaced.
    ///
    /// # Errors
    ///
    /// Fails when `ty` is the universal base type, or when `ty` already has
    /// a registered strategy.
    pub fn register_strategy(&self, ty: &TypeRef, strategy: StrategyRef) -> Result<()> {
        if ty.is_universal() {
            return Err(EquivError::UniversalBaseType(ty.key().clone()));
        }

        let mut state = self.state.write();
        if state
            .bindings
            .get(ty.key())
            .is_some_and(Binding::is_registered)
        {
            return Err(EquivError::DuplicateBinding(ty.key().clone()));
        }

        debug!(
            event = "strategy_registered",
            type_name = ty.name(),
            strategy = strategy.name(),
        );
        state.invalidate_resolutions();
        state.bindings.insert(
            ty.key().clone(),
            Binding {
                strategy,
                origin: BindingOrigin::Registered,
            },
        );
        Ok(())
    }

    /// Removes the strategy registered for exactly `ty`.
    ///
    /// Returns false if `ty` had no registered strategy. Removing a binding
    /// discards resolutions remembered from earlier walks, so subtypes
    /// re-resolve against the remaining bindings.
    pub fn unregister_strategy(&self, ty: &TypeRef) -> bool {
        let mut state = self.state.write();
        let registered = state
            .bindings
            .get(ty.key())
            .is_some_and(Binding::is_registered);
        if !registered {
            return false;
        }

        state.bindings.remove(ty.key());
        state.invalidate_resolutions();
        debug!(event = "strategy_unregistered", type_name = ty.name());
        true
    }

    /// Overrides whether the named type counts as declaring its own equality.
    pub fn declare_own_equality(&self, ty: impl Into<TypeKey>, declares: bool) {
        let key = ty.into();
        let mut state = self.state.write();
        debug!(
            event = "own_equality_declared",
            type_name = key.as_str(),
            declares,
        );
        state.own_equality_overrides.insert(key.clone(), declares);
        state.own_equality.insert(key, declares);
        state.invalidate_resolutions();
    }

    /// Runs a registration module against this registry.
    ///
    /// # Errors
    ///
    /// Errors raised by the module are wrapped with its name.
    pub fn install(&self, module: &dyn RegistrationModule) -> Result<()> {
        debug!(event = "module_installing", module = module.name());
        module
            .register(self)
            .map_err(|err| err.in_module(module.name()))
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    /// Finds the strategy that applies to values of type `ty`.
    ///
    /// Returns `None` when values of `ty` should be compared with their own
    /// equality.
    pub fn resolve_strategy(&self, ty: &TypeRef) -> Option<StrategyRef> {
        let key = ty.key();
        let (generation, found) = {
            let state = self.state.read();
            if let Some(binding) = state.bindings.get(key) {
                self.counters.fast_path_hits.fetch_add(1, Ordering::Relaxed);
                return Some(binding.strategy.clone());
            }
            if state.absent.contains(key) {
                self.counters.fast_path_hits.fetch_add(1, Ordering::Relaxed);
                return None;
            }

            self.counters.hierarchy_walks.fetch_add(1, Ordering::Relaxed);
            let found = ty.ancestors().into_iter().find_map(|ancestor| {
                let strategy = state
                    .bindings
                    .get(ancestor.key())
                    .filter(|binding| binding.is_registered())
                    .map(|binding| binding.strategy.clone())?;
                Some((ancestor, strategy))
            });
            (state.generation, found)
        };

        match found {
            Some((ancestor, _)) if ancestor.is_interface() && self.implements_own_equality(ty) => {
                trace!(
                    event = "strategy_suppressed",
                    type_name = ty.name(),
                    interface = ancestor.name(),
                );
                self.remember_absent(ty, generation);
                None
            }
            Some((ancestor, strategy)) => Some(self.memoize(ty, &ancestor, strategy, generation)),
            None if ty.is_array() => Some(self.array_strategy.clone()),
            None => {
                self.remember_absent(ty, generation);
                None
            }
        }
    }

    fn memoize(
        &self,
        ty: &TypeRef,
        ancestor: &TypeRef,
        strategy: StrategyRef,
        generation: u64,
    ) -> StrategyRef {
        let mut state = self.state.write();
        if state.generation != generation {
            // Bindings changed since the walk; answer without remembering.
            return strategy;
        }
        match state.bindings.entry(ty.key().clone()) {
            Entry::Occupied(entry) => entry.get().strategy.clone(),
            Entry::Vacant(entry) => {
                trace!(
                    event = "strategy_memoized",
                    type_name = ty.name(),
                    ancestor = ancestor.name(),
                    strategy = strategy.name(),
                );
                entry
                    .insert(Binding {
                        strategy,
                        origin: BindingOrigin::Memoized,
                    })
                    .strategy
                    .clone()
            }
        }
    }

    fn remember_absent(&self, ty: &TypeRef, generation: u64) {
        let mut state = self.state.write();
        if state.generation == generation {
            state.absent.insert(ty.key().clone());
        }
    }

    /// Returns true if `ty` defines its own equality operation.
    ///
    /// An override from [`declare_own_equality`](Self::declare_own_equality)
    /// wins over the descriptor. Answers are cached per type.
    pub fn implements_own_equality(&self, ty: &TypeRef) -> bool {
        let cached = self.state.read().own_equality.get(ty.key()).copied();
        if let Some(declares) = cached {
            return declares;
        }

        let mut state = self.state.write();
        let declares = state
            .own_equality_overrides
            .get(ty.key())
            .copied()
            .unwrap_or_else(|| ty.declares_equality());
        *state.own_equality.entry(ty.key().clone()).or_insert(declares)
    }

    // ------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------

    /// Decides whether two possibly absent values are equal.
    pub fn are_equal(&self, a: Option<&dyn Object>, b: Option<&dyn Object>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.objects_equal(a, b),
            _ => false,
        }
    }

    /// [`are_equal`](Self::are_equal) for container elements.
    pub fn elements_equal(&self, a: &Element, b: &Element) -> bool {
        self.are_equal(a.as_deref(), b.as_deref())
    }

    /// Decides whether two present values are equal.
    pub fn objects_equal(&self, a: &dyn Object, b: &dyn Object) -> bool {
        if same_object(a, b) {
            return true;
        }

        let ty = a.runtime_type();
        if ty.key() == b.runtime_type().key() {
            return match self.resolve_strategy(ty) {
                Some(strategy) => strategy.equals(self, a, b),
                None => a.native_equals(b),
            };
        }

        match (
            ContainerComparator::classify(a),
            ContainerComparator::classify(b),
        ) {
            (Some(left), Some(right)) => self.comparator.compare(self, &left, &right),
            _ => false,
        }
    }

    /// The structural comparator used for containers.
    pub fn comparator(&self) -> &ContainerComparator {
        &self.comparator
    }

    /// The element-wise strategy array types fall back to.
    pub fn array_strategy(&self) -> &StrategyRef {
        &self.array_strategy
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Returns how `ty` is bound, if it has an exact binding.
    pub fn binding_origin(&self, ty: &TypeRef) -> Option<BindingOrigin> {
        self.state
            .read()
            .bindings
            .get(ty.key())
            .map(|binding| binding.origin)
    }

    /// Returns true if a strategy is registered for exactly `ty`.
    pub fn is_registered(&self, ty: &TypeRef) -> bool {
        self.binding_origin(ty) == Some(BindingOrigin::Registered)
    }

    /// Returns the explicitly registered types, sorted by name.
    pub fn registered_types(&self) -> Vec<TypeKey> {
        let state = self.state.read();
        let mut keys: Vec<TypeKey> = state
            .bindings
            .iter()
            .filter(|(_, binding)| binding.is_registered())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Returns the number of explicitly registered bindings.
    pub fn len(&self) -> usize {
        self.state
            .read()
            .bindings
            .values()
            .filter(|binding| binding.is_registered())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> RegistryStats {
        let state = self.state.read();
        let registered = state
            .bindings
            .values()
            .filter(|binding| binding.is_registered())
            .count();
        RegistryStats {
            hierarchy_walks: self.counters.hierarchy_walks.load(Ordering::Relaxed),
            fast_path_hits: self.counters.fast_path_hits.load(Ordering::Relaxed),
            registered,
            memoized: state.bindings.len() - registered,
        }
    }
}

impl Default for EqualityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EqualityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("EqualityRegistry")
            .field("registered", &stats.registered)
            .field("memoized", &stats.memoized)
            .finish()
    }
}
