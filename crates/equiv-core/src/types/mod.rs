//! Runtime type descriptors.
//!
//! A [`TypeDescriptor`] is the runtime identity of an [`Object`](crate::Object):
//! its name, whether it is a class, an interface or an array, its superclass,
//! the interfaces it implements and whether it declares its own equality.
//!
//! Descriptors are immutable and shared as [`TypeRef`]. Two descriptors denote
//! the same type when their names match; names are the registry's map keys.

pub mod well_known;

#[cfg(test)]
mod tests;

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::object::ContainerShape;

/// Shared handle to a type descriptor.
pub type TypeRef = Arc<TypeDescriptor>;

/// Identity of a runtime type.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(Arc<str>);

impl TypeKey {
    /// Creates a key from a type name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        TypeKey(name.into())
    }

    /// Returns the type name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.0)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeKey {
    fn from(name: &str) -> Self {
        TypeKey::new(name)
    }
}

impl From<String> for TypeKey {
    fn from(name: String) -> Self {
        TypeKey::new(name)
    }
}

impl From<&TypeRef> for TypeKey {
    fn from(ty: &TypeRef) -> Self {
        ty.key.clone()
    }
}

/// What sort of type a descriptor describes.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// A concrete (instantiable) type.
    Class,
    /// A capability implemented by classes; never the runtime type of an object.
    Interface,
    /// A fixed-size array of `component` elements.
    Array { component: TypeRef },
}

/// Describes a type at runtime.
pub struct TypeDescriptor {
    key: TypeKey,
    kind: TypeKind,
    superclass: Option<TypeRef>,
    interfaces: Vec<TypeRef>,
    declares_equality: bool,
    shape: OnceLock<Option<ContainerShape>>,
}

impl TypeDescriptor {
    /// Starts building a class. Without [`extends`](TypeBuilder::extends) the
    /// class extends the universal base type.
    pub fn class(name: impl Into<Arc<str>>) -> TypeBuilder {
        TypeBuilder::new(name, TypeKind::Class)
    }

    /// Starts building an interface.
    pub fn interface(name: impl Into<Arc<str>>) -> TypeBuilder {
        TypeBuilder::new(name, TypeKind::Interface)
    }

    /// Creates the array type whose elements are `component`.
    ///
    /// Array types are named `[]` followed by the component name, so two
    /// separately created array types over the same component are the same type.
    pub fn array_of(component: &TypeRef) -> TypeRef {
        Arc::new(TypeDescriptor {
            key: TypeKey::new(format!("[]{}", component.name())),
            kind: TypeKind::Array {
                component: component.clone(),
            },
            superclass: Some(well_known::object().clone()),
            interfaces: Vec::new(),
            declares_equality: false,
            shape: OnceLock::new(),
        })
    }

    pub(crate) fn universal(name: &str) -> TypeRef {
        Arc::new(TypeDescriptor {
            key: TypeKey::new(name),
            kind: TypeKind::Class,
            superclass: None,
            interfaces: Vec::new(),
            declares_equality: false,
            shape: OnceLock::new(),
        })
    }

    /// Returns the type's identity.
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        self.key.as_str()
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Returns the direct superclass; `None` only for the universal base type
    /// and for interfaces.
    pub fn superclass(&self) -> Option<&TypeRef> {
        self.superclass.as_ref()
    }

    /// Returns the directly implemented (or, for interfaces, extended) interfaces.
    pub fn interfaces(&self) -> &[TypeRef] {
        &self.interfaces
    }

    /// Returns true if the type itself defines its equality operation rather
    /// than inheriting identity equality.
    pub fn declares_equality(&self) -> bool {
        self.declares_equality
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface)
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array { .. })
    }

    /// Returns the element type of an array type.
    pub fn component(&self) -> Option<&TypeRef> {
        match &self.kind {
            TypeKind::Array { component } => Some(component),
            _ => None,
        }
    }

    /// Returns true for the type every class ultimately extends.
    ///
    /// Types are identified by key, so any descriptor named
    /// [`well_known::OBJECT`] counts, whatever its kind or ancestry.
    pub fn is_universal(&self) -> bool {
        self.key.as_str() == well_known::OBJECT
            || (matches!(self.kind, TypeKind::Class) && self.superclass.is_none())
    }

    /// Returns all ancestors in lookup order.
    ///
    /// The superclass chain comes first, nearest first. Interfaces follow in
    /// breadth-first order: those declared by this type, then those declared by
    /// each superclass in chain order, then their super-interfaces. Every
    /// ancestor appears once.
    pub fn ancestors(&self) -> Vec<TypeRef> {
        let mut chain = Vec::new();
        let mut current = self.superclass.clone();
        while let Some(class) = current {
            current = class.superclass.clone();
            chain.push(class);
        }

        let mut pending: VecDeque<TypeRef> = self.interfaces.iter().cloned().collect();
        for class in &chain {
            pending.extend(class.interfaces.iter().cloned());
        }

        let mut seen: HashSet<TypeKey> = HashSet::new();
        let mut ancestors = Vec::with_capacity(chain.len() + pending.len());
        for class in chain {
            if seen.insert(class.key.clone()) {
                ancestors.push(class);
            }
        }
        while let Some(iface) = pending.pop_front() {
            if !seen.insert(iface.key.clone()) {
                continue;
            }
            pending.extend(iface.interfaces.iter().cloned());
            ancestors.push(iface);
        }
        ancestors
    }

    /// Returns true if `other` is this type or one of its ancestors.
    pub fn is_subtype_of(&self, other: &TypeDescriptor) -> bool {
        self.key == other.key || self.ancestors().iter().any(|a| a.key == other.key)
    }

    /// Returns the container shape of values of this type, if any.
    ///
    /// Computed once per descriptor from the well-known container interfaces.
    pub fn container_shape(&self) -> Option<ContainerShape> {
        *self.shape.get_or_init(|| {
            if self.is_array() {
                return Some(ContainerShape::Array);
            }
            let mut keys = vec![self.key.clone()];
            keys.extend(self.ancestors().iter().map(|a| a.key.clone()));
            well_known::shape_of(&keys)
        })
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name())
            .field("kind", &self.kind)
            .field("superclass", &self.superclass.as_ref().map(|s| s.name()))
            .field("interfaces", &self.interfaces.len())
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builder for class and interface descriptors.
pub struct TypeBuilder {
    name: Arc<str>,
    kind: TypeKind,
    superclass: Option<TypeRef>,
    interfaces: Vec<TypeRef>,
    declares_equality: bool,
}

impl TypeBuilder {
    fn new(name: impl Into<Arc<str>>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            superclass: None,
            interfaces: Vec::new(),
            declares_equality: false,
        }
    }

    /// Sets the superclass of a class, or adds a super-interface to an interface.
    pub fn extends(mut self, parent: &TypeRef) -> Self {
        match self.kind {
            TypeKind::Interface => self.interfaces.push(parent.clone()),
            _ => {
                debug_assert!(!parent.is_interface(), "a class cannot extend an interface");
                self.superclass = Some(parent.clone());
            }
        }
        self
    }

    /// Adds an implemented interface.
    pub fn implements(mut self, iface: &TypeRef) -> Self {
        debug_assert!(iface.is_interface(), "only interfaces can be implemented");
        self.interfaces.push(iface.clone());
        self
    }

    /// Marks the type as defining its own equality operation.
    pub fn declares_equality(mut self) -> Self {
        self.declares_equality = true;
        self
    }

    /// Builds the descriptor.
    pub fn build(self) -> TypeRef {
        let superclass = match self.kind {
            TypeKind::Interface => None,
            _ => Some(
                self.superclass
                    .unwrap_or_else(|| well_known::object().clone()),
            ),
        };
        Arc::new(TypeDescriptor {
            key: TypeKey::new(self.name),
            kind: self.kind,
            superclass,
            interfaces: self.interfaces,
            declares_equality: self.declares_equality,
            shape: OnceLock::new(),
        })
    }
}
