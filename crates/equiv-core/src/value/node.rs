//! DOM-like document trees.

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::object::Object;
use crate::types::{well_known, TypeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    CData,
    Comment,
    ProcessingInstruction,
}

/// A node of a document tree.
///
/// Nodes have identity equality; structural comparison is left to the
/// registry's node strategy.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    name: Option<Arc<str>>,
    namespace: Option<Arc<str>>,
    value: Option<Arc<str>>,
    attributes: BTreeMap<Arc<str>, Arc<str>>,
    children: Vec<Arc<Node>>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: None,
            namespace: None,
            value: None,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn document() -> Self {
        Self::new(NodeKind::Document)
    }

    /// Creates an element with a local name and optional namespace URI.
    pub fn element(namespace: Option<&str>, name: &str) -> Self {
        Self {
            name: Some(name.into()),
            namespace: namespace.map(Into::into),
            ..Self::new(NodeKind::Element)
        }
    }

    pub fn text(value: &str) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(NodeKind::Text)
        }
    }

    pub fn cdata(value: &str) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(NodeKind::CData)
        }
    }

    pub fn comment(value: &str) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(NodeKind::Comment)
        }
    }

    pub fn processing_instruction(target: &str, data: &str) -> Self {
        Self {
            name: Some(target.into()),
            value: Some(data.into()),
            ..Self::new(NodeKind::ProcessingInstruction)
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Attributes ordered by name.
    pub fn attributes(&self) -> &BTreeMap<Arc<str>, Arc<str>> {
        &self.attributes
    }

    pub fn children(&self) -> &[Arc<Node>] {
        &self.children
    }
}

impl Object for Node {
    fn runtime_type(&self) -> &TypeRef {
        well_known::dom_node()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
