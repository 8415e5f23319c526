use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// A graph node recovered from the document, keyed by its `HandleId`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: String,
    /// Payload tag without the `animAnimNode_` namespace.
    pub type_tag: String,
    /// Payload tag as written in the document.
    pub raw_type: String,
    /// The node payload (`Data`), including its `$type`.
    pub attributes: Map<String, Value>,
}

impl NodeRecord {
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Reads a name-like attribute, unwrapping the `{"$value": ...}` envelope used for CName and
    /// resource path fields.
    pub fn attribute_text(&self, name: &str) -> Option<&str> {
        let value = self.attributes.get(name)?;
        match value {
            Value::String(s) => Some(s.as_str()),
            Value::Object(obj) => match obj.get("$value") {
                Some(Value::String(s)) => Some(s.as_str()),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A directed connection: `source` feeds `target` through the `socket` input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub socket: String,
}

impl Edge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        socket: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            socket: socket.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ExtractWarning {
    /// A branch deeper than the configured ceiling was not visited.
    #[serde(rename_all = "camelCase")]
    DepthLimitReached {
        socket: Option<String>,
        depth: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    pub registry: IndexMap<String, NodeRecord>,
    pub edges: Vec<Edge>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ExtractWarning>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&NodeRecord> {
        self.registry.get(id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.registry.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeRecord> {
        self.registry.values()
    }

    /// Edges feeding `target`, in discovery order.
    pub fn in_edges<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.target == target)
    }

    /// Edges leaving `source`, in discovery order.
    pub fn out_edges<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.source == source)
    }

    /// `true` when the depth ceiling cut off at least one branch.
    pub fn is_partial(&self) -> bool {
        !self.warnings.is_empty()
    }
}
