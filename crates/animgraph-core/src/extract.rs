//! Node and edge recovery.
//!
//! AnimGraph documents carry no adjacency list. Nodes are objects with a `HandleId` and a typed
//! `Data` payload; edges are implied by where a node definition (or a `HandleRefId`
//! back-reference) sits relative to the node that contains it. The walk below is a single
//! depth-first pass that records, for every nested node, an edge from the nested node (the
//! producer) to the enclosing node (the consumer) under the field path it was found at.

use crate::classify::{TypeClass, display_type};
use crate::model::{Edge, ExtractWarning, Graph, NodeRecord};
use crate::{Error, ExtractOptions, Result};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Location of the node-init collection: `Data.RootChunk.nodesToInit`.
pub const ROOT_PATH: [&str; 3] = ["Data", "RootChunk", "nodesToInit"];

const HANDLE_ID: &str = "HandleId";
const HANDLE_REF_ID: &str = "HandleRefId";
const PAYLOAD: &str = "Data";
const TYPE_TAG: &str = "$type";
const LINK_TARGET: &str = "node";

/// Extracts the node registry and edge list with default options.
pub fn extract(document: &Value) -> Result<Graph> {
    extract_with_options(document, &ExtractOptions::default())
}

pub fn extract_with_options(document: &Value, options: &ExtractOptions) -> Result<Graph> {
    let roots = root_entries(document)?;
    let walked = if options.all_roots { roots.len() } else { 1 };

    let mut cx = ExtractContext::new(options);
    for entry in roots.iter().take(walked) {
        cx.visit(entry, None, None, 0);
    }
    let graph = cx.finish();

    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        truncated = graph.warnings.len(),
        "extracted animgraph"
    );
    Ok(graph)
}

fn root_entries(document: &Value) -> Result<&[Value]> {
    let mut cur = document;
    for segment in ROOT_PATH {
        cur = cur
            .get(segment)
            .ok_or_else(|| Error::invalid_document(format!("'{segment}' not found")))?;
    }
    let Value::Array(entries) = cur else {
        return Err(Error::invalid_document("'nodesToInit' is not an array"));
    };
    let Some(first) = entries.first() else {
        return Err(Error::invalid_document("'nodesToInit' is empty"));
    };
    if first.get(PAYLOAD).is_none_or(Value::is_null) {
        return Err(Error::invalid_document(
            "first 'nodesToInit' entry has no 'Data' payload",
        ));
    }
    Ok(entries)
}

/// Mutable state threaded through the walk.
struct ExtractContext<'o> {
    options: &'o ExtractOptions,
    registry: IndexMap<String, NodeRecord>,
    edges: Vec<Edge>,
    warnings: Vec<ExtractWarning>,
}

impl<'o> ExtractContext<'o> {
    fn new(options: &'o ExtractOptions) -> Self {
        Self {
            options,
            registry: IndexMap::new(),
            edges: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn finish(self) -> Graph {
        Graph {
            registry: self.registry,
            edges: self.edges,
            warnings: self.warnings,
        }
    }

    fn visit(&mut self, value: &Value, parent: Option<&str>, socket: Option<&str>, depth: usize) {
        if !(value.is_array() || value.is_object()) {
            return;
        }
        if depth > self.options.max_depth {
            tracing::warn!(
                depth,
                socket = socket.unwrap_or(""),
                "depth limit reached; branch not extracted"
            );
            self.warnings.push(ExtractWarning::DepthLimitReached {
                socket: socket.map(str::to_string),
                depth,
            });
            return;
        }

        match value {
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    let indexed = indexed_socket(socket, idx);
                    self.visit(item, parent, Some(&indexed), depth + 1);
                }
            }
            Value::Object(obj) => self.visit_object(obj, parent, socket, depth),
            _ => {}
        }
    }

    fn visit_object(
        &mut self,
        obj: &Map<String, Value>,
        parent: Option<&str>,
        socket: Option<&str>,
        depth: usize,
    ) {
        if let Some((id, payload, raw_type)) = self.node_boundary(obj) {
            self.visit_node(id, payload, raw_type, parent, socket, depth);
            return;
        }

        if let Some(ref_id) = obj.get(HANDLE_REF_ID).and_then(handle_text) {
            if let (Some(parent), Some(socket)) = (parent, socket) {
                self.connect(&ref_id, parent, socket);
            }
            return;
        }

        let class = obj
            .get(TYPE_TAG)
            .and_then(Value::as_str)
            .map_or(TypeClass::Plain, |tag| self.options.catalog.classify(tag));
        if class == TypeClass::Link {
            // The wrapper is transparent: whatever it points at feeds the current socket.
            if let Some(target) = obj.get(LINK_TARGET) {
                self.visit(target, parent, socket, depth + 1);
            }
            return;
        }

        for (key, value) in obj {
            if key == TYPE_TAG {
                continue;
            }
            self.visit(value, parent, Some(key), depth + 1);
        }
    }

    fn visit_node(
        &mut self,
        id: String,
        payload: &Map<String, Value>,
        raw_type: &str,
        parent: Option<&str>,
        socket: Option<&str>,
        depth: usize,
    ) {
        if !self.registry.contains_key(&id) {
            tracing::debug!(id = %id, node_type = raw_type, "registered node");
            self.registry.insert(
                id.clone(),
                NodeRecord {
                    id: id.clone(),
                    type_tag: display_type(raw_type).to_string(),
                    raw_type: raw_type.to_string(),
                    attributes: payload.clone(),
                },
            );

            for (key, value) in payload {
                if key == TYPE_TAG {
                    continue;
                }
                self.visit(value, Some(&id), Some(key), depth + 1);
            }
        }

        if let (Some(parent), Some(socket)) = (parent, socket) {
            self.connect(&id, parent, socket);
        }
    }

    /// Records `source -> target` only when both ends are registered.
    fn connect(&mut self, source: &str, target: &str, socket: &str) {
        if !(self.registry.contains_key(source) && self.registry.contains_key(target)) {
            tracing::debug!(source, target, socket, "skipped reference to unregistered node");
            return;
        }
        tracing::debug!(source, target, socket, "connection");
        self.edges.push(Edge::new(source, target, socket));
    }

    fn node_boundary<'v>(
        &self,
        obj: &'v Map<String, Value>,
    ) -> Option<(String, &'v Map<String, Value>, &'v str)> {
        let id = obj.get(HANDLE_ID).and_then(handle_text)?;
        let payload = obj.get(PAYLOAD)?.as_object()?;
        let raw_type = payload.get(TYPE_TAG)?.as_str()?;
        match self.options.catalog.classify(raw_type) {
            TypeClass::Node => Some((id, payload, raw_type)),
            TypeClass::Link | TypeClass::Plain => None,
        }
    }
}

/// Handle ids are usually strings (`"12"`), but integer ids are accepted as well.
fn handle_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
        _ => None,
    }
}

fn indexed_socket(socket: Option<&str>, idx: usize) -> String {
    match socket {
        Some(socket) => format!("{socket}[{idx}]"),
        None => format!("[{idx}]"),
    }
}
