//! Renderer-neutral projection of an extracted graph: one box per node, one wire per edge.

use crate::colors::color_for;
use animgraph_core::{Graph, NodeRecord};
use animgraph_layout::{
    LayoutOptions, LayoutStrategy, VisualEdge, VisualNode, arrange_with_options, estimate_size,
};
use rustc_hash::FxHashSet as HashSet;
use serde::Serialize;
use serde_json::Value;

/// Every edge leaves its source through this handle.
pub const OUTPUT_HANDLE: &str = "output";

const PROVISIONAL_COLUMNS: usize = 5;
const PROVISIONAL_PITCH_X: f64 = 450.0;
const PROVISIONAL_PITCH_Y: f64 = 300.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    #[serde(flatten)]
    pub visual: VisualNode,
    pub label: String,
    /// Type tag without the `animAnimNode_` namespace.
    pub node_type: String,
    pub color: String,
    pub input_sockets: Vec<String>,
}

impl SceneNode {
    pub fn id(&self) -> &str {
        &self.visual.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneEdge {
    #[serde(flatten)]
    pub visual: VisualEdge,
    pub source_handle: String,
}

impl SceneEdge {
    /// The input socket on the target; same as `visual.socket`.
    pub fn target_handle(&self) -> &str {
        &self.visual.socket
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

impl Scene {
    /// One node per registry entry (registry order, provisional 5-wide grid positions) and one
    /// edge per graph edge, with ids `edge-{index}`.
    pub fn project(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .enumerate()
            .map(|(i, record)| project_node(i, record))
            .collect();
        let edges = graph
            .edges
            .iter()
            .enumerate()
            .map(|(i, e)| SceneEdge {
                visual: VisualEdge::new(
                    format!("edge-{i}"),
                    e.source.clone(),
                    e.target.clone(),
                    e.socket.clone(),
                ),
                source_handle: OUTPUT_HANDLE.to_string(),
            })
            .collect();
        Self { nodes, edges }
    }

    /// Repositions every node in place; node order is left untouched.
    pub fn arrange(&mut self, options: &LayoutOptions) -> LayoutStrategy {
        let visual_nodes: Vec<VisualNode> = self.nodes.iter().map(|n| n.visual.clone()).collect();
        let visual_edges: Vec<VisualEdge> = self.edges.iter().map(|e| e.visual.clone()).collect();

        let result = arrange_with_options(&visual_nodes, &visual_edges, options);
        let positions = result.positions();
        for node in &mut self.nodes {
            if let Some(p) = positions.get(node.id()) {
                node.visual.position = *p;
            }
        }
        result.strategy
    }

    /// Nodes whose type is in `types`, and the edges whose both ends survive.
    ///
    /// An empty selection keeps everything.
    pub fn filter_types<S: AsRef<str>>(&self, types: &[S]) -> Scene {
        if types.is_empty() {
            return self.clone();
        }
        let selected: HashSet<&str> = types.iter().map(|s| s.as_ref()).collect();
        let nodes: Vec<SceneNode> = self
            .nodes
            .iter()
            .filter(|n| selected.contains(n.node_type.as_str()))
            .cloned()
            .collect();
        let visible: HashSet<&str> = nodes.iter().map(SceneNode::id).collect();
        let edges = self
            .edges
            .iter()
            .filter(|e| {
                visible.contains(e.visual.source.as_str())
                    && visible.contains(e.visual.target.as_str())
            })
            .cloned()
            .collect();
        Scene { nodes, edges }
    }

    /// Distinct node types, sorted.
    pub fn available_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.nodes.iter().map(|n| n.node_type.clone()).collect();
        types.sort();
        types.dedup();
        types
    }

    /// Looks a node up by `HandleId`; surrounding whitespace is ignored.
    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        let id = id.trim();
        self.nodes.iter().find(|n| n.id() == id)
    }
}

fn project_node(index: usize, record: &NodeRecord) -> SceneNode {
    let size = estimate_size(&record.attributes);
    let col = (index % PROVISIONAL_COLUMNS) as f64;
    let row = (index / PROVISIONAL_COLUMNS) as f64;
    let visual = VisualNode::new(record.id.clone(), size.width, size.height)
        .at(col * PROVISIONAL_PITCH_X, row * PROVISIONAL_PITCH_Y);

    SceneNode {
        visual,
        label: label_for(record),
        node_type: record.type_tag.clone(),
        color: color_for(&record.type_tag).to_string(),
        input_sockets: input_sockets(&record.type_tag, record),
    }
}

/// `State: <name>` for states, `<type>: <animation>` for nodes playing an animation, otherwise
/// the type.
pub fn label_for(record: &NodeRecord) -> String {
    let ty = record.type_tag.as_str();
    if ty == "State" {
        if let Some(name) = record.attribute_text("name") {
            return format!("State: {name}");
        }
    }
    match record.attribute_text("animation") {
        Some(anim) if !anim.is_empty() && anim != "None" => format!("{ty}: {anim}"),
        _ => ty.to_string(),
    }
}

/// Input sockets a node of `node_type` exposes.
pub fn input_sockets(node_type: &str, record: &NodeRecord) -> Vec<String> {
    let fixed = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    match node_type {
        "Root" => fixed(&["outputNode"]),
        "Output" => fixed(&["node"]),
        "Blend2" => fixed(&["firstInputNode", "secondInputNode", "weightNode"]),
        "BlendAdditive" => fixed(&["inputNode", "addedInputNode", "weightNode"]),
        "BlendOverride" => fixed(&["inputNode", "overrideInputNode", "weightNode"]),
        "BlendMultiple" | "Switch" => {
            let mut sockets = fixed(&["weightNode"]);
            sockets.extend(indexed(record, "inputNodes"));
            sockets
        }
        "StateMachine" => {
            let mut sockets = indexed(record, "states");
            sockets.extend(indexed(record, "transitions"));
            sockets
        }
        _ => fixed(&["inputLink"]),
    }
}

fn indexed(record: &NodeRecord, field: &str) -> Vec<String> {
    match record.attribute(field) {
        Some(Value::Array(items)) => (0..items.len())
            .map(|i| format!("{field}[{i}]"))
            .collect(),
        _ => Vec::new(),
    }
}
