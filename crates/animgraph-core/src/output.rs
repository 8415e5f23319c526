//! What a node emits into the socket it feeds.
//!
//! Consumers show this next to a connected input (e.g. `weightNode <- Input: Speed`). The value
//! is a summary, not an evaluation: constants report their literal, named inputs and variables
//! report their name, everything else reports its value kind.

use crate::model::{Graph, NodeRecord};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Float,
    Bool,
    Int,
    Vector,
    Pose,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputValue {
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub value: Value,
}

impl OutputValue {
    fn literal(kind: ValueKind, node: &NodeRecord) -> Self {
        Self {
            kind,
            value: node.attribute("value").cloned().unwrap_or(Value::Null),
        }
    }

    fn described(kind: ValueKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            value: Value::String(text.into()),
        }
    }
}

pub fn output_value(node: &NodeRecord) -> OutputValue {
    let named = |field: &str| node.attribute_text(field).unwrap_or("Unknown");

    match node.raw_type.as_str() {
        "animAnimNode_FloatConstant" => OutputValue::literal(ValueKind::Float, node),
        "animAnimNode_BoolConstant" => OutputValue::literal(ValueKind::Bool, node),
        "animAnimNode_IntConstant" => OutputValue::literal(ValueKind::Int, node),
        "animAnimNode_VectorConstant" => OutputValue::literal(ValueKind::Vector, node),
        "animAnimNode_FloatInput" => {
            OutputValue::described(ValueKind::Float, format!("Input: {}", named("name")))
        }
        "animAnimNode_BoolInput" => {
            OutputValue::described(ValueKind::Bool, format!("Input: {}", named("name")))
        }
        "animAnimNode_SkAnim" => OutputValue::described(
            ValueKind::Pose,
            format!("Animation: {}", named("animation")),
        ),
        "animAnimNode_FloatVariable" => OutputValue::described(
            ValueKind::Float,
            format!("Variable: {}", named("variableName")),
        ),
        "animAnimNode_State" => {
            OutputValue::described(ValueKind::Pose, format!("State: {}", named("name")))
        }
        "animAnimNode_StateMachine" => {
            OutputValue::described(ValueKind::Pose, "State Machine Output")
        }
        other => {
            if other.contains("Blend") || other.contains("Mix") || other.contains("State") {
                OutputValue::described(ValueKind::Pose, "Pose Output")
            } else if other.contains("Float") {
                OutputValue::described(ValueKind::Float, "Float Output")
            } else if other.contains("Bool") {
                OutputValue::described(ValueKind::Bool, "Bool Output")
            } else {
                OutputValue::described(ValueKind::Unknown, "Output")
            }
        }
    }
}

impl Graph {
    /// Output value feeding each connected input, keyed `"{target}-{socket}"`.
    ///
    /// When several edges land on the same key the last one wins.
    pub fn connection_values(&self) -> IndexMap<String, OutputValue> {
        let mut out: IndexMap<String, OutputValue> = IndexMap::new();
        for edge in &self.edges {
            let Some(source) = self.registry.get(&edge.source) else {
                continue;
            };
            out.insert(
                format!("{}-{}", edge.target, edge.socket),
                output_value(source),
            );
        }
        out
    }
}
