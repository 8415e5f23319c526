//! Node box estimate from a node's attribute map.

use crate::visual::Size;
use serde_json::{Map, Value};

pub const BASE_WIDTH: f64 = 450.0;
pub const BASE_HEIGHT: f64 = 180.0;
pub const MAX_WIDTH: f64 = 700.0;
const ROW_HEIGHT: f64 = 44.0;
const SECTION_HEADER_HEIGHT: f64 = 40.0;
const OUTPUT_SECTION_HEIGHT: f64 = 60.0;
const WIDTH_PER_ROW: f64 = 20.0;

/// Box size for a node whose payload is `attributes`.
///
/// Socket properties (fields holding a `node` reference) and regular properties each get a
/// section; `$`-prefixed fields and `HandleId` are not shown and do not count.
pub fn estimate_size(attributes: &Map<String, Value>) -> Size {
    let mut sockets: usize = 0;
    let mut regular: usize = 0;
    for (key, value) in attributes {
        if key.starts_with('$') || key == "HandleId" {
            continue;
        }
        if is_node_reference(value) {
            sockets += 1;
        } else {
            regular += 1;
        }
    }

    let height =
        BASE_HEIGHT + section_height(sockets) + section_height(regular) + OUTPUT_SECTION_HEIGHT;
    let width = BASE_WIDTH
        .max(MAX_WIDTH.min(BASE_WIDTH + sockets.max(regular) as f64 * WIDTH_PER_ROW));
    Size { width, height }
}

fn section_height(rows: usize) -> f64 {
    if rows == 0 {
        0.0
    } else {
        rows as f64 * ROW_HEIGHT + SECTION_HEADER_HEIGHT
    }
}

/// `{"node": {"HandleId": ..}}` or `{"node": {"HandleRefId": ..}}` with a truthy id.
fn is_node_reference(value: &Value) -> bool {
    let Some(node) = value.as_object().and_then(|o| o.get("node")) else {
        return false;
    };
    let Some(node) = node.as_object() else {
        return false;
    };
    ["HandleId", "HandleRefId"]
        .iter()
        .any(|key| node.get(*key).is_some_and(is_truthy))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
