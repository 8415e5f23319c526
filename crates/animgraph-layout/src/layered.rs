//! Layered (Sugiyama-style) placement.
//!
//! Phases, in order: coordinate-system adjust, acyclic, rank, normalize, order, position,
//! normalize undo, acyclic undo, coordinate-system undo, translate. Every phase is a bounded pass;
//! the result is validated before anything leaves this module.

use crate::error::{LayoutError, Result};
use crate::model::{EdgeLabel, NodeLabel, Point};
use crate::options::LayoutOptions;
use crate::visual::{VisualEdge, VisualNode};
use crate::{LayoutGraph, acyclic, coordinate_system, normalize, order, position, rank};
use indexmap::IndexMap;

/// Top-left positions for `nodes`, keyed by id in input order.
///
/// Edges whose endpoints are not both in `nodes` are ignored, as are self-loops.
pub fn layered(
    nodes: &[VisualNode],
    edges: &[VisualEdge],
    options: &LayoutOptions,
) -> Result<IndexMap<String, Point>> {
    let mut g = build_graph(nodes, edges, options)?;
    run_layout(&mut g)?;

    let mut positions: IndexMap<String, Point> = IndexMap::with_capacity(nodes.len());
    for n in nodes {
        let label = g.node(&n.id).ok_or_else(|| LayoutError::MissingRank {
            id: n.id.clone(),
        })?;
        let centre = centre_of(&n.id, label)?;
        let top_left = Point::new(centre.x - n.width / 2.0, centre.y - n.height / 2.0);
        if !top_left.is_finite() {
            return Err(LayoutError::NonFiniteCoordinate {
                id: n.id.clone(),
                x: top_left.x,
                y: top_left.y,
            });
        }
        positions.insert(n.id.clone(), top_left);
    }
    Ok(positions)
}

pub fn build_graph(
    nodes: &[VisualNode],
    edges: &[VisualEdge],
    options: &LayoutOptions,
) -> Result<LayoutGraph> {
    let mut g = LayoutGraph::new();
    g.set_graph(options.graph_label());

    for n in nodes {
        if !(n.width.is_finite() && n.height.is_finite() && n.width >= 0.0 && n.height >= 0.0) {
            return Err(LayoutError::InvalidNodeSize {
                id: n.id.clone(),
                width: n.width,
                height: n.height,
            });
        }
        g.set_node(
            n.id.clone(),
            NodeLabel {
                width: n.width,
                height: n.height,
                ..Default::default()
            },
        );
    }

    for e in edges {
        if e.source == e.target || !g.has_node(&e.source) || !g.has_node(&e.target) {
            continue;
        }
        g.set_edge_named(
            e.source.clone(),
            e.target.clone(),
            Some(e.id.clone()),
            Some(EdgeLabel::default()),
        );
    }
    Ok(g)
}

/// Runs every phase on `g`, leaving centre coordinates in `x`/`y` of each node label.
pub fn run_layout(g: &mut LayoutGraph) -> Result<()> {
    coordinate_system::adjust(g);
    acyclic::run(g);
    rank::run(g);
    if let Some(id) = g.nodes().find(|v| g.node(v).is_some_and(|n| n.rank.is_none())) {
        return Err(LayoutError::MissingRank { id: id.to_string() });
    }
    normalize::run(g);
    order::order(g);
    position::position(g);
    normalize::undo(g);
    acyclic::undo(g);
    coordinate_system::undo(g);
    translate(g);

    for v in g.nodes() {
        if let Some(label) = g.node(v) {
            centre_of(v, label)?;
        }
    }

    tracing::debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        width = g.graph().width,
        height = g.graph().height,
        "layered layout done"
    );
    Ok(())
}

fn centre_of(id: &str, label: &NodeLabel) -> Result<Point> {
    match (label.x, label.y) {
        (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(Point::new(x, y)),
        (x, y) => Err(LayoutError::NonFiniteCoordinate {
            id: id.to_string(),
            x: x.unwrap_or(f64::NAN),
            y: y.unwrap_or(f64::NAN),
        }),
    }
}

/// Shifts the drawing so its top-left corner sits at `(marginx, marginy)`.
fn translate(g: &mut LayoutGraph) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for v in g.nodes() {
        let Some(n) = g.node(v) else {
            continue;
        };
        let (Some(x), Some(y)) = (n.x, n.y) else {
            continue;
        };
        min_x = min_x.min(x - n.width / 2.0);
        min_y = min_y.min(y - n.height / 2.0);
        max_x = max_x.max(x + n.width / 2.0);
        max_y = max_y.max(y + n.height / 2.0);
    }
    if !min_x.is_finite() || !min_y.is_finite() {
        return;
    }

    let marginx = g.graph().marginx;
    let marginy = g.graph().marginy;
    let dx = marginx - min_x;
    let dy = marginy - min_y;
    g.for_each_node_mut(|_, n| {
        if let Some(x) = n.x.as_mut() {
            *x += dx;
        }
        if let Some(y) = n.y.as_mut() {
            *y += dy;
        }
    });

    let label = g.graph_mut();
    label.width = max_x - min_x + 2.0 * marginx;
    label.height = max_y - min_y + 2.0 * marginy;
}
