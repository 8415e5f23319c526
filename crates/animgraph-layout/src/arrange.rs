use crate::grid::{grid_arrange_with_options, pack_disconnected};
use crate::layered::layered;
use crate::options::LayoutOptions;
use crate::visual::{Bounds, LayoutResult, LayoutStrategy, VisualEdge, VisualNode};
use rustc_hash::FxHashSet as HashSet;

/// Positions every node with the default [`LayoutOptions`]. Never fails.
pub fn arrange(nodes: &[VisualNode], edges: &[VisualEdge]) -> Vec<VisualNode> {
    arrange_with_options(nodes, edges, &LayoutOptions::default()).nodes
}

/// Layered placement for nodes touched by an edge, a grid to the right of them for the rest.
///
/// When the layered step fails, every node is grid-placed instead and the result reports
/// [`LayoutStrategy::Grid`]. Output order: connected nodes, then disconnected ones, each in
/// input order.
pub fn arrange_with_options(
    nodes: &[VisualNode],
    edges: &[VisualEdge],
    options: &LayoutOptions,
) -> LayoutResult {
    let (connected, disconnected) = partition(nodes, edges);

    let positions = if connected.is_empty() {
        Ok(Default::default())
    } else {
        layered(&connected, edges, options)
    };

    let positions = match positions {
        Ok(positions) => positions,
        Err(err) => {
            tracing::warn!(
                error = %err,
                nodes = nodes.len(),
                "layered layout failed, using grid"
            );
            let placed = grid_arrange_with_options(nodes, options);
            return LayoutResult {
                bounds: Bounds::of(&placed),
                nodes: placed,
                strategy: LayoutStrategy::Grid,
            };
        }
    };

    let mut placed: Vec<VisualNode> = connected
        .into_iter()
        .map(|n| {
            let p = positions.get(&n.id).copied().unwrap_or_default();
            n.at(p.x, p.y)
        })
        .collect();

    if !disconnected.is_empty() {
        let max_x = placed.iter().map(VisualNode::right).fold(0.0, f64::max);
        let start_x = max_x + options.disconnected_gap;
        placed.extend(pack_disconnected(&disconnected, start_x, options));
    }

    tracing::info!(
        connected = placed.len() - disconnected.len(),
        disconnected = disconnected.len(),
        "layout completed"
    );

    LayoutResult {
        bounds: Bounds::of(&placed),
        nodes: placed,
        strategy: LayoutStrategy::Layered,
    }
}

/// Splits `nodes` by whether they are an endpoint of an edge whose both ends are known.
pub fn partition(
    nodes: &[VisualNode],
    edges: &[VisualEdge],
) -> (Vec<VisualNode>, Vec<VisualNode>) {
    let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut touched: HashSet<&str> = HashSet::default();
    for e in edges {
        if known.contains(e.source.as_str()) && known.contains(e.target.as_str()) {
            touched.insert(e.source.as_str());
            touched.insert(e.target.as_str());
        }
    }
    nodes
        .iter()
        .cloned()
        .partition(|n| touched.contains(n.id.as_str()))
}
