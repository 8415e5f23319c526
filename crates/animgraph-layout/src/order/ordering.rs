use super::{barycenter, cross_count, init_order, sort};
use crate::LayoutGraph;

/// Which neighbors a sweep looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// Predecessors in the previous rank (downward sweep).
    InEdges,
    /// Successors in the next rank (upward sweep).
    OutEdges,
}

/// Assigns `order` on every ranked node.
///
/// Runs at most `order_iterations` sweeps and stops early after four sweeps without improvement
/// or once a crossing-free layering is found.
pub fn order(g: &mut LayoutGraph) {
    let mut layering = init_order(g);
    if layering.is_empty() {
        return;
    }
    assign_order(g, &layering);

    let mut best_cc = cross_count(g, &layering);
    let mut best = layering.clone();
    let max_iterations = g.graph().order_iterations;

    let mut i: usize = 0;
    let mut last_best: usize = 0;
    while i < max_iterations && last_best < 4 && best_cc > 0.0 {
        let use_down = i % 2 == 1;
        let bias_right = i % 4 >= 2;

        if use_down {
            for r in 1..layering.len() {
                sweep_layer(g, &mut layering[r], Relationship::InEdges, bias_right);
            }
        } else {
            for r in (0..layering.len().saturating_sub(1)).rev() {
                sweep_layer(g, &mut layering[r], Relationship::OutEdges, bias_right);
            }
        }

        let cc = cross_count(g, &layering);
        if cc < best_cc {
            last_best = 0;
            best_cc = cc;
            best = layering.clone();
        } else {
            last_best += 1;
        }
        i += 1;
    }

    tracing::debug!(sweeps = i, crossings = best_cc, "order: crossing reduction done");
    assign_order(g, &best);
}

fn sweep_layer(g: &mut LayoutGraph, layer: &mut Vec<String>, rel: Relationship, bias_right: bool) {
    let entries = barycenter(g, layer, rel);
    *layer = sort(entries, bias_right);
    for (i, v) in layer.iter().enumerate() {
        if let Some(n) = g.node_mut(v) {
            n.order = Some(i);
        }
    }
}

fn assign_order(g: &mut LayoutGraph, layering: &[Vec<String>]) {
    for layer in layering {
        for (i, v) in layer.iter().enumerate() {
            if let Some(n) = g.node_mut(v) {
                n.order = Some(i);
            }
        }
    }
}

/// Layers indexed by rank, each sorted by `order`.
pub fn build_layer_matrix(g: &LayoutGraph) -> Vec<Vec<String>> {
    let mut layering: Vec<Vec<(usize, String)>> = Vec::new();
    for v in g.nodes() {
        let Some(n) = g.node(v) else {
            continue;
        };
        let (Some(rank), Some(order)) = (n.rank, n.order) else {
            continue;
        };
        let rank = rank.max(0) as usize;
        if layering.len() <= rank {
            layering.resize_with(rank + 1, Vec::new);
        }
        layering[rank].push((order, v.to_string()));
    }
    layering
        .into_iter()
        .map(|mut layer| {
            layer.sort_by_key(|(order, _)| *order);
            layer.into_iter().map(|(_, v)| v).collect()
        })
        .collect()
}
