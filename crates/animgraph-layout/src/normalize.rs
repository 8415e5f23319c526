//! Split edges spanning more than one rank into chains of zero-size dummy nodes.
//!
//! Ordering and positioning only ever look at rank-adjacent edges after this pass.

use crate::LayoutGraph;
use crate::graphlib::EdgeKey;
use crate::model::{EdgeLabel, NodeLabel};

pub const DUMMY_PREFIX: &str = "_d";

fn add_dummy_node(g: &mut LayoutGraph, label: NodeLabel) -> String {
    let mut i = g.node_count();
    loop {
        let v = format!("{DUMMY_PREFIX}{i}");
        if !g.has_node(&v) {
            g.set_node(v.clone(), label);
            return v;
        }
        i += 1;
    }
}

pub fn run(g: &mut LayoutGraph) {
    g.graph_mut().dummy_chains.clear();
    for e in g.edge_keys() {
        normalize_edge(g, e);
    }
    tracing::debug!(
        chains = g.graph().dummy_chains.len(),
        "normalize: long edges split"
    );
}

fn normalize_edge(g: &mut LayoutGraph, e: EdgeKey) {
    let v_rank = g.node(&e.v).and_then(|n| n.rank).unwrap_or(0);
    let w_rank = g.node(&e.w).and_then(|n| n.rank).unwrap_or(0);
    if w_rank <= v_rank + 1 {
        return;
    }
    let Some(edge_label) = g.remove_edge_key(&e) else {
        return;
    };

    let mut prev = e.v.clone();
    for r in (v_rank + 1)..w_rank {
        let dummy = add_dummy_node(
            g,
            NodeLabel {
                rank: Some(r),
                dummy: true,
                edge_obj: Some(e.clone()),
                edge_label: Some(edge_label.clone()),
                ..Default::default()
            },
        );
        if r == v_rank + 1 {
            g.graph_mut().dummy_chains.push(dummy.clone());
        }
        g.set_edge_named(
            prev,
            dummy.clone(),
            e.name.clone(),
            Some(EdgeLabel {
                weight: edge_label.weight,
                ..Default::default()
            }),
        );
        prev = dummy;
    }

    g.set_edge_named(
        prev,
        e.w.clone(),
        e.name.clone(),
        Some(EdgeLabel {
            weight: edge_label.weight,
            ..Default::default()
        }),
    );
}

/// Removes every dummy chain and restores the edge it replaced.
pub fn undo(g: &mut LayoutGraph) {
    let chains = std::mem::take(&mut g.graph_mut().dummy_chains);
    for start in chains {
        let Some(node) = g.node(&start) else {
            continue;
        };
        let (Some(edge_obj), Some(edge_label)) = (node.edge_obj.clone(), node.edge_label.clone())
        else {
            continue;
        };

        let mut v = start;
        while g.node(&v).is_some_and(|n| n.dummy) {
            let next = g.successors(&v).first().map(|s| s.to_string());
            g.remove_node(&v);
            match next {
                Some(w) => v = w,
                None => break,
            }
        }

        g.set_edge_named(edge_obj.v, edge_obj.w, edge_obj.name, Some(edge_label));
    }
}
