//! Longest-path ranking.
//!
//! Sinks sit on rank 0 and every other node is pulled as close to its successors as `minlen`
//! allows, so inputs end up next to the node that consumes them. `normalize_ranks` then shifts
//! everything so the smallest rank is 0.

use crate::LayoutGraph;
use rustc_hash::FxHashMap as HashMap;

pub fn run(g: &mut LayoutGraph) {
    longest_path(g);
    normalize_ranks(g);
}

/// Requires an acyclic graph (see [`crate::acyclic::run`]).
pub fn longest_path(g: &mut LayoutGraph) {
    let mut ranks: HashMap<String, i32> = HashMap::default();

    let sources: Vec<String> = g.sources().into_iter().map(str::to_string).collect();
    for source in sources {
        if ranks.contains_key(&source) {
            continue;
        }
        // (node, successors expanded)
        let mut stack: Vec<(String, bool)> = vec![(source, false)];
        while let Some((v, expanded)) = stack.pop() {
            if ranks.contains_key(&v) {
                continue;
            }
            if !expanded {
                stack.push((v.clone(), true));
                for e in g.out_edges(&v) {
                    if !ranks.contains_key(&e.w) {
                        stack.push((e.w, false));
                    }
                }
                continue;
            }

            let mut rank: Option<i32> = None;
            for e in g.out_edges(&v) {
                let minlen = g.edge_by_key(&e).map(|l| l.minlen as i32).unwrap_or(1);
                let Some(&w_rank) = ranks.get(&e.w) else {
                    continue;
                };
                let candidate = w_rank - minlen;
                rank = Some(rank.map_or(candidate, |r| r.min(candidate)));
            }
            ranks.insert(v, rank.unwrap_or(0));
        }
    }

    g.for_each_node_mut(|v, label| {
        label.rank = ranks.get(v).copied();
    });
}

pub fn normalize_ranks(g: &mut LayoutGraph) {
    let min = g
        .nodes()
        .filter_map(|v| g.node(v).and_then(|n| n.rank))
        .min()
        .unwrap_or(0);
    g.for_each_node_mut(|_, label| {
        if let Some(rank) = label.rank.as_mut() {
            *rank -= min;
        }
    });
}
