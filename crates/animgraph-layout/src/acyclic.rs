//! Break cycles by reversing a DFS feedback arc set.
//!
//! Reversed edges keep their original name in `forward_name`; `undo` puts them back.

use crate::LayoutGraph;
use crate::graphlib::EdgeKey;
use rustc_hash::FxHashSet as HashSet;

pub fn run(g: &mut LayoutGraph) {
    let fas = dfs_fas(g);
    if !fas.is_empty() {
        tracing::debug!(reversed = fas.len(), "acyclic: reversing feedback arcs");
    }

    for e in fas.into_iter().filter(|e| e.v != e.w) {
        let Some(mut label) = g.remove_edge_key(&e) else {
            continue;
        };
        label.forward_name = e.name.clone();
        label.reversed = true;

        let name = unique_rev_name(g, &e.w, &e.v);
        g.set_edge_named(e.w, e.v, Some(name), Some(label));
    }
}

pub fn undo(g: &mut LayoutGraph) {
    for e in g.edge_keys() {
        let is_reversed = g.edge_by_key(&e).is_some_and(|l| l.reversed);
        if !is_reversed {
            continue;
        }
        let Some(mut label) = g.remove_edge_key(&e) else {
            continue;
        };
        let forward_name = label.forward_name.take();
        label.reversed = false;
        g.set_edge_named(e.w, e.v, forward_name, Some(label));
    }
}

fn unique_rev_name(g: &LayoutGraph, v: &str, w: &str) -> String {
    let mut i = 1usize;
    loop {
        let candidate = format!("rev{i}");
        if !g.has_edge(v, w, Some(&candidate)) {
            return candidate;
        }
        i += 1;
    }
}

/// Back edges found by a DFS over nodes in insertion order.
///
/// Iterative so deep chains cannot overflow the stack.
fn dfs_fas(g: &LayoutGraph) -> Vec<EdgeKey> {
    let mut fas: Vec<EdgeKey> = Vec::new();
    let mut visited: HashSet<String> = HashSet::default();
    let mut on_stack: HashSet<String> = HashSet::default();

    for root in g.nodes() {
        if !visited.insert(root.to_string()) {
            continue;
        }
        on_stack.insert(root.to_string());
        let mut stack: Vec<(String, Vec<EdgeKey>, usize)> =
            vec![(root.to_string(), g.out_edges(root), 0)];

        while let Some((v, edges, next)) = stack.last_mut() {
            let Some(e) = edges.get(*next).cloned() else {
                on_stack.remove(v.as_str());
                stack.pop();
                continue;
            };
            *next += 1;

            if e.v == e.w {
                continue;
            }
            if on_stack.contains(&e.w) {
                fas.push(e);
            } else if visited.insert(e.w.clone()) {
                on_stack.insert(e.w.clone());
                let out = g.out_edges(&e.w);
                stack.push((e.w, out, 0));
            }
        }
    }
    fas
}
