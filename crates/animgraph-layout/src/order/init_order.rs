use crate::LayoutGraph;
use rustc_hash::FxHashSet as HashSet;

/// Initial layering: a pre-order DFS that starts from nodes sorted by rank (ties keep insertion
/// order) and appends each node to its rank's layer when first reached.
pub fn init_order(g: &LayoutGraph) -> Vec<Vec<String>> {
    let mut ranked: Vec<(i32, usize, &str)> = g
        .nodes()
        .enumerate()
        .filter_map(|(idx, v)| g.node(v).and_then(|n| n.rank).map(|r| (r, idx, v)))
        .collect();
    let Some(max_rank) = ranked.iter().map(|(r, _, _)| *r).max() else {
        return Vec::new();
    };
    ranked.sort_unstable_by_key(|(r, idx, _)| (*r, *idx));

    let mut layers: Vec<Vec<String>> = vec![Vec::new(); (max_rank.max(0) + 1) as usize];
    let mut visited: HashSet<&str> = HashSet::default();

    for (_, _, start) in ranked {
        let mut stack: Vec<&str> = vec![start];
        while let Some(v) = stack.pop() {
            if !visited.insert(v) {
                continue;
            }
            let Some(rank) = g.node(v).and_then(|n| n.rank) else {
                continue;
            };
            if let Some(layer) = layers.get_mut(rank.max(0) as usize) {
                layer.push(v.to_string());
            }
            for w in g.successors(v).into_iter().rev() {
                if !visited.contains(w) {
                    stack.push(w);
                }
            }
        }
    }

    layers
}
