use super::Relationship;
use crate::LayoutGraph;

#[derive(Debug, Clone, PartialEq)]
pub struct SortEntry {
    pub v: String,
    /// Position of `v` in the layer before sorting.
    pub i: usize,
    pub barycenter: Option<f64>,
}

/// Weighted mean order of each node's neighbors in the adjacent layer; `None` for nodes without
/// neighbors on that side.
pub fn barycenter(g: &LayoutGraph, layer: &[String], rel: Relationship) -> Vec<SortEntry> {
    layer
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let edges = match rel {
                Relationship::InEdges => g.in_edges(v),
                Relationship::OutEdges => g.out_edges(v),
            };
            let mut sum = 0.0;
            let mut weight = 0.0;
            for e in edges {
                let other = match rel {
                    Relationship::InEdges => &e.v,
                    Relationship::OutEdges => &e.w,
                };
                let w = g.edge_by_key(&e).map(|l| l.weight).unwrap_or(0.0);
                let Some(order) = g.node(other).and_then(|n| n.order) else {
                    continue;
                };
                sum += w * order as f64;
                weight += w;
            }
            SortEntry {
                v: v.clone(),
                i,
                barycenter: (weight > 0.0).then(|| sum / weight),
            }
        })
        .collect()
}

/// Sorts entries with a barycenter; entries without one keep their original slot.
///
/// Ties are broken by original position, reversed when `bias_right` is set.
pub fn sort(entries: Vec<SortEntry>, bias_right: bool) -> Vec<String> {
    let (mut sortable, mut unsortable): (Vec<SortEntry>, Vec<SortEntry>) =
        entries.into_iter().partition(|e| e.barycenter.is_some());

    sortable.sort_by(|a, b| {
        let (ab, bb) = (a.barycenter.unwrap_or(0.0), b.barycenter.unwrap_or(0.0));
        ab.total_cmp(&bb).then_with(|| {
            if bias_right {
                b.i.cmp(&a.i)
            } else {
                a.i.cmp(&b.i)
            }
        })
    });
    // Popped from the back, so smallest index last.
    unsortable.sort_by(|a, b| b.i.cmp(&a.i));

    let mut vs: Vec<String> = Vec::with_capacity(sortable.len() + unsortable.len());
    consume_unsortable(&mut vs, &mut unsortable);
    for entry in sortable {
        vs.push(entry.v);
        consume_unsortable(&mut vs, &mut unsortable);
    }
    vs.extend(unsortable.into_iter().rev().map(|e| e.v));
    vs
}

fn consume_unsortable(vs: &mut Vec<String>, unsortable: &mut Vec<SortEntry>) {
    while unsortable.last().is_some_and(|e| e.i <= vs.len()) {
        if let Some(e) = unsortable.pop() {
            vs.push(e.v);
        }
    }
}
