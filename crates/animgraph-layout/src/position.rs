//! Coordinate assignment in the internal top-to-bottom frame.
//!
//! `y` follows the rank: each rank is as tall as its tallest node and ranks are `ranksep` apart.
//! `x` starts as a tight left-to-right packing of every layer, then alternating down/up passes
//! pull each node toward the median of its neighbors in the adjacent rank while keeping the
//! minimum separation inside the layer.

use crate::LayoutGraph;
use crate::order::build_layer_matrix;
use rustc_hash::FxHashMap as HashMap;

pub fn position(g: &mut LayoutGraph) {
    let layering = build_layer_matrix(g);
    position_y(g, &layering);
    position_x(g, &layering);
}

fn position_y(g: &mut LayoutGraph, layering: &[Vec<String>]) {
    let ranksep = g.graph().ranksep;
    let mut prev_y = 0.0;
    for layer in layering {
        let max_height = layer
            .iter()
            .filter_map(|v| g.node(v).map(|n| n.height))
            .fold(0.0, f64::max);
        for v in layer {
            if let Some(n) = g.node_mut(v) {
                n.y = Some(prev_y + max_height / 2.0);
            }
        }
        prev_y += max_height + ranksep;
    }
}

fn position_x(g: &mut LayoutGraph, layering: &[Vec<String>]) {
    let seps: Vec<Vec<f64>> = layering.iter().map(|layer| layer_seps(g, layer)).collect();

    let mut xs: HashMap<String, f64> = HashMap::default();
    for (layer, sep) in layering.iter().zip(&seps) {
        let mut x = 0.0;
        for (i, v) in layer.iter().enumerate() {
            if i > 0 {
                x += sep[i - 1];
            }
            xs.insert(v.clone(), x);
        }
    }

    let passes = g.graph().align_passes;
    for pass in 0..passes {
        let down = pass % 2 == 0;
        let ranks: Vec<usize> = if down {
            (1..layering.len()).collect()
        } else {
            (0..layering.len().saturating_sub(1)).rev().collect()
        };
        for r in ranks {
            let layer = &layering[r];
            let desired: Vec<f64> = layer
                .iter()
                .map(|v| {
                    let neighbors = if down {
                        g.predecessors(v)
                    } else {
                        g.successors(v)
                    };
                    let mut positions: Vec<f64> = neighbors
                        .into_iter()
                        .filter_map(|u| xs.get(u).copied())
                        .collect();
                    median(&mut positions).unwrap_or_else(|| xs.get(v).copied().unwrap_or(0.0))
                })
                .collect();
            let placed = place_layer(&desired, &seps[r]);
            for (v, x) in layer.iter().zip(placed) {
                xs.insert(v.clone(), x);
            }
        }
    }

    g.for_each_node_mut(|v, n| {
        n.x = xs.get(v).copied();
    });
}

/// Minimum centre distance between consecutive nodes of `layer`.
fn layer_seps(g: &LayoutGraph, layer: &[String]) -> Vec<f64> {
    let nodesep = g.graph().nodesep;
    let edgesep = g.graph().edgesep;
    let half = |v: &str| -> (f64, f64) {
        g.node(v).map_or((0.0, nodesep / 2.0), |n| {
            let sep = if n.dummy { edgesep } else { nodesep };
            (n.width / 2.0, sep / 2.0)
        })
    };
    layer
        .windows(2)
        .map(|pair| {
            let (wl, sl) = half(&pair[0]);
            let (wr, sr) = half(&pair[1]);
            wl + sl + sr + wr
        })
        .collect()
}

fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Closest positions to `desired` that keep `x[i + 1] - x[i] >= sep[i]`.
///
/// Averages a left-anchored and a right-anchored sweep; both satisfy the separation
/// constraints, so their mean does too.
fn place_layer(desired: &[f64], sep: &[f64]) -> Vec<f64> {
    let n = desired.len();
    if n == 0 {
        return Vec::new();
    }

    let mut left = desired.to_vec();
    for i in 1..n {
        left[i] = left[i].max(left[i - 1] + sep[i - 1]);
    }

    let mut right = desired.to_vec();
    for i in (0..n - 1).rev() {
        right[i] = right[i].min(right[i + 1] - sep[i]);
    }

    left.iter().zip(&right).map(|(l, r)| (l + r) / 2.0).collect()
}
