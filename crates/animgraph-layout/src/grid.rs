//! Square-ish grids: the fallback placement and the packing of nodes without edges.

use crate::options::LayoutOptions;
use crate::visual::VisualNode;

/// `ceil(sqrt(n))`, at least 1.
pub fn grid_columns(n: usize) -> usize {
    let mut cols = (n as f64).sqrt().ceil() as usize;
    // Guard against float rounding on perfect squares.
    while cols * cols < n {
        cols += 1;
    }
    cols.max(1)
}

/// Places every node on a grid with the default cell pitch.
pub fn grid_arrange(nodes: &[VisualNode]) -> Vec<VisualNode> {
    grid_arrange_with_options(nodes, &LayoutOptions::default())
}

pub fn grid_arrange_with_options(
    nodes: &[VisualNode],
    options: &LayoutOptions,
) -> Vec<VisualNode> {
    let pitch_x = options.grid_cell_width + options.grid_spacing;
    let pitch_y = options.grid_cell_height + options.grid_spacing;
    place_on_grid(nodes, 0.0, 0.0, pitch_x, pitch_y)
}

/// Places nodes on a grid whose top-left cell starts at `(start_x, 0)`, with
/// `disconnected_spacing` between cell origins in both directions.
pub fn pack_disconnected(
    nodes: &[VisualNode],
    start_x: f64,
    options: &LayoutOptions,
) -> Vec<VisualNode> {
    let spacing = options.disconnected_spacing;
    place_on_grid(nodes, start_x, 0.0, spacing, spacing)
}

fn place_on_grid(
    nodes: &[VisualNode],
    start_x: f64,
    start_y: f64,
    pitch_x: f64,
    pitch_y: f64,
) -> Vec<VisualNode> {
    let cols = grid_columns(nodes.len());
    nodes
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let col = (i % cols) as f64;
            let row = (i / cols) as f64;
            n.clone().at(start_x + col * pitch_x, start_y + row * pitch_y)
        })
        .collect()
}
