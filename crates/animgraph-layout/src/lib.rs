#![forbid(unsafe_code)]

//! Node placement for AnimGraph scenes.
//!
//! [`arrange`] runs a layered (dagre-style) placement over every node that takes part in an edge
//! and packs the remaining nodes on a grid to the right. If the layered step reports a
//! [`LayoutError`], every node is grid-placed instead, so arranging never fails.

pub mod acyclic;
pub mod coordinate_system;
pub mod error;
pub mod graphlib;
pub mod model;
pub mod normalize;
pub mod order;
pub mod position;
pub mod rank;

mod arrange;
mod grid;
mod layered;
mod options;
mod size;
mod visual;

pub use arrange::{arrange, arrange_with_options, partition};
pub use error::{LayoutError, Result};
pub use grid::{grid_arrange, grid_arrange_with_options, grid_columns, pack_disconnected};
pub use layered::{build_graph, layered, run_layout};
pub use model::{EdgeLabel, GraphLabel, NodeLabel, Point, RankDir};
pub use options::LayoutOptions;
pub use size::{BASE_HEIGHT, BASE_WIDTH, MAX_WIDTH, estimate_size};
pub use visual::{Bounds, LayoutResult, LayoutStrategy, Size, VisualEdge, VisualNode};

/// The graph every layered phase operates on.
pub type LayoutGraph = graphlib::Graph<NodeLabel, EdgeLabel, GraphLabel>;
