#![forbid(unsafe_code)]

//! `animgraph` turns a serialized AnimGraph document into an arranged, renderer-neutral scene.
//!
//! The pipeline is [`load`]: extract nodes and connections ([`animgraph_core`]), project them
//! into a [`Scene`], then arrange it ([`animgraph_layout`]).

pub use animgraph_core::*;

pub mod colors;
pub mod config;
pub mod scene;

pub use colors::{DEFAULT_COLOR, color_for};
pub use config::{Config, ExtractConfig};
pub use scene::{Scene, SceneEdge, SceneNode};

pub mod layout {
    pub use animgraph_layout::{
        Bounds, LayoutError, LayoutOptions, LayoutResult, LayoutStrategy, Point, RankDir, Size,
        VisualEdge, VisualNode, arrange, arrange_with_options, estimate_size, grid_arrange,
        layered, pack_disconnected,
    };
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Extract(#[from] animgraph_core::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Extracts, projects and arranges `document`.
///
/// Fails only when the document root is missing or malformed; layout problems fall back to a
/// grid placement.
pub fn load(document: &serde_json::Value, config: &Config) -> Result<Scene> {
    let graph = extract_with_options(document, &config.extract.to_options())?;
    if graph.is_partial() {
        tracing::warn!(
            warnings = graph.warnings.len(),
            "extraction was truncated at the depth ceiling"
        );
    }

    let mut scene = Scene::project(&graph);
    let strategy = scene.arrange(&config.layout);
    tracing::info!(
        nodes = scene.nodes.len(),
        edges = scene.edges.len(),
        ?strategy,
        "scene loaded"
    );
    Ok(scene)
}
