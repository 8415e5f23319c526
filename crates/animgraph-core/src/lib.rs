#![forbid(unsafe_code)]

//! AnimGraph document model + node/edge extraction (headless).
//!
//! Design goals:
//! - recover graph nodes and connections from structure alone (no adjacency list in the input)
//! - deterministic, testable outputs (insertion-ordered registry, append-only edge list)
//! - taxonomy as data: node/link type tags live in [`classify`], not in traversal code

pub mod classify;
pub mod error;
pub mod extract;
pub mod model;
pub mod output;

pub use classify::{
    LINK_TYPES, NODE_TYPES, TypeCatalog, TypeClass, classify, display_type, is_link, is_node,
};
pub use error::{Error, Result};
pub use extract::{extract, extract_with_options};
pub use model::{Edge, ExtractWarning, Graph, NodeRecord};
pub use output::{OutputValue, ValueKind, output_value};

/// Depth ceiling used by [`ExtractOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Containers nested deeper than this are skipped and reported as
    /// [`ExtractWarning::DepthLimitReached`].
    pub max_depth: usize,
    /// Walk every `nodesToInit` entry instead of only the first one.
    pub all_roots: bool,
    pub catalog: TypeCatalog,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            all_roots: false,
            catalog: TypeCatalog::builtin(),
        }
    }
}

impl ExtractOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_all_roots(mut self, all_roots: bool) -> Self {
        self.all_roots = all_roots;
        self
    }

    pub fn with_catalog(mut self, catalog: TypeCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}
