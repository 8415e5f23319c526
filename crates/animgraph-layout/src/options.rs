use crate::model::{GraphLabel, RankDir};
use serde::{Deserialize, Serialize};

/// Knobs for [`crate::arrange_with_options`].
///
/// Deserializes from partial JSON: every missing field keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub rankdir: RankDir,
    /// Gap between neighboring nodes within one rank.
    pub nodesep: f64,
    /// Gap between consecutive ranks.
    pub ranksep: f64,
    pub marginx: f64,
    pub marginy: f64,
    /// Upper bound on crossing-reduction sweeps.
    pub order_iterations: usize,
    /// Horizontal gap between the layered bounding box and the packed disconnected nodes.
    pub disconnected_gap: f64,
    /// Pitch of the disconnected-node grid.
    pub disconnected_spacing: f64,
    pub grid_cell_width: f64,
    pub grid_cell_height: f64,
    pub grid_spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rankdir: RankDir::LR,
            nodesep: 100.0,
            ranksep: 300.0,
            marginx: 100.0,
            marginy: 100.0,
            order_iterations: 24,
            disconnected_gap: 400.0,
            disconnected_spacing: 500.0,
            grid_cell_width: 450.0,
            grid_cell_height: 180.0,
            grid_spacing: 200.0,
        }
    }
}

impl LayoutOptions {
    pub fn with_rankdir(mut self, rankdir: RankDir) -> Self {
        self.rankdir = rankdir;
        self
    }

    pub(crate) fn graph_label(&self) -> GraphLabel {
        GraphLabel {
            rankdir: self.rankdir,
            nodesep: self.nodesep,
            ranksep: self.ranksep,
            marginx: self.marginx,
            marginy: self.marginy,
            order_iterations: self.order_iterations,
            ..Default::default()
        }
    }
}
