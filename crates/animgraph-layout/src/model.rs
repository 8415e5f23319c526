//! Label types carried by the layered pipeline graph, plus geometry primitives.

use crate::graphlib::EdgeKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDir {
    TB,
    BT,
    #[default]
    LR,
    RL,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone)]
pub struct GraphLabel {
    pub rankdir: RankDir,
    pub nodesep: f64,
    pub ranksep: f64,
    pub edgesep: f64,
    pub marginx: f64,
    pub marginy: f64,
    pub order_iterations: usize,
    pub align_passes: usize,
    pub dummy_chains: Vec<String>,
    pub width: f64,
    pub height: f64,
}

impl Default for GraphLabel {
    fn default() -> Self {
        Self {
            rankdir: RankDir::LR,
            nodesep: 100.0,
            ranksep: 300.0,
            edgesep: 20.0,
            marginx: 100.0,
            marginy: 100.0,
            order_iterations: 24,
            align_passes: 8,
            dummy_chains: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rank: Option<i32>,
    pub order: Option<usize>,
    /// Set on nodes inserted by `normalize`.
    pub dummy: bool,
    pub edge_obj: Option<EdgeKey>,
    pub edge_label: Option<EdgeLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub minlen: usize,
    pub weight: f64,
    pub reversed: bool,
    pub forward_name: Option<String>,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            minlen: 1,
            weight: 1.0,
            reversed: false,
            forward_name: None,
        }
    }
}
