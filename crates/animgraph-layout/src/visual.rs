use crate::model::Point;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A positioned box. `position` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualNode {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub position: Point,
}

impl VisualNode {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            position: Point::default(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub socket: String,
}

impl VisualEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        socket: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            socket: socket.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest box enclosing every node; all zeros when `nodes` is empty.
    pub fn of(nodes: &[VisualNode]) -> Self {
        let mut iter = nodes.iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let mut b = Self {
            min_x: first.position.x,
            min_y: first.position.y,
            max_x: first.right(),
            max_y: first.bottom(),
        };
        for n in iter {
            b.min_x = b.min_x.min(n.position.x);
            b.min_y = b.min_y.min(n.position.y);
            b.max_x = b.max_x.max(n.right());
            b.max_y = b.max_y.max(n.bottom());
        }
        b
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    Layered,
    Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Vec<VisualNode>,
    pub bounds: Bounds,
    pub strategy: LayoutStrategy,
}

impl LayoutResult {
    pub fn positions(&self) -> IndexMap<String, Point> {
        self.nodes
            .iter()
            .map(|n| (n.id.clone(), n.position))
            .collect()
    }
}
