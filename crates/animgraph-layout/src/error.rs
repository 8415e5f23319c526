pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Layered layout produced a non-finite coordinate for node {id}: ({x}, {y})")]
    NonFiniteCoordinate { id: String, x: f64, y: f64 },
    #[error("Layered layout left node {id} without a rank")]
    MissingRank { id: String },
    #[error("Node {id} has an invalid size: {width}x{height}")]
    InvalidNodeSize { id: String, width: f64, height: f64 },
}
