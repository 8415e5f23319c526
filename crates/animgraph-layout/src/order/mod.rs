//! Node ordering / crossing minimization.
//!
//! A DFS initial order followed by alternating barycenter sweeps; the layering with the fewest
//! crossings wins.

mod barycenter;
pub use barycenter::{SortEntry, barycenter, sort};

mod cross_count;
pub use cross_count::cross_count;

mod init_order;
pub use init_order::init_order;

mod ordering;
pub use ordering::{Relationship, build_layer_matrix, order};
