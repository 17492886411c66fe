//! Pipeline entry points.
//!
//! - `category_tree`: Fetch raw categories and build the display tree
//! - `category_tree_with`: Same, with a configured home page policy

mod summary;
mod tree;

pub use summary::TreeSummary;
pub use tree::{category_tree, category_tree_with};
