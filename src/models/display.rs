// src/models/display.rs

//! Display-ready category tree consumed by the storefront navigation.

use serde::{Deserialize, Serialize};

/// A category prepared for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCategory {
    pub id: i64,
    pub name: String,

    /// Copied verbatim from the raw image description
    pub image: String,

    /// Sort key within the sibling group
    pub order: i64,

    /// Children, sorted ascending by `order`
    pub children: Vec<DisplayCategory>,

    /// Whether the category appears on the home page
    pub show_on_home: bool,
}

impl DisplayCategory {
    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DisplayCategory::node_count)
            .sum::<usize>()
    }

    /// Depth of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DisplayCategory::depth)
            .max()
            .unwrap_or(0)
    }
}
