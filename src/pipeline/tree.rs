// src/pipeline/tree.rs

//! Category tree pipeline: fetch, map, select home page categories.

use crate::error::Result;
use crate::models::DisplayCategory;
use crate::services::{HomePolicy, map_categories};
use crate::source::CategorySource;

use super::TreeSummary;

/// Build the display tree using the default home page policy.
pub async fn category_tree(source: &dyn CategorySource) -> Result<Vec<DisplayCategory>> {
    category_tree_with(source, &HomePolicy::default()).await
}

/// Build the display tree with a configured home page policy.
///
/// The source is called once. A response without `data` yields an empty
/// tree; fetch errors are returned to the caller.
pub async fn category_tree_with(
    source: &dyn CategorySource,
    policy: &HomePolicy,
) -> Result<Vec<DisplayCategory>> {
    log::debug!("Fetching categories from {}", source.name());
    let response = source.fetch().await?;

    let Some(data) = response.data else {
        log::warn!("No category data returned by {}", source.name());
        return Ok(Vec::new());
    };

    let categories = policy.apply(map_categories(&data, true));

    let summary = TreeSummary::of(&categories);
    log::info!(
        "Built category tree: {} roots, {} nodes, {} on home page",
        summary.root_count,
        summary.node_count,
        summary.home_count
    );

    Ok(categories)
}
