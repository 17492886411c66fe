// src/services/home.rs

//! Home page selection for root categories.

use crate::models::{DisplayCategory, HomeConfig};

/// Up to this many root categories are all shown on the home page.
pub const SHOW_ON_HOME_ALL_LIMIT: usize = 5;

/// Number of leading categories shown when none is marked.
pub const SHOW_ON_HOME_LIMIT: usize = 3;

/// Display-count policy applied to the top-level sibling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomePolicy {
    pub show_all_limit: usize,
    pub fallback_count: usize,
}

impl Default for HomePolicy {
    fn default() -> Self {
        Self {
            show_all_limit: SHOW_ON_HOME_ALL_LIMIT,
            fallback_count: SHOW_ON_HOME_LIMIT,
        }
    }
}

impl From<&HomeConfig> for HomePolicy {
    fn from(config: &HomeConfig) -> Self {
        Self {
            show_all_limit: config.show_all_limit,
            fallback_count: config.fallback_count,
        }
    }
}

impl HomePolicy {
    /// Apply the policy to already sorted root categories.
    ///
    /// - At most `show_all_limit` categories: all are shown.
    /// - More, with none marked: the first `fallback_count` are shown.
    /// - More, with at least one marked: left as is.
    ///
    /// Never touches children and never clears a flag.
    pub fn apply(&self, mut categories: Vec<DisplayCategory>) -> Vec<DisplayCategory> {
        if categories.len() <= self.show_all_limit {
            for category in &mut categories {
                category.show_on_home = true;
            }
        } else if !categories.iter().any(|c| c.show_on_home) {
            log::debug!(
                "No root category marked for home page, showing first {}",
                self.fallback_count
            );
            for category in categories.iter_mut().take(self.fallback_count) {
                category.show_on_home = true;
            }
        }

        categories
    }
}

/// Determine which root categories to display on the home page.
pub fn determine_categories_on_home_page(categories: Vec<DisplayCategory>) -> Vec<DisplayCategory> {
    HomePolicy::default().apply(categories)
}
