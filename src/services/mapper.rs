// src/services/mapper.rs

//! Recursive mapping of raw API categories into display categories.

use crate::models::{DisplayCategory, RawCategory};

use super::{extract_order, should_show_on_home_screen};

/// Map a sibling group, recursing into children, and sort it by `order`.
///
/// Only the top-level call should pass `is_root = true`; nested levels are
/// always mapped as non-root. Equal orders keep their input sequence.
pub fn map_categories(categories: &[RawCategory], is_root: bool) -> Vec<DisplayCategory> {
    let mut mapped: Vec<DisplayCategory> = categories
        .iter()
        .map(|category| map_category(category, is_root))
        .collect();

    // `sort_by_key` is stable
    mapped.sort_by_key(|category| category.order);
    mapped
}

fn map_category(category: &RawCategory, is_root: bool) -> DisplayCategory {
    DisplayCategory {
        id: category.id,
        name: category.name.clone(),
        image: category.image_description.clone(),
        order: extract_order(&category.title, category.id),
        children: map_categories(&category.children, false),
        show_on_home: should_show_on_home_screen(is_root, &category.title),
    }
}
