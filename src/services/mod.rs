//! Transformation services for the category pipeline.
//!
//! This module contains the business logic for:
//! - Sort order extraction (`extract_order`)
//! - Home page marker detection (`should_show_on_home_screen`)
//! - Recursive tree mapping (`map_categories`)
//! - Home page selection (`HomePolicy`)

mod home;
mod mapper;
mod order;
mod visibility;

/// Marks a root category for the home page and ends an order prefix.
pub const SHOW_ON_HOME_MARK: char = '#';

pub use home::{
    HomePolicy, SHOW_ON_HOME_ALL_LIMIT, SHOW_ON_HOME_LIMIT, determine_categories_on_home_page,
};
pub use mapper::map_categories;
pub use order::{extract_order, parse_leading_int};
pub use visibility::should_show_on_home_screen;
