// src/lib.rs

//! Storefront category tree library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod services;
pub mod source;

pub use pipeline::{category_tree, category_tree_with};
