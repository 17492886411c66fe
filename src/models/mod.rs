// src/models/mod.rs

//! Domain models for the category pipeline.
//!
//! Raw API input, the display tree produced from it, and configuration.

mod category;
mod config;
mod display;

// Re-export all public types
pub use category::{CategoryResponse, RawCategory};
pub use config::{Config, HomeConfig, LoggingConfig, SourceConfig};
pub use display::DisplayCategory;
