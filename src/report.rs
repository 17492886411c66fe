// src/report.rs

//! Console reports for built category trees.
//!
//! Lines carry a timestamp and level, and are filtered by the configured
//! `logging.level`.

use std::str::FromStr;

use chrono::Local;
use log::{Level, LevelFilter};

use crate::error::Result;
use crate::models::DisplayCategory;
use crate::pipeline::TreeSummary;

/// Prints report lines at or above a level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reporter {
    filter: LevelFilter,
}

impl Reporter {
    pub fn new(filter: LevelFilter) -> Self {
        Self { filter }
    }

    /// Build from a level name such as `"debug"`; unknown names mean `info`.
    pub fn from_level_name(name: &str) -> Self {
        Self::new(LevelFilter::from_str(name).unwrap_or(LevelFilter::Info))
    }

    /// Whether lines at `level` are printed.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.filter
    }

    /// Print a category tree with its summary.
    pub fn print_tree(&self, source_name: &str, categories: &[DisplayCategory]) {
        let summary = TreeSummary::of(categories);
        for line in tree(source_name, categories, &summary) {
            self.emit(Level::Info, &line);
        }
    }

    /// Print the outcome of a config validation.
    pub fn print_validation(&self, config_path: &str, result: &Result<()>) {
        let (level, message) = validation(config_path, result);
        self.emit(level, &message);
    }

    fn emit(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        match level {
            Level::Error | Level::Warn => eprintln!("{}", stamp(level, message)),
            _ => println!("{}", stamp(level, message)),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(LevelFilter::Info)
    }
}

fn stamp(level: Level, message: &str) -> String {
    format!(
        "[{}] [{}] {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        level,
        message
    )
}

/// Report lines for a tree: title, one line per category, then the summary.
pub fn tree(source_name: &str, categories: &[DisplayCategory], summary: &TreeSummary) -> Vec<String> {
    let mut lines = vec![format!("Category tree from {source_name}")];
    lines.extend(tree_lines(categories).into_iter().map(|line| format!("    {line}")));
    lines.push(format!(
        "[SUMMARY] roots: {}, categories: {}, depth: {}, on home page: {}",
        summary.root_count, summary.node_count, summary.depth, summary.home_count
    ));
    lines
}

/// Render a display tree as indented lines, one per category.
///
/// Home page categories are flagged with `*`.
pub fn tree_lines(categories: &[DisplayCategory]) -> Vec<String> {
    let mut lines = Vec::new();
    push_lines(categories, 0, &mut lines);
    lines
}

fn push_lines(categories: &[DisplayCategory], depth: usize, lines: &mut Vec<String>) {
    for category in categories {
        let marker = if category.show_on_home { " *" } else { "" };
        lines.push(format!(
            "{}{} (id={}, order={}){}",
            "  ".repeat(depth),
            category.name,
            category.id,
            category.order,
            marker
        ));
        push_lines(&category.children, depth + 1, lines);
    }
}

fn validation(config_path: &str, result: &Result<()>) -> (Level, String) {
    match result {
        Ok(()) => (Level::Info, format!("✓ Config OK: {config_path}")),
        Err(e) => (
            Level::Error,
            format!("Config validation failed for {config_path}: {e}"),
        ),
    }
}
