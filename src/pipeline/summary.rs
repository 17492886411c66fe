// src/pipeline/summary.rs

use crate::models::DisplayCategory;

/// Shape statistics of a display tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub root_count: usize,
    pub node_count: usize,
    pub depth: usize,
    pub home_count: usize,
}

impl TreeSummary {
    /// Compute statistics for a list of root categories.
    pub fn of(roots: &[DisplayCategory]) -> Self {
        Self {
            root_count: roots.len(),
            node_count: roots.iter().map(DisplayCategory::node_count).sum(),
            depth: roots.iter().map(DisplayCategory::depth).max().unwrap_or(0),
            home_count: roots.iter().filter(|c| c.show_on_home).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: i64, show_on_home: bool, children: Vec<DisplayCategory>) -> DisplayCategory {
        DisplayCategory {
            id,
            name: String::new(),
            image: String::new(),
            order: id,
            children,
            show_on_home,
        }
    }

    #[test]
    fn test_summary() {
        let roots = vec![
            node(1, true, vec![node(3, false, vec![node(4, false, vec![])])]),
            node(2, false, vec![]),
        ];

        let summary = TreeSummary::of(&roots);
        assert_eq!(
            summary,
            TreeSummary {
                root_count: 2,
                node_count: 4,
                depth: 3,
                home_count: 1,
            }
        );
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(TreeSummary::of(&[]), TreeSummary::default());
    }
}
