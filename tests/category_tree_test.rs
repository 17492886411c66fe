//! End-to-end tests for the category tree pipeline.

use std::path::Path;

use category_tree::{
    category_tree, category_tree_with,
    error::AppError,
    models::{CategoryResponse, DisplayCategory, RawCategory},
    pipeline::TreeSummary,
    services::HomePolicy,
    source::{FileSource, FnSource},
};

fn fixture() -> FileSource {
    FileSource::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/categories.json"))
}

fn ids(categories: &[DisplayCategory]) -> Vec<i64> {
    categories.iter().map(|c| c.id).collect()
}

// ============================================================
// Fixture Tests
// ============================================================

#[tokio::test]
async fn given_fixture_when_building_tree_then_roots_sorted_by_order() {
    let result = category_tree(&fixture()).await.unwrap();

    assert_eq!(ids(&result), vec![9325, 9331, 9330, 9326, 9332, 9333, 9804]);
    assert_eq!(
        result.iter().map(|c| c.order).collect::<Vec<_>>(),
        vec![1, 2, 3, 9326, 9332, 9333, 9804]
    );
}

#[tokio::test]
async fn given_fixture_with_marked_roots_when_building_tree_then_marks_kept() {
    let result = category_tree(&fixture()).await.unwrap();

    let shown: Vec<i64> = result
        .iter()
        .filter(|c| c.show_on_home)
        .map(|c| c.id)
        .collect();
    assert_eq!(shown, vec![9325, 9331, 9804]);
}

#[tokio::test]
async fn given_fixture_when_building_tree_then_children_sorted_and_hidden() {
    let result = category_tree(&fixture()).await.unwrap();
    let candles = &result[0];

    assert_eq!(candles.name, "Świece sojowe");
    assert_eq!(
        candles.image,
        "https://cdn.example.com/categories/swiece.png"
    );
    assert_eq!(ids(&candles.children), vec![9328, 9327, 9329]);
    assert!(candles.children.iter().all(|c| !c.show_on_home));
}

#[tokio::test]
async fn given_fixture_when_building_tree_then_shape_preserved() {
    let result = category_tree(&fixture()).await.unwrap();

    let summary = TreeSummary::of(&result);
    assert_eq!(summary.root_count, 7);
    assert_eq!(summary.node_count, 10);
    assert_eq!(summary.depth, 2);
}

#[tokio::test]
async fn given_fixture_when_serializing_then_uses_storefront_keys() {
    let result = category_tree(&fixture()).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json[0]["id"], 9325);
    assert_eq!(json[0]["showOnHome"], true);
    assert_eq!(json[0]["children"][0]["order"], 1);
    assert!(json[0].get("MetaTagDescription").is_none());
}

// ============================================================
// Home Page Policy Tests
// ============================================================

#[tokio::test]
async fn given_three_roots_when_building_tree_then_all_shown() {
    let source = FnSource::new("sample", || async {
        Ok(CategoryResponse::with_data(vec![
            RawCategory::new(10, "Świece", "2#"),
            RawCategory::new(20, "Woski zapachowe", "Woski zapachowe#"),
            RawCategory::new(30, "Saszetki", "Saszetki"),
        ]))
    });

    let result = category_tree(&source).await.unwrap();

    assert_eq!(ids(&result), vec![10, 20, 30]);
    assert!(result.iter().all(|c| c.show_on_home));
}

#[tokio::test]
async fn given_six_unmarked_roots_when_building_tree_then_first_three_shown() {
    let source = FnSource::new("unmarked", || async {
        let roots = [60, 50, 40, 30, 20, 10]
            .into_iter()
            .map(|id| RawCategory::new(id, format!("Root {id}"), "Plain"))
            .collect();
        Ok(CategoryResponse::with_data(roots))
    });

    let result = category_tree(&source).await.unwrap();
    let shown: Vec<i64> = result
        .iter()
        .filter(|c| c.show_on_home)
        .map(|c| c.id)
        .collect();

    assert_eq!(shown, vec![10, 20, 30]);
}

#[tokio::test]
async fn given_configured_policy_when_building_tree_then_policy_applied() {
    let policy = HomePolicy {
        show_all_limit: 10,
        fallback_count: 1,
    };

    let result = category_tree_with(&fixture(), &policy).await.unwrap();
    assert!(result.iter().all(|c| c.show_on_home));
}

// ============================================================
// Absent Data and Failure Tests
// ============================================================

#[tokio::test]
async fn given_empty_data_when_building_tree_then_returns_empty() {
    let source = FnSource::new("empty", || async {
        Ok(CategoryResponse::with_data(Vec::new()))
    });

    assert!(category_tree(&source).await.unwrap().is_empty());
}

#[tokio::test]
async fn given_missing_data_when_building_tree_then_returns_empty() {
    let response: CategoryResponse = serde_json::from_str(r#"{"meta": {"total": 0}}"#).unwrap();
    let source = FnSource::new("missing", move || {
        let response = response.clone();
        async move { Ok(response) }
    });

    assert!(category_tree(&source).await.unwrap().is_empty());
}

#[tokio::test]
async fn given_missing_file_when_building_tree_then_error_propagates() {
    let source = FileSource::new("tests/fixtures/does-not-exist.json");

    assert!(matches!(category_tree(&source).await, Err(AppError::Io(_))));
}
