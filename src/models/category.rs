// src/models/category.rs

//! Raw category data as delivered by the storefront API.

use serde::{Deserialize, Serialize};

/// Envelope returned by a category source.
///
/// A missing `data` key and `"data": null` both mean "no categories";
/// an empty list is still present data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    #[serde(default)]
    pub data: Option<Vec<RawCategory>>,
}

impl CategoryResponse {
    /// Wrap a list of categories as present data.
    pub fn with_data(data: Vec<RawCategory>) -> Self {
        Self { data: Some(data) }
    }

    /// Response without a `data` field.
    pub fn absent() -> Self {
        Self { data: None }
    }
}

/// A category node in the API's nested tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    /// Numeric identifier, also the fallback sort order
    pub id: i64,

    /// Display name
    pub name: String,

    /// Whether the API reports nested categories
    #[serde(
        rename = "hasChildren",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub has_children: bool,

    /// Storefront URL slug
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Raw title; may embed an order prefix and the `#` home marker (e.g. "2#")
    #[serde(rename = "Title", default)]
    pub title: String,

    /// Image reference for the category tile
    #[serde(rename = "MetaTagDescription", default)]
    pub image_description: String,

    /// Nested categories
    #[serde(default)]
    pub children: Vec<RawCategory>,
}

impl RawCategory {
    /// Create a leaf category.
    pub fn new(id: i64, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            has_children: false,
            url: String::new(),
            title: title.into(),
            image_description: String::new(),
            children: Vec::new(),
        }
    }

    /// Set the image description.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image_description = image.into();
        self
    }

    /// Attach nested categories.
    pub fn with_children(mut self, children: Vec<RawCategory>) -> Self {
        self.has_children = !children.is_empty();
        self.children = children;
        self
    }
}
