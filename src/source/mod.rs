//! Category sources feeding the pipeline.
//!
//! A source is called exactly once per pipeline run and returns the API
//! envelope as-is. Cancellation and timeouts belong to the source.
//!
//! - `HttpSource`: storefront category endpoint over HTTP
//! - `FileSource`: JSON dump on the local filesystem
//! - `FnSource`: any async closure, for embedding and tests

pub mod file;
pub mod http;

use std::future::Future;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CategoryResponse;

// Re-export for convenience
pub use file::FileSource;
pub use http::HttpSource;

/// Trait for category data fetchers.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Short description used in logs and errors.
    fn name(&self) -> &str;

    /// Fetch the raw category envelope.
    async fn fetch(&self) -> Result<CategoryResponse>;
}

/// Source backed by an async closure.
pub struct FnSource<F> {
    name: String,
    fetch: F,
}

impl<F, Fut> FnSource<F>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<CategoryResponse>>,
{
    /// Wrap a closure returning the category envelope.
    pub fn new(name: impl Into<String>, fetch: F) -> Self {
        Self {
            name: name.into(),
            fetch,
        }
    }
}

#[async_trait]
impl<F, Fut> CategorySource for FnSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<CategoryResponse>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<CategoryResponse> {
        (self.fetch)().await
    }
}
