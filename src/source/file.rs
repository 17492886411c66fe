//! Local JSON file source.
//!
//! Reads an API response dump, e.g. `{"data": [...]}`, from disk.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CategoryResponse;
use crate::source::CategorySource;

/// Category source reading a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl CategorySource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<CategoryResponse> {
        let bytes = tokio::fs::read(&self.path).await?;
        log::debug!("Read {} bytes from {}", bytes.len(), self.name);
        Ok(serde_json::from_slice(&bytes)?)
    }
}
