//! Mock YouBike client for running without network access.
//!
//! Loads sample pages from JSON files and serves them as if they were
//! live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::error::YouBikeError;
use super::source::{PageLocator, StationSource};
use super::types::RawStationRecord;

/// Mock client that serves station pages from memory.
///
/// Page size is ignored; pages are keyed by page number only.
#[derive(Debug, Clone, Default)]
pub struct MockYouBikeClient {
    pages: Arc<HashMap<u32, Vec<RawStationRecord>>>,
}

impl MockYouBikeClient {
    /// Create a mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{page}.json` (e.g., `0.json`, `1.json`), each
    /// holding a JSON array of station records.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, YouBikeError> {
        let data_dir = data_dir.as_ref();
        let mut pages = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| YouBikeError::Mock {
            message: format!("failed to read mock data directory {:?}: {}", data_dir, e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| YouBikeError::Mock {
                message: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(page) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u32>().ok())
            else {
                tracing::warn!(?path, "skipping mock file without a page number");
                continue;
            };

            let json = std::fs::read_to_string(&path).map_err(|e| YouBikeError::Mock {
                message: format!("failed to read {:?}: {}", path, e),
            })?;

            let records: Vec<RawStationRecord> =
                serde_json::from_str(&json).map_err(|e| YouBikeError::Mock {
                    message: format!("failed to parse {:?}: {}", path, e),
                })?;

            pages.insert(page, records);
        }

        if pages.is_empty() {
            return Err(YouBikeError::Mock {
                message: format!("no mock page files found in {:?}", data_dir),
            });
        }

        Ok(Self::from_pages(pages))
    }

    /// Create a mock client from in-memory pages.
    pub fn from_pages(pages: HashMap<u32, Vec<RawStationRecord>>) -> Self {
        Self {
            pages: Arc::new(pages),
        }
    }

    /// Page numbers available in the mock data, sorted.
    pub fn available_pages(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self.pages.keys().copied().collect();
        pages.sort_unstable();
        pages
    }
}

impl StationSource for MockYouBikeClient {
    async fn fetch_page(&self, page: &PageLocator) -> Result<Vec<RawStationRecord>, YouBikeError> {
        self.pages
            .get(&page.page)
            .cloned()
            .ok_or_else(|| YouBikeError::Api {
                status: 404,
                message: format!(
                    "no mock data for page {}. Available: {:?}",
                    page.page,
                    self.available_pages()
                ),
            })
    }
}
