//! Page locators and the station source abstraction.

use std::fmt;
use std::future::Future;

use super::client::YouBikeClient;
use super::error::YouBikeError;
use super::mock::MockYouBikeClient;
use super::types::RawStationRecord;

/// Default page size used by the upstream dataset.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Identifies one page of the paginated upstream dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageLocator {
    pub page: u32,
    pub size: u32,
}

impl PageLocator {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Page `page` at the default page size.
    pub fn page(page: u32) -> Self {
        Self::new(page, DEFAULT_PAGE_SIZE)
    }

    /// Query parameters for this page.
    pub fn query(&self) -> [(&'static str, String); 2] {
        [("page", self.page.to_string()), ("size", self.size.to_string())]
    }
}

impl Default for PageLocator {
    fn default() -> Self {
        Self::page(0)
    }
}

impl fmt::Display for PageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page={}&size={}", self.page, self.size)
    }
}

/// Something that can fetch a page of raw station records.
///
/// The resolver fans out over this, so live and mock clients are
/// interchangeable.
pub trait StationSource: Sync {
    fn fetch_page(
        &self,
        page: &PageLocator,
    ) -> impl Future<Output = Result<Vec<RawStationRecord>, YouBikeError>> + Send;
}

/// The station source chosen at startup.
#[derive(Clone)]
pub enum StationBackend {
    Live(YouBikeClient),
    Mock(MockYouBikeClient),
}

impl StationSource for StationBackend {
    async fn fetch_page(&self, page: &PageLocator) -> Result<Vec<RawStationRecord>, YouBikeError> {
        match self {
            StationBackend::Live(client) => client.fetch_page(page).await,
            StationBackend::Mock(client) => client.fetch_page(page).await,
        }
    }
}
