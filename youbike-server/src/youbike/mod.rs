//! YouBike open-data API client.
//!
//! The New Taipei City dataset is paginated (`page`/`size` query
//! parameters) and returns a JSON array of station records per page.
//! A single page does not hold every station, which is why some
//! selections fetch one page per target station.

mod client;
mod error;
mod mock;
mod source;
mod types;

pub use client::{DEFAULT_BASE_URL, YouBikeClient, YouBikeConfig};
pub use error::YouBikeError;
pub use mock::MockYouBikeClient;
pub use source::{DEFAULT_PAGE_SIZE, PageLocator, StationBackend, StationSource};
pub use types::RawStationRecord;
