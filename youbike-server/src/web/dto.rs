//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::resolver::{ResolvedStation, SelectionKind};
use crate::slack::BlockLayout;

/// Query for `GET /stations`.
#[derive(Debug, Default, Deserialize)]
pub struct StationsQuery {
    /// Which station selection to use (defaults to identifier)
    pub select: Option<SelectionKind>,
}

/// Query for `POST /slack/stations`.
#[derive(Debug, Default, Deserialize)]
pub struct SlackQuery {
    /// Which station selection to use (defaults to per-target fetch)
    pub select: Option<SelectionKind>,

    /// Message layout (defaults to summary)
    pub layout: Option<BlockLayout>,
}

/// A station in `GET /stations` results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationResult {
    /// Upstream station identifier
    pub id: String,

    /// Friendly station name
    pub sna: String,

    /// Bikes available; null if the upstream count was not a number
    pub bikes_available: Option<u32>,

    /// Parking spaces available; null if the upstream count was not a number
    pub parking_available: Option<u32>,

    /// Raw `YYYYMMDDHHMMSS` update time
    pub last_updated: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl From<ResolvedStation> for StationResult {
    fn from(station: ResolvedStation) -> Self {
        Self {
            id: station.id,
            sna: station.name,
            bikes_available: station.bikes_available,
            parking_available: station.parking_available,
            last_updated: station.last_updated,
        }
    }
}
