//! Matching raw upstream records to the stations of interest.

use futures::future::join_all;

use crate::youbike::{RawStationRecord, StationSource, YouBikeError};

use super::names::{normalize_name, parse_count};
use super::selection::{FetchTarget, Selection};

/// A station of interest with parsed availability.
///
/// Counts are `None` when the upstream text was not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStation {
    pub id: String,
    pub name: String,
    pub bikes_available: Option<u32>,
    pub parking_available: Option<u32>,
    /// Raw `YYYYMMDDHHMMSS` update time.
    pub last_updated: String,
}

impl ResolvedStation {
    fn from_record(record: &RawStationRecord, name: impl Into<String>) -> Self {
        Self {
            id: record.sno.clone(),
            name: name.into(),
            bikes_available: parse_count(&record.sbi),
            parking_available: parse_count(&record.bemp),
            last_updated: record.mday.clone(),
        }
    }
}

/// Resolve an already-fetched record list against a selection.
///
/// Filters keep upstream order. For per-target selections the result
/// follows target order, one match at most per target.
pub fn resolve(records: &[RawStationRecord], selection: &Selection) -> Vec<ResolvedStation> {
    match selection {
        Selection::ByIdentifier { stations, .. } => records
            .iter()
            .filter_map(|r| {
                stations
                    .get(&r.sno)
                    .map(|name| ResolvedStation::from_record(r, name.as_str()))
            })
            .collect(),
        Selection::ByNormalizedName { names, .. } => records
            .iter()
            .filter_map(|r| {
                let name = normalize_name(&r.sna);
                names
                    .contains(name)
                    .then(|| ResolvedStation::from_record(r, name))
            })
            .collect(),
        Selection::ByPerTargetFetch { targets } => targets
            .iter()
            .filter_map(|t| resolve_target(records, t))
            .collect(),
    }
}

/// First record on a page whose normalized name is the target's friendly name.
pub fn resolve_target(records: &[RawStationRecord], target: &FetchTarget) -> Option<ResolvedStation> {
    records
        .iter()
        .find(|r| normalize_name(&r.sna) == target.friendly_name)
        .map(|r| ResolvedStation::from_record(r, normalize_name(&r.sna)))
}

/// Fetch the pages a selection needs and resolve them.
///
/// Single-page selections propagate the fetch error. Per-target selections
/// never fail: each target is fetched concurrently, and a target whose
/// fetch fails or whose page has no match is logged and left out.
pub async fn fetch_and_resolve<S: StationSource>(
    source: &S,
    selection: &Selection,
) -> Result<Vec<ResolvedStation>, YouBikeError> {
    match selection {
        Selection::ByIdentifier { page, .. } | Selection::ByNormalizedName { page, .. } => {
            let records = source.fetch_page(page).await?;
            let stations = resolve(&records, selection);
            tracing::debug!(
                kind = %selection.kind(),
                fetched = records.len(),
                matched = stations.len(),
                "resolved stations"
            );
            Ok(stations)
        }
        Selection::ByPerTargetFetch { targets } => {
            let results = join_all(targets.iter().map(|t| fetch_target(source, t))).await;
            Ok(results.into_iter().flatten().collect())
        }
    }
}

async fn fetch_target<S: StationSource>(source: &S, target: &FetchTarget) -> Option<ResolvedStation> {
    let records = match source.fetch_page(&target.page).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                station = %target.friendly_name,
                page = %target.page,
                error = %e,
                "failed to fetch station page"
            );
            return None;
        }
    };

    let station = resolve_target(&records, target);
    if station.is_none() {
        tracing::warn!(
            station = %target.friendly_name,
            page = %target.page,
            "station not found on page"
        );
    }
    station
}
