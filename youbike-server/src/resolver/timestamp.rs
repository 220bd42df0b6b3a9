//! Upstream update-time handling.
//!
//! The upstream `mday` field is a fixed-width, zero-padded
//! `YYYYMMDDHHMMSS` string, so plain lexicographic order is chronological
//! order. Compare the raw strings and format only the winner.

use super::ResolvedStation;

/// The most recent raw update time across all stations.
///
/// Returns `None` for an empty slice.
pub fn latest_timestamp(stations: &[ResolvedStation]) -> Option<&str> {
    stations.iter().map(|s| s.last_updated.as_str()).max()
}

/// Render a `YYYYMMDDHHMMSS` string as `YYYY-MM-DD HH:MM:SS`.
///
/// No validation or timezone conversion is done. Missing or non-ASCII
/// pieces render as empty rather than panicking.
///
/// ```
/// use youbike_server::resolver::format_timestamp;
///
/// assert_eq!(format_timestamp("20240115093045"), "2024-01-15 09:30:45");
/// ```
pub fn format_timestamp(raw: &str) -> String {
    let part = |start: usize, end: usize| raw.get(start..end).unwrap_or("");

    format!(
        "{}-{}-{} {}:{}:{}",
        part(0, 4),
        part(4, 6),
        part(6, 8),
        part(8, 10),
        part(10, 12),
        part(12, 14)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn station(last_updated: &str) -> ResolvedStation {
        ResolvedStation {
            id: "1".into(),
            name: "A".into(),
            bikes_available: Some(1),
            parking_available: Some(1),
            last_updated: last_updated.into(),
        }
    }

    #[test]
    fn format_example() {
        assert_eq!(format_timestamp("20240115093045"), "2024-01-15 09:30:45");
    }

    #[test]
    fn format_short_input_does_not_panic() {
        assert_eq!(format_timestamp("2024"), "2024-- ::");
        assert_eq!(format_timestamp(""), "-- ::");
        // Multi-byte characters never split mid-character.
        let _ = format_timestamp("２０２４０１１５０９３０４５");
    }

    #[test]
    fn latest_of_empty_is_none() {
        assert_eq!(latest_timestamp(&[]), None);
    }

    #[test]
    fn latest_crosses_day_boundary() {
        let stations = vec![
            station("20240115235959"),
            station("20240116000001"),
            station("20231231120000"),
        ];
        assert_eq!(latest_timestamp(&stations), Some("20240116000001"));
    }

    fn fourteen_digits() -> impl Strategy<Value = String> {
        (2000u32..2100, 1u32..13, 1u32..29, 0u32..24, 0u32..60, 0u32..60).prop_map(
            |(y, mo, d, h, mi, s)| format!("{y:04}{mo:02}{d:02}{h:02}{mi:02}{s:02}"),
        )
    }

    proptest! {
        #[test]
        fn latest_is_lexicographic_max(raws in prop::collection::vec(fourteen_digits(), 1..8)) {
            let stations: Vec<_> = raws.iter().map(|r| station(r)).collect();
            let expected = raws.iter().max().unwrap();
            prop_assert_eq!(latest_timestamp(&stations), Some(expected.as_str()));
        }

        #[test]
        fn formatted_is_zero_padded(raw in fourteen_digits()) {
            let formatted = format_timestamp(&raw);
            prop_assert_eq!(formatted.len(), 19);
            prop_assert_eq!(formatted.replace(['-', ' ', ':'], ""), raw);
        }
    }
}
