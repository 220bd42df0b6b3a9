//! YouBike open-data response DTOs.
//!
//! These map directly to the New Taipei City YouBike dataset JSON. The
//! upstream sends almost everything as strings, but some mirrors of the
//! dataset send the availability counts as JSON numbers, so those fields
//! accept either.

use serde::{Deserialize, Deserializer, Serialize};

/// One station record as returned by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawStationRecord {
    /// Station identifier, e.g. "500201041".
    pub sno: String,

    /// Raw display name, e.g. "YouBike2.0_捷運新北產業園區站".
    pub sna: String,

    /// Available bikes, kept as the upstream text.
    #[serde(default, deserialize_with = "count_text")]
    pub sbi: String,

    /// Available parking spaces, kept as the upstream text.
    #[serde(default, deserialize_with = "count_text")]
    pub bemp: String,

    /// Last update time, `YYYYMMDDHHMMSS`.
    pub mday: String,

    /// District name.
    #[serde(default)]
    pub sarea: Option<String>,

    /// Street address.
    #[serde(default)]
    pub ar: Option<String>,
}

impl RawStationRecord {
    /// Build a record from its core fields (used by tests and mock data).
    pub fn new(
        sno: impl Into<String>,
        sna: impl Into<String>,
        sbi: impl Into<String>,
        bemp: impl Into<String>,
        mday: impl Into<String>,
    ) -> Self {
        Self {
            sno: sno.into(),
            sna: sna.into(),
            sbi: sbi.into(),
            bemp: bemp.into(),
            mday: mday.into(),
            sarea: None,
            ar: None,
        }
    }
}

/// Keep a count as text. Null or any non-scalar shape becomes empty text,
/// which later parses as an unknown count instead of failing the page.
fn count_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
