//! Station selection strategies.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::youbike::PageLocator;

/// One station to look for on its own upstream page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    /// Page the station is expected to appear on.
    pub page: PageLocator,
    /// Friendly name, compared against normalized upstream names.
    pub friendly_name: String,
}

impl FetchTarget {
    pub fn new(page: PageLocator, friendly_name: impl Into<String>) -> Self {
        Self {
            page,
            friendly_name: friendly_name.into(),
        }
    }
}

/// How raw records are matched to the stations of interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Match by station identifier; display the mapped friendly name.
    ByIdentifier {
        page: PageLocator,
        stations: HashMap<String, String>,
    },

    /// Match when the normalized raw name is one of `names`.
    ByNormalizedName {
        page: PageLocator,
        names: HashSet<String>,
    },

    /// Fetch one page per target and take the first normalized-name match.
    ByPerTargetFetch { targets: Vec<FetchTarget> },
}

impl Selection {
    /// Build an identifier selection from `(identifier, friendly name)` pairs.
    pub fn by_identifier<I, K, V>(page: PageLocator, stations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Selection::ByIdentifier {
            page,
            stations: stations
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build a name selection from friendly names.
    pub fn by_name<I, S>(page: PageLocator, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::ByNormalizedName {
            page,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a per-target selection.
    pub fn by_targets(targets: impl IntoIterator<Item = FetchTarget>) -> Self {
        Selection::ByPerTargetFetch {
            targets: targets.into_iter().collect(),
        }
    }

    pub fn kind(&self) -> SelectionKind {
        match self {
            Selection::ByIdentifier { .. } => SelectionKind::Identifier,
            Selection::ByNormalizedName { .. } => SelectionKind::Name,
            Selection::ByPerTargetFetch { .. } => SelectionKind::Targets,
        }
    }
}

/// Which selection a request asks for (`?select=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    Identifier,
    Name,
    Targets,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SelectionKind::Identifier => "identifier",
            SelectionKind::Name => "name",
            SelectionKind::Targets => "targets",
        };
        f.write_str(s)
    }
}

impl FromStr for SelectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identifier" | "id" => Ok(SelectionKind::Identifier),
            "name" => Ok(SelectionKind::Name),
            "targets" | "target" => Ok(SelectionKind::Targets),
            other => Err(format!("unknown selection: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_and_kind() {
        let by_id = Selection::by_identifier(PageLocator::page(0), [("500205055", "泰博科技")]);
        assert_eq!(by_id.kind(), SelectionKind::Identifier);

        let by_name = Selection::by_name(PageLocator::page(0), ["泰博科技"]);
        assert_eq!(by_name.kind(), SelectionKind::Name);

        let by_targets =
            Selection::by_targets([FetchTarget::new(PageLocator::page(1), "泰博科技")]);
        assert_eq!(by_targets.kind(), SelectionKind::Targets);
    }

    #[test]
    fn kind_parses_and_displays() {
        assert_eq!("ID".parse::<SelectionKind>(), Ok(SelectionKind::Identifier));
        assert_eq!("targets".parse::<SelectionKind>(), Ok(SelectionKind::Targets));
        assert!("nearest".parse::<SelectionKind>().is_err());
        assert_eq!(SelectionKind::Name.to_string(), "name");
    }
}
