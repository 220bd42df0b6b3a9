//! Server configuration.
//!
//! Everything is read from the environment once at startup. The station
//! tables live in an immutable [`StationCatalog`] shared by all requests.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::resolver::{FetchTarget, Selection, SelectionKind};
use crate::youbike::{PageLocator, YouBikeConfig};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Path of the station image under `BASE_URL`.
pub const IMAGE_PATH: &str = "/images/youbike.png";

/// Default stations of interest: (identifier, friendly name).
const DEFAULT_STATIONS: [(&str, &str); 2] = [
    ("500205055", "泰博科技"),
    ("500205062", "捷運新北產業園區"),
];

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable had an unusable value
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// The selections available to handlers, one per [`SelectionKind`].
#[derive(Debug, Clone)]
pub struct StationCatalog {
    pub by_identifier: Selection,
    pub by_name: Selection,
    pub by_targets: Selection,
}

impl StationCatalog {
    /// Build a catalog for the given `(identifier, friendly name)` stations.
    ///
    /// Identifier and name selections read `page`; per-target selection
    /// gives the i-th station page `i` at the same page size.
    pub fn new(stations: &[(String, String)], page: PageLocator) -> Self {
        let targets = stations.iter().enumerate().map(|(i, (_, name))| {
            let target_page = PageLocator::new(page.page.saturating_add(i as u32), page.size);
            FetchTarget::new(target_page, name.clone())
        });

        Self {
            by_identifier: Selection::by_identifier(page, stations.iter().cloned()),
            by_name: Selection::by_name(page, stations.iter().map(|(_, name)| name.clone())),
            by_targets: Selection::by_targets(targets),
        }
    }

    pub fn get(&self, kind: SelectionKind) -> &Selection {
        match kind {
            SelectionKind::Identifier => &self.by_identifier,
            SelectionKind::Name => &self.by_name,
            SelectionKind::Targets => &self.by_targets,
        }
    }
}

impl Default for StationCatalog {
    fn default() -> Self {
        let stations: Vec<(String, String)> = DEFAULT_STATIONS
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        Self::new(&stations, PageLocator::default())
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Public base URL for absolute image links; images are omitted if unset
    pub base_url: Option<String>,

    /// Upstream client settings
    pub youbike: YouBikeConfig,

    /// Serve mock pages from this directory instead of the live API
    pub mock_dir: Option<PathBuf>,

    /// Directory holding `images/`
    pub static_dir: PathBuf,

    /// Stations of interest
    pub catalog: StationCatalog,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr: SocketAddr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "BIND_ADDR",
                message: e.to_string(),
            })?;

        let base_url = var("BASE_URL").map(|url| url.trim_end_matches('/').to_string());

        let mut youbike = YouBikeConfig::new();
        if let Some(url) = var("YOUBIKE_API_URL") {
            youbike = youbike.with_base_url(url);
        }
        if let Some(secs) = var("YOUBIKE_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                var: "YOUBIKE_TIMEOUT_SECS",
                message: e.to_string(),
            })?;
            youbike = youbike.with_timeout(secs);
        }

        let catalog = match var("YOUBIKE_STATIONS") {
            Some(raw) => StationCatalog::new(&parse_stations(&raw)?, PageLocator::default()),
            None => StationCatalog::default(),
        };

        Ok(Self {
            bind_addr,
            base_url,
            youbike,
            mock_dir: var("YOUBIKE_MOCK_DIR").map(PathBuf::from),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            catalog,
        })
    }

    /// Absolute URL of the station image, if a base URL is configured.
    pub fn image_url(&self) -> Option<String> {
        self.base_url.as_ref().map(|base| format!("{base}{IMAGE_PATH}"))
    }
}

/// Parse `id=name,id=name` into station pairs.
fn parse_stations(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let stations = raw
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(id, name)| (id.trim().to_string(), name.trim().to_string()))
                .filter(|(id, name)| !id.is_empty() && !name.is_empty())
                .ok_or_else(|| ConfigError::Invalid {
                    var: "YOUBIKE_STATIONS",
                    message: format!("expected id=name, got {entry:?}"),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if stations.is_empty() {
        return Err(ConfigError::Invalid {
            var: "YOUBIKE_STATIONS",
            message: "no stations listed".to_string(),
        });
    }

    Ok(stations)
}
