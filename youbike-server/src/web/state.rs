//! Application state for the web layer.

use std::sync::Arc;

use crate::config::StationCatalog;
use crate::slack::SlackNotifier;
use crate::youbike::StationBackend;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Upstream station source (live or mock)
    pub source: Arc<StationBackend>,

    /// Stations of interest, per selection kind
    pub catalog: Arc<StationCatalog>,

    /// Poster for `response_url` callbacks
    pub notifier: SlackNotifier,

    /// Absolute image URL for message accessories
    pub image_url: Option<Arc<str>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        source: StationBackend,
        catalog: StationCatalog,
        notifier: SlackNotifier,
        image_url: Option<String>,
    ) -> Self {
        Self {
            source: Arc::new(source),
            catalog: Arc::new(catalog),
            notifier,
            image_url: image_url.map(Arc::from),
        }
    }
}
