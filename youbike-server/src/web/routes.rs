//! HTTP route handlers.

use std::path::Path;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::resolver::{SelectionKind, fetch_and_resolve};
use crate::slack::{SlackMessage, parse_slash_command, render_stations};
use crate::youbike::YouBikeError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the directory whose `images/` subdirectory is served at
/// `/images`.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/slack/stations", post(slack_stations))
        .nest_service("/images", ServeDir::new(static_dir.join("images")))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Current availability of the stations of interest, as JSON.
async fn list_stations(
    State(state): State<AppState>,
    Query(query): Query<StationsQuery>,
) -> Result<Json<Vec<StationResult>>, AppError> {
    let selection = state
        .catalog
        .get(query.select.unwrap_or(SelectionKind::Identifier));

    let stations = fetch_and_resolve(state.source.as_ref(), selection).await?;

    Ok(Json(stations.into_iter().map(StationResult::from).collect()))
}

/// Slack slash command: reply with the current availability.
///
/// With a `response_url` an interim notice is posted in the background and
/// the final message goes to the callback; otherwise the message is the
/// HTTP response. Upstream failures become the not-found apology.
async fn slack_stations(
    State(state): State<AppState>,
    Query(query): Query<SlackQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let command = parse_slash_command(content_type, &body);

    tracing::info!(
        command = %command.command,
        user = %command.user_id,
        channel = %command.channel_id,
        deferred = command.response_url.is_some(),
        "slash command"
    );

    if let Some(url) = &command.response_url {
        state
            .notifier
            .post_detached(url.clone(), SlackMessage::searching());
    }

    let selection = state
        .catalog
        .get(query.select.unwrap_or(SelectionKind::Targets));

    let stations = match fetch_and_resolve(state.source.as_ref(), selection).await {
        Ok(stations) => stations,
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch stations for Slack");
            Vec::new()
        }
    };

    let message = render_stations(
        &stations,
        query.layout.unwrap_or_default(),
        state.image_url.as_deref(),
    );

    deliver(&state, command.response_url.as_deref(), message).await
}

/// Send the final message to `response_url`, or return it directly.
///
/// If the callback post fails the message is returned as the HTTP response
/// instead, so the user still sees something.
async fn deliver(state: &AppState, response_url: Option<&str>, message: SlackMessage) -> Response {
    let Some(url) = response_url else {
        return Json(message).into_response();
    };

    match state.notifier.post(url, &message).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to post to response_url, replying directly");
            Json(message).into_response()
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Upstream { message: String },
}

impl From<YouBikeError> for AppError {
    fn from(e: YouBikeError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
