//! Web layer for the YouBike station server.
//!
//! Provides the JSON station endpoint and the Slack slash-command endpoint.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
