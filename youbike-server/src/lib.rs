//! YouBike station availability server.
//!
//! Fetches live YouBike 2.0 availability from the New Taipei City open-data
//! API for a few stations of interest and serves it as JSON or as a Slack
//! slash-command reply.

pub mod config;
pub mod resolver;
pub mod slack;
pub mod web;
pub mod youbike;
