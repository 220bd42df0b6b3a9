//! Slack slash-command support.
//!
//! Parses incoming slash-command bodies, renders resolved stations as
//! Block Kit messages, and posts deferred replies to `response_url`.

mod blocks;
mod command;
mod error;
mod notifier;

pub use blocks::{
    Block, BlockLayout, ImageElement, NOT_FOUND_TEXT, ResponseType, SEARCHING_TEXT, SlackMessage,
    TextObject, render_stations,
};
pub use command::{SlashCommand, parse_slash_command};
pub use error::SlackError;
pub use notifier::SlackNotifier;
