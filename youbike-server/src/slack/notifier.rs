//! Delivery of messages to a slash command's `response_url`.

use tokio::task::JoinHandle;

use super::blocks::SlackMessage;
use super::error::SlackError;

/// Posts messages to Slack `response_url` callbacks.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    http: reqwest::Client,
}

impl SlackNotifier {
    /// Create a notifier with the given request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self, SlackError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { http })
    }

    /// Post a message and wait for Slack to accept it.
    pub async fn post(&self, response_url: &str, message: &SlackMessage) -> Result<(), SlackError> {
        let response = self.http.post(response_url).json(message).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlackError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }

    /// Post a message in the background.
    ///
    /// Best effort: the caller does not wait, and a failure is only logged.
    pub fn post_detached(&self, response_url: String, message: SlackMessage) -> JoinHandle<()> {
        let notifier = self.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.post(&response_url, &message).await {
                tracing::warn!(error = %e, "failed to post interim Slack notice");
            }
        })
    }
}
