use std::time::Duration;

use crate::config::Config;

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Best-effort webhook messenger.
///
/// Notification failure must never abort a purchase or reconciliation, so
/// `send` swallows every transport error after logging it. With no webhook
/// configured it does nothing at all.
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl Notifier {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: config.webhook_url.clone(),
        }
    }

    pub async fn send(&self, message: &str) {
        let Some(url) = &self.webhook_url else {
            return;
        };

        let result = self
            .client
            .post(url)
            .form(&[("content", message)])
            .timeout(SEND_TIMEOUT)
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!("webhook returned {}", response.status());
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("failed to send webhook notification: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(webhook_url: Option<&str>) -> Config {
        Config {
            log_dir: PathBuf::from("log"),
            dhapi_path: PathBuf::from("/usr/local/bin/dhapi"),
            webhook_url: webhook_url.map(str::to_string),
            results_api_url: "https://www.dhlottery.co.kr/common.do".to_string(),
        }
    }

    #[tokio::test]
    async fn unconfigured_notifier_is_a_no_op() {
        let notifier = Notifier::new(&config(None));
        notifier.send("당첨 결과 보고").await;
    }

    #[tokio::test]
    async fn transport_failure_is_swallowed() {
        // Nothing listens on this port; send must still return.
        let notifier = Notifier::new(&config(Some("http://127.0.0.1:9/webhook")));
        notifier.send("보고").await;
    }
}
