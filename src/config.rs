use std::env;
use std::path::PathBuf;

/// Runtime settings, loaded from the environment at startup. A `.env` file
/// is honored for local runs and skipped in tests to keep them hermetic.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding per-round purchase logs and the error log.
    pub log_dir: PathBuf,
    /// Path to the external purchase CLI.
    pub dhapi_path: PathBuf,
    /// Webhook for run reports. Unset or blank means notifications are off.
    pub webhook_url: Option<String>,
    /// Base URL of the draw-results endpoint.
    pub results_api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let log_dir = env::var("LOTTO_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("log"));

        let dhapi_path = env::var("DHAPI_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/usr/local/bin/dhapi"));

        let webhook_url = env::var("DISCORD_WEBHOOK_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let results_api_url = env::var("LOTTO_API_URL")
            .unwrap_or_else(|_| "https://www.dhlottery.co.kr/common.do".to_string());

        Self {
            log_dir,
            dhapi_path,
            webhook_url,
            results_api_url,
        }
    }
}
