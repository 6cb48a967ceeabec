use anyhow::Result;
use tracing_subscriber::EnvFilter;

use lottobot::config::Config;
use lottobot::dhapi::DhapiClient;
use lottobot::logs::{self, RunLock};
use lottobot::notify::Notifier;
use lottobot::purchase::purchase_tickets;
use lottobot::reconcile::reconcile_results;
use lottobot::utils::now_kst;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    std::fs::create_dir_all(&config.log_dir)?;

    let notifier = Notifier::new(&config);
    let run_started = now_kst().format("%Y-%m-%d %H:%M:%S").to_string();

    let _lock = match RunLock::acquire(&config.log_dir) {
        Ok(lock) => lock,
        Err(e) => {
            report_failure(&config, &notifier, &run_started, &e.to_string()).await;
            return Ok(());
        }
    };

    // Reconcile last week's tickets first, then buy this week's. The phases
    // are independent: a failure in one never skips the other, and neither
    // changes the exit code.
    match reconcile_results(&config).await {
        Ok(outcome) => {
            tracing::info!("reconciliation finished");
            notifier.send(outcome.message()).await;
        }
        Err(e) => report_failure(&config, &notifier, &run_started, &e.to_string()).await,
    }

    match DhapiClient::new(&config) {
        Ok(dhapi) => match purchase_tickets(&config, &dhapi).await {
            Ok(report) => {
                tracing::info!("purchase finished");
                notifier.send(&report).await;
            }
            Err(e) => report_failure(&config, &notifier, &run_started, &e.to_string()).await,
        },
        Err(e) => report_failure(&config, &notifier, &run_started, &e.to_string()).await,
    }

    Ok(())
}

async fn report_failure(config: &Config, notifier: &Notifier, timestamp: &str, detail: &str) {
    tracing::error!("{detail}");
    if let Err(e) = logs::append_error_line(&config.log_dir, timestamp, detail) {
        tracing::error!("failed to append to the error log: {e}");
    }
    notifier.send(detail).await;
}
