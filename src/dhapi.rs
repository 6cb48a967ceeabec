use std::path::PathBuf;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::config::Config;
use crate::error::{CliErrorKind, LottoError, Result};

const COMMAND_TIMEOUT: Duration = Duration::from_secs(120);

pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Wrapper around the external `dhapi` purchase CLI.
///
/// This is the only code that reads the tool's unstructured stderr; anything
/// it reports comes back as a typed [`CliErrorKind`].
pub struct DhapiClient {
    path: PathBuf,
}

impl DhapiClient {
    pub fn new(config: &Config) -> Result<Self> {
        if !config.dhapi_path.exists() {
            return Err(LottoError::NotFound(format!(
                "dhapi executable not found at {}",
                config.dhapi_path.display()
            )));
        }
        Ok(Self {
            path: config.dhapi_path.clone(),
        })
    }

    pub async fn show_balance(&self) -> Result<CliOutput> {
        self.run(&["show-balance"]).await
    }

    /// Places one order of up to five tickets. A blank slot argument tells
    /// the CLI to auto-pick that slot; `-y` confirms without a prompt.
    pub async fn buy_lotto645(&self) -> Result<CliOutput> {
        self.run(&["buy-lotto645", "-y", "", "", "", "", ""]).await
    }

    async fn run(&self, args: &[&str]) -> Result<CliOutput> {
        let output = timeout(COMMAND_TIMEOUT, Command::new(&self.path).args(args).output())
            .await
            .map_err(|_| LottoError::Cli {
                kind: CliErrorKind::Runtime,
                message: format!(
                    "dhapi {} timed out after {}s",
                    args[0],
                    COMMAND_TIMEOUT.as_secs()
                ),
            })??;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if let Some(kind) = classify_stderr(&stderr) {
            return Err(LottoError::Cli {
                kind,
                message: stderr.trim().to_string(),
            });
        }

        Ok(CliOutput { stdout, stderr })
    }
}

/// Maps the CLI's stderr to an error kind, or `None` when the output carries
/// no recognized failure marker. The named markers are checked before the
/// generic ones so a `ValueError` traceback is not washed out to `Other`.
pub fn classify_stderr(stderr: &str) -> Option<CliErrorKind> {
    const MARKERS: [(&str, CliErrorKind); 4] = [
        ("FileNotFoundError", CliErrorKind::NotFound),
        ("KeyError", CliErrorKind::Key),
        ("RuntimeError", CliErrorKind::Runtime),
        ("ValueError", CliErrorKind::Value),
    ];

    for (marker, kind) in MARKERS {
        if stderr.contains(marker) {
            return Some(kind);
        }
    }
    if stderr.contains("Error") || stderr.contains("Exception") {
        return Some(CliErrorKind::Other);
    }
    None
}
