use std::fs;
use std::path::Path;

use crate::api::fetch_winning_result;
use crate::config::Config;
use crate::error::Result;
use crate::logs::{self, latest_log_file};
use crate::parser::parse_ticket_rows;
use crate::prize;
use crate::reports::reconcile_report;
use crate::types::WinningResult;

#[derive(Debug, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Report text that was appended to the log file.
    Report(String),
    /// The file already carried a result block; nothing was written.
    AlreadyChecked,
}

impl ReconcileOutcome {
    pub fn message(&self) -> &str {
        match self {
            ReconcileOutcome::Report(text) => text,
            ReconcileOutcome::AlreadyChecked => "이미 당첨 확인하셨습니다.",
        }
    }
}

/// Checks the most recent purchase log against the published numbers and
/// appends a result block to it.
///
/// The fetch happens before the file is touched, so an unpublished draw or a
/// network failure leaves the log unmodified. Running twice is safe: the
/// second call sees the sentinel and returns without writing.
pub async fn reconcile_results(config: &Config) -> Result<ReconcileOutcome> {
    let (path, round) = latest_log_file(&config.log_dir)?;
    let winning = fetch_winning_result(&config.results_api_url, round).await?;
    reconcile_log_file(&path, &winning)
}

/// File-level reconciliation against an already-fetched result.
pub fn reconcile_log_file(path: &Path, winning: &WinningResult) -> Result<ReconcileOutcome> {
    let content = fs::read_to_string(path)?;
    if content.contains(logs::RESULT_SENTINEL) {
        return Ok(ReconcileOutcome::AlreadyChecked);
    }

    let rows = parse_ticket_rows(&content)?;
    let mut evaluated = Vec::with_capacity(rows.len());
    for row in rows {
        let tier = prize::evaluate(&row, winning)?;
        evaluated.push((row, tier));
    }

    let report = reconcile_report(winning, &evaluated);
    logs::append(path, &report)?;
    Ok(ReconcileOutcome::Report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PURCHASE_BLOCK: &str = "\
=== 1149회 (2024-12-07 20:35:00 추첨)===
현재 시각: 2024-12-02 09:00:00
예치금 잔액: 5,000원
│  A   │   자동   │  4   │  8   │  22  │  26  │  32  │  38  │
│  B   │   자동   │  1   │  2   │  3   │  9   │  10  │  11  │
";

    fn winning() -> WinningResult {
        WinningResult {
            round: 1149,
            draw_date: "2024-12-07".to_string(),
            numbers: [4, 8, 22, 26, 32, 38].into_iter().collect(),
            bonus: 5,
        }
    }

    #[test]
    fn appends_result_block_once() {
        let dir = TempDir::new().unwrap();
        let path = logs::log_path(dir.path(), 1149);
        fs::write(&path, PURCHASE_BLOCK).unwrap();

        let outcome = reconcile_log_file(&path, &winning()).unwrap();
        let ReconcileOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert!(report.contains("=== 1149회(2024-12-07 추첨) 당첨 결과 ==="));
        assert!(report.contains("[A, 자동, 04, 08, 22, 26, 32, 38, 1등!(6)]"));
        assert!(report.contains("[B, 자동, 01, 02, 03, 09, 10, 11, 낙첨(0)]"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(PURCHASE_BLOCK));
        assert!(content.ends_with(&report));
    }

    #[test]
    fn second_run_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let path = logs::log_path(dir.path(), 1149);
        fs::write(&path, PURCHASE_BLOCK).unwrap();

        reconcile_log_file(&path, &winning()).unwrap();
        let after_first = fs::read_to_string(&path).unwrap();

        let outcome = reconcile_log_file(&path, &winning()).unwrap();
        assert_eq!(outcome, ReconcileOutcome::AlreadyChecked);
        assert_eq!(outcome.message(), "이미 당첨 확인하셨습니다.");
        assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    }

    #[test]
    fn missing_file_surfaces_as_io_error() {
        let dir = TempDir::new().unwrap();
        let path = logs::log_path(dir.path(), 1);
        assert!(reconcile_log_file(&path, &winning()).is_err());
    }

    #[test]
    fn log_without_rows_still_reports_winning_numbers() {
        let dir = TempDir::new().unwrap();
        let path = logs::log_path(dir.path(), 1149);
        fs::write(&path, "구매 기록 없음\n").unwrap();

        let outcome = reconcile_log_file(&path, &winning()).unwrap();
        let ReconcileOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert!(report.contains("당첨 번호: [04, 08, 22, 26, 32, 38, (05)]"));
    }
}
