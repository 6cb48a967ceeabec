use std::fs;

use crate::config::Config;
use crate::dhapi::DhapiClient;
use crate::error::{LottoError, Result};
use crate::logs;
use crate::parser::parse_ticket_rows;
use crate::reports::{purchase_report, purchase_transcript};
use crate::utils::{now_kst, round_for_date};

/// Buys this week's tickets and records the transcript in the round's log.
///
/// Balance query and purchase each go through the CLI wrapper, which raises
/// a classified error before anything is written. The confirmation report is
/// built by re-parsing the file just written, so it shows exactly what the
/// reconciliation pass will see after the draw.
pub async fn purchase_tickets(config: &Config, dhapi: &DhapiClient) -> Result<String> {
    let now = now_kst();
    let schedule = round_for_date(now.date_naive()).ok_or_else(|| {
        LottoError::Internal("current date precedes the first draw".to_string())
    })?;
    let log_path = logs::log_path(&config.log_dir, schedule.round);

    let balance = dhapi.show_balance().await?;
    let order = dhapi.buy_lotto645().await?;

    let transcript = purchase_transcript(
        &schedule,
        &now.format("%Y-%m-%d %H:%M:%S").to_string(),
        &balance.stdout,
        &order.stdout,
    );
    logs::append(&log_path, &transcript)?;

    let content = fs::read_to_string(&log_path)?;
    let rows = parse_ticket_rows(&content)?;
    Ok(purchase_report(&schedule, &rows))
}
