use crate::prize::PrizeTier;
use crate::types::{TicketRow, WinningResult};
use crate::utils::DrawSchedule;

fn format_numbers(numbers: impl IntoIterator<Item = u8>) -> String {
    numbers
        .into_iter()
        .map(|n| format!("{n:02}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reconciliation block appended to a round's log file.
///
/// The header carries the sentinel text the idempotency check looks for, so
/// writing this block marks the file as processed.
pub fn reconcile_report(winning: &WinningResult, rows: &[(TicketRow, PrizeTier)]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "\n=== {}회({} 추첨) 당첨 결과 ===",
        winning.round, winning.draw_date
    ));
    lines.push(format!(
        "당첨 번호: [{}, ({:02})]",
        format_numbers(winning.numbers.iter().copied()),
        winning.bonus
    ));
    for (row, tier) in rows {
        lines.push(format!(
            "[{}, {}, {}, {}]",
            row.slot,
            row.mode,
            format_numbers(row.numbers),
            tier
        ));
    }
    lines.join("\n") + "\n"
}

/// Confirmation message sent after a purchase; no prizes yet, just the slots.
pub fn purchase_report(schedule: &DrawSchedule, rows: &[TicketRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "=== {}회({} 추첨) 구매 완료 ===",
        schedule.round,
        schedule.draw_at.format("%Y-%m-%d")
    ));
    for row in rows {
        lines.push(format!(
            "[{}, {}, {}]",
            row.slot,
            row.mode,
            format_numbers(row.numbers)
        ));
    }
    lines.join("\n") + "\n"
}

/// Raw transcript of one purchase run, appended to the round's log file.
/// The CLI's own table output lands here and is what the parser reads back.
pub fn purchase_transcript(
    schedule: &DrawSchedule,
    now: &str,
    balance_output: &str,
    purchase_output: &str,
) -> String {
    format!(
        "=== {}회 ({} 추첨)===\n현재 시각: {}\n{}\n{}\n",
        schedule.round,
        schedule.draw_at.format("%Y-%m-%d %H:%M:%S"),
        now,
        balance_output,
        purchase_output,
    )
}
