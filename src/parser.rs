use regex::Regex;
use std::sync::LazyLock;

use crate::error::{LottoError, Result};
use crate::types::TicketRow;

/// One rendered table row from the purchase CLI. The column separator is
/// U+2502 BOX DRAWINGS LIGHT VERTICAL, not an ASCII pipe.
static TICKET_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"│\s+([A-E])\s+│\s+(\S+)\s+│\s+(\d+)\s+│\s+(\d+)\s+│\s+(\d+)\s+│\s+(\d+)\s+│\s+(\d+)\s+│\s+(\d+)\s+│",
    )
    .expect("ticket row pattern compiles")
});

/// Extracts every ticket row from a log file's content, in file order.
///
/// Banner text, balance output and anything else that does not match the
/// table shape is skipped. A row that matches the shape but carries numbers
/// outside 1..=45, or duplicate numbers, is rejected rather than tolerated.
pub fn parse_ticket_rows(content: &str) -> Result<Vec<TicketRow>> {
    let mut rows = Vec::new();

    for caps in TICKET_ROW.captures_iter(content) {
        let slot = caps[1]
            .chars()
            .next()
            .expect("slot capture is a single letter");
        let mode = caps[2].to_string();

        let mut numbers = [0u8; 6];
        for (i, number) in numbers.iter_mut().enumerate() {
            let field = &caps[i + 3];
            *number = field.parse().map_err(|_| {
                LottoError::InvalidFormat(format!("slot {slot}: number field '{field}' too large"))
            })?;
        }

        let mut seen = [false; 46];
        for &n in &numbers {
            if !(1..=45).contains(&n) {
                return Err(LottoError::InvalidFormat(format!(
                    "slot {slot}: number {n} outside 1..=45"
                )));
            }
            if seen[n as usize] {
                return Err(LottoError::InvalidFormat(format!(
                    "slot {slot}: duplicate number {n}"
                )));
            }
            seen[n as usize] = true;
        }

        rows.push(TicketRow {
            slot,
            mode,
            numbers,
        });
    }

    Ok(rows)
}
