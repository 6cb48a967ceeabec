use std::fmt;

use crate::error::{LottoError, Result};
use crate::types::{TicketRow, WinningResult};

/// Prize tier of one ticket against one round's published numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeTier {
    First,
    SecondWithBonus,
    Third,
    Fourth,
    Fifth,
    None(u8),
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrizeTier::First => write!(f, "1등!(6)"),
            PrizeTier::SecondWithBonus => write!(f, "2등!(5+)"),
            PrizeTier::Third => write!(f, "3등!(5)"),
            PrizeTier::Fourth => write!(f, "4등!(4)"),
            PrizeTier::Fifth => write!(f, "5등!(3)"),
            PrizeTier::None(count) => write!(f, "낙첨({count})"),
        }
    }
}

/// Counts how many ticket numbers appear in the winning set and maps the
/// count to a tier. Five matches split on whether the bonus number is held.
pub fn evaluate(ticket: &TicketRow, winning: &WinningResult) -> Result<PrizeTier> {
    let matched = ticket
        .numbers
        .iter()
        .filter(|n| winning.numbers.contains(n))
        .count();

    let tier = match matched {
        6 => PrizeTier::First,
        5 if ticket.numbers.contains(&winning.bonus) => PrizeTier::SecondWithBonus,
        5 => PrizeTier::Third,
        4 => PrizeTier::Fourth,
        3 => PrizeTier::Fifth,
        count @ 0..=2 => PrizeTier::None(count as u8),
        count => {
            return Err(LottoError::Internal(format!(
                "matched {count} numbers on a six-number ticket"
            )));
        }
    };

    Ok(tier)
}
