use serde::Deserialize;
use std::collections::BTreeSet;

/// One purchased ticket line as parsed from the CLI's rendered table.
///
/// Identity within a round is the slot letter; rows keep file order, which
/// matches the purchase-slot order A through E.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRow {
    pub slot: char,
    pub mode: String,
    pub numbers: [u8; 6],
}

/// Raw body of the draw-results endpoint.
///
/// The number fields are absent when the draw has not been published, so
/// everything past `returnValue` is optional.
#[derive(Deserialize, Debug)]
pub struct DrawResponse {
    #[serde(rename = "returnValue")]
    pub return_value: String,
    #[serde(rename = "drwNoDate")]
    pub draw_date: Option<String>,
    #[serde(rename = "drwtNo1")]
    pub no1: Option<u8>,
    #[serde(rename = "drwtNo2")]
    pub no2: Option<u8>,
    #[serde(rename = "drwtNo3")]
    pub no3: Option<u8>,
    #[serde(rename = "drwtNo4")]
    pub no4: Option<u8>,
    #[serde(rename = "drwtNo5")]
    pub no5: Option<u8>,
    #[serde(rename = "drwtNo6")]
    pub no6: Option<u8>,
    #[serde(rename = "bnusNo")]
    pub bonus: Option<u8>,
}

/// Published winning numbers for one round. Append-only truth once fetched.
#[derive(Debug, Clone)]
pub struct WinningResult {
    pub round: u32,
    pub draw_date: String,
    pub numbers: BTreeSet<u8>,
    pub bonus: u8,
}
