use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

/// Draws are announced in Korea Standard Time; there is no DST to model.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("KST is a valid offset")
}

pub fn now_kst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&kst())
}

/// The round a date belongs to, with the exact draw instant for that round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSchedule {
    pub round: u32,
    pub draw_at: DateTime<FixedOffset>,
}

/// Maps a calendar date to its lottery round and draw timestamp.
///
/// Round 1 was drawn on 2002-12-07. Any date shares the round of the Saturday
/// that ends its Sunday-to-Saturday week, and the draw goes live at 20:35:00
/// KST. Dates before the first draw have no round and yield `None`.
pub fn round_for_date(date: NaiveDate) -> Option<DrawSchedule> {
    let first_draw = NaiveDate::from_ymd_opt(2002, 12, 7)?;
    if date < first_draw {
        return None;
    }

    let days_until_saturday = (5 + 7 - i64::from(date.weekday().num_days_from_monday())) % 7;
    let saturday = date + Duration::days(days_until_saturday);

    let round = u32::try_from((saturday - first_draw).num_days() / 7 + 1).ok()?;
    let draw_at = kst()
        .from_local_datetime(&saturday.and_hms_opt(20, 35, 0)?)
        .single()?;

    Some(DrawSchedule { round, draw_at })
}
