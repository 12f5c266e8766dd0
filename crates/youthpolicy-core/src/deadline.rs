//! D-day labels for application deadlines.

use std::fmt;

use chrono::{Duration, NaiveDate};

use crate::policy::PolicyRecord;

/// `apply_period_type` value for a policy that no longer accepts applications.
pub const CLOSED_MARKER: &str = "마감";

/// `apply_period_end` value for a policy that accepts applications year-round.
pub const OPEN_ENDED_SENTINEL: &str = "99991231";

/// Deadline status shown as a badge on a result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineLabel {
    /// Days remaining, always positive.
    DaysLeft(i64),
    /// The deadline is today.
    Today,
    /// Open year-round.
    AlwaysOpen,
    Closed,
    /// No usable end date.
    Unknown,
}

impl DeadlineLabel {
    pub fn is_closed(self) -> bool {
        self == DeadlineLabel::Closed
    }
}

impl fmt::Display for DeadlineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadlineLabel::DaysLeft(days) => write!(f, "D-{days}"),
            DeadlineLabel::Today => f.write_str("D-Day"),
            DeadlineLabel::AlwaysOpen => f.write_str("상시"),
            DeadlineLabel::Closed => f.write_str(CLOSED_MARKER),
            DeadlineLabel::Unknown => f.write_str("-"),
        }
    }
}

/// Compute the deadline label for `record` as seen on `today`.
pub fn deadline_label(record: &PolicyRecord, today: NaiveDate) -> DeadlineLabel {
    let Some(dates) = record.dates.as_ref() else {
        return DeadlineLabel::Unknown;
    };
    if dates.apply_period_type.as_deref() == Some(CLOSED_MARKER) {
        return DeadlineLabel::Closed;
    }

    let Some(end) = dates.end_text().filter(|s| !s.is_empty()) else {
        return DeadlineLabel::Unknown;
    };
    if end == OPEN_ENDED_SENTINEL {
        return DeadlineLabel::AlwaysOpen;
    }

    let Some(deadline) = parse_yyyymmdd(&end) else {
        return DeadlineLabel::Unknown;
    };

    let days = (deadline - today).num_days();
    match days {
        d if d > 0 => DeadlineLabel::DaysLeft(d),
        0 => DeadlineLabel::Today,
        _ => DeadlineLabel::Closed,
    }
}

/// Parse an exact 8-digit `YYYYMMDD` string.
///
/// Month and day are not range-checked: like calendar arithmetic, `20250231`
/// lands on March 3rd and month `13` on January of the next year. `None` only
/// for a malformed string or a date outside the representable range.
pub fn parse_yyyymmdd(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: i32 = s[4..6].parse().ok()?;
    let day: i64 = s[6..8].parse().ok()?;

    let month_index = month - 1;
    let year = year + month_index.div_euclid(12);
    let month = u32::try_from(month_index.rem_euclid(12) + 1).ok()?;

    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_signed(Duration::days(day - 1))
}
