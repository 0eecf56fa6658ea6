//! Service-period arithmetic: pro-rata month counting.
//!
//! A partial month counts as a full pro-rata month when at least 15
//! days of it were worked. Both endpoint dates count as worked days.
//! Dates are always injected by the caller; nothing here reads a clock.

use chrono::{Months, NaiveDate};

/// Counts pro-rata months of service between two dates (inclusive).
///
/// Completed months are counted first; the leftover partial month adds
/// one more when it spans 15 or more worked days. Returns zero when
/// `end` precedes `start`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use clt_engine::calculation::pro_rata_months;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// // 11 months and 15 days of service
/// let end = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
/// assert_eq!(pro_rata_months(start, end), 12);
/// ```
pub fn pro_rata_months(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }

    let mut months =
        (end.years_since(start).unwrap_or(0) * 12) as i64 + months_within_year(start, end);
    if months < 0 {
        months = 0;
    }
    let mut months = months as u32;

    // Anchor at start + completed months, then count the leftover days
    // inclusively: start day and end day are both worked.
    let anchor = start + Months::new(months);
    let leftover_days = (end - anchor).num_days() + 1;
    if leftover_days >= 15 {
        months += 1;
    }
    months
}

fn months_within_year(start: NaiveDate, end: NaiveDate) -> i64 {
    use chrono::Datelike;
    let mut months = i64::from(end.month()) - i64::from(start.month());
    if months < 0 {
        months += 12;
    }
    // years_since already accounted for whole years; subtract the month
    // not yet completed by day-of-month.
    if end.day() < start.day() && months > 0 {
        months -= 1;
    } else if end.day() < start.day() && months == 0 {
        months = 11;
    }
    months
}

/// Completed years of service, for the proportional prior-notice rule.
pub fn completed_service_years(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    end.years_since(start).unwrap_or(0)
}
