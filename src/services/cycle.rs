//! Cycle resolution
//!
//! Maps a recurrence preference and a reference date to the inclusive
//! boundaries of the cycle containing it, and formats cycle labels. All
//! functions here are pure: "today" is always supplied by the caller.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{CyclePeriod, RecurrenceKind};

/// The cycle containing `reference_date`
///
/// Weekly cycles run Monday through Sunday. Monthly cycles run from the first
/// to the last day of the reference date's calendar month.
pub fn resolve_current_cycle(
    recurrence: RecurrenceKind,
    reference_date: NaiveDate,
) -> CyclePeriod {
    match recurrence {
        RecurrenceKind::Weekly => {
            let start = week_start(reference_date);
            CyclePeriod::new(start, start + Duration::days(6))
        }
        RecurrenceKind::Monthly => {
            let start = reference_date - Duration::days(reference_date.day0() as i64);
            CyclePeriod::new(start, month_end(reference_date))
        }
    }
}

/// Human-readable label for the cycle containing `date_in_cycle`
///
/// Only formats: weekly labels name the Monday on or before the date, monthly
/// labels name the date's own month and year.
pub fn cycle_period_label(recurrence: RecurrenceKind, date_in_cycle: NaiveDate) -> String {
    match recurrence {
        RecurrenceKind::Weekly => {
            format!("Week of {}", week_start(date_in_cycle).format("%Y-%m-%d"))
        }
        RecurrenceKind::Monthly => date_in_cycle.format("%B %Y").to_string().to_uppercase(),
    }
}

/// The cycle immediately before `cycle`
pub fn previous_cycle(recurrence: RecurrenceKind, cycle: &CyclePeriod) -> CyclePeriod {
    resolve_current_cycle(recurrence, cycle.start_date - Duration::days(1))
}

/// Monday on or before `date`
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Last day of the month containing `date`: the first of the next month, minus one day
fn month_end(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    // Only the final month chrono can represent has no successor
    next_month
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
