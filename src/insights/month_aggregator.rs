//! Per-day attendance classification for calendars.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use super::dates::{days_inclusive, is_weekend, parse_iso_day, round_to, worked_hours};
use crate::error::InsightError;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::calendar::{
    CalendarDay, CalendarSummary, DayClassification, MonthCalendar, YearMonth,
};

impl From<AttendanceStatus> for DayClassification {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present | AttendanceStatus::HalfDay => DayClassification::Present,
            AttendanceStatus::Wfh => DayClassification::Wfh,
            AttendanceStatus::Absent | AttendanceStatus::OnLeave => DayClassification::Absent,
        }
    }
}

/// Indexes records by day. Later records for the same day replace earlier
/// ones; records whose date is not `YYYY-MM-DD` are skipped.
fn index_by_day(records: &[AttendanceRecord]) -> HashMap<NaiveDate, &AttendanceRecord> {
    let mut by_day = HashMap::with_capacity(records.len());
    for record in records {
        match parse_iso_day(&record.date) {
            Some(day) => {
                by_day.insert(day, record);
            }
            None => tracing::debug!(
                biometric_id = %record.biometric_id,
                date = %record.date,
                "Skipping attendance record with unparseable date"
            ),
        }
    }
    by_day
}

fn classify(day: NaiveDate, record: Option<&AttendanceRecord>) -> DayClassification {
    if is_weekend(day) {
        return DayClassification::Weekend;
    }
    // A weekday without a record counts as absent. This is the portal's
    // business rule pending product confirmation; it is not a data-gap marker.
    record.map_or(DayClassification::Absent, |r| r.status.into())
}

/// Longest window `classify_window` accepts, in days.
pub const MAX_WINDOW_DAYS: i64 = 366;

fn classify_days(
    records: &[AttendanceRecord],
    days: impl Iterator<Item = NaiveDate>,
) -> Vec<CalendarDay> {
    let by_day = index_by_day(records);

    days.map(|day| {
        let record = by_day.get(&day).copied();
        CalendarDay {
            date: day,
            weekday: day.format("%a").to_string(),
            classification: classify(day, record),
            recorded: record.is_some(),
            check_in: record.and_then(|r| r.time_in.clone()),
            check_out: record.and_then(|r| r.time_out.clone()),
            is_late: record.is_some_and(|r| r.is_late),
            hours: record.map_or(0.0, |r| {
                worked_hours(r.time_in.as_deref(), r.time_out.as_deref())
            }),
        }
    })
    .collect()
}

/// Classifies every day of `[start, end]`, in calendar order. A reversed
/// window is empty.
pub fn classify_window(
    records: &[AttendanceRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<CalendarDay>, InsightError> {
    let days = (end - start).num_days() + 1;
    if days > MAX_WINDOW_DAYS {
        return Err(InsightError::WindowTooLarge {
            days,
            max: MAX_WINDOW_DAYS,
        });
    }
    Ok(classify_days(records, days_inclusive(start, end)))
}

/// Day-by-day classification of `month`.
pub fn aggregate(
    records: &[AttendanceRecord],
    month: YearMonth,
) -> BTreeMap<NaiveDate, DayClassification> {
    classify_days(records, month.days())
        .into_iter()
        .map(|day| (day.date, day.classification))
        .collect()
}

pub fn summarize(days: &[CalendarDay]) -> CalendarSummary {
    let mut summary = days
        .iter()
        .fold(CalendarSummary::default(), |mut acc, day| {
            match day.classification {
                DayClassification::Present => acc.present += 1,
                DayClassification::Absent => {
                    acc.absent += 1;
                    if !day.recorded {
                        acc.unrecorded += 1;
                    }
                }
                DayClassification::Wfh => acc.wfh += 1,
                DayClassification::Weekend => acc.weekend += 1,
            }
            acc.total_hours += day.hours;
            acc
        });
    summary.total_hours = round_to(summary.total_hours, 1);
    summary
}

pub fn month_calendar(records: &[AttendanceRecord], month: YearMonth) -> MonthCalendar {
    let days = classify_days(records, month.days());
    let summary = summarize(&days);
    MonthCalendar {
        month,
        days,
        summary,
    }
}
