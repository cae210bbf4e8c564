//! Status + time-window selection behind the "approved this month" style
//! KPI drill-downs.

use chrono::{Datelike, NaiveDate};

use super::dates::parse_date;
use super::range_resolver::RangeResolver;
use crate::error::InsightError;
use crate::model::calendar::YearMonth;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::non_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Month(YearMonth),
    Day(NaiveDate),
}

impl TimeWindow {
    pub fn contains(&self, day: NaiveDate) -> bool {
        match self {
            TimeWindow::Month(month) => month.contains(day),
            TimeWindow::Day(only) => *only == day,
        }
    }

    fn reference_year(&self) -> i32 {
        match self {
            TimeWindow::Month(month) => month.year(),
            TimeWindow::Day(day) => day.year(),
        }
    }
}

/// Matches for a drill-down. `date_filtered` is false when no record fell
/// inside the window and the result was widened to every record with the
/// status.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowMatch<'a> {
    pub records: Vec<&'a LeaveRequest>,
    pub date_filtered: bool,
}

impl WindowMatch<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The day a request is attributed to for `status`, trying in order: the
/// transition timestamp, the resolved start, the raw `from` (its `to` may be
/// unreadable), the first " - " segment of `dateRange`, and for approvals the
/// submission time.
pub fn record_date(
    request: &LeaveRequest,
    status: LeaveStatus,
    resolver: &RangeResolver,
) -> Option<NaiveDate> {
    let transition = match status {
        LeaveStatus::Approved => request.approved_at.as_deref(),
        LeaveStatus::Rejected => request.rejected_at.as_deref(),
        LeaveStatus::Pending => None,
    };

    transition
        .and_then(parse_date)
        .or_else(|| {
            resolver
                .resolve(request)
                .ok()
                .and_then(|range| range.from.date())
        })
        .or_else(|| non_blank(request.from.as_deref()).and_then(parse_date))
        .or_else(|| {
            non_blank(request.date_range.as_deref())
                .and_then(|text| text.split(" - ").next())
                .and_then(parse_date)
        })
        .or_else(|| match status {
            LeaveStatus::Approved => request.submitted_at.as_deref().and_then(parse_date),
            _ => None,
        })
}

/// Requests with `status` whose attributed day falls in `window`.
///
/// A month window that matches nothing while some requests do carry the
/// status falls back to all of them, flagged with `date_filtered = false`.
/// Day windows never widen.
pub fn filter_by_status(
    records: &[LeaveRequest],
    status: LeaveStatus,
    window: TimeWindow,
) -> WindowMatch<'_> {
    let resolver = RangeResolver::new(window.reference_year());
    let with_status: Vec<&LeaveRequest> =
        records.iter().filter(|r| r.status == status).collect();

    let in_window: Vec<&LeaveRequest> = with_status
        .iter()
        .copied()
        .filter(|r| record_date(r, status, &resolver).is_some_and(|day| window.contains(day)))
        .collect();

    if in_window.is_empty() && !with_status.is_empty() && matches!(window, TimeWindow::Month(_)) {
        tracing::warn!(
            %status,
            widened_to = with_status.len(),
            "No dated matches in month window, returning every request with the status"
        );
        return WindowMatch {
            records: with_status,
            date_filtered: false,
        };
    }

    WindowMatch {
        records: in_window,
        date_filtered: true,
    }
}

/// Month drill-down, e.g. "approved this month".
pub fn filter_month(
    records: &[LeaveRequest],
    status: LeaveStatus,
    month: u32,
    year: i32,
) -> Result<WindowMatch<'_>, InsightError> {
    let month = YearMonth::new(year, month)?;
    Ok(filter_by_status(records, status, TimeWindow::Month(month)))
}

/// Approved requests whose span contains `today`. Requests without two
/// parseable ends never match.
pub fn on_leave_on(records: &[LeaveRequest], today: NaiveDate) -> Vec<&LeaveRequest> {
    let resolver = RangeResolver::new(today.year());
    records
        .iter()
        .filter(|r| r.status == LeaveStatus::Approved)
        .filter(|r| {
            resolver
                .resolve(r)
                .ok()
                .and_then(|range| range.dates())
                .is_some_and(|(from, to)| from <= today && today <= to)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn requests(values: serde_json::Value) -> Vec<LeaveRequest> {
        serde_json::from_value(values).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids<'a>(matched: &'a WindowMatch<'a>) -> Vec<&'a str> {
        matched.records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn transition_timestamp_decides_the_month() {
        let all = requests(json!([
            { "id": "1", "status": "Approved", "approvedAt": "2026-01-05T10:00:00Z",
              "from": "2025-12-29", "to": "2025-12-31" },
            { "id": "2", "status": "Approved", "approvedAt": "2025-12-20T10:00:00Z",
              "from": "2026-01-02", "to": "2026-01-03" },
            { "id": "3", "status": "Rejected", "rejectedAt": "2026-01-07T10:00:00Z" }
        ]));

        let matched = filter_month(&all, LeaveStatus::Approved, 1, 2026).unwrap();
        assert!(matched.date_filtered);
        assert_eq!(ids(&matched), vec!["1"]);
    }

    #[test]
    fn falls_back_through_from_then_range_text_then_submission() {
        let all = requests(json!([
            { "id": "from", "status": "Approved", "from": "2026-01-10", "to": "2026-01-11" },
            { "id": "range", "status": "Approved", "dateRange": "14 Jan - 15 Jan" },
            { "id": "submitted", "status": "Approved", "submittedAt": "2026-01-02T08:00:00Z" },
            { "id": "elsewhere", "status": "Approved", "from": "2026-02-10", "to": "2026-02-11" }
        ]));

        let matched = filter_month(&all, LeaveStatus::Approved, 1, 2026).unwrap();
        assert!(matched.date_filtered);
        assert_eq!(ids(&matched), vec!["from", "range", "submitted"]);
    }

    #[test]
    fn readable_from_survives_an_unreadable_to() {
        let all = requests(json!([
            { "id": "dated", "status": "Rejected", "rejectedAt": "2026-01-05T10:00:00Z" },
            { "id": "from-only", "status": "Rejected", "from": "2026-01-20", "to": "tbd" },
            { "id": "february", "status": "Rejected", "from": "2026-02-02", "to": "tbd" }
        ]));

        let matched = filter_month(&all, LeaveStatus::Rejected, 1, 2026).unwrap();
        assert!(matched.date_filtered);
        assert_eq!(ids(&matched), vec!["dated", "from-only"]);
    }

    #[test]
    fn submission_time_only_counts_for_approvals() {
        let all = requests(json!([
            { "id": "r", "status": "Rejected", "submittedAt": "2026-01-02T08:00:00Z" },
            { "id": "r2", "status": "Rejected", "rejectedAt": "2025-11-02T08:00:00Z" }
        ]));

        let matched = filter_month(&all, LeaveStatus::Rejected, 1, 2026).unwrap();
        // nothing dated in January, so the result widens
        assert!(!matched.date_filtered);
        assert_eq!(ids(&matched), vec!["r", "r2"]);
    }

    #[test]
    fn widens_to_every_request_with_the_status_when_nothing_is_dated_in_month() {
        let all = requests(json!([
            { "id": "1", "status": "approved" },
            { "id": "2", "status": "Approved", "dateRange": "garbage" },
            { "id": "3", "status": "Pending", "from": "2026-01-10", "to": "2026-01-10" }
        ]));

        let matched = filter_month(&all, LeaveStatus::Approved, 1, 2026).unwrap();
        assert!(!matched.date_filtered);
        assert_eq!(ids(&matched), vec!["1", "2"]);
    }

    #[test]
    fn no_request_with_status_stays_empty_and_precise() {
        let all = requests(json!([
            { "id": "1", "status": "Pending", "from": "2026-01-10", "to": "2026-01-10" }
        ]));

        let matched = filter_month(&all, LeaveStatus::Rejected, 1, 2026).unwrap();
        assert!(matched.is_empty());
        assert!(matched.date_filtered);
    }

    #[test]
    fn day_window_never_widens() {
        let all = requests(json!([
            { "id": "1", "status": "Approved", "approvedAt": "2026-01-05T10:00:00Z" },
            { "id": "2", "status": "Approved", "approvedAt": "2026-01-06T10:00:00Z" }
        ]));

        let today = filter_by_status(&all, LeaveStatus::Approved, TimeWindow::Day(ymd(2026, 1, 6)));
        assert_eq!(ids(&today), vec!["2"]);

        let none = filter_by_status(&all, LeaveStatus::Approved, TimeWindow::Day(ymd(2026, 1, 7)));
        assert!(none.is_empty());
        assert!(none.date_filtered);
    }

    #[test]
    fn invalid_month_is_an_error() {
        assert_eq!(
            filter_month(&[], LeaveStatus::Approved, 13, 2026).unwrap_err(),
            InsightError::InvalidMonth { year: 2026, month: 13 }
        );
    }

    #[test]
    fn on_leave_is_interval_containment_for_approved_only() {
        let all = requests(json!([
            { "id": "inside", "status": "Approved", "from": "2026-01-05", "to": "2026-01-09" },
            { "id": "edge", "status": "Approved", "dateRange": "2026-01-07 - 2026-01-07" },
            { "id": "pending", "status": "Pending", "from": "2026-01-05", "to": "2026-01-09" },
            { "id": "past", "status": "Approved", "from": "2026-01-01", "to": "2026-01-02" },
            { "id": "undated", "status": "Approved", "approvedAt": "2026-01-07T09:00:00Z" },
            { "id": "garbled", "status": "Approved", "dateRange": "soon" }
        ]));

        let on_leave: Vec<_> = on_leave_on(&all, ymd(2026, 1, 7))
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(on_leave, vec!["inside", "edge"]);
    }
}
