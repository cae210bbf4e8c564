use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::status_window::{TimeWindow, filter_by_status, on_leave_on};
use crate::model::calendar::YearMonth;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};

/// KPI cards of the leave overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveOverview {
    pub total: usize,
    pub total_on_leave: usize,
    pub pending_approval: usize,
    pub approved_this_month: usize,
    /// False when the monthly count fell back to all approved requests
    pub approved_date_filtered: bool,
    pub rejected_this_month: usize,
    pub rejected_date_filtered: bool,
    pub approved_today: usize,
    pub rejected_today: usize,
}

pub fn overview(requests: &[LeaveRequest], today: NaiveDate) -> LeaveOverview {
    let this_month = TimeWindow::Month(YearMonth::of(today));
    let approved = filter_by_status(requests, LeaveStatus::Approved, this_month);
    let rejected = filter_by_status(requests, LeaveStatus::Rejected, this_month);

    LeaveOverview {
        total: requests.len(),
        total_on_leave: on_leave_on(requests, today).len(),
        pending_approval: requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
            .count(),
        approved_this_month: approved.len(),
        approved_date_filtered: approved.date_filtered,
        rejected_this_month: rejected.len(),
        rejected_date_filtered: rejected.date_filtered,
        approved_today: filter_by_status(requests, LeaveStatus::Approved, TimeWindow::Day(today))
            .len(),
        rejected_today: filter_by_status(requests, LeaveStatus::Rejected, TimeWindow::Day(today))
            .len(),
    }
}
