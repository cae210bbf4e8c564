use crate::api::attendance::{
    AttendanceSearchQuery, CalendarQuery, DayWindowQuery, SnapshotQuery,
};
use crate::api::leave_request::{
    LeaveBatch, LeaveWindowQuery, LeaveWindowResponse, OnDayQuery, OverviewQuery, SearchQuery,
};
use crate::insights::attendance_summary::{AttendanceSnapshot, Distribution};
use crate::insights::attendance_table::AttendanceQuery;
use crate::insights::leave_overview::LeaveOverview;
use crate::insights::leave_table::{LeaveQuery, LeaveRow};
use crate::insights::range_resolver::ResolvedRange;
use crate::model::attendance::AttendanceRecord;
use crate::model::calendar::{CalendarDay, CalendarSummary, DayClassification, MonthCalendar};
use crate::model::leave_request::LeaveRequest;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Insights API",
        version = "0.1.0",
        description = r#"
## HRM Leave & Attendance Insights

Stateless shaping service for the HR portal. Callers post the leave requests or
attendance records they already fetched and receive the structures the portal
pages render.

### 🔹 Key Features
- **Leave spans**
  - One canonical reading of `from`/`to` and free-text `dateRange` values
- **KPI drill-downs**
  - Approved / rejected this month or today, with an explicit `dateFiltered` flag
  - Who is on leave on a given day
- **Attendance calendars**
  - Every day of a month (or any window) classified as present, absent, wfh or weekend
  - Daily attendance snapshot with late check-ins
  - Attendance table search by employee, status and date range

### 📦 Response Format
- JSON in, JSON out; errors are `{"message": "..."}` with status 400

---
Built with **Rust**, **Actix Web**, **chrono**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::leave_request::leave_rows,
        crate::api::leave_request::resolve_leave,
        crate::api::leave_request::status_window,
        crate::api::leave_request::on_leave,
        crate::api::leave_request::leave_overview,
        crate::api::leave_request::search_leave,

        crate::api::attendance::calendar,
        crate::api::attendance::day_window,
        crate::api::attendance::day_snapshot,
        crate::api::attendance::search_attendance
    ),
    components(
        schemas(
            LeaveRequest,
            LeaveBatch,
            LeaveRow,
            ResolvedRange,
            LeaveWindowQuery,
            LeaveWindowResponse,
            OnDayQuery,
            OverviewQuery,
            LeaveOverview,
            SearchQuery,
            LeaveQuery,
            AttendanceRecord,
            CalendarQuery,
            DayWindowQuery,
            SnapshotQuery,
            AttendanceSearchQuery,
            AttendanceQuery,
            MonthCalendar,
            CalendarDay,
            CalendarSummary,
            DayClassification,
            AttendanceSnapshot,
            Distribution
        )
    ),
    tags(
        (name = "Leave", description = "Leave span, drill-down and KPI APIs"),
        (name = "Attendance", description = "Attendance calendar and snapshot APIs"),
    )
)]
pub struct ApiDoc;
