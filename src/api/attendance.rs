use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::config::Config;
use crate::insights::attendance_summary::{AttendanceSnapshot, snapshot};
use crate::insights::attendance_table::{AttendanceQuery, search};
use crate::insights::{classify_window, month_calendar};
use crate::model::attendance::AttendanceRecord;
use crate::model::calendar::{CalendarDay, MonthCalendar, YearMonth};

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarQuery {
    pub records: Vec<AttendanceRecord>,
    #[schema(example = 2025)]
    pub year: i32,
    #[schema(example = 1)]
    pub month: u32,
    /// Restrict to one employee's records
    #[schema(example = "EMP001")]
    pub biometric_id: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayWindowQuery {
    pub records: Vec<AttendanceRecord>,
    #[schema(example = "2025-01-01", format = "date", value_type = String)]
    pub start: NaiveDate,
    #[schema(example = "2025-01-07", format = "date", value_type = String)]
    pub end: NaiveDate,
    #[schema(example = "EMP001")]
    pub biometric_id: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct SnapshotQuery {
    pub records: Vec<AttendanceRecord>,
    #[schema(example = "2025-01-06", format = "date", value_type = Option<String>)]
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize, ToSchema)]
pub struct AttendanceSearchQuery {
    pub records: Vec<AttendanceRecord>,
    #[serde(flatten)]
    pub query: AttendanceQuery,
}

/// Keeps only `biometric_id`'s records when one is given.
fn for_employee(records: &[AttendanceRecord], biometric_id: Option<&str>) -> Vec<AttendanceRecord> {
    match biometric_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => records
            .iter()
            .filter(|r| r.biometric_id == id)
            .cloned()
            .collect(),
        None => records.to_vec(),
    }
}

/// Month calendar endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/calendar",
    request_body = CalendarQuery,
    responses(
        (status = 200, description = "Every day of the month classified", body = MonthCalendar),
        (status = 400, description = "Invalid month or malformed records", body = Object, example = json!({
            "message": "invalid month 2025-13"
        }))
    ),
    tag = "Attendance"
)]
pub async fn calendar(payload: web::Json<CalendarQuery>) -> actix_web::Result<impl Responder> {
    let month = YearMonth::new(payload.year, payload.month)?;
    let records = for_employee(&payload.records, payload.biometric_id.as_deref());

    Ok(HttpResponse::Ok().json(month_calendar(&records, month)))
}

/// Arbitrary day window endpoint ("last 7 days")
#[utoipa::path(
    post,
    path = "/api/attendance/window",
    request_body = DayWindowQuery,
    responses(
        (status = 200, description = "Every day of the window classified, oldest first", body = [CalendarDay]),
        (status = 400, description = "Window longer than 366 days or malformed payload", body = Object, example = json!({
            "message": "day window of 400 days exceeds the 366 day limit"
        }))
    ),
    tag = "Attendance"
)]
pub async fn day_window(payload: web::Json<DayWindowQuery>) -> actix_web::Result<impl Responder> {
    let records = for_employee(&payload.records, payload.biometric_id.as_deref());
    let days = classify_window(&records, payload.start, payload.end)?;
    Ok(HttpResponse::Ok().json(days))
}

/// Daily attendance KPI endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/snapshot",
    request_body = SnapshotQuery,
    responses(
        (status = 200, description = "Counts for the day (default today)", body = AttendanceSnapshot)
    ),
    tag = "Attendance"
)]
pub async fn day_snapshot(
    config: web::Data<Config>,
    payload: web::Json<SnapshotQuery>,
) -> actix_web::Result<impl Responder> {
    let day = payload.date.unwrap_or_else(|| Local::now().date_naive());
    Ok(HttpResponse::Ok().json(snapshot(&payload.records, day, config.late_cutoff)))
}

/// Attendance table filter endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/search",
    request_body = AttendanceSearchQuery,
    responses(
        (status = 200, description = "Records passing every active filter, in input order", body = [AttendanceRecord]),
        (status = 400, description = "Unknown status filter", body = Object, example = json!({
            "message": "unknown attendance status: holiday"
        }))
    ),
    tag = "Attendance"
)]
pub async fn search_attendance(
    payload: web::Json<AttendanceSearchQuery>,
) -> actix_web::Result<impl Responder> {
    let found = search(&payload.records, &payload.query)?;
    Ok(HttpResponse::Ok().json(found))
}
