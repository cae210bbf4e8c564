use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::InsightError;
use crate::insights::leave_overview::{LeaveOverview, overview};
use crate::insights::leave_table::{LeaveQuery, LeaveRow, leave_row, search};
use crate::insights::{RangeResolver, ResolvedRange, TimeWindow, filter_by_status, on_leave_on};
use crate::model::calendar::YearMonth;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};

#[derive(Deserialize, ToSchema)]
pub struct LeaveBatch {
    pub requests: Vec<LeaveRequest>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveWindowQuery {
    pub requests: Vec<LeaveRequest>,
    #[schema(example = "approved")]
    pub status: String,
    #[schema(example = 2026)]
    pub year: Option<i32>,
    #[schema(example = 1)]
    pub month: Option<u32>,
    /// Single-day window; takes precedence over year/month
    #[schema(example = "2026-01-22", format = "date", value_type = Option<String>)]
    pub date: Option<NaiveDate>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveWindowResponse {
    pub records: Vec<LeaveRequest>,
    /// False when the month had no dated matches and every request with the
    /// status was returned instead
    pub date_filtered: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct OnDayQuery {
    pub requests: Vec<LeaveRequest>,
    #[schema(example = "2026-01-22", format = "date", value_type = Option<String>)]
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize, ToSchema)]
pub struct OverviewQuery {
    pub requests: Vec<LeaveRequest>,
    #[schema(example = "2026-01-22", format = "date", value_type = Option<String>)]
    pub today: Option<NaiveDate>,
}

#[derive(Deserialize, ToSchema)]
pub struct SearchQuery {
    pub requests: Vec<LeaveRequest>,
    #[serde(flatten)]
    pub query: LeaveQuery,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/* =========================
Leave table rows
========================= */
#[utoipa::path(
    post,
    path = "/api/leave/rows",
    request_body = LeaveBatch,
    responses(
        (status = 200, description = "One display row per request, in input order", body = [LeaveRow]),
        (status = 400, description = "Malformed request payload")
    ),
    tag = "Leave"
)]
pub async fn leave_rows(payload: web::Json<LeaveBatch>) -> actix_web::Result<impl Responder> {
    let resolver = RangeResolver::current();
    let rows: Vec<LeaveRow> = payload
        .requests
        .iter()
        .map(|r| leave_row(r, &resolver))
        .collect();

    Ok(HttpResponse::Ok().json(rows))
}

/* =========================
Resolve a single span
========================= */
#[utoipa::path(
    post,
    path = "/api/leave/resolve",
    request_body = LeaveRequest,
    responses(
        (status = 200, description = "Canonical span of the request", body = ResolvedRange),
        (status = 400, description = "Request has no date range", body = Object, example = json!({
            "message": "leave request LR-1001 has no date range"
        }))
    ),
    tag = "Leave"
)]
pub async fn resolve_leave(payload: web::Json<LeaveRequest>) -> actix_web::Result<impl Responder> {
    let range = RangeResolver::current().resolve(&payload)?;
    Ok(HttpResponse::Ok().json(range))
}

/* =========================
Status + time window drill-down
========================= */
#[utoipa::path(
    post,
    path = "/api/leave/window",
    request_body = LeaveWindowQuery,
    responses(
        (status = 200, description = "Requests with the status in the window", body = LeaveWindowResponse),
        (status = 400, description = "Unknown status or invalid month")
    ),
    tag = "Leave"
)]
pub async fn status_window(payload: web::Json<LeaveWindowQuery>) -> actix_web::Result<impl Responder> {
    let status = LeaveStatus::try_from(payload.status.clone())?;
    let window = match (payload.date, payload.year, payload.month) {
        (Some(day), _, _) => TimeWindow::Day(day),
        (None, Some(year), Some(month)) => TimeWindow::Month(YearMonth::new(year, month)?),
        (None, None, None) => TimeWindow::Month(YearMonth::of(today())),
        (None, year, month) => {
            return Err(InsightError::InvalidMonth {
                year: year.unwrap_or_default(),
                month: month.unwrap_or_default(),
            }
            .into());
        }
    };

    let matched = filter_by_status(&payload.requests, status, window);
    tracing::debug!(
        %status,
        matched = matched.len(),
        date_filtered = matched.date_filtered,
        "Leave window drill-down"
    );

    Ok(HttpResponse::Ok().json(LeaveWindowResponse {
        date_filtered: matched.date_filtered,
        records: matched.records.into_iter().cloned().collect(),
    }))
}

/* =========================
Who is on leave
========================= */
#[utoipa::path(
    post,
    path = "/api/leave/on-leave",
    request_body = OnDayQuery,
    responses(
        (status = 200, description = "Approved requests spanning the day (default today)", body = [LeaveRequest])
    ),
    tag = "Leave"
)]
pub async fn on_leave(payload: web::Json<OnDayQuery>) -> actix_web::Result<impl Responder> {
    let day = payload.date.unwrap_or_else(today);
    let requests: Vec<&LeaveRequest> = on_leave_on(&payload.requests, day);
    Ok(HttpResponse::Ok().json(requests))
}

/* =========================
Overview KPI cards
========================= */
#[utoipa::path(
    post,
    path = "/api/leave/overview",
    request_body = OverviewQuery,
    responses(
        (status = 200, description = "Leave KPI counts", body = LeaveOverview)
    ),
    tag = "Leave"
)]
pub async fn leave_overview(payload: web::Json<OverviewQuery>) -> actix_web::Result<impl Responder> {
    let day = payload.today.unwrap_or_else(today);
    Ok(HttpResponse::Ok().json(overview(&payload.requests, day)))
}

/* =========================
Table filters
========================= */
#[utoipa::path(
    post,
    path = "/api/leave/search",
    request_body = SearchQuery,
    responses(
        (status = 200, description = "Requests passing every active filter", body = [LeaveRequest]),
        (status = 400, description = "Unknown status filter")
    ),
    tag = "Leave"
)]
pub async fn search_leave(payload: web::Json<SearchQuery>) -> actix_web::Result<impl Responder> {
    let found = search(&payload.requests, &payload.query)?;
    Ok(HttpResponse::Ok().json(found))
}
