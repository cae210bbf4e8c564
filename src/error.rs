use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InsightError {
    /// Neither `from`/`to` nor a usable `dateRange` was supplied
    #[display(fmt = "leave request {} has no date range", id)]
    MissingDateRange { id: String },

    #[display(fmt = "unknown leave status: {}", _0)]
    InvalidStatus(String),

    #[display(fmt = "unknown attendance status: {}", _0)]
    InvalidAttendanceStatus(String),

    #[display(fmt = "invalid month {}-{}", year, month)]
    InvalidMonth { year: i32, month: u32 },

    #[display(fmt = "day window of {} days exceeds the {} day limit", days, max)]
    WindowTooLarge { days: i64, max: i64 },
}

impl std::error::Error for InsightError {}

impl ResponseError for InsightError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string()
        }))
    }
}
