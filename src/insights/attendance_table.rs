//! Filters for the attendance records table.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use super::dates::parse_iso_day;
use crate::error::InsightError;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::non_blank;

/// Table filters. A blank or `"all"` status shows every status; `start` and
/// `end` bound the record date inclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQuery {
    /// Case-insensitive match on employee name or biometric id
    #[schema(example = "emp00")]
    pub search: Option<String>,
    #[schema(example = "present")]
    pub status: Option<String>,
    #[schema(example = "2025-01-01", format = "date", value_type = Option<String>)]
    pub start: Option<NaiveDate>,
    #[schema(example = "2025-01-31", format = "date", value_type = Option<String>)]
    pub end: Option<NaiveDate>,
}

pub fn search<'a>(
    records: &'a [AttendanceRecord],
    query: &AttendanceQuery,
) -> Result<Vec<&'a AttendanceRecord>, InsightError> {
    let status = non_blank(query.status.as_deref())
        .filter(|s| !s.eq_ignore_ascii_case("all"))
        .map(|s| AttendanceStatus::try_from(s.to_string()))
        .transpose()?;
    let needle = non_blank(query.search.as_deref()).map(str::to_lowercase);

    Ok(records
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .filter(|r| {
            needle.as_deref().is_none_or(|needle| {
                [r.employee_name.as_deref(), Some(r.biometric_id.as_str())]
                    .into_iter()
                    .flatten()
                    .any(|field| field.to_lowercase().contains(needle))
            })
        })
        .filter(|r| {
            if query.start.is_none() && query.end.is_none() {
                return true;
            }
            // Undated records cannot satisfy a date bound
            parse_iso_day(&r.date).is_some_and(|day| {
                query.start.is_none_or(|start| start <= day)
                    && query.end.is_none_or(|end| day <= end)
            })
        })
        .collect())
}
