//! Rows and filters for the leave management table.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::range_resolver::RangeResolver;
use crate::error::InsightError;
use crate::model::PLACEHOLDER;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::non_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRow {
    pub id: String,
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "Sick Leave")]
    pub leave_type: String,
    #[schema(example = "Approved")]
    pub status: String,
    #[schema(example = "2026-01-22")]
    pub from: String,
    #[schema(example = "2026-01-24")]
    pub to: String,
    /// Absent when the request carries no span at all
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 3)]
    pub duration_days: Option<i64>,
    pub exact: bool,
}

pub fn leave_row(request: &LeaveRequest, resolver: &RangeResolver) -> LeaveRow {
    let (from, to, duration_days, exact) = match resolver.resolve(request) {
        Ok(range) => (
            range.from.to_string(),
            range.to.to_string(),
            Some(range.duration_days),
            range.exact,
        ),
        Err(err) => {
            tracing::debug!(error = %err, "Rendering leave row without a span");
            (PLACEHOLDER.to_string(), PLACEHOLDER.to_string(), None, false)
        }
    };

    LeaveRow {
        id: request.id.clone(),
        employee_id: request.employee_id.clone(),
        employee_name: request.employee_display_name().to_string(),
        leave_type: request.leave_type_display().to_string(),
        status: request.status.to_string(),
        from,
        to,
        duration_days,
        exact,
    }
}

/// Table filters; `"all"` or an absent value disables a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveQuery {
    #[schema(example = "approved")]
    pub status: Option<String>,
    #[schema(example = "Sick Leave")]
    pub leave_type: Option<String>,
    /// Case-insensitive match on employee name, employee id or leave type
    #[schema(example = "nair")]
    pub search: Option<String>,
}

fn active(filter: Option<&str>) -> Option<&str> {
    non_blank(filter).filter(|f| !f.eq_ignore_ascii_case("all"))
}

pub fn search<'a>(
    requests: &'a [LeaveRequest],
    query: &LeaveQuery,
) -> Result<Vec<&'a LeaveRequest>, InsightError> {
    let status = active(query.status.as_deref())
        .map(|s| LeaveStatus::try_from(s.to_string()))
        .transpose()?;
    let leave_type = active(query.leave_type.as_deref()).map(str::to_lowercase);
    let needle = non_blank(query.search.as_deref()).map(str::to_lowercase);

    Ok(requests
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .filter(|r| {
            leave_type.as_deref().is_none_or(|wanted| {
                r.leave_type
                    .as_deref()
                    .is_some_and(|t| t.trim().to_lowercase() == wanted)
            })
        })
        .filter(|r| {
            needle.as_deref().is_none_or(|needle| {
                [r.employee_name.as_deref(), Some(r.employee_id.as_str()), r.leave_type.as_deref()]
                    .into_iter()
                    .flatten()
                    .any(|field| field.to_lowercase().contains(needle))
            })
        })
        .collect())
}
