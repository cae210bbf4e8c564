use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use super::{PLACEHOLDER, UNKNOWN, non_blank, opaque_id};
use crate::error::InsightError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(try_from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl TryFrom<String> for LeaveStatus {
    type Error = InsightError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .trim()
            .parse()
            .map_err(|_| InsightError::InvalidStatus(value))
    }
}

impl From<LeaveStatus> for String {
    fn from(status: LeaveStatus) -> Self {
        status.to_string()
    }
}

/// A leave, regularization or on-duty request as delivered by the portal API.
///
/// The span is given either as `from`/`to` or as a free-text `dateRange`;
/// see [`crate::insights::range_resolver`] for how the two are reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "LR-1001",
    "employeeId": "EMP001",
    "employeeName": "John Doe",
    "leaveType": "Sick Leave",
    "status": "Approved",
    "dateRange": "22 Jan - 24 Jan",
    "approvedAt": "2026-01-20T10:15:00Z"
}))]
pub struct LeaveRequest {
    #[serde(alias = "_id", default, deserialize_with = "opaque_id")]
    #[schema(example = "LR-1001")]
    pub id: String,

    #[serde(default, deserialize_with = "opaque_id")]
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[schema(example = "Pending", value_type = String)]
    pub status: LeaveStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-01-22")]
    pub from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-01-24")]
    pub to: Option<String>,

    /// Free-text span such as "22 Jan - 24 Jan"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

impl LeaveRequest {
    pub fn employee_display_name(&self) -> &str {
        non_blank(self.employee_name.as_deref()).unwrap_or(UNKNOWN)
    }

    pub fn leave_type_display(&self) -> &str {
        non_blank(self.leave_type.as_deref()).unwrap_or(PLACEHOLDER)
    }
}
