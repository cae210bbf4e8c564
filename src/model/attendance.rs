use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::InsightError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(try_from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum AttendanceStatus {
    #[strum(to_string = "present")]
    Present,
    #[strum(to_string = "absent")]
    Absent,
    #[strum(to_string = "on-leave", serialize = "on leave", serialize = "onleave")]
    OnLeave,
    #[strum(
        to_string = "wfh",
        serialize = "work-from-home",
        serialize = "work from home"
    )]
    Wfh,
    #[strum(to_string = "half-day", serialize = "half day", serialize = "halfday")]
    HalfDay,
}

impl TryFrom<String> for AttendanceStatus {
    type Error = InsightError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .trim()
            .parse()
            .map_err(|_| InsightError::InvalidAttendanceStatus(value))
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        status.to_string()
    }
}

/// One employee's attendance for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(alias = "employeeId")]
    #[schema(example = "EMP001")]
    pub biometric_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// `YYYY-MM-DD`
    #[schema(example = "2025-01-03")]
    pub date: String,

    #[schema(example = "present", value_type = String)]
    pub status: AttendanceStatus,

    #[serde(default, alias = "checkInTime", skip_serializing_if = "Option::is_none")]
    #[schema(example = "09:05")]
    pub time_in: Option<String>,

    #[serde(default, alias = "checkOutTime", skip_serializing_if = "Option::is_none")]
    #[schema(example = "18:30")]
    pub time_out: Option<String>,

    #[serde(default)]
    pub is_late: bool,
}
