use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;

use super::dates::{parse_iso_day, parse_time};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};

/// Percentages of the workforce per status, rounded to whole numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub present: u32,
    pub absent: u32,
    pub on_leave: u32,
    pub wfh: u32,
    pub half_day: u32,
}

/// Attendance KPI cards for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSnapshot {
    #[schema(example = "2025-01-06", format = "date", value_type = String)]
    pub date: NaiveDate,
    /// Distinct employees across every supplied record, not just this day
    pub total_employees: usize,
    pub present: usize,
    pub absent: usize,
    pub on_leave: usize,
    pub wfh: usize,
    pub half_day: usize,
    pub late_check_ins: usize,
    pub distribution: Distribution,
}

fn is_late(record: &AttendanceRecord, cutoff: NaiveTime) -> bool {
    if record.status != AttendanceStatus::Present {
        return false;
    }
    record.is_late
        || record
            .time_in
            .as_deref()
            .and_then(parse_time)
            .is_some_and(|time_in| time_in > cutoff)
}

fn percent(count: usize, total: usize) -> u32 {
    ((count as f64 / total.max(1) as f64) * 100.0).round() as u32
}

pub fn snapshot(
    records: &[AttendanceRecord],
    day: NaiveDate,
    late_cutoff: NaiveTime,
) -> AttendanceSnapshot {
    let total_employees = records
        .iter()
        .map(|r| r.biometric_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let todays: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| parse_iso_day(&r.date) == Some(day))
        .collect();
    let count = |status: AttendanceStatus| todays.iter().filter(|r| r.status == status).count();

    let present = count(AttendanceStatus::Present);
    let absent = count(AttendanceStatus::Absent);
    let on_leave = count(AttendanceStatus::OnLeave);
    let wfh = count(AttendanceStatus::Wfh);
    let half_day = count(AttendanceStatus::HalfDay);

    AttendanceSnapshot {
        date: day,
        total_employees,
        present,
        absent,
        on_leave,
        wfh,
        half_day,
        late_check_ins: todays.iter().filter(|r| is_late(r, late_cutoff)).count(),
        distribution: Distribution {
            present: percent(present, total_employees),
            absent: percent(absent, total_employees),
            on_leave: percent(on_leave, total_employees),
            wfh: percent(wfh, total_employees),
            half_day: percent(half_day, total_employees),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nine() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn counts_the_reference_day_only() {
        let records: Vec<AttendanceRecord> = serde_json::from_value(json!([
            { "biometricId": "EMP001", "date": "2025-01-06", "status": "present", "timeIn": "09:05" },
            { "biometricId": "EMP002", "date": "2025-01-06", "status": "present", "timeIn": "09:00", "isLate": true },
            { "biometricId": "EMP003", "date": "2025-01-06", "status": "on-leave" },
            { "biometricId": "EMP004", "date": "2025-01-06", "status": "work-from-home", "timeIn": "09:30" },
            { "biometricId": "EMP001", "date": "2025-01-05", "status": "absent" },
            { "biometricId": "EMP005", "date": "2025-01-03", "status": "absent" }
        ]))
        .unwrap();

        let snapshot = snapshot(&records, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(), nine());

        assert_eq!(snapshot.total_employees, 5);
        assert_eq!(snapshot.present, 2);
        assert_eq!(snapshot.absent, 0);
        assert_eq!(snapshot.on_leave, 1);
        assert_eq!(snapshot.wfh, 1);
        // a late WFH check-in is not counted
        assert_eq!(snapshot.late_check_ins, 2);
        assert_eq!(
            snapshot.distribution,
            Distribution {
                present: 40,
                absent: 0,
                on_leave: 20,
                wfh: 20,
                half_day: 0,
            }
        );
    }

    #[test]
    fn half_days_are_counted_on_their_own() {
        let records: Vec<AttendanceRecord> = serde_json::from_value(json!([
            { "biometricId": "EMP001", "date": "2025-01-07", "status": "present", "timeIn": "08:50" },
            { "biometricId": "EMP002", "date": "2025-01-07", "status": "half-day", "timeIn": "13:00" },
            { "biometricId": "EMP003", "date": "2025-01-07", "status": "Half Day" },
            { "biometricId": "EMP004", "date": "2025-01-07", "status": "absent" }
        ]))
        .unwrap();

        let snapshot = snapshot(&records, NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(), nine());

        assert_eq!(snapshot.present, 1);
        assert_eq!(snapshot.half_day, 2);
        assert_eq!(snapshot.distribution.half_day, 50);
        // only full-day check-ins are judged late
        assert_eq!(snapshot.late_check_ins, 0);
    }

    #[test]
    fn empty_input_has_zero_distribution() {
        let snapshot = snapshot(&[], NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(), nine());
        assert_eq!(snapshot.total_employees, 0);
        assert_eq!(snapshot.distribution, Distribution::default());
    }
}
