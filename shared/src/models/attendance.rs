use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance outcome for one member on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
        }
    }

    /// Case-insensitive parse; anything unrecognized counts as present.
    pub fn parse_or_present(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "absent" => AttendanceStatus::Absent,
            "late" => AttendanceStatus::Late,
            _ => AttendanceStatus::Present,
        }
    }
}

/// One attendance row. `(member_id, attendance_date)` is unique: a member
/// is marked at most once per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Attendance {
    pub attendance_id: i64,
    pub member_id: String,
    pub trainer_id: Option<String>,
    pub attendance_date: NaiveDate,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
    pub created_at: i64,
}

/// Marking payload. `attendance_date` and `status` are raw strings so an
/// unparseable value falls back (today / present) instead of rejecting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMark {
    pub member_id: Option<String>,
    pub trainer_id: Option<String>,
    pub attendance_date: Option<String>,
    pub status: Option<String>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub notes: Option<String>,
}

/// Month-to-date counters plus the raw rows they were counted from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub total_days: i64,
    pub present_days: i64,
    pub absent_days: i64,
    pub late_days: i64,
    pub attendance: Vec<Attendance>,
}
