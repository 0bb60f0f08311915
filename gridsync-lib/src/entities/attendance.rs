//! Attendance resource: record shape, grid columns, and create form

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::form::FieldKind;
use crate::form::FieldRule;
use crate::form::FormSchema;
use crate::model::Row;
use crate::schema::ColumnDescriptor;
use crate::schema::ColumnKind;
use crate::schema::FacetValue;
use crate::schema::Schema;

/// Resource identifier for the attendance collection.
pub const ATTENDANCE_RESOURCE: &str = "attendance";

/// Attendance status for one employee on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// The employee was present.
    Present,
    /// The employee was absent.
    Absent,
    /// The employee was on leave.
    Leave,
}

impl AttendanceStatus {
    /// Every status, in display order.
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Leave,
    ];

    /// The wire code for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::Leave => "LEAVE",
        }
    }

    /// The display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "Leave",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attendance record as returned by the remote source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Server-assigned unique identifier.
    pub id: i64,
    /// Name of the employee the record belongs to.
    pub employee_name: String,
    /// The date the attendance was recorded for.
    pub date: NaiveDate,
    /// Attendance status on that date.
    pub status: AttendanceStatus,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Attendance> for Row {
    fn from(attendance: Attendance) -> Self {
        Row::new(attendance.id)
            .set("employee_name", attendance.employee_name)
            .set("date", attendance.date)
            .set("status", attendance.status.as_str())
            .set("created_at", attendance.created_at)
    }
}

/// Payload for creating an attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
    /// The date being recorded, `YYYY-MM-DD`.
    pub date: String,
    /// Attendance status.
    pub status: AttendanceStatus,
    /// Identifier of the employee the record is for.
    pub employee: String,
}

/// Grid columns for the attendance list.
pub fn attendance_columns() -> Result<Schema, ConfigError> {
    Schema::new(vec![
        ColumnDescriptor::new("employee_name", "Employee Name"),
        ColumnDescriptor::new("date", "Date").with_kind(ColumnKind::Date),
        ColumnDescriptor::new("status", "Status").with_facets(
            AttendanceStatus::ALL
                .iter()
                .map(|status| FacetValue::new(status.label(), status.as_str())),
        ),
        ColumnDescriptor::new("created_at", "Date Added").with_kind(ColumnKind::Date),
    ])
}

/// Create-attendance form: date, status, and employee are all required.
pub fn attendance_form() -> FormSchema {
    FormSchema::new(vec![
        FieldRule::new("date").kind(FieldKind::Date),
        FieldRule::new("status").kind(FieldKind::Choice(
            AttendanceStatus::ALL
                .iter()
                .map(|status| status.as_str().to_string())
                .collect(),
        )),
        FieldRule::new("employee"),
    ])
}
