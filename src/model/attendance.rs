use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Daily presence marker. Persisted as its variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(example = json!({ "id": 1, "date": "2024-01-01", "status": "Present" }))]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "Present")]
    pub status: String,
}

/// Attendance mark as received from a client. `status` is checked against
/// [`AttendanceStatus`] by the store before anything is written.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub date: NaiveDate,
    pub status: String,
}
