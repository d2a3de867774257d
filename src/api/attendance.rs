use crate::{
    model::attendance::{Attendance, NewAttendance},
    store::RecordStore,
};
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    /// `Present` or `Absent`, anything else is rejected with 400
    #[schema(example = "Present")]
    pub status: String,
}

/// Mark attendance for an employee
#[utoipa::path(
    post,
    path = "/employees/{id}/attendance",
    params(
        ("id", Path, description = "Employee surrogate ID")
    ),
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = Attendance),
        (status = 400, description = "Status is not Present or Absent", body = Object, example = json!({
            "detail": "Status must be Present or Absent"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    store: web::Data<dyn RecordStore>,
    path: web::Path<i64>,
    payload: web::Json<MarkAttendance>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let MarkAttendance { date, status } = payload.into_inner();

    let record = store
        .create_attendance(employee_id, NewAttendance { date, status })
        .await?;
    info!(id = record.id, employee_id, date = %record.date, status = %record.status, "Attendance marked");

    Ok(HttpResponse::Created().json(record))
}

/// List attendance of an employee
#[utoipa::path(
    get,
    path = "/employees/{id}/attendance",
    params(
        ("id", Path, description = "Employee surrogate ID")
    ),
    responses(
        (status = 200, description = "Attendance records in creation order", body = [Attendance]),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    store: web::Data<dyn RecordStore>,
    path: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let records = store.list_attendance(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(records))
}
