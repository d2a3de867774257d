use crate::{
    api::unprocessable,
    model::employee::{Employee, NewEmployee},
    store::RecordStore,
};
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[validate(email(message = "value is not a valid email address"))]
    #[schema(example = "john@email.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

impl From<CreateEmployee> for NewEmployee {
    fn from(payload: CreateEmployee) -> Self {
        NewEmployee {
            employee_id: payload.employee_id,
            full_name: payload.full_name,
            email: payload.email,
            department: payload.department,
        }
    }
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees in creation order", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<dyn RecordStore>,
) -> actix_web::Result<impl Responder> {
    let employees = store.list_employees().await?;
    debug!(count = employees.len(), "Listed employees");

    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Employee ID or email already exists", body = Object, example = json!({
            "detail": "Employee ID already exists"
        })),
        (status = 422, description = "Malformed payload or invalid email", body = Object, example = json!({
            "detail": "value is not a valid email address"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<dyn RecordStore>,
    payload: web::Json<CreateEmployee>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();

    if let Err(errors) = payload.validate() {
        let detail = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Invalid employee payload".to_string());
        return Ok(unprocessable(detail));
    }

    let employee = store.create_employee(payload.into()).await?;
    info!(id = employee.id, employee_id = %employee.employee_id, "Employee created");

    Ok(HttpResponse::Created().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(
        ("id", Path, description = "Employee surrogate ID")
    ),
    responses(
        (status = 204, description = "Employee and its attendance deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<dyn RecordStore>,
    path: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    store.delete_employee(id).await?;
    info!(id, "Employee deleted");

    Ok(HttpResponse::NoContent().finish())
}
