use crate::api::attendance::MarkAttendance;
use crate::api::employee::CreateEmployee;
use crate::model::attendance::Attendance;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small record-keeping backend for employees and their daily attendance.

### Key Features
- **Employees**: list, create (unique employee ID and email), delete
- **Attendance**: mark a day as `Present` or `Absent`, list an employee's history

Deleting an employee removes all of its attendance records.

### Errors
Every error body has the shape `{"detail": "..."}`.
- `400` duplicate employee ID or email, invalid attendance status
- `404` unknown employee
- `422` malformed payload or invalid email

---
Built with **Rust**, **Actix Web**, **SQLx** (SQLite), and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Attendance,
            MarkAttendance
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;
