use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP-001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

/// Column values for a new `employees` row. The surrogate `id` is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}
