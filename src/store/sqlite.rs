use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::debug;

use super::RecordStore;
use crate::error::StoreError;
use crate::model::attendance::{Attendance, AttendanceStatus, NewAttendance};
use crate::model::employee::{Employee, NewEmployee};

const DUPLICATE_EMPLOYEE_ID: &str = "Employee ID already exists";
const DUPLICATE_EMAIL: &str = "Email already exists";
const INVALID_STATUS: &str = "Status must be Present or Absent";

/// [`RecordStore`] over a sqlite pool. Writes are single autocommit statements,
/// so concurrent requests never hold a read snapshot while waiting for the write lock.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn employee_exists<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?)")
        .bind(id)
        .fetch_one(executor)
        .await
}

/// Translates constraint violations raised by sqlite into domain errors.
/// These only fire when a concurrent request slips past the checks in code.
fn map_write_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            let message = if db_err.message().contains("employees.email") {
                DUPLICATE_EMAIL
            } else {
                DUPLICATE_EMPLOYEE_ID
            };
            return StoreError::Conflict(message.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::employee_not_found();
        }
        if db_err.is_check_violation() {
            return StoreError::Validation(INVALID_STATUS.to_string());
        }
    }

    StoreError::Database(e)
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, employee_id, full_name, email, department FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        let id_taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = ?)",
        )
        .bind(&new.employee_id)
        .fetch_one(&self.pool)
        .await?;
        if id_taken {
            return Err(StoreError::Conflict(DUPLICATE_EMPLOYEE_ID.to_string()));
        }

        let email_taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE email = ?)")
                .bind(&new.email)
                .fetch_one(&self.pool)
                .await?;
        if email_taken {
            return Err(StoreError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        // single autocommit statement: a racing duplicate surfaces as a UNIQUE violation
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department)
            VALUES (?, ?, ?, ?)
            RETURNING id, employee_id, full_name, email, department
            "#,
        )
        .bind(&new.employee_id)
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.department)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        debug!(id = employee.id, employee_id = %employee.employee_id, "Employee created");
        Ok(employee)
    }

    async fn delete_employee(&self, id: i64) -> Result<(), StoreError> {
        // attendance rows go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::employee_not_found());
        }

        debug!(id, "Employee deleted");
        Ok(())
    }

    async fn create_attendance(
        &self,
        employee_id: i64,
        new: NewAttendance,
    ) -> Result<Attendance, StoreError> {
        if !employee_exists(&self.pool, employee_id).await? {
            return Err(StoreError::employee_not_found());
        }

        let status = AttendanceStatus::from_str(&new.status)
            .map_err(|_| StoreError::Validation(INVALID_STATUS.to_string()))?;

        let attendance = sqlx::query_as::<_, Attendance>(
            r#"
            INSERT INTO attendance (date, status, employee_id)
            VALUES (?, ?, ?)
            RETURNING id, date, status
            "#,
        )
        .bind(new.date)
        .bind(status.to_string())
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        debug!(id = attendance.id, employee_id, status = %status, "Attendance marked");
        Ok(attendance)
    }

    async fn list_attendance(&self, employee_id: i64) -> Result<Vec<Attendance>, StoreError> {
        let mut conn = self.pool.acquire().await?;

        if !employee_exists(&mut *conn, employee_id).await? {
            return Err(StoreError::employee_not_found());
        }

        let records = sqlx::query_as::<_, Attendance>(
            "SELECT id, date, status FROM attendance WHERE employee_id = ? ORDER BY id",
        )
        .bind(employee_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(records)
    }
}
