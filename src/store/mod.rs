//! Record store: persistence of employees and their attendance marks.
//!
//! Handlers only see the [`RecordStore`] trait. The sqlite implementation
//! enforces uniqueness and ownership both in code and through table
//! constraints, so a check that loses a race still fails with the same error.

pub mod sqlite;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::attendance::{Attendance, NewAttendance};
use crate::model::employee::{Employee, NewEmployee};

pub use sqlite::SqliteStore;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All employees in insertion order.
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;

    /// Fails with [`StoreError::Conflict`] when `employee_id` or `email` is taken.
    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, StoreError>;

    /// Removes the employee together with all of its attendance marks.
    async fn delete_employee(&self, id: i64) -> Result<(), StoreError>;

    /// Fails with [`StoreError::NotFound`] for an unknown employee, then with
    /// [`StoreError::Validation`] for a status outside `Present`/`Absent`.
    async fn create_attendance(
        &self,
        employee_id: i64,
        new: NewAttendance,
    ) -> Result<Attendance, StoreError>;

    /// Attendance marks of one employee in insertion order.
    async fn list_attendance(&self, employee_id: i64) -> Result<Vec<Attendance>, StoreError>;
}
