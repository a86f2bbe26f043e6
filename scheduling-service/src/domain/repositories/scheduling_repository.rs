use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;

use crate::domain::entities::{Assignment, Employee, ShiftType};

/// The unit-of-work a single `generate`/`fill_off` run threads through every
/// call. An implementation (Postgres-backed, or an in-memory fake for
/// tests) wraps its own transaction handle behind this trait; `commit`
/// finalizes it at the boundaries named for §5 of the scheduling design.
#[async_trait]
pub trait SchedulingRepository: Send + Sync {
    async fn list_active_employees(&mut self) -> DomainResult<Vec<Employee>>;

    /// All employees, active or not, ordered by id. Needed by `fill_off`'s
    /// `active_only = false` path.
    async fn list_employees(&mut self) -> DomainResult<Vec<Employee>>;

    async fn list_shift_types(&mut self) -> DomainResult<Vec<ShiftType>>;

    async fn list_assignments_in(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Assignment>>;

    async fn insert_assignment(
        &mut self,
        employee_id: i64,
        day: NaiveDate,
        shift_type_id: i64,
        note: Option<String>,
    ) -> DomainResult<Assignment>;

    async fn update_assignment(&mut self, assignment: &Assignment) -> DomainResult<()>;

    async fn delete_assignment(&mut self, assignment: &Assignment) -> DomainResult<()>;

    async fn commit(&mut self) -> DomainResult<()>;
}

/// Opens a fresh [`SchedulingRepository`] unit of work for one `generate`/
/// `fill_off` run. Held behind `Arc` in [`crate::api::AppState`] so handlers
/// can hand each request its own transaction while tests substitute an
/// in-memory fake.
#[async_trait]
pub trait SchedulingRepositoryFactory: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn SchedulingRepository>>;
}
