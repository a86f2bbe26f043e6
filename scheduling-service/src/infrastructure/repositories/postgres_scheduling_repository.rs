use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainError, DomainResult};
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::entities::{Assignment, Employee, ShiftType};
use crate::domain::repositories::{SchedulingRepository, SchedulingRepositoryFactory};

/// A `SchedulingRepository` backed by Postgres, threading a single
/// `sqlx::Transaction` through every call made during one `generate`/
/// `fill_off` run.
///
/// `commit()` finalizes the current transaction and immediately opens a
/// fresh one, so the repository remains usable across the several commit
/// points §5 names (after the overwrite delete, after each day's trim,
/// and at the end of the run) without the caller needing to re-acquire a
/// connection. A run that never explicitly commits leaves its last
/// transaction to be rolled back on drop.
pub struct PostgresSchedulingRepository {
    pool: PgPool,
    tx: Option<Transaction<'static, Postgres>>,
}

impl PostgresSchedulingRepository {
    pub async fn begin(pool: PgPool) -> DomainResult<Self> {
        let tx = pool.begin().await.map_err(DomainError::from)?;
        Ok(Self { pool, tx: Some(tx) })
    }

    fn tx_mut(&mut self) -> &mut Transaction<'static, Postgres> {
        self.tx.as_mut().expect("transaction taken without a replacement being opened")
    }
}

#[async_trait]
impl SchedulingRepository for PostgresSchedulingRepository {
    async fn list_active_employees(&mut self) -> DomainResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, active, max_work_days_per_month, max_consecutive_work_days,
                   can_work_night, night_only
            FROM employees
            WHERE active = true
            ORDER BY id
            "#,
        )
        .fetch_all(&mut **self.tx_mut())
        .await
        .map_err(DomainError::from)?;

        Ok(employees)
    }

    async fn list_employees(&mut self) -> DomainResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, active, max_work_days_per_month, max_consecutive_work_days,
                   can_work_night, night_only
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&mut **self.tx_mut())
        .await
        .map_err(DomainError::from)?;

        Ok(employees)
    }

    async fn list_shift_types(&mut self) -> DomainResult<Vec<ShiftType>> {
        let shift_types = sqlx::query_as::<_, ShiftType>(
            r#"
            SELECT id, code, is_work
            FROM shift_types
            "#,
        )
        .fetch_all(&mut **self.tx_mut())
        .await
        .map_err(DomainError::from)?;

        Ok(shift_types)
    }

    async fn list_assignments_in(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT id, employee_id, day, shift_type_id, note
            FROM assignments
            WHERE day BETWEEN $1 AND $2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&mut **self.tx_mut())
        .await
        .map_err(DomainError::from)?;

        Ok(assignments)
    }

    async fn insert_assignment(
        &mut self,
        employee_id: i64,
        day: NaiveDate,
        shift_type_id: i64,
        note: Option<String>,
    ) -> DomainResult<Assignment> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (employee_id, day, shift_type_id, note)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (employee_id, day)
            DO UPDATE SET shift_type_id = EXCLUDED.shift_type_id, note = EXCLUDED.note
            RETURNING id, employee_id, day, shift_type_id, note
            "#,
        )
        .bind(employee_id)
        .bind(day)
        .bind(shift_type_id)
        .bind(note)
        .fetch_one(&mut **self.tx_mut())
        .await
        .map_err(DomainError::from)?;

        Ok(assignment)
    }

    async fn update_assignment(&mut self, assignment: &Assignment) -> DomainResult<()> {
        sqlx::query(
            r#"
            UPDATE assignments
            SET shift_type_id = $2, note = $3
            WHERE id = $1
            "#,
        )
        .bind(assignment.id)
        .bind(assignment.shift_type_id)
        .bind(&assignment.note)
        .execute(&mut **self.tx_mut())
        .await
        .map_err(DomainError::from)?;

        Ok(())
    }

    async fn delete_assignment(&mut self, assignment: &Assignment) -> DomainResult<()> {
        sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(assignment.id)
            .execute(&mut **self.tx_mut())
            .await
            .map_err(DomainError::from)?;

        Ok(())
    }

    async fn commit(&mut self) -> DomainResult<()> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await.map_err(DomainError::from)?;
        }
        self.tx = Some(self.pool.begin().await.map_err(DomainError::from)?);
        Ok(())
    }
}

/// Opens a fresh [`PostgresSchedulingRepository`] (and therefore a fresh
/// transaction) for every request.
pub struct PostgresSchedulingRepositoryFactory {
    pool: PgPool,
}

impl PostgresSchedulingRepositoryFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchedulingRepositoryFactory for PostgresSchedulingRepositoryFactory {
    async fn begin(&self) -> DomainResult<Box<dyn SchedulingRepository>> {
        let repo = PostgresSchedulingRepository::begin(self.pool.clone()).await?;
        Ok(Box::new(repo))
    }
}
