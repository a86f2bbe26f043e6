use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use scheduling_service::api::AppState;
use scheduling_service::domain::entities::{
    Assignment, Employee, ShiftType, EVENING_CODE, LEAVE_CODE, MORNING_CODE, NIGHT_CODE, OFF_CODE,
};
use scheduling_service::domain::repositories::{SchedulingRepository, SchedulingRepositoryFactory};
use shared::{DomainError, DomainResult};

/// An in-memory [`SchedulingRepository`] shared across the clones a
/// [`FakeSchedulingRepositoryFactory`] hands out, so writes made through one
/// run's unit of work are visible to the next.
#[derive(Default)]
struct FakeStore {
    employees: Vec<Employee>,
    shift_types: Vec<ShiftType>,
    assignments: Vec<Assignment>,
    next_assignment_id: i64,
}

pub struct FakeSchedulingRepository {
    store: Arc<Mutex<FakeStore>>,
}

#[async_trait]
impl SchedulingRepository for FakeSchedulingRepository {
    async fn list_active_employees(&mut self) -> DomainResult<Vec<Employee>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .employees
            .iter()
            .filter(|e| e.active)
            .cloned()
            .collect())
    }

    async fn list_employees(&mut self) -> DomainResult<Vec<Employee>> {
        Ok(self.store.lock().unwrap().employees.clone())
    }

    async fn list_shift_types(&mut self) -> DomainResult<Vec<ShiftType>> {
        Ok(self.store.lock().unwrap().shift_types.clone())
    }

    async fn list_assignments_in(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Assignment>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .assignments
            .iter()
            .filter(|a| a.day >= start && a.day <= end)
            .cloned()
            .collect())
    }

    async fn insert_assignment(
        &mut self,
        employee_id: i64,
        day: NaiveDate,
        shift_type_id: i64,
        note: Option<String>,
    ) -> DomainResult<Assignment> {
        let mut store = self.store.lock().unwrap();
        if let Some(existing) = store
            .assignments
            .iter_mut()
            .find(|a| a.employee_id == employee_id && a.day == day)
        {
            existing.shift_type_id = shift_type_id;
            existing.note = note;
            return Ok(existing.clone());
        }

        store.next_assignment_id += 1;
        let assignment = Assignment {
            id: store.next_assignment_id,
            employee_id,
            day,
            shift_type_id,
            note,
        };
        store.assignments.push(assignment.clone());
        Ok(assignment)
    }

    async fn update_assignment(&mut self, assignment: &Assignment) -> DomainResult<()> {
        let mut store = self.store.lock().unwrap();
        if let Some(existing) = store.assignments.iter_mut().find(|a| a.id == assignment.id) {
            *existing = assignment.clone();
            Ok(())
        } else {
            Err(DomainError::NotFound(format!(
                "assignment {} not found",
                assignment.id
            )))
        }
    }

    async fn delete_assignment(&mut self, assignment: &Assignment) -> DomainResult<()> {
        let mut store = self.store.lock().unwrap();
        store.assignments.retain(|a| a.id != assignment.id);
        Ok(())
    }

    async fn commit(&mut self) -> DomainResult<()> {
        Ok(())
    }
}

pub struct FakeSchedulingRepositoryFactory {
    store: Arc<Mutex<FakeStore>>,
}

impl FakeSchedulingRepositoryFactory {
    pub fn new(employees: Vec<Employee>, assignments: Vec<Assignment>) -> Self {
        let next_assignment_id = assignments.iter().map(|a| a.id).max().unwrap_or(0);
        Self {
            store: Arc::new(Mutex::new(FakeStore {
                employees,
                shift_types: default_shift_types(),
                assignments,
                next_assignment_id,
            })),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[async_trait]
impl SchedulingRepositoryFactory for FakeSchedulingRepositoryFactory {
    async fn begin(&self) -> DomainResult<Box<dyn SchedulingRepository>> {
        Ok(Box::new(FakeSchedulingRepository {
            store: Arc::clone(&self.store),
        }))
    }
}

fn default_shift_types() -> Vec<ShiftType> {
    let codes: HashMap<&str, i64> = HashMap::from([
        (MORNING_CODE, 1),
        (EVENING_CODE, 2),
        (NIGHT_CODE, 3),
        (OFF_CODE, 4),
        (LEAVE_CODE, 5),
    ]);

    let mut types: Vec<ShiftType> = codes
        .into_iter()
        .map(|(code, id)| ShiftType {
            id,
            code: code.to_string(),
            is_work: ShiftType::is_work_code(code),
        })
        .collect();
    types.sort_by_key(|s| s.id);
    types
}

pub fn sample_employee(id: i64) -> Employee {
    Employee {
        id,
        active: true,
        max_work_days_per_month: 0,
        max_consecutive_work_days: 0,
        can_work_night: true,
        night_only: false,
    }
}

pub fn test_app_state(factory: FakeSchedulingRepositoryFactory) -> AppState {
    AppState::new(Arc::new(factory))
}
