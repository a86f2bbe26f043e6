use std::collections::HashSet;

use chrono::NaiveDate;
use shared::{DomainError, DomainResult};

use crate::domain::calendar::CalendarModel;
use crate::domain::entities::{Employee, OFF_CODE};
use crate::domain::params::FillOffResult;
use crate::domain::repositories::SchedulingRepository;

/// A single (employee, day) cell that lacks any assignment and should be
/// backfilled with the off code.
pub struct FillCreateOp {
    pub employee_id: i64,
    pub day: NaiveDate,
}

/// The fully-decided outcome of one `fill_off` run, computed with zero I/O.
#[derive(Default)]
pub struct FillOffPlan {
    pub creates: Vec<FillCreateOp>,
}

/// Synchronous planning for one `fill_off` run: no constraints, no
/// ordering concerns, just "does this cell have an assignment already".
pub fn plan_fill_off(
    calendar: &CalendarModel,
    employees: &[Employee],
    existing: &[crate::domain::entities::Assignment],
) -> FillOffPlan {
    let mut occupied: HashSet<(i64, NaiveDate)> = HashSet::new();
    for a in existing {
        occupied.insert((a.employee_id, a.day));
    }

    let mut plan = FillOffPlan::default();
    for day in calendar.days() {
        for e in employees {
            if !occupied.contains(&(e.id, day)) {
                plan.creates.push(FillCreateOp {
                    employee_id: e.id,
                    day,
                });
            }
        }
    }
    plan
}

/// The async shell: loads the employee set named by `active_only`, loads
/// the month's existing assignments, and applies the resulting off-fill.
pub async fn fill_off(
    repo: &mut dyn SchedulingRepository,
    month: &str,
    active_only: bool,
) -> DomainResult<FillOffResult> {
    let calendar = CalendarModel::parse(month, false, HashSet::new())
        .map_err(|e| DomainError::InvalidInput(e.to_string()))?;

    let mut employees: Vec<Employee> = if active_only {
        repo.list_active_employees().await?
    } else {
        repo.list_employees().await?
    };
    employees.sort_by_key(|e| e.id);
    let employees: Vec<Employee> = employees.into_iter().map(Employee::normalize).collect();
    if employees.is_empty() {
        return Ok(FillOffResult {
            created: 0,
            warnings: vec!["目前沒有任何員工可補休假。".to_string()],
        });
    }

    let shift_types = repo.list_shift_types().await?;
    let off_id = match shift_types.iter().find(|s| s.code == OFF_CODE) {
        Some(s) => s.id,
        None => {
            return Ok(FillOffResult {
                created: 0,
                warnings: vec![format!("缺少班別代碼：{}（請先建立班別）", OFF_CODE)],
            });
        }
    };

    let existing = repo
        .list_assignments_in(calendar.start, calendar.end)
        .await?;

    let plan = plan_fill_off(&calendar, &employees, &existing);

    let mut created = 0i64;
    for op in &plan.creates {
        repo.insert_assignment(op.employee_id, op.day, off_id, None)
            .await?;
        created += 1;
    }
    repo.commit().await?;

    Ok(FillOffResult {
        created,
        warnings: Vec::new(),
    })
}
