mod already_assigned_today;
mod can_work_night;
mod consecutive_cap;
mod fixed_occupied;
mod monthly_cap;
mod night_only;
mod night_to_morning;
mod sliding_rest;

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::domain::employee_state::EmployeeState;
use crate::domain::entities::Employee;

pub use already_assigned_today::AlreadyAssignedTodayRule;
pub use can_work_night::CanWorkNightRule;
pub use consecutive_cap::ConsecutiveCapRule;
pub use fixed_occupied::FixedOccupiedRule;
pub use monthly_cap::MonthlyCapRule;
pub use night_only::NightOnlyRule;
pub use night_to_morning::NightToMorningRule;
pub use sliding_rest::SlidingRestRule;

/// Everything a single `can_take` check needs about the day in progress.
///
/// Built fresh for each day by the scheduler; cheap to construct since it
/// borrows the state and a couple of per-day sets rather than owning them.
pub struct AssignmentContext<'a> {
    pub employee: &'a Employee,
    pub day: NaiveDate,
    pub code: &'a str,
    pub state: &'a EmployeeState,
    pub assigned_today: &'a HashSet<i64>,
    /// Fixed (pre-existing) assignments for *this* day only, keyed by
    /// employee id.
    pub fixed_today: &'a HashMap<i64, String>,
    pub global_max_consecutive_work_days: i32,
    pub min_rest_days_per_7: i32,
}

/// A single independently testable hard constraint, in the teacher
/// codebase's one-rule-per-file idiom. `check` returns `true` when the
/// candidate is admitted; constraints never carry a reason code, matching
/// §4.4's "no reason code is returned" rule.
pub trait Rule: Send + Sync {
    fn check(&self, ctx: &AssignmentContext<'_>) -> bool;
}

/// Composes the eight hard constraints in the fixed order §4.4 lists them
/// in. Order affects only short-circuit performance: every constraint is
/// an independent conjunct.
pub struct ConstraintChecker {
    rules: Vec<Box<dyn Rule>>,
}

impl ConstraintChecker {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(AlreadyAssignedTodayRule),
                Box::new(FixedOccupiedRule),
                Box::new(NightOnlyRule),
                Box::new(CanWorkNightRule),
                Box::new(NightToMorningRule),
                Box::new(ConsecutiveCapRule),
                Box::new(MonthlyCapRule),
                Box::new(SlidingRestRule),
            ],
        }
    }

    pub fn can_take(&self, ctx: &AssignmentContext<'_>) -> bool {
        self.rules.iter().all(|r| r.check(ctx))
    }
}

impl Default for ConstraintChecker {
    fn default() -> Self {
        Self::new()
    }
}
