use std::collections::{HashMap, VecDeque};

use chrono::NaiveDate;

use crate::domain::entities::{Employee, ShiftType, EVENING_CODE, MORNING_CODE, NIGHT_CODE};

/// Per-employee running counters, rebuilt fresh at the start of every run.
///
/// Represented as a dense `Vec` indexed through a `HashMap<employee_id,
/// index>` rather than several parallel `HashMap<employee_id, T>`s, so that
/// iterating all employees is a plain slice walk and a single lookup
/// resolves every counter for one employee.
#[derive(Debug, Clone)]
pub struct PerEmployeeState {
    pub employee_id: i64,
    pub last_shift: Option<(NaiveDate, String)>,
    pub consecutive_work: i32,
    pub total_work: i32,
    pub per_shift_count: HashMap<String, i32>,
    pub holiday_work: i32,
    pub last6_work_flags: VecDeque<bool>,
    pub block_shift: Option<String>,
}

impl PerEmployeeState {
    fn new(employee_id: i64) -> Self {
        Self {
            employee_id,
            last_shift: None,
            consecutive_work: 0,
            total_work: 0,
            per_shift_count: HashMap::new(),
            holiday_work: 0,
            last6_work_flags: VecDeque::with_capacity(6),
            block_shift: None,
        }
    }
}

pub struct EmployeeState {
    states: Vec<PerEmployeeState>,
    index: HashMap<i64, usize>,
}

impl EmployeeState {
    /// Initializes all counters at zero for every given (already-active)
    /// employee, in the order supplied — callers are expected to have
    /// ordered them ascending by id.
    pub fn new(employees: &[Employee]) -> Self {
        let mut states = Vec::with_capacity(employees.len());
        let mut index = HashMap::with_capacity(employees.len());
        for (i, e) in employees.iter().enumerate() {
            states.push(PerEmployeeState::new(e.id));
            index.insert(e.id, i);
        }
        Self { states, index }
    }

    pub fn get(&self, employee_id: i64) -> &PerEmployeeState {
        &self.states[self.index[&employee_id]]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PerEmployeeState> {
        self.states.iter()
    }

    fn get_mut(&mut self, employee_id: i64) -> &mut PerEmployeeState {
        let idx = self.index[&employee_id];
        &mut self.states[idx]
    }

    pub fn worked_yesterday(&self, employee_id: i64, day: NaiveDate) -> bool {
        match &self.get(employee_id).last_shift {
            Some((d, code)) => *d == day.pred_opt().unwrap_or(day) && ShiftType::is_work_code(code),
            None => false,
        }
    }

    /// The previous day's code iff it is a canonical work code and
    /// immediately precedes `day`.
    pub fn yesterday_work_code(&self, employee_id: i64, day: NaiveDate) -> Option<String> {
        let yesterday = day.pred_opt()?;
        match &self.get(employee_id).last_shift {
            Some((d, code)) if *d == yesterday && ShiftType::is_work_code(code) => {
                Some(code.clone())
            }
            _ => None,
        }
    }

    /// Records the assignment of `code` to `employee_id` on `day`. Must be
    /// called once per (employee, day) in ascending day order.
    pub fn mark_assigned(&mut self, employee_id: i64, day: NaiveDate, code: &str, is_holiday: bool) {
        let is_work = ShiftType::is_work_code(code);
        let state = self.get_mut(employee_id);
        let prev_was_work = state.consecutive_work > 0;

        if is_work {
            state.consecutive_work += 1;
            state.total_work += 1;
            if is_holiday {
                state.holiday_work += 1;
            }
            *state.per_shift_count.entry(code.to_string()).or_insert(0) += 1;
            if !prev_was_work || state.block_shift.is_none() {
                state.block_shift = Some(code.to_string());
            }
        } else {
            state.consecutive_work = 0;
            state.block_shift = None;
        }

        state.last_shift = Some((day, code.to_string()));
    }

    /// End-of-day bookkeeping: append today's work flag and truncate the
    /// rolling history to at most 6 entries.
    pub fn tick_history(&mut self, employee_id: i64, code: &str) {
        let is_work = ShiftType::is_work_code(code);
        let state = self.get_mut(employee_id);
        state.last6_work_flags.push_back(is_work);
        while state.last6_work_flags.len() > 6 {
            state.last6_work_flags.pop_front();
        }
    }

    pub fn same_shift_as_yesterday(&self, employee_id: i64, day: NaiveDate, code: &str) -> bool {
        matches!(
            self.yesterday_work_code(employee_id, day),
            Some(ref c) if c == code
        )
    }

    #[cfg(test)]
    pub fn work_codes() -> [&'static str; 3] {
        [MORNING_CODE, EVENING_CODE, NIGHT_CODE]
    }
}
