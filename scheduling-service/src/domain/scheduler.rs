use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use shared::{DomainError, DomainResult};

use crate::domain::calendar::CalendarModel;
use crate::domain::constraints::{AssignmentContext, ConstraintChecker};
use crate::domain::demand::DemandTable;
use crate::domain::employee_state::EmployeeState;
use crate::domain::entities::{Assignment, Employee, ShiftType, OFF_CODE, WORK_CODES};
use crate::domain::params::{GenerateParams, GenerateResult};
use crate::domain::ranker::{Candidate, Ranker};
use crate::domain::repositories::SchedulingRepository;

fn day_tag(is_holiday: bool) -> &'static str {
    if is_holiday {
        "假日"
    } else {
        "平日"
    }
}

fn warn(day: NaiveDate, is_holiday: bool, message: impl AsRef<str>) -> String {
    format!("{}（{}）{}", day, day_tag(is_holiday), message.as_ref())
}

/// A surplus fixed assignment the plan wants converted to off.
pub struct TrimOp {
    pub assignment: Assignment,
}

/// A brand-new assignment the plan wants created.
pub struct CreateOp {
    pub employee_id: i64,
    pub day: NaiveDate,
    pub shift_type_id: i64,
}

/// Everything decided for one day, computed with zero I/O.
#[derive(Default)]
pub struct DayPlan {
    pub trims: Vec<TrimOp>,
    pub creates: Vec<CreateOp>,
    pub warnings: Vec<String>,
}

/// The fully-decided outcome of one `generate` run, computed synchronously
/// from already-loaded rows. The async shell in [`generate`] is responsible
/// only for loading the inputs and applying this plan's writes (the
/// overwrite-mode delete happens before planning and is not represented
/// here).
pub struct RunPlan {
    pub day_plans: Vec<DayPlan>,
}

/// Short-circuit outcomes that require no day loop at all.
pub enum EarlyOutcome {
    EmptyWorkforce,
    MissingShiftTypes(Vec<String>),
}

/// Checks the two conditions that must hold before a run may touch the
/// repository at all: at least one active employee, and the canonical
/// shift codes present in the registry. Shared by [`plan_run`] and by
/// [`generate`]'s async shell, which must run this check *before* the
/// overwrite-mode delete so an early outcome never reports spurious
/// deletes.
fn check_preconditions(employees: &[Employee], shift_types: &[ShiftType]) -> Result<(), EarlyOutcome> {
    if employees.is_empty() {
        return Err(EarlyOutcome::EmptyWorkforce);
    }

    let codes: HashSet<&str> = shift_types.iter().map(|s| s.code.as_str()).collect();
    let mut required_codes: Vec<&str> = WORK_CODES.to_vec();
    required_codes.push(OFF_CODE);
    let missing: Vec<String> = required_codes
        .iter()
        .filter(|c| !codes.contains(*c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(EarlyOutcome::MissingShiftTypes(missing));
    }

    Ok(())
}

/// Synchronous planning for one `generate` run over `calendar`.
///
/// `existing` should already be filtered to the employees the caller
/// intends to treat as fixed (empty when `overwrite` is set, since the
/// async shell deletes them before planning begins).
#[allow(clippy::too_many_arguments)]
pub fn plan_run(
    calendar: &CalendarModel,
    employees: &[Employee],
    shift_types: &[ShiftType],
    existing: &[Assignment],
    params: &GenerateParams,
) -> Result<RunPlan, EarlyOutcome> {
    check_preconditions(employees, shift_types)?;

    let code_to_id: HashMap<&str, i64> = shift_types.iter().map(|s| (s.code.as_str(), s.id)).collect();
    let id_to_code: HashMap<i64, &str> = shift_types.iter().map(|s| (s.id, s.code.as_str())).collect();
    let off_id = code_to_id[OFF_CODE];

    let active_ids: HashSet<i64> = employees.iter().map(|e| e.id).collect();

    let mut fixed_by_day: HashMap<NaiveDate, HashMap<i64, String>> = HashMap::new();
    let mut fixed_assignment_by_day: HashMap<NaiveDate, HashMap<i64, Assignment>> = HashMap::new();
    for a in existing {
        if !active_ids.contains(&a.employee_id) {
            continue;
        }
        let code = match id_to_code.get(&a.shift_type_id) {
            Some(c) => c.to_string(),
            None => continue,
        };
        fixed_by_day.entry(a.day).or_default().insert(a.employee_id, code);
        fixed_assignment_by_day
            .entry(a.day)
            .or_default()
            .insert(a.employee_id, a.clone());
    }

    let mut state = EmployeeState::new(employees);
    let checker = ConstraintChecker::new();
    let ranker = Ranker::new(params);
    let demand_table = DemandTable::new(params);

    let mut day_plans = Vec::new();

    for day in calendar.days() {
        let is_holiday = calendar.is_holiday(day);
        let mut plan = DayPlan::default();

        let total_required = demand_table.total_required(is_holiday);
        if total_required > employees.len() as i32 {
            plan.warnings.push(warn(
                day,
                is_holiday,
                format!(
                    "每日需求人數（{}）大於員工數（{}），可能排不滿。",
                    total_required,
                    employees.len()
                ),
            ));
        }

        let mut fixed = fixed_by_day.remove(&day).unwrap_or_default();
        let fixed_assignments = fixed_assignment_by_day.remove(&day).unwrap_or_default();

        // Overstaff trim: vacuous under overwrite, since nothing is fixed there.
        if params.trim_overstaff_to_off && !fixed.is_empty() {
            for code in WORK_CODES {
                let assigned_emp_ids: Vec<i64> = fixed
                    .iter()
                    .filter(|(_, c)| c.as_str() == code)
                    .map(|(id, _)| *id)
                    .collect();
                let required = demand_table.required(is_holiday, code);
                let surplus = assigned_emp_ids.len() as i32 - required;
                if surplus <= 0 {
                    continue;
                }

                let mut scored: Vec<(i64, (i32, i32, i32, i32, i64))> = assigned_emp_ids
                    .iter()
                    .map(|&id| {
                        let s = state.get(id);
                        let worked_yesterday = if state.worked_yesterday(id, day) { 0 } else { 1 };
                        (
                            id,
                            (
                                worked_yesterday,
                                s.consecutive_work,
                                s.total_work,
                                s.holiday_work,
                                id,
                            ),
                        )
                    })
                    .collect();
                scored.sort_by(|a, b| b.1.cmp(&a.1));

                let to_trim: Vec<i64> = scored
                    .into_iter()
                    .take(surplus as usize)
                    .map(|(id, _)| id)
                    .collect();

                for emp_id in &to_trim {
                    if let Some(a) = fixed_assignments.get(emp_id) {
                        let mut trimmed = a.clone();
                        trimmed.shift_type_id = off_id;
                        plan.trims.push(TrimOp { assignment: trimmed });
                    }
                    fixed.insert(*emp_id, OFF_CODE.to_string());
                }
                plan.warnings.push(warn(
                    day,
                    is_holiday,
                    format!(
                        "{} 班超過需求，已將 {} 人改排休假（{}）。",
                        code,
                        to_trim.len(),
                        OFF_CODE
                    ),
                ));
            }
        }

        let mut assigned_today: HashSet<i64> = HashSet::new();
        let mut today_code: HashMap<i64, String> = HashMap::new();
        let mut fixed_counts: HashMap<&str, i32> = HashMap::new();

        for (emp_id, code) in &fixed {
            if !active_ids.contains(emp_id) {
                continue;
            }
            assigned_today.insert(*emp_id);
            today_code.insert(*emp_id, code.clone());
            state.mark_assigned(*emp_id, day, code, is_holiday);
            if let Some(work_code) = WORK_CODES.iter().find(|c| **c == code.as_str()) {
                *fixed_counts.entry(work_code).or_insert(0) += 1;
            }
        }

        for code in WORK_CODES {
            let count = *fixed_counts.get(code).unwrap_or(&0);
            let required = demand_table.required(is_holiday, code);
            if count > required {
                plan.warnings.push(warn(
                    day,
                    is_holiday,
                    format!("{} 班固定排班 {} 人，已超過需求 {} 人。", code, count, required),
                ));
            }
        }

        for code in WORK_CODES {
            let fixed_count = *fixed_counts.get(code).unwrap_or(&0);
            let required = demand_table.required(is_holiday, code);
            let need = (required - fixed_count).max(0);

            for _ in 0..need {
                let candidates: Vec<Candidate> = employees
                    .iter()
                    .filter(|e| {
                        let ctx = AssignmentContext {
                            employee: e,
                            day,
                            code,
                            state: &state,
                            assigned_today: &assigned_today,
                            fixed_today: &fixed,
                            global_max_consecutive_work_days: params.max_consecutive_work_days,
                            min_rest_days_per_7: params.min_rest_days_per_7,
                        };
                        checker.can_take(&ctx)
                    })
                    .map(|e| Candidate { employee_id: e.id })
                    .collect();

                if candidates.is_empty() {
                    plan.warnings
                        .push(warn(day, is_holiday, format!("{} 班缺人（需求 {}）。", code, need)));
                    break;
                }

                let (candidates_pref, forced) = ranker.filter_block_shift(&state, &candidates, code);
                if forced {
                    plan.warnings.push(warn(
                        day,
                        is_holiday,
                        format!("{} 班無法維持同班別連上（已被迫換班）。", code),
                    ));
                }

                let chosen = ranker
                    .pick_best(&state, &candidates_pref, day, code, is_holiday)
                    .expect("candidates_pref is non-empty");

                plan.creates.push(CreateOp {
                    employee_id: chosen.employee_id,
                    day,
                    shift_type_id: code_to_id[code],
                });
                assigned_today.insert(chosen.employee_id);
                today_code.insert(chosen.employee_id, code.to_string());
                state.mark_assigned(chosen.employee_id, day, code, is_holiday);
            }
        }

        for e in employees {
            if assigned_today.contains(&e.id) {
                continue;
            }
            plan.creates.push(CreateOp {
                employee_id: e.id,
                day,
                shift_type_id: off_id,
            });
            today_code.insert(e.id, OFF_CODE.to_string());
            state.mark_assigned(e.id, day, OFF_CODE, is_holiday);
        }

        for e in employees {
            let code = today_code.get(&e.id).map(String::as_str).unwrap_or(OFF_CODE);
            state.tick_history(e.id, code);
        }

        day_plans.push(plan);
    }

    Ok(RunPlan { day_plans })
}

/// The async shell: loads rows, hands them to [`plan_run`], and applies the
/// resulting writes. No `.await` occurs anywhere inside `plan_run` itself.
pub async fn generate(
    repo: &mut dyn SchedulingRepository,
    month: &str,
    params: GenerateParams,
) -> DomainResult<GenerateResult> {
    let calendar = CalendarModel::parse(
        month,
        params.weekend_as_holiday,
        params.holiday_dates.clone(),
    )
    .map_err(|e| DomainError::InvalidInput(e.to_string()))?;

    let employees: Vec<Employee> = {
        let mut e = repo.list_active_employees().await?;
        e.sort_by_key(|e| e.id);
        e.into_iter().map(Employee::normalize).collect()
    };
    let shift_types = repo.list_shift_types().await?;

    // Validated before any read/delete of existing assignments: an early
    // outcome must report `created = deleted = 0` and leave the month
    // untouched, so this has to happen ahead of the overwrite-mode delete.
    if let Err(early) = check_preconditions(&employees, &shift_types) {
        return Ok(match early {
            EarlyOutcome::EmptyWorkforce => GenerateResult {
                created: 0,
                deleted: 0,
                warnings: vec!["目前沒有任何啟用中的員工，無法自動排班。".to_string()],
            },
            EarlyOutcome::MissingShiftTypes(missing) => GenerateResult {
                created: 0,
                deleted: 0,
                warnings: vec![format!("缺少班別代碼：{}（請先建立班別）", missing.join(", "))],
            },
        });
    }

    let existing = repo.list_assignments_in(calendar.start, calendar.end).await?;

    let mut deleted = 0i64;
    let plan_existing: Vec<Assignment> = if params.overwrite {
        for a in &existing {
            repo.delete_assignment(a).await?;
            deleted += 1;
        }
        if deleted > 0 {
            repo.commit().await?;
        }
        Vec::new()
    } else {
        existing
    };

    let run_plan = plan_run(&calendar, &employees, &shift_types, &plan_existing, &params)
        .expect("preconditions already validated above");

    let mut created = 0i64;
    let mut warnings = Vec::new();

    for day_plan in run_plan.day_plans {
        for trim in &day_plan.trims {
            repo.update_assignment(&trim.assignment).await?;
        }
        if !day_plan.trims.is_empty() {
            repo.commit().await?;
        }
        for create in &day_plan.creates {
            repo.insert_assignment(create.employee_id, create.day, create.shift_type_id, None)
                .await?;
            created += 1;
        }
        warnings.extend(day_plan.warnings);
    }

    repo.commit().await?;

    Ok(GenerateResult {
        created,
        deleted,
        warnings,
    })
}
