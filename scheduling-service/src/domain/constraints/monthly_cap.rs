use super::{AssignmentContext, Rule};

/// `max_work_days_per_month = 0` means unlimited.
pub struct MonthlyCapRule;

impl Rule for MonthlyCapRule {
    fn check(&self, ctx: &AssignmentContext<'_>) -> bool {
        if ctx.employee.max_work_days_per_month <= 0 {
            return true;
        }
        ctx.state.get(ctx.employee.id).total_work < ctx.employee.max_work_days_per_month
    }
}
