use super::{AssignmentContext, Rule};

/// Rejects a candidate already holding an assignment for this day.
pub struct AlreadyAssignedTodayRule;

impl Rule for AlreadyAssignedTodayRule {
    fn check(&self, ctx: &AssignmentContext<'_>) -> bool {
        !ctx.assigned_today.contains(&ctx.employee.id)
    }
}
