use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const MORNING_CODE: &str = "早";
pub const EVENING_CODE: &str = "晚";
pub const NIGHT_CODE: &str = "夜";
pub const OFF_CODE: &str = "O";
pub const LEAVE_CODE: &str = "L";

/// The three canonical work codes, in the fixed fill order the scheduler
/// iterates them in.
pub const WORK_CODES: [&str; 3] = [MORNING_CODE, EVENING_CODE, NIGHT_CODE];

/// A row in the shift-code registry.
///
/// The registry is kept open (string-keyed) rather than a closed Rust enum
/// because the original roster can carry legacy or site-specific codes;
/// this crate only requires the five canonical codes to be present and does
/// not perform legacy-code migration itself (a persistence-layer startup
/// concern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ShiftType {
    pub id: i64,
    pub code: String,
    pub is_work: bool,
}

impl ShiftType {
    pub fn is_work_code(code: &str) -> bool {
        WORK_CODES.contains(&code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_codes_are_fixed_order() {
        assert_eq!(WORK_CODES, [MORNING_CODE, EVENING_CODE, NIGHT_CODE]);
    }

    #[test]
    fn off_and_leave_are_not_work_codes() {
        assert!(!ShiftType::is_work_code(OFF_CODE));
        assert!(!ShiftType::is_work_code(LEAVE_CODE));
        assert!(ShiftType::is_work_code(NIGHT_CODE));
    }
}
