pub mod assignment;
pub mod employee;
pub mod shift_type;

pub use assignment::{Assignment, AssignmentView};
pub use employee::Employee;
pub use shift_type::{
    ShiftType, EVENING_CODE, LEAVE_CODE, MORNING_CODE, NIGHT_CODE, OFF_CODE, WORK_CODES,
};
