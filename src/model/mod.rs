mod attendance;
mod commission;
mod employee;
mod payslip;

pub use attendance::AttendanceRecord;
pub use commission::CommissionLine;
pub use employee::Employee;
pub use payslip::{DeductionBreakdown, IncomeBreakdown, Payslip};
