use thiserror::Error;

/// Precondition failures of the payslip calculator. Data-quality oddities
/// (rates outside 0-100, actual days above standard) are computed through,
/// not rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayrollError {
    #[error("standard_working_days is zero for employee {employee_id} in period {period}")]
    ZeroStandardWorkingDays {
        employee_id: String,
        period: String,
    },
    #[error("tax bracket table is empty")]
    EmptyTaxBrackets,
}
