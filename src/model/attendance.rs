use serde::{Deserialize, Serialize};

/// One employee's attendance for one payroll period ("YYYY-MM").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub period: String,
    pub standard_working_days: f64,
    /// May be fractional (half-days).
    pub actual_working_days: f64,
    pub overtime_hours_regular: f64,
    pub overtime_hours_weekend: f64,
    pub overtime_hours_holiday: f64,
}
