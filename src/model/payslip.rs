use serde::{Deserialize, Serialize};

/// Itemized income side of a payslip. Every bucket is always present;
/// unused ones are zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    pub base_pay_by_days: f64,
    pub overtime_pay: f64,
    pub commission_pay: f64,
    pub other_allowance: f64,
    pub kpi_bonus: f64,
}

impl IncomeBreakdown {
    pub fn sum(&self) -> f64 {
        self.base_pay_by_days
            + self.overtime_pay
            + self.commission_pay
            + self.other_allowance
            + self.kpi_bonus
    }
}

/// Itemized deduction side of a payslip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub social_insurance: f64,
    pub health_insurance: f64,
    pub unemployment_insurance: f64,
    pub personal_income_tax: f64,
    /// Always present in the breakdown; no input path sets it non-zero yet.
    pub advance_payment: f64,
}

impl DeductionBreakdown {
    pub fn sum(&self) -> f64 {
        self.social_insurance
            + self.health_insurance
            + self.unemployment_insurance
            + self.personal_income_tax
            + self.advance_payment
    }
}

/// Computed output of one payroll run for one employee in one period.
///
/// `net_pay` is `total_income - total_deductions` and is deliberately not
/// floored at zero; a negative value signals an over-deducted employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payslip {
    pub employee_id: String,
    pub full_name: String,
    pub period: String,
    pub income_breakdown: IncomeBreakdown,
    pub total_income: f64,
    pub deduction_breakdown: DeductionBreakdown,
    pub total_deductions: f64,
    pub net_pay: f64,
}
