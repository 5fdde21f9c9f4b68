use serde::{Deserialize, Serialize};

/// One product commission entry for an employee in a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionLine {
    pub employee_id: String,
    pub period: String,
    pub product_id: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Percentage (0-100) of quantity x unit_price credited to the
    /// employee. Partial splits are allowed; the range is not enforced.
    pub rate_percent: f64,
}

impl CommissionLine {
    /// Unrounded amount credited to the employee for this line.
    pub fn credited_amount(&self) -> f64 {
        self.quantity * self.unit_price * (self.rate_percent / 100.0)
    }
}
