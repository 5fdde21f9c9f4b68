use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub position: String,
    pub department: String,
    /// Full-time monthly contract wage.
    pub contract_salary: f64,
    /// Base for social/health/unemployment contributions; may differ from
    /// the contract salary (capped by regulation, not enforced here).
    pub insurance_base_salary: f64,
    /// Dependents claimed for the personal income tax deduction.
    pub dependent_count: u32,
}
