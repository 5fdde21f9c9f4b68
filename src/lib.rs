//! Payroll computation engine: converts contract terms, attendance,
//! product commissions, and a progressive tax schedule into an itemized
//! payslip. Pure and stateless; persistence, HTTP, and notification
//! delivery live elsewhere and hand plain data structures in and out.

pub mod calculator;
pub mod config;
pub mod error;
pub mod model;
pub mod tax;

pub use calculator::compute_payslip;
pub use config::{Config, ConfigError, PayrollConfig, TaxBracket};
pub use error::PayrollError;
pub use model::{
    AttendanceRecord, CommissionLine, DeductionBreakdown, Employee, IncomeBreakdown, Payslip,
};
pub use tax::progressive_tax;
