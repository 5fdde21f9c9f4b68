use crate::config::PayrollConfig;
use crate::error::PayrollError;
use crate::model::{
    AttendanceRecord, CommissionLine, DeductionBreakdown, Employee, IncomeBreakdown, Payslip,
};
use crate::tax::progressive_tax;

/// Standard workday length used to derive the hourly wage.
const HOURS_PER_WORKDAY: f64 = 8.0;

/// Assembles one payslip from contract terms, one period's attendance,
/// commission lines, and the payroll configuration. Pure computation: no
/// I/O, no logging, no state between calls.
///
/// Monetary intermediates are rounded to whole currency units at each
/// step, in the order below; the hourly wage alone stays unrounded.
/// Taxable income is floored at zero, net pay is not.
pub fn compute_payslip(
    employee: &Employee,
    attendance: &AttendanceRecord,
    commission_lines: &[CommissionLine],
    config: &PayrollConfig,
    other_allowance: f64,
    kpi_bonus: f64,
) -> Result<Payslip, PayrollError> {
    if attendance.standard_working_days == 0.0 {
        return Err(PayrollError::ZeroStandardWorkingDays {
            employee_id: employee.employee_id.clone(),
            period: attendance.period.clone(),
        });
    }
    if config.tax_brackets.is_empty() {
        return Err(PayrollError::EmptyTaxBrackets);
    }

    let base_pay_by_days = (employee.contract_salary / attendance.standard_working_days
        * attendance.actual_working_days)
        .round();

    // Not rounded: only the summed overtime pay is.
    let hourly_wage =
        employee.contract_salary / (attendance.standard_working_days * HOURS_PER_WORKDAY);
    let overtime_pay = (hourly_wage
        * attendance.overtime_hours_regular
        * config.overtime_multiplier_regular
        + hourly_wage * attendance.overtime_hours_weekend * config.overtime_multiplier_weekend
        + hourly_wage * attendance.overtime_hours_holiday * config.overtime_multiplier_holiday)
        .round();

    let commission_pay = commission_lines
        .iter()
        .map(CommissionLine::credited_amount)
        .sum::<f64>()
        .round();

    let total_income =
        (base_pay_by_days + overtime_pay + commission_pay + other_allowance + kpi_bonus).round();

    let social_insurance =
        (employee.insurance_base_salary * config.employee_social_insurance_rate).round();
    let health_insurance =
        (employee.insurance_base_salary * config.employee_health_insurance_rate).round();
    let unemployment_insurance =
        (employee.insurance_base_salary * config.employee_unemployment_insurance_rate).round();
    let total_insurance = (social_insurance + health_insurance + unemployment_insurance).round();

    let deduction_allowance = (config.personal_deduction_self
        + f64::from(employee.dependent_count) * config.personal_deduction_per_dependent
        + total_insurance)
        .round();
    // Floored at zero, unlike net pay below.
    let taxable_income = (total_income - deduction_allowance).max(0.0);

    let personal_income_tax = progressive_tax(taxable_income, &config.tax_brackets);

    let total_deductions = (total_insurance + personal_income_tax).round();
    let net_pay = (total_income - total_deductions).round();

    Ok(Payslip {
        employee_id: employee.employee_id.clone(),
        full_name: employee.full_name.clone(),
        period: attendance.period.clone(),
        income_breakdown: IncomeBreakdown {
            base_pay_by_days,
            overtime_pay,
            commission_pay,
            other_allowance,
            kpi_bonus,
        },
        total_income,
        deduction_breakdown: DeductionBreakdown {
            social_insurance,
            health_insurance,
            unemployment_insurance,
            personal_income_tax,
            advance_payment: 0.0,
        },
        total_deductions,
        net_pay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxBracket;

    fn config() -> PayrollConfig {
        PayrollConfig {
            overtime_multiplier_regular: 1.5,
            overtime_multiplier_weekend: 2.0,
            overtime_multiplier_holiday: 3.0,
            employee_social_insurance_rate: 0.08,
            employee_health_insurance_rate: 0.015,
            employee_unemployment_insurance_rate: 0.01,
            personal_deduction_self: 11_000_000.0,
            personal_deduction_per_dependent: 4_400_000.0,
            tax_brackets: vec![
                TaxBracket {
                    threshold: 0.0,
                    rate: 0.05,
                    subtracted_amount: 0.0,
                },
                TaxBracket {
                    threshold: 5_000_000.0,
                    rate: 0.10,
                    subtracted_amount: 250_000.0,
                },
                TaxBracket {
                    threshold: 10_000_000.0,
                    rate: 0.15,
                    subtracted_amount: 750_000.0,
                },
                TaxBracket {
                    threshold: 18_000_000.0,
                    rate: 0.20,
                    subtracted_amount: 1_650_000.0,
                },
            ],
        }
    }

    fn employee() -> Employee {
        Employee {
            employee_id: "EMP-001".to_string(),
            full_name: "Nguyen Van A".to_string(),
            position: "Sales Executive".to_string(),
            department: "Sales".to_string(),
            contract_salary: 30_000_000.0,
            insurance_base_salary: 25_000_000.0,
            dependent_count: 1,
        }
    }

    fn full_attendance() -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "EMP-001".to_string(),
            period: "2024-10".to_string(),
            standard_working_days: 22.0,
            actual_working_days: 22.0,
            overtime_hours_regular: 0.0,
            overtime_hours_weekend: 0.0,
            overtime_hours_holiday: 0.0,
        }
    }

    #[test]
    fn test_baseline_total_income_equals_contract_salary() {
        let payslip =
            compute_payslip(&employee(), &full_attendance(), &[], &config(), 0.0, 0.0).unwrap();

        assert_eq!(payslip.income_breakdown.base_pay_by_days, 30_000_000.0);
        assert_eq!(payslip.income_breakdown.overtime_pay, 0.0);
        assert_eq!(payslip.income_breakdown.commission_pay, 0.0);
        assert_eq!(payslip.total_income, 30_000_000.0);
    }

    #[test]
    fn test_fractional_days_prorate_base_pay() {
        let mut attendance = full_attendance();
        attendance.actual_working_days = 21.5;
        let mut employee = employee();
        employee.contract_salary = 22_000_000.0;

        let payslip =
            compute_payslip(&employee, &attendance, &[], &config(), 0.0, 0.0).unwrap();
        assert_eq!(payslip.income_breakdown.base_pay_by_days, 21_500_000.0);
    }

    #[test]
    fn test_overtime_summed_across_tiers_then_rounded_once() {
        let mut attendance = full_attendance();
        attendance.overtime_hours_regular = 5.0;
        attendance.overtime_hours_weekend = 2.0;

        let payslip =
            compute_payslip(&employee(), &attendance, &[], &config(), 0.0, 0.0).unwrap();
        // hourly = 30,000,000 / 176; 5h at 1.5x plus 2h at 2.0x.
        assert_eq!(payslip.income_breakdown.overtime_pay, 1_960_227.0);
    }

    #[test]
    fn test_commission_partial_rate_and_single_rounding() {
        let lines = vec![
            CommissionLine {
                employee_id: "EMP-001".to_string(),
                period: "2024-10".to_string(),
                product_id: "SKU-1".to_string(),
                quantity: 7.0,
                unit_price: 99.9,
                rate_percent: 50.0,
            },
            CommissionLine {
                employee_id: "EMP-001".to_string(),
                period: "2024-10".to_string(),
                product_id: "SKU-2".to_string(),
                quantity: 10.0,
                unit_price: 100_000.0,
                rate_percent: 100.0,
            },
        ];

        let payslip =
            compute_payslip(&employee(), &full_attendance(), &lines, &config(), 0.0, 0.0)
                .unwrap();
        // 349.65 + 1,000,000, rounded once at the end.
        assert_eq!(payslip.income_breakdown.commission_pay, 1_000_350.0);
    }

    #[test]
    fn test_breakdown_sums_match_totals() {
        let mut attendance = full_attendance();
        attendance.overtime_hours_regular = 5.0;
        attendance.overtime_hours_weekend = 2.0;

        let payslip = compute_payslip(
            &employee(),
            &attendance,
            &[],
            &config(),
            500_000.0,
            2_000_000.0,
        )
        .unwrap();

        assert_eq!(payslip.income_breakdown.sum(), payslip.total_income);
        assert_eq!(payslip.deduction_breakdown.sum(), payslip.total_deductions);
        assert_eq!(
            payslip.net_pay,
            payslip.total_income - payslip.total_deductions
        );
    }

    #[test]
    fn test_insurance_components_rounded_independently() {
        let payslip =
            compute_payslip(&employee(), &full_attendance(), &[], &config(), 0.0, 0.0).unwrap();

        assert_eq!(payslip.deduction_breakdown.social_insurance, 2_000_000.0);
        assert_eq!(payslip.deduction_breakdown.health_insurance, 375_000.0);
        assert_eq!(
            payslip.deduction_breakdown.unemployment_insurance,
            250_000.0
        );
    }

    #[test]
    fn test_taxable_income_floored_net_pay_not() {
        // Allowances exceed income: no tax, but insurance still pushes
        // net pay negative, and the negative value is preserved.
        let mut employee = employee();
        employee.contract_salary = 2_000_000.0;
        employee.insurance_base_salary = 25_000_000.0;

        let payslip =
            compute_payslip(&employee, &full_attendance(), &[], &config(), 0.0, 0.0).unwrap();

        assert_eq!(payslip.deduction_breakdown.personal_income_tax, 0.0);
        assert_eq!(payslip.total_income, 2_000_000.0);
        assert_eq!(payslip.total_deductions, 2_625_000.0);
        assert_eq!(payslip.net_pay, -625_000.0);
    }

    #[test]
    fn test_advance_payment_bucket_defaults_to_zero() {
        let payslip =
            compute_payslip(&employee(), &full_attendance(), &[], &config(), 0.0, 0.0).unwrap();
        assert_eq!(payslip.deduction_breakdown.advance_payment, 0.0);
    }

    #[test]
    fn test_zero_standard_working_days_is_an_error() {
        let mut attendance = full_attendance();
        attendance.standard_working_days = 0.0;

        let err =
            compute_payslip(&employee(), &attendance, &[], &config(), 0.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            PayrollError::ZeroStandardWorkingDays {
                employee_id: "EMP-001".to_string(),
                period: "2024-10".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_tax_brackets_is_an_error() {
        let mut config = config();
        config.tax_brackets.clear();

        let err = compute_payslip(&employee(), &full_attendance(), &[], &config, 0.0, 0.0)
            .unwrap_err();
        assert_eq!(err, PayrollError::EmptyTaxBrackets);
    }
}
