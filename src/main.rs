use anyhow::Context;
use dotenvy::dotenv;
use serde::Deserialize;
use tracing::{error, info};
use tracing_appender::rolling;

use payroll::config::{Config, PayrollConfig};
use payroll::model::{AttendanceRecord, CommissionLine, Employee, Payslip};

/// One period's batch input: everything needed to cut payslips for a set
/// of employees.
#[derive(Deserialize)]
struct PayrollRun {
    period: String,
    employees: Vec<PayrollRunEntry>,
}

#[derive(Deserialize)]
struct PayrollRunEntry {
    employee: Employee,
    attendance: AttendanceRecord,
    #[serde(default)]
    commission_lines: Vec<CommissionLine>,
    #[serde(default)]
    other_allowance: f64,
    #[serde(default)]
    kpi_bonus: f64,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "payroll.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .pretty()
        .init();

    let payroll_config = PayrollConfig::from_file(&config.payroll_config_path)
        .with_context(|| format!("loading payroll config from {}", config.payroll_config_path))?;

    let raw = std::fs::read_to_string(&config.run_input_path)
        .with_context(|| format!("reading payroll run input from {}", config.run_input_path))?;
    let run: PayrollRun = serde_json::from_str(&raw).context("parsing payroll run input")?;

    info!(
        period = %run.period,
        employees = run.employees.len(),
        "Starting payroll run"
    );

    let mut payslips: Vec<Payslip> = Vec::with_capacity(run.employees.len());
    for entry in &run.employees {
        match payroll::compute_payslip(
            &entry.employee,
            &entry.attendance,
            &entry.commission_lines,
            &payroll_config,
            entry.other_allowance,
            entry.kpi_bonus,
        ) {
            Ok(payslip) => {
                info!(
                    employee_id = %payslip.employee_id,
                    net_pay = payslip.net_pay,
                    "Payslip computed"
                );
                payslips.push(payslip);
            }
            Err(e) => {
                error!(
                    error = %e,
                    employee_id = %entry.employee.employee_id,
                    "Failed to compute payslip"
                );
            }
        }
    }

    info!(computed = payslips.len(), "Payroll run finished");
    println!("{}", serde_json::to_string_pretty(&payslips)?);

    Ok(())
}
