//! Pension contribution calculation.
//!
//! Pension is split into an employee share (withheld from gross salary)
//! and an employer share (paid on top of gross salary). Both are flat
//! percentages of gross, rounded half-to-even independently.

use crate::config::RateEntry;
use crate::models::{AuditStep, Money, ValidatedSalary};

/// The result of a pension share calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct PensionShareResult {
    /// The computed share amount.
    pub amount: Money,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employee's pension share (a statutory deduction).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_employee_pension, validate_salary};
/// use payroll_engine::config::RateEntry;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = validate_salary(Decimal::from_str("500000").unwrap()).unwrap();
/// let entry = RateEntry {
///     rate: Decimal::from_str("0.08").unwrap(),
///     reference: "PRA 2014 s.4(1)".to_string(),
/// };
///
/// let result = calculate_employee_pension(salary, &entry, 2);
/// assert_eq!(result.amount.minor_units(), 4_000_000);
/// ```
pub fn calculate_employee_pension(
    salary: ValidatedSalary,
    entry: &RateEntry,
    step_number: u32,
) -> PensionShareResult {
    pension_share(
        salary,
        entry,
        step_number,
        "employee_pension",
        "Pension (Employee Share)",
        "deducted from gross salary",
    )
}

/// Calculates the employer's pension share (an employer contribution).
pub fn calculate_employer_pension(
    salary: ValidatedSalary,
    entry: &RateEntry,
    step_number: u32,
) -> PensionShareResult {
    pension_share(
        salary,
        entry,
        step_number,
        "employer_pension",
        "Pension (Employer Share)",
        "paid in addition to gross salary",
    )
}

fn pension_share(
    salary: ValidatedSalary,
    entry: &RateEntry,
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    direction: &str,
) -> PensionShareResult {
    let gross = salary.amount();
    let amount = gross.scale_by_rate(entry.rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        statute_ref: entry.reference.clone(),
        input: serde_json::json!({
            "gross_salary": gross.to_string(),
            "rate": entry.rate.normalize().to_string(),
        }),
        output: serde_json::json!({
            "amount": amount.to_string(),
        }),
        reasoning: format!(
            "{} x {} = {} ({})",
            gross,
            entry.rate.normalize(),
            amount,
            direction
        ),
    };

    PensionShareResult { amount, audit_step }
}
