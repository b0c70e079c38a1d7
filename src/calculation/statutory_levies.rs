//! Employer-side statutory levy calculation.
//!
//! Covers the three flat-percentage levies an employer owes on top of
//! gross salary: the national housing fund contribution, the industrial
//! training levy, and the employee compensation fund contribution. Each is
//! computed and rounded independently.

use crate::config::StatutoryRates;
use crate::models::{AuditStep, Money, ValidatedSalary};

/// The result of the statutory levy calculations, including audit steps.
#[derive(Debug, Clone)]
pub struct LevyResult {
    /// National housing fund contribution.
    pub housing_fund: Money,
    /// Industrial training levy.
    pub training_levy: Money,
    /// Employee compensation fund contribution.
    pub industrial_fund: Money,
    /// One audit step per levy, in calculation order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the three employer-side statutory levies.
///
/// Audit steps are numbered consecutively starting at `first_step`, in the
/// order housing fund, training levy, industrial fund.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_statutory_levies, validate_salary};
/// use payroll_engine::config::{RateEntry, StatutoryRates};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// fn entry(rate: &str) -> RateEntry {
///     RateEntry {
///         rate: Decimal::from_str(rate).unwrap(),
///         reference: "test".to_string(),
///     }
/// }
///
/// let rates = StatutoryRates {
///     employee_pension: entry("0.08"),
///     employer_pension: entry("0.10"),
///     housing_fund: entry("0.025"),
///     training_levy: entry("0.01"),
///     industrial_fund: entry("0.01"),
/// };
/// let salary = validate_salary(Decimal::from_str("500000").unwrap()).unwrap();
///
/// let result = calculate_statutory_levies(salary, &rates, 4);
/// assert_eq!(result.housing_fund.minor_units(), 1_250_000);
/// assert_eq!(result.training_levy.minor_units(), 500_000);
/// assert_eq!(result.industrial_fund.minor_units(), 500_000);
/// ```
pub fn calculate_statutory_levies(
    salary: ValidatedSalary,
    rates: &StatutoryRates,
    first_step: u32,
) -> LevyResult {
    let gross = salary.amount();

    let levies = [
        (
            "housing_fund",
            "National Housing Fund",
            &rates.housing_fund,
        ),
        (
            "training_levy",
            "Industrial Training Levy",
            &rates.training_levy,
        ),
        (
            "industrial_fund",
            "Employee Compensation Fund",
            &rates.industrial_fund,
        ),
    ];

    let mut amounts = [Money::ZERO; 3];
    let mut audit_steps = Vec::with_capacity(levies.len());

    for (offset, (rule_id, rule_name, entry)) in levies.into_iter().enumerate() {
        let amount = gross.scale_by_rate(entry.rate);
        amounts[offset] = amount;

        audit_steps.push(AuditStep {
            step_number: first_step + offset as u32,
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
            reasoning: format!("{} x {} = {}", gross, entry.rate.normalize(), amount),
        });
    }

    LevyResult {
        housing_fund: amounts[0],
        training_levy: amounts[1],
        industrial_fund: amounts[2],
        audit_steps,
    }
}
