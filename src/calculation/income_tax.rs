//! Income tax (PAYE) calculation.
//!
//! This module walks the progressive tax schedule band by band. Each band's
//! tax is rounded half-to-even independently before the band amounts are
//! summed, so a one-band schedule reproduces the flat-rate computation
//! `gross x rate` exactly.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::{AuditStep, Money, ValidatedSalary};

/// The result of an income tax calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The total tax withheld across all bands.
    pub amount: Money,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates income tax over a progressive band schedule.
///
/// Income is sliced into the schedule's bands, lowest first; each slice is
/// taxed at its band's marginal rate and rounded to whole minor units
/// before summation. The band walk stops at the first band whose upper
/// bound is not exceeded by the gross salary.
///
/// # Arguments
///
/// * `salary` - The validated gross salary
/// * `schedule` - The tax schedule from the rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_income_tax, validate_salary};
/// use payroll_engine::config::TaxSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = validate_salary(Decimal::from_str("500000").unwrap()).unwrap();
/// let schedule = TaxSchedule::flat(Decimal::from_str("0.24").unwrap(), "PITA 2011 s.37");
///
/// let result = calculate_income_tax(salary, &schedule, 1);
/// assert_eq!(result.amount.minor_units(), 12_000_000);
/// ```
pub fn calculate_income_tax(
    salary: ValidatedSalary,
    schedule: &TaxSchedule,
    step_number: u32,
) -> IncomeTaxResult {
    let gross = salary.amount();
    let mut total = Money::ZERO;
    let mut band_details = Vec::with_capacity(schedule.bands.len());
    let mut lower = Money::ZERO;

    for band in &schedule.bands {
        let band_top = match band.upper_bound {
            Some(upper) => Money::from_major_units(upper).min(gross),
            None => gross,
        };

        if band_top <= lower {
            break;
        }

        let taxable = band_top - lower;
        let band_tax = taxable.scale_by_rate(band.rate);
        total += band_tax;

        band_details.push(serde_json::json!({
            "upper_bound": band.upper_bound.map(|u| u.normalize().to_string()),
            "rate": band.rate.normalize().to_string(),
            "taxable": taxable.to_string(),
            "tax": band_tax.to_string(),
        }));

        lower = band_top;
        if band_top == gross {
            break;
        }
    }

    let reasoning = if schedule.bands.len() == 1 {
        format!(
            "{} x {} = {}",
            gross,
            schedule.bands[0].rate.normalize(),
            total
        )
    } else {
        format!(
            "Progressive schedule over {} band(s): total {}",
            band_details.len(),
            total
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax (PAYE)".to_string(),
        statute_ref: schedule.reference.clone(),
        input: serde_json::json!({
            "gross_salary": gross.to_string(),
            "bands": schedule.bands.len(),
        }),
        output: serde_json::json!({
            "amount": total.to_string(),
            "band_details": band_details,
        }),
        reasoning,
    };

    IncomeTaxResult {
        amount: total,
        audit_step,
    }
}
