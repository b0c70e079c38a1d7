//! Employer-of-record service fee calculation.
//!
//! Two of the three fees are percentages of gross salary; the fixed
//! compliance fee is copied verbatim from the rate table and never scaled.

use crate::config::ServiceFeeSchedule;
use crate::models::{AuditStep, Money, ServiceFees, ValidatedSalary};

/// The result of the service fee calculations, including audit steps.
#[derive(Debug, Clone)]
pub struct ServiceFeeResult {
    /// The computed fee line items.
    pub fees: ServiceFees,
    /// One audit step per fee, in calculation order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the employer-of-record and platform fees.
///
/// Audit steps are numbered consecutively starting at `first_step`, in the
/// order service fee, platform fee, fixed compliance fee.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_service_fees, validate_salary};
/// use payroll_engine::config::{FixedFee, RateEntry, ServiceFeeSchedule};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = ServiceFeeSchedule {
///     service_fee: RateEntry {
///         rate: Decimal::from_str("0.08").unwrap(),
///         reference: "MSA cl. 6.1".to_string(),
///     },
///     platform_fee: RateEntry {
///         rate: Decimal::from_str("0.02").unwrap(),
///         reference: "MSA cl. 6.2".to_string(),
///     },
///     fixed_compliance_fee: FixedFee {
///         amount: Decimal::from_str("15000").unwrap(),
///         reference: "MSA cl. 6.3".to_string(),
///     },
/// };
/// let salary = validate_salary(Decimal::from_str("500000").unwrap()).unwrap();
///
/// let result = calculate_service_fees(salary, &schedule, 7);
/// assert_eq!(result.fees.service_fee.minor_units(), 4_000_000);
/// assert_eq!(result.fees.platform_fee.minor_units(), 1_000_000);
/// assert_eq!(result.fees.fixed_compliance_fee.minor_units(), 1_500_000);
/// ```
pub fn calculate_service_fees(
    salary: ValidatedSalary,
    schedule: &ServiceFeeSchedule,
    first_step: u32,
) -> ServiceFeeResult {
    let gross = salary.amount();

    let service_fee = gross.scale_by_rate(schedule.service_fee.rate);
    let platform_fee = gross.scale_by_rate(schedule.platform_fee.rate);
    let fixed_compliance_fee = Money::from_major_units(schedule.fixed_compliance_fee.amount);

    let audit_steps = vec![
        AuditStep {
            step_number: first_step,
            rule_id: "service_fee".to_string(),
            rule_name: "EOR Service Fee".to_string(),
            statute_ref: schedule.service_fee.reference.clone(),
            input: serde_json::json!({
                "gross_salary": gross.to_string(),
                "rate": schedule.service_fee.rate.normalize().to_string(),
            }),
            output: serde_json::json!({
                "amount": service_fee.to_string(),
            }),
            reasoning: format!(
                "{} x {} = {}",
                gross,
                schedule.service_fee.rate.normalize(),
                service_fee
            ),
        },
        AuditStep {
            step_number: first_step + 1,
            rule_id: "platform_fee".to_string(),
            rule_name: "Platform Fee".to_string(),
            statute_ref: schedule.platform_fee.reference.clone(),
            input: serde_json::json!({
                "gross_salary": gross.to_string(),
                "rate": schedule.platform_fee.rate.normalize().to_string(),
            }),
            output: serde_json::json!({
                "amount": platform_fee.to_string(),
            }),
            reasoning: format!(
                "{} x {} = {}",
                gross,
                schedule.platform_fee.rate.normalize(),
                platform_fee
            ),
        },
        AuditStep {
            step_number: first_step + 2,
            rule_id: "fixed_compliance_fee".to_string(),
            rule_name: "Compliance Management Fee".to_string(),
            statute_ref: schedule.fixed_compliance_fee.reference.clone(),
            input: serde_json::json!({
                "amount": schedule.fixed_compliance_fee.amount.normalize().to_string(),
            }),
            output: serde_json::json!({
                "amount": fixed_compliance_fee.to_string(),
            }),
            reasoning: format!(
                "Fixed fee of {} applied per pay period, independent of salary",
                fixed_compliance_fee
            ),
        },
    ];

    ServiceFeeResult {
        fees: ServiceFees {
            service_fee,
            platform_fee,
            fixed_compliance_fee,
        },
        audit_steps,
    }
}
