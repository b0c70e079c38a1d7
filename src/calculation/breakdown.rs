//! The breakdown orchestrator.
//!
//! Runs the calculation rule chain in its fixed, documented order and
//! assembles the immutable [`Breakdown`]. The chain is total: given a
//! [`ValidatedSalary`] and a constructed [`RateTable`] there is no failure
//! path, so a caller never sees a partially computed ledger.

use tracing::debug;

use crate::config::RateTable;
use crate::models::{AuditTrace, Breakdown, Deductions, EmployerContributions, ValidatedSalary};

use super::income_tax::calculate_income_tax;
use super::pension::{calculate_employee_pension, calculate_employer_pension};
use super::service_fees::calculate_service_fees;
use super::statutory_levies::calculate_statutory_levies;

/// Computes the full payroll cost breakdown for a validated salary.
///
/// The rule chain runs in this exact order, which is also the order of the
/// audit trace:
///
/// 1. income tax (deduction)
/// 2. employee pension share (deduction), then `net_salary`
/// 3. employer pension share (contribution)
/// 4. housing fund, training levy, industrial fund (contributions)
/// 5. service fee, platform fee, fixed compliance fee
/// 6. `total_employer_cost` and assembly
///
/// Every line item is rounded half-to-even independently; totals are plain
/// sums of the rounded line items, so
/// `net_salary + deductions == gross_salary` holds exactly in minor units.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::calculation::{compute_breakdown, validate_salary};
/// use payroll_engine::config::RateTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = RateTable::from_yaml_file("./config/ng/2025-01-01.yaml")?;
/// let salary = validate_salary(Decimal::from_str("500000").unwrap())?;
///
/// let breakdown = compute_breakdown(salary, &table);
/// println!("Net pay: {}", breakdown.net_salary);
/// println!("Total employer cost: {}", breakdown.total_employer_cost);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn compute_breakdown(salary: ValidatedSalary, table: &RateTable) -> Breakdown {
    let gross = salary.amount();
    let mut steps = Vec::with_capacity(9);

    // Deductions.
    let income_tax = calculate_income_tax(salary, table.income_tax(), 1);
    steps.push(income_tax.audit_step);

    let employee_pension =
        calculate_employee_pension(salary, &table.statutory_rates().employee_pension, 2);
    steps.push(employee_pension.audit_step);

    let deductions = Deductions {
        income_tax: income_tax.amount,
        employee_pension: employee_pension.amount,
    };
    let net_salary = gross - deductions.total();

    // Employer contributions.
    let employer_pension =
        calculate_employer_pension(salary, &table.statutory_rates().employer_pension, 3);
    steps.push(employer_pension.audit_step);

    let levies = calculate_statutory_levies(salary, table.statutory_rates(), 4);
    steps.extend(levies.audit_steps);

    let employer_contributions = EmployerContributions {
        employer_pension: employer_pension.amount,
        housing_fund: levies.housing_fund,
        training_levy: levies.training_levy,
        industrial_fund: levies.industrial_fund,
    };

    // Service fees.
    let fees = calculate_service_fees(salary, table.service_fees(), 7);
    steps.extend(fees.audit_steps);
    let service_fees = fees.fees;

    let total_employer_cost = gross + employer_contributions.total() + service_fees.total();

    debug!(
        jurisdiction = table.jurisdiction(),
        gross = %gross,
        net = %net_salary,
        employer_cost = %total_employer_cost,
        "computed payroll breakdown"
    );

    Breakdown {
        gross_salary: gross,
        deductions,
        employer_contributions,
        service_fees,
        net_salary,
        total_employer_cost,
        audit_trace: AuditTrace { steps },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::validate_salary;
    use crate::config::{
        FixedFee, RateEntry, RateTableMetadata, ServiceFeeSchedule, StatutoryRates, TaxSchedule,
    };
    use crate::models::Money;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(rate: &str, reference: &str) -> RateEntry {
        RateEntry {
            rate: dec(rate),
            reference: reference.to_string(),
        }
    }

    fn nigeria_table() -> RateTable {
        RateTable::new(
            RateTableMetadata {
                jurisdiction: "NG".to_string(),
                name: "Nigeria statutory payroll rates".to_string(),
                version: "2025-01".to_string(),
                effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                source_url: "https://example.com".to_string(),
            },
            TaxSchedule::flat(dec("0.24"), "PITA 2011 s.37"),
            StatutoryRates {
                employee_pension: entry("0.08", "PRA 2014 s.4(1)"),
                employer_pension: entry("0.10", "PRA 2014 s.4(1)"),
                housing_fund: entry("0.025", "NHF Act s.4"),
                training_levy: entry("0.01", "ITF Act s.6(1)"),
                industrial_fund: entry("0.01", "ECA 2010 s.33"),
            },
            ServiceFeeSchedule {
                service_fee: entry("0.08", "MSA cl. 6.1"),
                platform_fee: entry("0.02", "MSA cl. 6.2"),
                fixed_compliance_fee: FixedFee {
                    amount: dec("15000"),
                    reference: "MSA cl. 6.3".to_string(),
                },
            },
        )
        .unwrap()
    }

    fn salary(major: &str) -> ValidatedSalary {
        validate_salary(dec(major)).unwrap()
    }

    fn major(s: &str) -> Money {
        Money::from_major_units(dec(s))
    }

    /// CB-001: the reference scenario at gross 500,000
    #[test]
    fn test_reference_scenario() {
        let breakdown = compute_breakdown(salary("500000"), &nigeria_table());

        assert_eq!(breakdown.gross_salary, major("500000"));
        assert_eq!(breakdown.deductions.income_tax, major("120000"));
        assert_eq!(breakdown.deductions.employee_pension, major("40000"));
        assert_eq!(breakdown.total_deductions(), major("160000"));
        assert_eq!(breakdown.net_salary, major("340000"));

        assert_eq!(
            breakdown.employer_contributions.employer_pension,
            major("50000")
        );
        assert_eq!(breakdown.employer_contributions.housing_fund, major("12500"));
        assert_eq!(breakdown.employer_contributions.training_levy, major("5000"));
        assert_eq!(
            breakdown.employer_contributions.industrial_fund,
            major("5000")
        );

        assert_eq!(breakdown.service_fees.service_fee, major("40000"));
        assert_eq!(breakdown.service_fees.platform_fee, major("10000"));
        assert_eq!(breakdown.service_fees.fixed_compliance_fee, major("15000"));

        assert_eq!(breakdown.total_employer_cost, major("637500"));
    }

    /// CB-002: rule chain order in the audit trace
    #[test]
    fn test_audit_trace_order() {
        let breakdown = compute_breakdown(salary("500000"), &nigeria_table());

        let rule_ids: Vec<&str> = breakdown
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "income_tax",
                "employee_pension",
                "employer_pension",
                "housing_fund",
                "training_levy",
                "industrial_fund",
                "service_fee",
                "platform_fee",
                "fixed_compliance_fee",
            ]
        );

        let numbers: Vec<u32> = breakdown
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<u32>>());
    }

    /// CB-003: reconciliation is exact in minor units
    #[test]
    fn test_reconciliation_exact() {
        for gross in ["0.01", "0.07", "123.45", "99999.99", "500000", "8000000"] {
            let breakdown = compute_breakdown(salary(gross), &nigeria_table());
            assert_eq!(
                breakdown.net_salary + breakdown.total_deductions(),
                breakdown.gross_salary,
                "reconciliation failed for gross {}",
                gross
            );
            assert_eq!(
                breakdown.total_employer_cost,
                breakdown.gross_salary
                    + breakdown.total_employer_contributions()
                    + breakdown.total_service_fees()
            );
        }
    }

    /// CB-004: purity, identical inputs give identical breakdowns
    #[test]
    fn test_purity() {
        let table = nigeria_table();
        let first = compute_breakdown(salary("500000"), &table);
        let second = compute_breakdown(salary("500000"), &table);
        assert_eq!(first, second);
    }

    /// CB-005: line items are never negative
    #[test]
    fn test_non_negative_line_items() {
        let breakdown = compute_breakdown(salary("0.01"), &nigeria_table());

        for (label, amount) in breakdown
            .deductions
            .iter()
            .chain(breakdown.employer_contributions.iter())
            .chain(breakdown.service_fees.iter())
        {
            assert!(!amount.is_negative(), "{} is negative", label);
        }
    }

    /// CB-006: total employer cost never drops below gross
    #[test]
    fn test_employer_cost_at_least_gross() {
        let breakdown = compute_breakdown(salary("250000"), &nigeria_table());
        assert!(breakdown.total_employer_cost >= breakdown.gross_salary);
        assert!(breakdown.net_salary <= breakdown.gross_salary);
    }

    /// CB-007: net salary stays non-negative at the half-kobo rounding
    /// boundary under the highest exposure a table can carry
    #[test]
    fn test_net_non_negative_at_half_kobo_boundary() {
        // Tax and pension sum to 0.99, the steepest two-line split the
        // constructor accepts. At 5 kobo the tax line lands on a half kobo
        // (1.5 -> 2) while the pension line rounds down (3.45 -> 3).
        let table = RateTable::new(
            nigeria_table().metadata().clone(),
            TaxSchedule::flat(dec("0.3"), "test"),
            StatutoryRates {
                employee_pension: entry("0.69", "test"),
                employer_pension: entry("0.10", "test"),
                housing_fund: entry("0.025", "test"),
                training_levy: entry("0.01", "test"),
                industrial_fund: entry("0.01", "test"),
            },
            ServiceFeeSchedule {
                service_fee: entry("0.08", "test"),
                platform_fee: entry("0.02", "test"),
                fixed_compliance_fee: FixedFee {
                    amount: dec("0"),
                    reference: "test".to_string(),
                },
            },
        )
        .unwrap();

        let breakdown = compute_breakdown(salary("0.05"), &table);
        assert_eq!(breakdown.deductions.income_tax, Money::from_minor_units(2));
        assert_eq!(
            breakdown.deductions.employee_pension,
            Money::from_minor_units(3)
        );
        assert_eq!(breakdown.net_salary, Money::ZERO);
        assert!(!breakdown.net_salary.is_negative());
    }

    /// CB-008: a single deduction line at rate 1 zeroes net exactly
    #[test]
    fn test_full_tax_single_line_nets_zero() {
        let table = RateTable::new(
            nigeria_table().metadata().clone(),
            TaxSchedule::flat(dec("1"), "test"),
            StatutoryRates {
                employee_pension: entry("0", "test"),
                employer_pension: entry("0.10", "test"),
                housing_fund: entry("0.025", "test"),
                training_levy: entry("0.01", "test"),
                industrial_fund: entry("0.01", "test"),
            },
            ServiceFeeSchedule {
                service_fee: entry("0.08", "test"),
                platform_fee: entry("0.02", "test"),
                fixed_compliance_fee: FixedFee {
                    amount: dec("0"),
                    reference: "test".to_string(),
                },
            },
        )
        .unwrap();

        for gross in ["0.05", "0.01", "123.45"] {
            let breakdown = compute_breakdown(salary(gross), &table);
            assert_eq!(breakdown.net_salary, Money::ZERO, "gross {}", gross);
        }
    }
}
