//! Breakdown result models.
//!
//! This module contains the [`Breakdown`] type and its associated structures
//! that capture all outputs from a payroll cost calculation: statutory
//! deductions, employer contributions, service fees, the two headline
//! totals, and the audit trace.

use serde::{Deserialize, Serialize};

use super::{AuditTrace, Money};

/// Statutory amounts withheld from the employee's gross salary.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Deductions, Money};
///
/// let deductions = Deductions {
///     income_tax: Money::from_minor_units(12_000_000),
///     employee_pension: Money::from_minor_units(4_000_000),
/// };
/// assert_eq!(deductions.total(), Money::from_minor_units(16_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Pay-as-you-earn income tax.
    pub income_tax: Money,
    /// The employee's share of the pension contribution.
    pub employee_pension: Money,
}

impl Deductions {
    /// The sum of all deductions.
    pub fn total(&self) -> Money {
        self.income_tax + self.employee_pension
    }

    /// Iterates over the named line items in calculation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Money)> {
        [
            ("income_tax", self.income_tax),
            ("employee_pension", self.employee_pension),
        ]
        .into_iter()
    }
}

/// Statutory amounts the employer pays on top of gross salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// The employer's share of the pension contribution.
    pub employer_pension: Money,
    /// National housing fund contribution.
    pub housing_fund: Money,
    /// Industrial training levy.
    pub training_levy: Money,
    /// Employee compensation / industrial insurance fund contribution.
    pub industrial_fund: Money,
}

impl EmployerContributions {
    /// The sum of all employer contributions.
    pub fn total(&self) -> Money {
        self.employer_pension + self.housing_fund + self.training_levy + self.industrial_fund
    }

    /// Iterates over the named line items in calculation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Money)> {
        [
            ("employer_pension", self.employer_pension),
            ("housing_fund", self.housing_fund),
            ("training_levy", self.training_levy),
            ("industrial_fund", self.industrial_fund),
        ]
        .into_iter()
    }
}

/// Fees charged by the employer-of-record platform for administering the
/// payroll relationship, separate from statutory obligations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFees {
    /// Percentage-based employer-of-record service fee.
    pub service_fee: Money,
    /// Percentage-based platform fee.
    pub platform_fee: Money,
    /// Flat compliance management fee per pay period, copied verbatim from
    /// the rate table and never scaled by salary.
    pub fixed_compliance_fee: Money,
}

impl ServiceFees {
    /// The sum of all service fees.
    pub fn total(&self) -> Money {
        self.service_fee + self.platform_fee + self.fixed_compliance_fee
    }

    /// Iterates over the named line items in calculation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Money)> {
        [
            ("service_fee", self.service_fee),
            ("platform_fee", self.platform_fee),
            ("fixed_compliance_fee", self.fixed_compliance_fee),
        ]
        .into_iter()
    }
}

/// The complete result of a payroll cost calculation.
///
/// A `Breakdown` is a value object: constructed once per calculation, never
/// mutated, and safe to cache or compare by value. Identical inputs produce
/// identical breakdowns, audit trace included.
///
/// Invariants maintained by the calculator:
/// - `net_salary + deductions.total() == gross_salary` exactly in minor
///   units;
/// - `total_employer_cost == gross_salary + employer_contributions.total()
///   + service_fees.total()`;
/// - every named line item is non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// The validated gross salary, echoed back for traceability.
    pub gross_salary: Money,
    /// Amounts withheld from the employee.
    pub deductions: Deductions,
    /// Amounts the employer pays in addition to gross salary.
    pub employer_contributions: EmployerContributions,
    /// Platform and compliance service fees.
    pub service_fees: ServiceFees,
    /// Gross salary minus total deductions.
    pub net_salary: Money,
    /// Gross salary plus employer contributions plus service fees.
    pub total_employer_cost: Money,
    /// Ordered record of every rule application.
    pub audit_trace: AuditTrace,
}

impl Breakdown {
    /// The sum of all statutory deductions.
    pub fn total_deductions(&self) -> Money {
        self.deductions.total()
    }

    /// The sum of all employer contributions.
    pub fn total_employer_contributions(&self) -> Money {
        self.employer_contributions.total()
    }

    /// The sum of all service fees.
    pub fn total_service_fees(&self) -> Money {
        self.service_fees.total()
    }
}
