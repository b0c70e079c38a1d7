//! Calculation logic for the payroll breakdown engine.
//!
//! This module contains salary validation and the calculation rule chain:
//! progressive income tax, employee and employer pension shares,
//! employer-side statutory levies, employer-of-record service fees, and
//! the orchestrator that runs the chain in its fixed order and assembles
//! the breakdown.

mod breakdown;
mod income_tax;
mod pension;
mod salary_validation;
mod service_fees;
mod statutory_levies;

pub use breakdown::compute_breakdown;
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use pension::{PensionShareResult, calculate_employee_pension, calculate_employer_pension};
pub use salary_validation::{max_gross_salary, validate_salary, validate_salary_f64};
pub use service_fees::{ServiceFeeResult, calculate_service_fees};
pub use statutory_levies::{LevyResult, calculate_statutory_levies};
