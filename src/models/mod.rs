//! Core data models for the payroll breakdown engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod breakdown;
mod money;
mod salary;

pub use audit::{AuditStep, AuditTrace};
pub use breakdown::{Breakdown, Deductions, EmployerContributions, ServiceFees};
pub use money::{MINOR_UNITS_PER_MAJOR, Money, max_major_amount};
pub use salary::ValidatedSalary;
