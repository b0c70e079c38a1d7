//! Statutory Payroll Cost & Compliance Breakdown Engine
//!
//! This crate computes a fully reconciled employment cost ledger for a gross
//! salary under a jurisdiction-specific rate table: statutory deductions,
//! employer contributions, employer-of-record service fees, net employee pay,
//! and total employer cost. All monetary arithmetic is carried out in integer
//! minor units (kobo) with banker's rounding at each line-item boundary.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
