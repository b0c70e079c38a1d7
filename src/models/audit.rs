//! Audit trail models.
//!
//! Every rule in the calculation chain records an [`AuditStep`] capturing
//! its input, output, and reasoning. The trace is fully deterministic: it
//! carries no timestamps or durations, so two identical calculations
//! produce identical traces.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application, plus a reference to the statute or service agreement clause
/// that justifies the amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number within the calculation.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the governing statute or agreement clause.
    pub statute_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a breakdown calculation.
///
/// Steps appear in rule-application order, which is fixed by the engine and
/// must match the order of line items in the breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}
