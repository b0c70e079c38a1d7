//! Validated salary input.

use serde::Serialize;
use std::fmt;

use super::Money;

/// A gross salary that has passed input validation.
///
/// The only way to obtain a `ValidatedSalary` is through
/// [`crate::calculation::validate_salary`] (or its `f64` variant), which
/// guarantees the amount is strictly positive and within the engine's
/// supported range. The calculator accepts only this type, which is what
/// lets it stay total: no mid-computation failure is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ValidatedSalary(Money);

impl ValidatedSalary {
    /// Wraps an already-checked amount. Only the validator constructs this.
    pub(crate) const fn new(amount: Money) -> Self {
        ValidatedSalary(amount)
    }

    /// Returns the gross salary amount in minor units.
    pub const fn amount(self) -> Money {
        self.0
    }
}

impl fmt::Display for ValidatedSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
