//! Gross salary validation.
//!
//! This is the only gate between caller input and the calculator. A salary
//! that passes becomes a [`ValidatedSalary`], and the calculator is total
//! over that type: rejection happens here or not at all. Out-of-domain
//! values are always rejected, never coerced; clamping a negative salary
//! to zero would mask a data-entry mistake in a financial tool.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Money, ValidatedSalary, max_major_amount};

/// The largest gross salary the engine accepts, in major currency units.
///
/// This is the same bound applied to configured fixed fees; see
/// [`max_major_amount`].
pub fn max_gross_salary() -> Decimal {
    max_major_amount()
}

/// Validates a gross salary given in major currency units.
///
/// On success the salary is narrowed to whole minor units (banker's
/// rounding) and wrapped in a [`ValidatedSalary`] ready for the calculator.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] when the amount is negative,
/// zero, rounds to zero minor units, or exceeds [`max_gross_salary`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::validate_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = validate_salary(Decimal::from_str("500000").unwrap()).unwrap();
/// assert_eq!(salary.amount().minor_units(), 50_000_000);
///
/// assert!(validate_salary(Decimal::ZERO).is_err());
/// assert!(validate_salary(Decimal::from_str("-1").unwrap()).is_err());
/// ```
pub fn validate_salary(gross: Decimal) -> EngineResult<ValidatedSalary> {
    if gross < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            message: format!("must not be negative, got {}", gross),
        });
    }

    if gross.is_zero() {
        return Err(EngineError::InvalidSalary {
            message: "must be greater than zero".to_string(),
        });
    }

    if gross > max_gross_salary() {
        return Err(EngineError::InvalidSalary {
            message: format!(
                "{} exceeds the maximum supported amount of {}",
                gross,
                max_gross_salary()
            ),
        });
    }

    let amount = Money::from_major_units(gross);
    if amount.is_zero() {
        // Sub-kobo amounts like 0.004 round to zero and would produce a
        // meaningless all-zero breakdown.
        return Err(EngineError::InvalidSalary {
            message: format!("{} rounds to zero minor units", gross),
        });
    }

    Ok(ValidatedSalary::new(amount))
}

/// Validates a gross salary supplied as a float.
///
/// Convenience entry point for callers holding `f64` values; rejects
/// non-finite input before delegating to [`validate_salary`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::validate_salary_f64;
///
/// assert!(validate_salary_f64(500000.0).is_ok());
/// assert!(validate_salary_f64(f64::NAN).is_err());
/// assert!(validate_salary_f64(f64::INFINITY).is_err());
/// ```
pub fn validate_salary_f64(gross: f64) -> EngineResult<ValidatedSalary> {
    if !gross.is_finite() {
        return Err(EngineError::InvalidSalary {
            message: format!("must be a finite number, got {}", gross),
        });
    }

    let decimal = Decimal::try_from(gross).map_err(|_| EngineError::InvalidSalary {
        message: format!("{} cannot be represented as a decimal amount", gross),
    })?;

    validate_salary(decimal)
}
