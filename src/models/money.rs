//! Minor-unit monetary amounts.
//!
//! All engine arithmetic is carried out in integer minor units (kobo) so
//! that sums of line items reconcile exactly. Conversion from fractional
//! amounts uses banker's rounding (round-half-to-even), applied once per
//! line item and never to totals.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// The number of minor units (kobo) per major unit (naira).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// The largest major-unit amount the engine accepts for any single value,
/// whether a gross salary or a configured fixed fee.
///
/// One trillion major units per pay period is far beyond any real payroll
/// and keeps every derived minor-unit amount comfortably inside `i64`.
pub fn max_major_amount() -> Decimal {
    Decimal::new(1_000_000_000_000, 0)
}

/// A monetary amount in integer minor units.
///
/// `Money` is a thin wrapper over an `i64` kobo count. Addition and
/// subtraction are exact, which is what makes the reconciliation invariant
/// (`net_salary + total_deductions == gross_salary`) checkable with `==`
/// rather than a tolerance.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let gross = Money::from_major_units(Decimal::from_str("500000").unwrap());
/// assert_eq!(gross.minor_units(), 50_000_000);
/// assert_eq!(gross.to_string(), "500000.00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero minor units.
    pub const ZERO: Money = Money(0);

    /// Creates a `Money` from a raw minor-unit count.
    pub const fn from_minor_units(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the raw minor-unit count.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Creates a `Money` from a major-unit decimal amount.
    ///
    /// Fractions of a minor unit are resolved with banker's rounding, so
    /// `0.005` major units becomes 0 kobo and `0.015` becomes 2 kobo.
    pub fn from_major_units(major: Decimal) -> Self {
        Money::from_minor_decimal(major * Decimal::from(MINOR_UNITS_PER_MAJOR))
    }

    /// Creates a `Money` from an exact minor-unit decimal amount, applying
    /// banker's rounding to any fractional kobo.
    ///
    /// This is the single rounding point in the engine: every line item
    /// passes through here exactly once.
    ///
    /// # Panics
    ///
    /// Panics if the rounded amount does not fit in an `i64`. Validated
    /// salaries, unit-interval rates, and fixed fees bounded by
    /// [`max_major_amount`] keep every engine amount far inside that range.
    pub fn from_minor_decimal(minor: Decimal) -> Self {
        let rounded = minor.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        Money(
            rounded
                .to_i64()
                .expect("minor-unit amount exceeds the representable range"),
        )
    }

    /// Returns the amount in major units as an exact decimal.
    pub fn to_major_units(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Multiplies this amount by a fractional rate, rounding the result
    /// half-to-even to a whole number of minor units.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Money;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let gross = Money::from_minor_units(50_000_000);
    /// let tax = gross.scale_by_rate(Decimal::from_str("0.24").unwrap());
    /// assert_eq!(tax.minor_units(), 12_000_000);
    /// ```
    pub fn scale_by_rate(self, rate: Decimal) -> Self {
        Money::from_minor_decimal(Decimal::from(self.0) * rate)
    }

    /// Returns true if the amount is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is strictly negative.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    /// Formats the amount in major units with two decimal places and no
    /// currency symbol. Symbol and locale are the caller's concern.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs / MINOR_UNITS_PER_MAJOR as u64,
            abs % MINOR_UNITS_PER_MAJOR as u64
        )
    }
}
