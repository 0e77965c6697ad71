//! Two-decimal currency value object.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A currency amount with two-decimal display semantics.
///
/// Arithmetic stays unrounded so that totals over many line items do not
/// accumulate rounding error; rounding to two decimals happens only at
/// presentation, via [`Money::rounded`] or the `Display` impl (`$12.34`).
/// Persisted as a plain decimal number, never a string.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    /// Create an amount. Negative or non-finite input fails with
    /// `InvalidArgument`.
    pub fn new(amount: f64) -> DomainResult<Self> {
        let money = Self(amount);
        money.validate()?;
        Ok(money)
    }

    /// Check the amount is finite and non-negative.
    ///
    /// Deserialization is `transparent` and does not validate, so boundaries
    /// that accept external documents (catalog decode, cart restore) call
    /// this on every decoded amount.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.0.is_finite() {
            return Err(DomainError::invalid_argument("amount must be finite"));
        }
        if self.0 < 0.0 {
            return Err(DomainError::invalid_argument("amount cannot be negative"));
        }
        Ok(())
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Round to two decimals (presentation only).
    pub fn rounded(&self) -> Money {
        Money((self.0 * 100.0).round() / 100.0)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${:.2}", self.0)
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

/// Scale by a quantity (line totals).
impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * f64::from(rhs))
    }
}

/// Scale by a rate (tax).
impl Mul<f64> for Money {
    type Output = Money;

    fn mul(self, rhs: f64) -> Money {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}
