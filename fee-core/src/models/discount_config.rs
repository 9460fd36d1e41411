use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PaymentMethod;

/// Errors returned by [`DiscountConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountConfigError {
    /// The yearly increase rate must be non-negative.
    #[error("increase rate must be non-negative, got {0}")]
    InvalidIncreaseRate(Decimal),

    /// A discount rate must be in [0, 1).
    #[error("{method} discount rate must be at least 0 and below 1, got {rate}")]
    InvalidDiscountRate { method: PaymentMethod, rate: Decimal },
}

/// Rate schedule applied by the fee calculator.
///
/// All rates are decimal fractions (`0.08` is 8%). The [`Default`] value is
/// the published schedule: a 30.74% increase followed by 8% / 6% / 3%
/// discounts for cash, single card payment and eight card installments.
/// Fields missing from a deserialized document fall back to that schedule.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use fee_core::{DiscountConfig, PaymentMethod};
///
/// let config = DiscountConfig::default();
///
/// assert_eq!(config.increase_rate, dec!(0.3074));
/// assert_eq!(config.rate(PaymentMethod::Cash), dec!(0.08));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountConfig {
    /// Year-over-year increase applied to the previous education fee.
    pub increase_rate: Decimal,

    /// Discount for paying the full amount upfront in cash.
    pub cash_rate: Decimal,

    /// Discount for a single credit card payment.
    pub cc_single_rate: Decimal,

    /// Discount for eight credit card installments.
    pub cc8_rate: Decimal,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            increase_rate: Decimal::new(3074, 4),
            cash_rate: Decimal::new(8, 2),
            cc_single_rate: Decimal::new(6, 2),
            cc8_rate: Decimal::new(3, 2),
        }
    }
}

impl DiscountConfig {
    /// Returns the discount rate for `method`.
    pub fn rate(&self, method: PaymentMethod) -> Decimal {
        match method {
            PaymentMethod::Cash => self.cash_rate,
            PaymentMethod::CreditCardSingle => self.cc_single_rate,
            PaymentMethod::CreditCardEightInstallments => self.cc8_rate,
        }
    }

    /// Validates the configured rates.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountConfigError`] if:
    /// - `increase_rate` is negative
    /// - any discount rate is outside [0, 1)
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use fee_core::{DiscountConfig, DiscountConfigError, PaymentMethod};
    ///
    /// let config = DiscountConfig {
    ///     cc8_rate: dec!(1),
    ///     ..DiscountConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(DiscountConfigError::InvalidDiscountRate {
    ///         method: PaymentMethod::CreditCardEightInstallments,
    ///         rate: dec!(1),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), DiscountConfigError> {
        if self.increase_rate < Decimal::ZERO {
            return Err(DiscountConfigError::InvalidIncreaseRate(self.increase_rate));
        }
        for method in PaymentMethod::ALL {
            let rate = self.rate(method);
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(DiscountConfigError::InvalidDiscountRate { method, rate });
            }
        }
        Ok(())
    }
}
