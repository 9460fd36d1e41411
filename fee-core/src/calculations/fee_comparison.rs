//! Tuition fee comparison across payment methods.
//!
//! Projects next year's education fee from last year's, then prices it under
//! each payment method's discount. The meal fee is added to every total but
//! is never discounted.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Reject a previous education fee that is zero or negative |
//! | 2    | New education fee = previous education fee × (1 + increase rate) |
//! | 3    | Discounted education fee = new education fee × (1 − method rate) |
//! | 4    | Undiscounted total = new education fee + new meal fee |
//! | 5    | Method total = discounted education fee + new meal fee |
//! | 6    | Savings = undiscounted total − method total |
//! | 7    | Monthly installment = 8-installment total ÷ 8 |
//!
//! No step rounds. Savings always equal new education fee × method rate.
//! Every step uses checked arithmetic; an amount beyond what [`Decimal`] can
//! hold is reported as [`FeeCalculatorError::AmountOutOfRange`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fee_core::{CalculationInput, DiscountConfig, FeeCalculator};
//!
//! let calculator = FeeCalculator::new(DiscountConfig::default());
//! let input = CalculationInput::new(dec!(100000), dec!(0), dec!(12000));
//!
//! let result = calculator.calculate(&input).unwrap();
//!
//! assert_eq!(result.new_education_fee, dec!(130740));
//! assert_eq!(result.cash.total, dec!(132280.8));
//! assert_eq!(result.cc8_monthly_installment, dec!(17352.225));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{CalculationInput, CalculationResult, DiscountConfig, MethodBreakdown, PaymentMethod};

/// Number of equal payments in the eight-installment card plan.
pub const INSTALLMENT_COUNT: u32 = 8;

/// Errors that can occur during a fee comparison.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeCalculatorError {
    /// The previous education fee was zero or negative.
    #[error("previous education fee must be positive, got {0}")]
    InvalidPreviousEducationFee(Decimal),

    /// An intermediate amount exceeded the range of [`Decimal`].
    #[error("{step} is too large to calculate")]
    AmountOutOfRange { step: &'static str },
}

fn out_of_range(step: &'static str) -> FeeCalculatorError {
    warn!(step, "amount out of range; refusing to calculate");
    FeeCalculatorError::AmountOutOfRange { step }
}

/// Calculator for the payment method comparison.
///
/// Holds the rate schedule; every call to [`FeeCalculator::calculate`] is
/// independent and returns the same result for the same input.
#[derive(Debug, Clone)]
pub struct FeeCalculator {
    config: DiscountConfig,
}

impl FeeCalculator {
    pub fn new(config: DiscountConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiscountConfig {
        &self.config
    }

    /// Calculates the full comparison for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`FeeCalculatorError::InvalidPreviousEducationFee`] if the
    /// previous education fee is zero or negative, and
    /// [`FeeCalculatorError::AmountOutOfRange`] if any amount overflows. No
    /// partial result is produced.
    pub fn calculate(
        &self,
        input: &CalculationInput,
    ) -> Result<CalculationResult, FeeCalculatorError> {
        self.validate_input(input)?;

        let new_education_fee = self.new_education_fee(input.previous_education_fee)?;
        debug!(
            previous_education_fee = %input.previous_education_fee,
            increase_rate = %self.config.increase_rate,
            new_education_fee = %new_education_fee,
            "projected education fee"
        );

        let no_discount_total = self.no_discount_total(new_education_fee, input.new_meal_fee)?;

        let cash = self.breakdown(
            PaymentMethod::Cash,
            new_education_fee,
            input.new_meal_fee,
            no_discount_total,
        )?;
        let cc_single = self.breakdown(
            PaymentMethod::CreditCardSingle,
            new_education_fee,
            input.new_meal_fee,
            no_discount_total,
        )?;
        let cc8 = self.breakdown(
            PaymentMethod::CreditCardEightInstallments,
            new_education_fee,
            input.new_meal_fee,
            no_discount_total,
        )?;

        let cc8_monthly_installment = self.monthly_installment(cc8.total)?;

        Ok(CalculationResult {
            previous_education_fee: input.previous_education_fee,
            new_education_fee,
            new_meal_fee: input.new_meal_fee,
            no_discount_total,
            cash,
            cc_single,
            cc8,
            cc8_monthly_installment,
        })
    }

    fn validate_input(
        &self,
        input: &CalculationInput,
    ) -> Result<(), FeeCalculatorError> {
        if input.previous_education_fee <= Decimal::ZERO {
            warn!(
                previous_education_fee = %input.previous_education_fee,
                "previous education fee is not positive; refusing to calculate"
            );
            return Err(FeeCalculatorError::InvalidPreviousEducationFee(
                input.previous_education_fee,
            ));
        }
        Ok(())
    }

    /// Applies the yearly increase to last year's education fee.
    fn new_education_fee(
        &self,
        previous_education_fee: Decimal,
    ) -> Result<Decimal, FeeCalculatorError> {
        Decimal::ONE
            .checked_add(self.config.increase_rate)
            .and_then(|factor| previous_education_fee.checked_mul(factor))
            .ok_or_else(|| out_of_range("new education fee"))
    }

    /// Applies a payment method's discount to the new education fee.
    fn discounted_education(
        &self,
        new_education_fee: Decimal,
        method: PaymentMethod,
    ) -> Result<Decimal, FeeCalculatorError> {
        Decimal::ONE
            .checked_sub(self.config.rate(method))
            .and_then(|factor| new_education_fee.checked_mul(factor))
            .ok_or_else(|| out_of_range("discounted education fee"))
    }

    fn no_discount_total(
        &self,
        new_education_fee: Decimal,
        new_meal_fee: Decimal,
    ) -> Result<Decimal, FeeCalculatorError> {
        new_education_fee
            .checked_add(new_meal_fee)
            .ok_or_else(|| out_of_range("total without discount"))
    }

    fn breakdown(
        &self,
        method: PaymentMethod,
        new_education_fee: Decimal,
        new_meal_fee: Decimal,
        no_discount_total: Decimal,
    ) -> Result<MethodBreakdown, FeeCalculatorError> {
        let education_portion = self.discounted_education(new_education_fee, method)?;
        let total = education_portion
            .checked_add(new_meal_fee)
            .ok_or_else(|| out_of_range("method total"))?;
        let savings = no_discount_total
            .checked_sub(total)
            .ok_or_else(|| out_of_range("savings"))?;

        Ok(MethodBreakdown {
            method,
            education_portion,
            meal_portion: new_meal_fee,
            total,
            savings,
        })
    }

    /// Splits the eight-installment total into equal payments.
    fn monthly_installment(
        &self,
        cc8_total: Decimal,
    ) -> Result<Decimal, FeeCalculatorError> {
        cc8_total
            .checked_div(Decimal::from(INSTALLMENT_COUNT))
            .ok_or_else(|| out_of_range("monthly installment"))
    }
}

/// Calculates a comparison without keeping a [`FeeCalculator`] around.
///
/// ```
/// use rust_decimal_macros::dec;
/// use fee_core::{CalculationInput, DiscountConfig, FeeCalculatorError, compute};
///
/// let input = CalculationInput::new(dec!(0), dec!(0), dec!(12000));
///
/// assert_eq!(
///     compute(&input, &DiscountConfig::default()),
///     Err(FeeCalculatorError::InvalidPreviousEducationFee(dec!(0)))
/// );
/// ```
pub fn compute(
    input: &CalculationInput,
    config: &DiscountConfig,
) -> Result<CalculationResult, FeeCalculatorError> {
    FeeCalculator::new(config.clone()).calculate(input)
}
