use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PaymentMethod;

/// Amounts owed under a single payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodBreakdown {
    pub method: PaymentMethod,

    /// New education fee after this method's discount.
    pub education_portion: Decimal,

    /// New meal fee (never discounted).
    pub meal_portion: Decimal,

    /// Discounted education fee plus meal fee.
    pub total: Decimal,

    /// Difference between the undiscounted total and this method's total.
    pub savings: Decimal,
}

/// Output of a fee comparison.
///
/// Amounts keep full precision. Round with
/// [`round_half_up`](crate::calculations::common::round_half_up) only when
/// displaying them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Echo of the previous education fee the comparison started from.
    pub previous_education_fee: Decimal,

    /// Previous education fee with the yearly increase applied.
    pub new_education_fee: Decimal,

    pub new_meal_fee: Decimal,

    /// New education fee plus new meal fee, with no discount.
    pub no_discount_total: Decimal,

    pub cash: MethodBreakdown,
    pub cc_single: MethodBreakdown,
    pub cc8: MethodBreakdown,

    /// One of the eight equal payments of the cc8 total.
    pub cc8_monthly_installment: Decimal,
}

impl CalculationResult {
    /// Returns the breakdown for `method`.
    pub fn breakdown(&self, method: PaymentMethod) -> &MethodBreakdown {
        match method {
            PaymentMethod::Cash => &self.cash,
            PaymentMethod::CreditCardSingle => &self.cc_single,
            PaymentMethod::CreditCardEightInstallments => &self.cc8,
        }
    }

    /// All breakdowns in [`PaymentMethod::ALL`] order.
    pub fn breakdowns(&self) -> [&MethodBreakdown; 3] {
        [&self.cash, &self.cc_single, &self.cc8]
    }
}
