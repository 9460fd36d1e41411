use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fees entered for one comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Last year's education fee. Must be positive.
    pub previous_education_fee: Decimal,

    /// Last year's meal fee. Carried for reference only; no derived amount
    /// depends on it.
    pub previous_meal_fee: Decimal,

    /// Next year's meal fee, added to every total without discount.
    pub new_meal_fee: Decimal,
}

impl CalculationInput {
    pub fn new(
        previous_education_fee: Decimal,
        previous_meal_fee: Decimal,
        new_meal_fee: Decimal,
    ) -> Self {
        Self {
            previous_education_fee,
            previous_meal_fee,
            new_meal_fee,
        }
    }
}
