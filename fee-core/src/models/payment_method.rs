use std::fmt;

use serde::{Deserialize, Serialize};

/// The ways next year's fee can be paid, each with its own discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    CreditCardSingle,
    CreditCardEightInstallments,
}

impl PaymentMethod {
    /// All methods, deepest discount first.
    pub const ALL: [PaymentMethod; 3] = [
        Self::Cash,
        Self::CreditCardSingle,
        Self::CreditCardEightInstallments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CreditCardSingle => "cc-single",
            Self::CreditCardEightInstallments => "cc8",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash (paid upfront)",
            Self::CreditCardSingle => "Credit card, single payment",
            Self::CreditCardEightInstallments => "Credit card, 8 installments",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
