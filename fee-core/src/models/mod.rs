mod calculation_input;
mod calculation_result;
mod discount_config;
mod payment_method;

pub use calculation_input::CalculationInput;
pub use calculation_result::{CalculationResult, MethodBreakdown};
pub use discount_config::{DiscountConfig, DiscountConfigError};
pub use payment_method::PaymentMethod;
