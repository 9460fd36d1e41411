pub mod calculations;
pub mod models;

pub use calculations::{FeeCalculator, FeeCalculatorError, compute};
pub use models::*;
