//! Fee comparison calculations.
//!
//! This module projects next year's education fee and compares what each
//! payment method costs under a [`DiscountConfig`](crate::DiscountConfig).

pub mod common;
pub mod fee_comparison;

pub use fee_comparison::{FeeCalculator, FeeCalculatorError, INSTALLMENT_COUNT, compute};
