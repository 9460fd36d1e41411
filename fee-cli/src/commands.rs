//! The two things `tuition-fees` can do, each returning the report text.
//!
//! `main` only prints what these return; an `Err` becomes the non-zero exit.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use fee_core::FeeCalculator;
use fee_data::{InputLoader, parse_input};

use crate::report;

/// Raw fee values as typed on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFees<'a> {
    pub previous_education_fee: &'a str,
    pub previous_meal_fee: &'a str,
    pub new_meal_fee: &'a str,
}

/// Compares payment methods for one input.
///
/// # Errors
///
/// Fails when the calculator rejects the input, for example a previous
/// education fee that is empty, zero, or not a number.
pub fn run_single(
    calculator: &FeeCalculator,
    fees: RawFees<'_>,
    currency: &str,
) -> Result<String> {
    let input = parse_input(
        fees.previous_education_fee,
        fees.previous_meal_fee,
        fees.new_meal_fee,
    );
    debug!(?input, "calculating single comparison");

    let result = calculator
        .calculate(&input)
        .context("Please enter a valid previous year education fee")?;

    Ok(report::render_comparison(
        &result,
        calculator.config(),
        currency,
    ))
}

/// Compares payment methods for every row of a CSV file.
///
/// Rows the calculator rejects are listed with the reason and do not stop
/// the run.
///
/// # Errors
///
/// Fails only when the file cannot be read or is not valid CSV.
pub fn run_batch(
    calculator: &FeeCalculator,
    path: &Path,
    currency: &str,
) -> Result<String> {
    let rows = InputLoader::load_from_file(path)
        .with_context(|| format!("Failed to load inputs from: {}", path.display()))?;
    info!(rows = rows.len(), path = %path.display(), "calculating batch");

    let results: Vec<_> = rows
        .iter()
        .map(|row| (row.label.as_str(), calculator.calculate(&row.input)))
        .collect();

    Ok(report::render_batch(
        results.iter().map(|(label, result)| (*label, result)),
        currency,
    ))
}

#[cfg(test)]
mod tests {
    use fee_core::DiscountConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    fn calculator() -> FeeCalculator {
        FeeCalculator::new(DiscountConfig::default())
    }

    fn fees<'a>(
        previous_education_fee: &'a str,
        new_meal_fee: &'a str,
    ) -> RawFees<'a> {
        RawFees {
            previous_education_fee,
            new_meal_fee,
            ..RawFees::default()
        }
    }

    #[test]
    fn run_single_renders_report() {
        let report = run_single(&calculator(), fees("100,000", "12000"), "TRY").unwrap();

        assert!(report.starts_with("Education fee\n"));
        assert!(report.contains("17,352.23 TRY"));
    }

    #[test]
    fn run_single_rejects_missing_education_fee() {
        let err = run_single(&calculator(), fees("", "12000"), "TRY").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Please enter a valid previous year education fee"
        );
        assert_eq!(
            err.root_cause().to_string(),
            "previous education fee must be positive, got 0"
        );
    }

    #[test]
    fn run_single_rejects_fee_out_of_range() {
        let err = run_single(
            &calculator(),
            fees("79228162514264337593543950335", ""),
            "TRY",
        )
        .unwrap_err();

        assert_eq!(
            err.root_cause().to_string(),
            "new education fee is too large to calculate"
        );
    }

    #[test]
    fn run_batch_reports_missing_file() {
        let err = run_batch(&calculator(), Path::new("no/such/inputs.csv"), "TRY").unwrap_err();

        assert!(
            err.to_string()
                .starts_with("Failed to load inputs from: no/such/inputs.csv")
        );
    }
}
