//! CSV loader for batches of fee inputs.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column                   | Required | Type    | Notes                                  |
//! |--------------------------|----------|---------|----------------------------------------|
//! | `previous_education_fee` | yes      | decimal | e.g. `100000.00`                       |
//! | `previous_meal_fee`      | no       | decimal | Empty or missing is `0`                |
//! | `new_meal_fee`           | no       | decimal | Empty or missing is `0`                |
//! | `label`                  | no       | string  | Defaults to `row N` (1-based)          |
//!
//! Fee cells go through [`parse_fee`], so `1,234.50` is accepted and
//! unparseable text becomes `0`. A previous education fee of `0` is kept
//! here and rejected later by the calculator, row by row.
//!
//! ### Example
//!
//! ```csv
//! label,previous_education_fee,previous_meal_fee,new_meal_fee
//! Elif,100000.00,9000.00,12000.00
//! Can,85000.00,,11000.00
//! ```

use std::io::Read;
use std::path::Path;

use fee_core::CalculationInput;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

use crate::coerce::parse_fee;

/// Errors that can occur when loading fee inputs.
#[derive(Debug, Error)]
pub enum InputLoaderError {
    /// The CSV structure was invalid. `row` is 1-based (header = row 0).
    #[error("CSV parse error on row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("cannot read input file: {0}")]
    Io(#[from] std::io::Error),
}

/// One input row together with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledInput {
    pub label: String,
    pub input: CalculationInput,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    label: Option<String>,
    #[serde(deserialize_with = "deserialize_fee")]
    previous_education_fee: Decimal,
    #[serde(default, deserialize_with = "deserialize_fee")]
    previous_meal_fee: Decimal,
    #[serde(default, deserialize_with = "deserialize_fee")]
    new_meal_fee: Decimal,
}

fn deserialize_fee<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.as_deref().map(parse_fee).unwrap_or(Decimal::ZERO))
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> LabeledInput {
    let label = row
        .label
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| format!("row {row_number}"));

    LabeledInput {
        label,
        input: CalculationInput::new(
            row.previous_education_fee,
            row.previous_meal_fee,
            row.new_meal_fee,
        ),
    }
}

/// Loader for batches of [`CalculationInput`] from CSV.
pub struct InputLoader;

impl InputLoader {
    /// Parse labeled inputs from a CSV reader. Rows are returned in file order.
    ///
    /// # Errors
    ///
    /// Returns [`InputLoaderError::Parse`] if the CSV is structurally invalid
    /// (for example a row with the wrong number of columns).
    pub fn parse<R: Read>(reader: R) -> Result<Vec<LabeledInput>, InputLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let inputs = csv_reader
            .deserialize::<CsvRow>()
            .enumerate()
            .map(|(idx, result)| {
                let row_number = idx + 1;
                result
                    .map(|row| convert_row(row, row_number))
                    .map_err(|source| InputLoaderError::Parse {
                        row: row_number,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rows = inputs.len(), "parsed fee inputs");
        Ok(inputs)
    }

    /// Parse labeled inputs from CSV text.
    pub fn load_from_str(input: &str) -> Result<Vec<LabeledInput>, InputLoaderError> {
        Self::parse(input.as_bytes())
    }

    /// Read a CSV file from disk and delegate to [`InputLoader::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`InputLoaderError::Io`] when the file cannot be opened, or
    /// [`InputLoaderError::Parse`] when its contents are invalid.
    pub fn load_from_file(path: &Path) -> Result<Vec<LabeledInput>, InputLoaderError> {
        let file = std::fs::File::open(path)?;
        Self::parse(file)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const FULL_CSV: &str = "\
label,previous_education_fee,previous_meal_fee,new_meal_fee
Elif,100000.00,9000.00,12000.00
";

    const MINIMAL_CSV: &str = "\
previous_education_fee
100000
85000
";

    #[test]
    fn parse_full_row() {
        let inputs = InputLoader::load_from_str(FULL_CSV).expect("should parse full CSV");

        assert_eq!(
            inputs,
            vec![LabeledInput {
                label: "Elif".to_string(),
                input: CalculationInput::new(dec!(100000.00), dec!(9000.00), dec!(12000.00)),
            }]
        );
    }

    #[test]
    fn parse_minimal_columns_defaults_meal_fees_to_zero() {
        let inputs = InputLoader::load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].input.previous_meal_fee, Decimal::ZERO);
        assert_eq!(inputs[0].input.new_meal_fee, Decimal::ZERO);
        assert_eq!(inputs[1].input.previous_education_fee, dec!(85000));
    }

    #[test]
    fn parse_missing_label_uses_row_number() {
        let inputs = InputLoader::load_from_str(MINIMAL_CSV).unwrap();

        assert_eq!(inputs[0].label, "row 1");
        assert_eq!(inputs[1].label, "row 2");
    }

    #[test]
    fn parse_blank_label_uses_row_number() {
        let csv = "label,previous_education_fee\n   ,50000\n";

        let inputs = InputLoader::load_from_str(csv).unwrap();

        assert_eq!(inputs[0].label, "row 1");
    }

    #[test]
    fn parse_empty_and_invalid_cells_are_zero() {
        let csv = "\
label,previous_education_fee,previous_meal_fee,new_meal_fee
a,,abc,
";

        let inputs = InputLoader::load_from_str(csv).unwrap();

        assert_eq!(
            inputs[0].input,
            CalculationInput::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
        );
    }

    #[test]
    fn parse_accepts_thousands_separator_in_quoted_cell() {
        let csv = "previous_education_fee,new_meal_fee\n\"100,000\",\"12,000\"\n";

        let inputs = InputLoader::load_from_str(csv).unwrap();

        assert_eq!(inputs[0].input.previous_education_fee, dec!(100000));
        assert_eq!(inputs[0].input.new_meal_fee, dec!(12000));
    }

    #[test]
    fn parse_header_only_returns_no_rows() {
        let inputs = InputLoader::load_from_str("previous_education_fee,new_meal_fee\n").unwrap();

        assert!(inputs.is_empty());
    }

    #[test]
    fn parse_wrong_column_count_reports_row() {
        let csv = "\
label,previous_education_fee
a,100
b,200,300
";

        let err = InputLoader::load_from_str(csv).unwrap_err();

        assert!(matches!(err, InputLoaderError::Parse { row: 2, .. }));
    }

    #[test]
    fn parse_without_education_fee_column_fails() {
        let csv = "label,new_meal_fee\na,12000\n";

        let err = InputLoader::load_from_str(csv).unwrap_err();

        assert!(matches!(err, InputLoaderError::Parse { row: 1, .. }));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = InputLoader::load_from_file(Path::new("/this/path/does/not/exist.csv"))
            .unwrap_err();

        assert!(matches!(err, InputLoaderError::Io(_)));
    }
}
