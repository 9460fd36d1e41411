use fee_core::CalculationInput;
use rust_decimal::Decimal;

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_fee_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// True for plain digits with an optional sign and decimal point.
fn is_plain_number(s: &str) -> bool {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let mut parts = unsigned.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    !(whole.is_empty() && fraction.is_empty())
        && whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit())
}

/// Parses a raw fee value, treating anything unusable as zero.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is 0. Input that is not a number is also 0,
/// with a warning logged. So is a number too large for [`Decimal`]
/// (magnitude of `7.9e28` or more); its warning says so.
///
/// ```
/// use rust_decimal_macros::dec;
/// use fee_data::parse_fee;
///
/// assert_eq!(parse_fee("12,000"), dec!(12000));
/// assert_eq!(parse_fee(""), dec!(0));
/// assert_eq!(parse_fee("n/a"), dec!(0));
/// ```
pub fn parse_fee(s: &str) -> Decimal {
    let normalized = normalize_fee_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        if is_plain_number(&normalized) {
            tracing::warn!(input = %s, max = %Decimal::MAX, "fee out of range treated as zero: {}", e);
        } else {
            tracing::warn!(input = %s, "invalid fee treated as zero: {}", e);
        }
        Decimal::ZERO
    })
}

/// Builds a [`CalculationInput`] from three raw values using [`parse_fee`].
///
/// An unusable previous education fee becomes zero and is then rejected by
/// the calculator.
pub fn parse_input(
    previous_education_fee: &str,
    previous_meal_fee: &str,
    new_meal_fee: &str,
) -> CalculationInput {
    CalculationInput::new(
        parse_fee(previous_education_fee),
        parse_fee(previous_meal_fee),
        parse_fee(new_meal_fee),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_fee_accepts_comma_thousands_separator() {
        assert_eq!(parse_fee("1,234.50"), dec!(1234.50));
        assert_eq!(parse_fee("1,234,567.89"), dec!(1234567.89));
    }

    #[test]
    fn parse_fee_trims_whitespace() {
        assert_eq!(parse_fee("  100000  "), dec!(100000));
    }

    #[test]
    fn parse_fee_empty_is_zero() {
        assert_eq!(parse_fee(""), Decimal::ZERO);
        assert_eq!(parse_fee("   "), Decimal::ZERO);
    }

    #[test]
    fn parse_fee_invalid_is_zero() {
        assert_eq!(parse_fee("abc"), Decimal::ZERO);
        assert_eq!(parse_fee("12.3.4"), Decimal::ZERO);
    }

    #[test]
    fn parse_fee_out_of_range_is_zero() {
        assert_eq!(parse_fee("100000000000000000000000000000"), Decimal::ZERO);
        assert_eq!(parse_fee("-100,000,000,000,000,000,000,000,000,000"), Decimal::ZERO);
    }

    #[test]
    fn parse_fee_keeps_largest_representable_value() {
        assert_eq!(parse_fee("79228162514264337593543950335"), Decimal::MAX);
    }

    #[test]
    fn is_plain_number_separates_overflow_from_garbage() {
        assert!(is_plain_number("100000000000000000000000000000"));
        assert!(is_plain_number("-12.50"));
        assert!(is_plain_number(".5"));
        assert!(!is_plain_number("12.3.4"));
        assert!(!is_plain_number("abc"));
        assert!(!is_plain_number("-"));
        assert!(!is_plain_number("."));
    }

    #[test]
    fn largest_fee_is_rejected_by_calculator_not_coerced() {
        let input = parse_input("79228162514264337593543950335", "", "12000");

        assert_eq!(
            fee_core::compute(&input, &fee_core::DiscountConfig::default()),
            Err(fee_core::FeeCalculatorError::AmountOutOfRange {
                step: "new education fee"
            })
        );
    }

    #[test]
    fn parse_fee_keeps_negative_values() {
        assert_eq!(parse_fee("-100"), dec!(-100));
    }

    #[test]
    fn parse_input_coerces_every_field() {
        let input = parse_input("100,000", "", "twelve");

        assert_eq!(
            input,
            CalculationInput::new(dec!(100000), dec!(0), dec!(0))
        );
    }
}
