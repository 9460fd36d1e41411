//! Plain-text rendering of comparison results.
//!
//! Amounts are rounded half-up to two places and grouped with `,`. This is a
//! fixed layout for terminals, not locale formatting.

use fee_core::calculations::INSTALLMENT_COUNT;
use fee_core::calculations::common::{as_percentage, round_half_up};
use fee_core::{CalculationResult, DiscountConfig, FeeCalculatorError, PaymentMethod};
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 26;
const AMOUNT_WIDTH: usize = 16;

/// Formats an amount as `1,234.50 TRY`.
pub fn format_amount(
    amount: Decimal,
    currency: &str,
) -> String {
    let fixed = format!("{:.2}", round_half_up(amount));
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("{sign}{}.{fraction} {currency}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn line(
    out: &mut String,
    label: &str,
    amount: Decimal,
    currency: &str,
) {
    out.push_str(&format!(
        "  {:<label_width$}{:>amount_width$}\n",
        label,
        format_amount(amount, currency),
        label_width = LABEL_WIDTH,
        amount_width = AMOUNT_WIDTH,
    ));
}

/// Renders the full comparison for a single input.
pub fn render_comparison(
    result: &CalculationResult,
    config: &DiscountConfig,
    currency: &str,
) -> String {
    let mut out = String::new();

    out.push_str("Education fee\n");
    line(&mut out, "Previous year", result.previous_education_fee, currency);
    line(
        &mut out,
        &format!("Next year (+{}%)", as_percentage(config.increase_rate)),
        result.new_education_fee,
        currency,
    );

    for breakdown in result.breakdowns() {
        out.push_str(&format!(
            "\n{} - {}% discount\n",
            breakdown.method.label(),
            as_percentage(config.rate(breakdown.method))
        ));
        line(&mut out, "Education", breakdown.education_portion, currency);
        line(&mut out, "Meal", breakdown.meal_portion, currency);
        line(&mut out, "Total", breakdown.total, currency);
        if breakdown.method == PaymentMethod::CreditCardEightInstallments {
            line(
                &mut out,
                &format!("Monthly ({INSTALLMENT_COUNT} x)"),
                result.cc8_monthly_installment,
                currency,
            );
        }
        line(&mut out, "Savings", breakdown.savings, currency);
    }

    out.push_str("\nComparison\n");
    line(&mut out, "No discount", result.no_discount_total, currency);
    for breakdown in result.breakdowns() {
        line(&mut out, breakdown.method.as_str(), breakdown.total, currency);
    }

    out
}

/// Renders one summary line per batch row. Rejected rows show the reason.
pub fn render_batch<'a, I>(
    rows: I,
    currency: &str,
) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Result<CalculationResult, FeeCalculatorError>)>,
{
    let mut out = String::new();
    for (label, result) in rows {
        match result {
            Ok(result) => out.push_str(&format!(
                "{label}: cash {} | cc-single {} | cc8 {} ({} / month) | no discount {}\n",
                format_amount(result.cash.total, currency),
                format_amount(result.cc_single.total, currency),
                format_amount(result.cc8.total, currency),
                format_amount(result.cc8_monthly_installment, currency),
                format_amount(result.no_discount_total, currency),
            )),
            Err(err) => out.push_str(&format!("{label}: skipped, {err}\n")),
        }
    }
    out
}
