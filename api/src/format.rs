//! Renders converted values and quantities as display strings.
//!
//! All two-decimal rendering rounds half away from zero: values are scaled
//! to minor units (hundredths) with `f64::round` and then formatted from
//! integers, so no further floating-point error can leak into the output.

use crate::currency::Currency;
use crate::locale::Locale;

/// Scales a value to hundredths, rounding ties away from zero.
fn to_minor_units(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Formats a value with exactly two decimal places (e.g., "0.38").
pub fn format_fixed(value: f64) -> String {
    let minor = to_minor_units(value);
    let sign = if minor < 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, (minor / 100).abs(), (minor % 100).abs())
}

/// Formats a value with two decimal places using the grouping and decimal
/// conventions of the currency's locale (e.g., "1.234,56" for EUR).
pub fn format_localized(value: f64, currency: Currency) -> String {
    let locale = currency.locale();
    let minor = to_minor_units(value);
    let sign = if minor < 0 { "-" } else { "" };
    let grouped = locale.group_digits(&(minor / 100).abs().to_string());
    format!(
        "{}{}{}{:02}",
        sign,
        grouped,
        locale.decimal_separator(),
        (minor % 100).abs()
    )
}

/// Formats the raw Robux quantity for the detail sentence: thousands-grouped
/// in the fallback locale, with up to three fraction digits and trailing
/// zeros trimmed ("1,000", "1,234.568").
pub fn format_quantity_grouped(quantity: f64) -> String {
    let scaled = (quantity * 1000.0).round() as i64;
    let grouped = Locale::FALLBACK.group_digits(&(scaled / 1000).abs().to_string());
    let frac = (scaled % 1000).abs();
    if frac == 0 {
        grouped
    } else {
        let digits = format!("{frac:03}");
        format!("{}.{}", grouped, digits.trim_end_matches('0'))
    }
}

/// Formats a conversion rate with four decimal places for the rate readout
/// (e.g., "0.0038", "0.5700").
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.4}")
}
