//! Converts a Robux quantity to a value in the selected currency.

use crate::currency::Currency;
use crate::format;
use crate::quantity::read_quantity;

/// Multiplies the quantity by the conversion rate. No rounding happens here;
/// precision is deferred to the formatter.
pub fn convert(quantity: f64, rate: f64) -> f64 {
    quantity * rate
}

/// One completed conversion: the validated quantity, the currency it was
/// converted into, and the converted value. Recomputed on every trigger,
/// never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub quantity: f64,
    pub currency: Currency,
    pub value: f64,
}

impl Conversion {
    /// Runs the read-validate-convert pipeline over the raw input field.
    ///
    /// Returns `None` when the validated quantity is 0 (empty, invalid or
    /// negative input) — the zero case never reaches the multiplication.
    pub fn compute(raw: &str, currency: Currency) -> Option<Self> {
        let quantity = read_quantity(raw);
        if quantity == 0.0 {
            return None;
        }
        Some(Self {
            quantity,
            currency,
            value: convert(quantity, currency.rate()),
        })
    }

    /// The converted value in the currency's locale formatting ("1.234,56").
    pub fn localized_value(&self) -> String {
        format::format_localized(self.value, self.currency)
    }

    /// The human-readable detail sentence, e.g. "100 Robux = $0.38 USD".
    pub fn detail_line(&self) -> String {
        format!(
            "{} Robux = {}{} {}",
            format::format_quantity_grouped(self.quantity),
            self.currency.symbol(),
            format::format_fixed(self.value),
            self.currency.code(),
        )
    }
}
