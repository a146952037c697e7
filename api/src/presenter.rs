//! The result panel's display state machine.
//!
//! Two states exist: Hidden (initial) and Shown. A calculation with a
//! nonzero quantity writes the display strings and shows the panel; an
//! empty, zero or invalid quantity hides it. Hiding keeps the previously
//! written strings — a later Shown transition always overwrites them before
//! the panel becomes visible again, so stale content is never observable.

use crate::convert::Conversion;
use crate::currency::Currency;

/// Whether the result panel is currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// The presenter's view of the result area: a visibility flag plus the two
/// formatted strings the UI writes into its display slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPanel {
    visibility: Visibility,
    value: String,
    detail: String,
}

impl ResultPanel {
    /// A hidden panel with no content. The initial state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The locale-formatted converted value, as last written.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The detail sentence ("100 Robux = $0.38 USD"), as last written.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Applies a calculation outcome. `Some` overwrites the display strings
    /// and shows the panel; `None` hides it without clearing. Re-applying
    /// the same outcome is idempotent.
    pub fn apply(&mut self, conversion: Option<&Conversion>) {
        match conversion {
            Some(conversion) => {
                self.value = conversion.localized_value();
                self.detail = conversion.detail_line();
                self.visibility = Visibility::Shown;
            }
            None => self.visibility = Visibility::Hidden,
        }
    }

    /// The pipeline entry point every trigger converges on: reads the raw
    /// field, converts against the selected currency, and applies the
    /// outcome to this panel.
    pub fn recalculate(&mut self, raw: &str, currency: Currency) {
        self.apply(Conversion::compute(raw, currency).as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_empty() {
        let panel = ResultPanel::new();
        assert!(!panel.is_visible());
        assert_eq!(panel.value(), "");
        assert_eq!(panel.detail(), "");
    }

    #[test]
    fn nonzero_quantity_shows_the_panel() {
        let mut panel = ResultPanel::new();
        panel.recalculate("100", Currency::USD);
        assert!(panel.is_visible());
        assert_eq!(panel.value(), "0.38");
        assert_eq!(panel.detail(), "100 Robux = $0.38 USD");
    }

    #[test]
    fn empty_zero_and_invalid_input_hide_the_panel() {
        for raw in ["", "0", "-5", "abc"] {
            let mut panel = ResultPanel::new();
            panel.recalculate("100", Currency::USD);
            panel.recalculate(raw, Currency::USD);
            assert!(!panel.is_visible(), "input {raw:?}");
        }
    }

    #[test]
    fn hiding_keeps_the_last_written_strings() {
        let mut panel = ResultPanel::new();
        panel.recalculate("100", Currency::USD);
        panel.recalculate("", Currency::USD);
        assert_eq!(panel.detail(), "100 Robux = $0.38 USD");
        assert!(!panel.is_visible());
    }

    #[test]
    fn recalculation_is_idempotent() {
        let mut a = ResultPanel::new();
        let mut b = ResultPanel::new();
        a.recalculate("250", Currency::GBP);
        b.recalculate("250", Currency::GBP);
        b.recalculate("250", Currency::GBP);
        assert_eq!(a, b);

        let mut hidden = ResultPanel::new();
        hidden.recalculate("", Currency::GBP);
        hidden.recalculate("", Currency::GBP);
        assert!(!hidden.is_visible());
    }

    #[test]
    fn selection_change_rerun_reflects_the_new_currency() {
        let mut panel = ResultPanel::new();
        panel.recalculate("500", Currency::USD);
        assert_eq!(panel.detail(), "500 Robux = $1.90 USD");

        // Same field contents, new selection.
        panel.recalculate("500", Currency::EUR);
        assert!(panel.is_visible());
        assert_eq!(panel.detail(), "500 Robux = €1.75 EUR");
    }
}
