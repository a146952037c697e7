// ui/src/components/currency_select.rs
#![allow(non_snake_case)]

use std::str::FromStr;

use api::currency::Currency;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

#[derive(Props, PartialEq, Clone)]
pub struct CurrencySelectProps {
    /// The currently selected currency.
    pub selected: Currency,
    /// Called with the newly selected currency on every change.
    pub on_change: EventHandler<Currency>,
}

/// A dropdown offering exactly the supported currency codes.
///
/// The `<select>` can only emit codes it was given, so the `from_str`
/// fallback below is unreachable in practice; an unknown code would be a
/// markup defect, not a runtime condition.
pub fn CurrencySelect(props: CurrencySelectProps) -> Element {
    rsx! {
        select {
            "aria-label": "Currency",
            onchange: move |evt| {
                if let Ok(currency) = Currency::from_str(&evt.value()) {
                    props.on_change.call(currency);
                }
            },
            for currency in Currency::iter() {
                option {
                    key: "{currency.code()}",
                    value: "{currency.code()}",
                    selected: currency == props.selected,
                    "{currency.code()} — {currency.name()}"
                }
            }
        }
    }
}
