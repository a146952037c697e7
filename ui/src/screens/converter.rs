//=============================================================================
// File: src/screens/converter.rs
//=============================================================================
use api::currency::Currency;
use api::format::format_rate;
use api::presenter::ResultPanel;
use api::quantity::read_quantity;
use dioxus::prelude::*;

use crate::components::currency_select::CurrencySelect;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::quantity_input::QuantityInput;
use crate::components::result_panel::ResultCard;

/// The converter screen: quantity field, currency selector, rate readout
/// and result panel. Every trigger (button, Enter, keystroke, blur)
/// converges on `ResultPanel::recalculate`; selection changes re-run it
/// only when the field holds a positive quantity.
#[component]
pub fn ConverterScreen() -> Element {
    let mut raw_input = use_signal(String::new);
    let mut currency = use_signal(Currency::from_env);
    let mut panel = use_signal(ResultPanel::new);

    let mut recalculate = move || {
        let raw = raw_input.read().clone();
        let selected = *currency.read();
        panel.with_mut(|p| p.recalculate(&raw, selected));
    };

    let on_currency_change = move |new_currency: Currency| {
        dioxus_logger::tracing::info!("currency changed to {}", new_currency.code());
        currency.set(new_currency);
        // The readout labels refresh reactively. The displayed result is
        // re-derived only when the field holds a usable quantity, so a
        // hidden panel stays hidden.
        let raw = raw_input.read().clone();
        if read_quantity(&raw) > 0.0 {
            panel.with_mut(|p| p.recalculate(&raw, new_currency));
        }
    };

    // Live recalculation on every keystroke. A zero or invalid quantity
    // forces the Hidden state.
    let on_input = move |value: String| {
        raw_input.set(value.clone());
        let selected = *currency.read();
        panel.with_mut(|p| p.recalculate(&value, selected));
    };

    let on_blur = move |value: String| {
        if value.is_empty() || value == "0" {
            panel.with_mut(|p| p.apply(None));
        }
    };

    let selected = currency();

    rsx! {
        Card {
            h3 { "Robux to {selected.name()}" }
            div {
                style: "display: flex; gap: 0.5rem; align-items: center;",
                QuantityInput {
                    value: "{raw_input}",
                    on_input: on_input,
                    on_submit: move |_| recalculate(),
                    on_blur: on_blur,
                }
                CurrencySelect {
                    selected,
                    on_change: on_currency_change,
                }
                Button {
                    on_click: move |_| recalculate(),
                    "Convert"
                }
            }
            p {
                style: "margin-top: 0.75rem; margin-bottom: 0; color: var(--pico-muted-color);",
                "1 Robux = {selected.symbol()}{format_rate(selected.rate())} {selected.code()}"
            }
        }
        ResultCard {
            panel: panel(),
            currency: selected,
        }
    }
}
