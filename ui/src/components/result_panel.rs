// ui/src/components/result_panel.rs
#![allow(non_snake_case)]

use api::currency::Currency;
use api::presenter::ResultPanel;
use dioxus::prelude::*;

use crate::components::pico::Card;

#[derive(Props, PartialEq, Clone)]
pub struct ResultCardProps {
    /// The presenter state to render.
    pub panel: ResultPanel,
    /// The currently selected currency, for the symbol/code slots.
    pub currency: Currency,
}

/// Renders the result panel: the symbol icon, the locale-formatted value
/// with the currency code, and the detail sentence. Nothing is rendered
/// while the panel is hidden.
pub fn ResultCard(props: ResultCardProps) -> Element {
    rsx! {
        if props.panel.is_visible() {
            Card {
                div {
                    style: "display: flex; align-items: baseline; gap: 0.5rem;",
                    span {
                        style: "font-size: 1.5rem;",
                        "{props.currency.symbol()}"
                    }
                    h2 {
                        style: "margin-bottom: 0;",
                        "{props.panel.value()}"
                    }
                    span { "{props.currency.code()}" }
                }
                p {
                    style: "margin-bottom: 0; color: var(--pico-muted-color);",
                    "{props.panel.detail()}"
                }
            }
        }
    }
}
