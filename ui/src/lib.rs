// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod screens;

use components::pico::Container;
use screens::converter::ConverterScreen;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        max-width: 640px;
        margin: 0 auto;
        padding: 1rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        style {
            "{app_css}"
        }
        div {
            class: "app-main-container",
            Container {
                header {
                    h1 {
                        style: "margin-bottom: 0.25rem;",
                        "Robux DevEx Converter"
                    }
                    p {
                        style: "color: var(--pico-muted-color);",
                        "Convert Robux into real-world currency at fixed DevEx rates."
                    }
                }
                ConverterScreen {}
            }
        }
    }
}
