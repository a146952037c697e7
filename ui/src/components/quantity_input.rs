// ui/src/components/quantity_input.rs
#![allow(non_snake_case)]

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

/// Strips everything but digits and a single decimal point, so the field
/// can never hold a string the reader would reject as malformed (it can
/// still hold "" or "0", which read as the zero quantity).
fn sanitize(new_value: &str) -> String {
    let mut sanitized = String::with_capacity(new_value.len());
    let mut has_decimal = false;
    for ch in new_value.chars() {
        if ch.is_ascii_digit() {
            sanitized.push(ch);
        } else if ch == '.' && !has_decimal {
            sanitized.push(ch);
            has_decimal = true;
        }
    }
    sanitized
}

#[derive(Props, PartialEq, Clone)]
pub struct QuantityInputProps {
    /// The current field contents, owned by the parent.
    pub value: String,
    /// Called with the sanitized contents on every keystroke.
    pub on_input: EventHandler<String>,
    /// Called when Enter is pressed inside the field.
    pub on_submit: EventHandler<()>,
    /// Called with the current contents when the field loses focus.
    pub on_blur: EventHandler<String>,
    #[props(default = "Enter Robux amount".to_string())]
    pub placeholder: String,
}

/// The Robux quantity text field.
pub fn QuantityInput(props: QuantityInputProps) -> Element {
    let value = props.value.clone();
    let blur_value = value.clone();
    rsx! {
        input {
            r#type: "text",
            inputmode: "decimal",
            "aria-label": "Robux amount",
            style: "margin-bottom: 0; width: 100%;",
            placeholder: "{props.placeholder}",
            value: "{value}",
            oninput: move |evt| props.on_input.call(sanitize(&evt.value())),
            onkeydown: move |evt| {
                if evt.key() == Key::Enter {
                    props.on_submit.call(());
                }
            },
            onfocusout: move |_| props.on_blur.call(blur_value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn sanitize_keeps_digits_and_one_decimal_point() {
        assert_eq!(sanitize("1234"), "1234");
        assert_eq!(sanitize("12.34"), "12.34");
        assert_eq!(sanitize("1.2.3"), "1.23");
        assert_eq!(sanitize("12abc"), "12");
        assert_eq!(sanitize("-5"), "5");
        assert_eq!(sanitize(""), "");
    }
}
