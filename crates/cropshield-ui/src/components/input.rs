//! Input Field Components
//!
//! Labelled text, number and select controls. Number inputs keep the raw
//! text so a blank field stays blank instead of turning into `0`.

use dioxus::prelude::*;

use super::button::join_class;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Shown after the label, e.g. "optional"
    #[props(default)]
    pub hint: Option<String>,
    /// text, email, password, tel
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Used for label association; derived from the label when absent
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled text input.
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Name".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = field_id(props.id.as_deref(), props.label.as_deref(), "input");
    let input_class = join_class("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the NumberInput component
#[derive(Clone, PartialEq, Props)]
pub struct NumberInputProps {
    /// Raw text of the field
    pub value: String,
    pub oninput: EventHandler<String>,
    pub label: String,
    #[props(default = "any".to_string())]
    pub step: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Numeric input that shows an inline warning for unparseable text.
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let id = field_id(props.id.as_deref(), Some(&props.label), "number");
    let invalid = parse_optional_f64(&props.value).is_err();

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{id}", "{props.label}" }
            input {
                id: "{id}",
                class: if invalid { "input-field invalid" } else { "input-field" },
                r#type: "number",
                step: "{props.step}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
            if invalid {
                span { class: "input-warning", "not a number" }
            }
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub value: String,
    pub onchange: EventHandler<String>,
    pub label: String,
    /// `(value, text)` pairs
    pub options: Vec<(String, String)>,
    /// First entry with an empty value, e.g. "Select land"
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub id: Option<String>,
}

#[component]
pub fn Select(props: SelectProps) -> Element {
    let id = field_id(props.id.as_deref(), Some(&props.label), "select");

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{id}", "{props.label}" }
            select {
                id: "{id}",
                class: "input-field",
                value: "{props.value}",
                required: props.required,
                onchange: move |e| props.onchange.call(e.value()),
                if let Some(placeholder) = &props.placeholder {
                    option { value: "", "{placeholder}" }
                }
                for (value, text) in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.value,
                        "{text}"
                    }
                }
            }
        }
    }
}

/// Parse a numeric field; blank means "not provided".
pub fn parse_optional_f64(raw: &str) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| format!("'{}' is not a number", raw))
}

/// Element id from an explicit id or the label text.
fn field_id(id: Option<&str>, label: Option<&str>, prefix: &str) -> String {
    if let Some(id) = id {
        return id.to_string();
    }
    let slug: String = label
        .unwrap_or("")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("{}-{}", prefix, slug.trim_matches('-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_blank_number_is_none() {
        assert_eq!(parse_optional_f64(""), Ok(None));
        assert_eq!(parse_optional_f64("   "), Ok(None));
    }

    #[test]
    fn test_numbers_parse() {
        assert_eq!(parse_optional_f64("0.42"), Ok(Some(0.42)));
        assert_eq!(parse_optional_f64(" -3 "), Ok(Some(-3.0)));
        assert!(parse_optional_f64("abc").is_err());
        assert!(parse_optional_f64("inf").is_err());
    }

    #[test]
    fn test_ids_come_from_labels() {
        assert_eq!(field_id(None, Some("Soil Moisture"), "number"), "number-soil-moisture");
        assert_eq!(field_id(Some("otp"), Some("OTP"), "input"), "otp");
    }

    proptest! {
        #[test]
        fn finite_values_survive_text(v in -1.0e9f64..1.0e9) {
            prop_assert_eq!(parse_optional_f64(&v.to_string()), Ok(Some(v)));
        }
    }
}
