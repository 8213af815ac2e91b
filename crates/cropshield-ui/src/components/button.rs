//! Button Components
//!
//! - Primary: form submit
//! - Secondary: side actions (connect wallet, pick a file)
//! - Danger: logout
//! - Link: nav entries rendered as buttons

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Link,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Link => "btn-link",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Request in flight; disables the button and shows `busy_label`
    #[props(default = false)]
    pub busy: bool,
    #[props(default = "Please wait…".to_string())]
    pub busy_label: String,
    /// button, submit or reset
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         button_type: "submit".to_string(),
///         busy: loading(),
///         "Register"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());
    let disabled = props.disabled || props.busy;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.busy {
                "{props.busy_label}"
            } else {
                {props.children}
            }
        }
    }
}

pub(crate) fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Danger.class(), "btn-danger");
        assert_eq!(ButtonVariant::Link.class(), "btn-link");
    }

    #[test]
    fn test_button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn test_extra_classes_are_appended() {
        assert_eq!(join_class("btn-primary", None), "btn-primary");
        assert_eq!(join_class("btn-primary", Some("  ")), "btn-primary");
        assert_eq!(join_class("btn-primary", Some("wide")), "btn-primary wide");
    }
}
