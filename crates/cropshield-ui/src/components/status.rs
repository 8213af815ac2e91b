//! Request status line shown under each form.

use dioxus::prelude::*;

/// Outcome of the last request a form made.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn class(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "status-line",
            RequestStatus::Loading => "status-line loading",
            RequestStatus::Error(_) => "status-line error",
            RequestStatus::Success(_) => "status-line success",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            RequestStatus::Idle => None,
            RequestStatus::Loading => Some("Submitting…"),
            RequestStatus::Error(m) | RequestStatus::Success(m) => Some(m),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct StatusLineProps {
    pub status: RequestStatus,
}

/// Renders nothing while idle.
#[component]
pub fn StatusLine(props: StatusLineProps) -> Element {
    let class = props.status.class();
    match props.status.message() {
        Some(message) => rsx! {
            div {
                class: "{class}",
                role: "status",
                "{message}"
            }
        },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(RequestStatus::Idle.message(), None);
        assert!(RequestStatus::Loading.is_loading());
        assert_eq!(
            RequestStatus::Error("Invalid OTP".into()).message(),
            Some("Invalid OTP")
        );
        assert_eq!(RequestStatus::Success("ok".into()).class(), "status-line success");
    }
}
