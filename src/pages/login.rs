//! Login page.

use cropshield_core::Credentials;
use cropshield_ui::{Button, Input, RequestStatus, StatusLine};
use dioxus::prelude::*;

use crate::context::{use_api, use_login_prefill, use_session};
use crate::navigation::after_login;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum LoginMode {
    #[default]
    RegistrationNo,
    Email,
}

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let navigator = use_navigator();
    let mut session = use_session();
    let prefill = use_login_prefill();

    let mut mode = use_signal(LoginMode::default);
    let mut registration_no = use_signal(|| {
        prefill
            .peek()
            .0
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_default()
    });
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(RequestStatus::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status.read().is_loading() {
            return;
        }
        status.set(RequestStatus::Loading);

        let api = api.clone();
        let credentials = match mode() {
            LoginMode::RegistrationNo => Credentials::registration(registration_no().as_str()),
            LoginMode::Email => Credentials::email(email().trim(), password()),
        };

        spawn(async move {
            match api.login(&credentials).await {
                Ok(farmer) => {
                    tracing::info!("Logged in as farmer {}", farmer.farmer_id);
                    let next = after_login(&farmer);
                    session.set(Some(farmer));
                    status.set(RequestStatus::Idle);
                    navigator.push(next);
                }
                Err(e) => status.set(RequestStatus::Error(e.to_string())),
            }
        });
    };

    rsx! {
        section { class: "card",
            h2 { class: "page-title", "Login" }

            div { class: "mode-switch",
                button {
                    r#type: "button",
                    class: if mode() == LoginMode::RegistrationNo { "pill selected" } else { "pill" },
                    onclick: move |_| mode.set(LoginMode::RegistrationNo),
                    "Registration number"
                }
                button {
                    r#type: "button",
                    class: if mode() == LoginMode::Email { "pill selected" } else { "pill" },
                    onclick: move |_| mode.set(LoginMode::Email),
                    "Email"
                }
            }

            form { onsubmit: submit,
                if mode() == LoginMode::RegistrationNo {
                    Input {
                        label: "Registration number".to_string(),
                        placeholder: "HBL-2025-XXXXXX".to_string(),
                        value: registration_no(),
                        oninput: move |v| registration_no.set(v),
                        required: true,
                    }
                } else {
                    Input {
                        label: "Email".to_string(),
                        input_type: "email".to_string(),
                        value: email(),
                        oninput: move |v| email.set(v),
                        required: true,
                    }
                    Input {
                        label: "Password".to_string(),
                        input_type: "password".to_string(),
                        value: password(),
                        oninput: move |v| password.set(v),
                        required: true,
                    }
                }
                Button {
                    button_type: "submit".to_string(),
                    busy: status.read().is_loading(),
                    "Login"
                }
            }
            StatusLine { status: status() }
        }
    }
}
