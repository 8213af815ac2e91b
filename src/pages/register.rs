//! Register page.
//!
//! Two variants post to the same endpoint: the farmer form with identity
//! photos (multipart) and the email/password account form (JSON). Success
//! carries the registration number and demo OTP over to Verify OTP.

use cropshield_core::{AccountRegistration, Attachment, RegistrationForm};
use cropshield_ui::{Button, Input, RequestStatus, StatusLine};
use dioxus::prelude::*;

use crate::components::{ImagePicker, WalletConnect};
use crate::context::{use_api, use_pending_verification};
use crate::navigation::after_register;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum RegisterMode {
    #[default]
    Farmer,
    Account,
}

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let navigator = use_navigator();
    let mut pending = use_pending_verification();

    let mut mode = use_signal(RegisterMode::default);
    let mut name = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut aadhaar = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut wallet_address = use_signal(String::new);
    let mut gov_id: Signal<Option<Attachment>> = use_signal(|| None);
    let mut selfie: Signal<Option<Attachment>> = use_signal(|| None);
    let mut status = use_signal(RequestStatus::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status.read().is_loading() {
            return;
        }
        status.set(RequestStatus::Loading);

        let api = api.clone();
        let farmer = RegistrationForm {
            name: name(),
            mobile: mobile(),
            aadhaar: aadhaar(),
            email: email(),
            wallet_address: wallet_address(),
            gov_id: gov_id(),
            selfie: selfie(),
        };
        let account = AccountRegistration {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            wallet_address: wallet_address().trim().to_string(),
        };
        let mode = mode();

        spawn(async move {
            let result = match mode {
                RegisterMode::Farmer => api.register(&farmer).await,
                RegisterMode::Account => api.register_account(&account).await,
            };
            match result {
                Ok(registration) => {
                    tracing::info!("Registered {}", registration.registration_no);
                    status.set(RequestStatus::Success(format!(
                        "Registered: {}",
                        registration.registration_no
                    )));
                    let (verification, route) = after_register(&registration);
                    pending.set(Some(verification));
                    navigator.push(route);
                }
                Err(e) => status.set(RequestStatus::Error(e.to_string())),
            }
        });
    };

    rsx! {
        section { class: "card",
            h2 { class: "page-title", "Register" }

            div { class: "mode-switch",
                button {
                    r#type: "button",
                    class: if mode() == RegisterMode::Farmer { "pill selected" } else { "pill" },
                    onclick: move |_| mode.set(RegisterMode::Farmer),
                    "Farmer (Aadhaar)"
                }
                button {
                    r#type: "button",
                    class: if mode() == RegisterMode::Account { "pill selected" } else { "pill" },
                    onclick: move |_| mode.set(RegisterMode::Account),
                    "Email account"
                }
            }

            form { onsubmit: submit,
                Input {
                    label: "Name".to_string(),
                    value: name(),
                    oninput: move |v| name.set(v),
                    required: true,
                }
                if mode() == RegisterMode::Farmer {
                    Input {
                        label: "Mobile".to_string(),
                        input_type: "tel".to_string(),
                        value: mobile(),
                        oninput: move |v| mobile.set(v),
                        required: true,
                    }
                    Input {
                        label: "Aadhaar".to_string(),
                        value: aadhaar(),
                        oninput: move |v| aadhaar.set(v),
                        required: true,
                    }
                    Input {
                        label: "Email".to_string(),
                        hint: "optional".to_string(),
                        input_type: "email".to_string(),
                        value: email(),
                        oninput: move |v| email.set(v),
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

                div { class: "wallet-row",
                    Input {
                        label: "Wallet address".to_string(),
                        hint: "optional".to_string(),
                        placeholder: "0x…".to_string(),
                        value: wallet_address(),
                        oninput: move |v| wallet_address.set(v),
                    }
                    WalletConnect { on_connect: move |addr| wallet_address.set(addr) }
                }

                if mode() == RegisterMode::Farmer {
                    ImagePicker {
                        label: "Government ID photo".to_string(),
                        on_pick: move |a| gov_id.set(a),
                    }
                    ImagePicker {
                        label: "Selfie".to_string(),
                        on_pick: move |a| selfie.set(a),
                    }
                }

                Button {
                    button_type: "submit".to_string(),
                    busy: status.read().is_loading(),
                    "Register"
                }
            }
            StatusLine { status: status() }
        }
    }
}
