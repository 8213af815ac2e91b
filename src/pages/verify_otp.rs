//! Verify OTP page.

use cropshield_core::{OtpVerification, RegistrationNo};
use cropshield_ui::{Button, Input, RequestStatus, StatusLine};
use dioxus::prelude::*;

use crate::context::{use_api, use_login_prefill, use_pending_verification, LoginPrefill};
use crate::navigation::{after_verify, verify_guard};

#[component]
pub fn VerifyOtp() -> Element {
    let api = use_api();
    let navigator = use_navigator();
    let pending = use_pending_verification();
    let mut prefill = use_login_prefill();

    use_effect(move || {
        if let Some(route) = verify_guard(pending.read().as_ref()) {
            navigator.replace(route);
        }
    });

    let mut registration_no = use_signal(|| {
        pending
            .peek()
            .as_ref()
            .map(|p| p.registration_no.to_string())
            .unwrap_or_default()
    });
    let mut otp = use_signal(|| {
        pending
            .peek()
            .as_ref()
            .and_then(|p| p.otp.clone())
            .unwrap_or_default()
    });
    let demo_otp = pending.read().as_ref().and_then(|p| p.otp.clone());
    let mut status = use_signal(RequestStatus::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status.read().is_loading() {
            return;
        }
        status.set(RequestStatus::Loading);

        let api = api.clone();
        let body = OtpVerification {
            registration_no: RegistrationNo::new(registration_no()),
            otp: otp().trim().to_string(),
        };

        spawn(async move {
            match api.verify_otp(&body).await {
                Ok(outcome) => match after_verify(&outcome, &body.registration_no) {
                    Some((reg, route)) => {
                        status.set(RequestStatus::Success("Verified".to_string()));
                        prefill.set(LoginPrefill(Some(reg)));
                        navigator.push(route);
                    }
                    None => status.set(RequestStatus::Error("OTP not verified".to_string())),
                },
                Err(e) => status.set(RequestStatus::Error(e.to_string())),
            }
        });
    };

    rsx! {
        section { class: "card",
            h2 { class: "page-title", "Verify OTP" }
            if let Some(code) = demo_otp {
                p { class: "hint", "Demo OTP: {code}" }
            }
            form { onsubmit: submit,
                Input {
                    label: "Registration number".to_string(),
                    value: registration_no(),
                    oninput: move |v| registration_no.set(v),
                    required: true,
                }
                Input {
                    id: "otp".to_string(),
                    label: "OTP".to_string(),
                    value: otp(),
                    oninput: move |v| otp.set(v),
                    required: true,
                }
                Button {
                    button_type: "submit".to_string(),
                    busy: status.read().is_loading(),
                    "Verify"
                }
            }
            StatusLine { status: status() }
        }
    }
}
