//! Wallet connect button.
//!
//! Asks the wallet provider for an account and hands the address to the
//! surrounding form.

use cropshield_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::use_wallet;

#[component]
pub fn WalletConnect(on_connect: EventHandler<String>) -> Element {
    let wallet = use_wallet();
    let mut connecting = use_signal(|| false);
    let mut connected: Signal<Option<String>> = use_signal(|| None);
    let mut error = use_signal(|| Option::<String>::None);

    let connect = move |_| {
        let wallet = wallet.clone();
        connecting.set(true);
        error.set(None);

        spawn(async move {
            match wallet.connect().await {
                Ok(address) => {
                    connected.set(Some(address.short()));
                    on_connect.call(address.to_string());
                }
                Err(e) => {
                    tracing::warn!("Wallet connect failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            connecting.set(false);
        });
    };

    rsx! {
        div { class: "wallet-connect",
            Button {
                variant: ButtonVariant::Secondary,
                busy: connecting(),
                busy_label: "Connecting…".to_string(),
                onclick: connect,
                {match connected() {
                    Some(short) => rsx! { "Connected {short}" },
                    None => rsx! { "Connect Wallet" },
                }}
            }
            if let Some(err) = error() {
                span { class: "input-warning", "{err}" }
            }
        }
    }
}
