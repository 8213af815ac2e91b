//! Payout page.
//!
//! Shows the last claim result with the claimable amount, the explorer link
//! when the oracle transaction was sent, and whatever the service reports
//! for the claim's on-chain status.

use cropshield_core::{PayoutSummary, TxState};
use cropshield_ui::{Button, ButtonVariant, RequestStatus, StatusLine};
use dioxus::prelude::*;

use crate::context::{use_api, use_last_claim};

fn state_label(state: &TxState) -> String {
    match state {
        TxState::Confirmed => "confirmed".to_string(),
        TxState::Reverted => "reverted".to_string(),
        TxState::Pending => "pending".to_string(),
        TxState::Failed(e) => format!("failed: {}", e),
        TxState::Unknown => "unknown".to_string(),
    }
}

#[component]
pub fn Payout() -> Element {
    let api = use_api();
    let last_claim = use_last_claim();
    let mut tx_json: Signal<Option<String>> = use_signal(|| None);
    let mut status = use_signal(RequestStatus::default);

    let Some(result) = last_claim() else {
        return rsx! {
            section { class: "card",
                h2 { class: "page-title", "Payout" }
                p { "No result" }
            }
        };
    };

    let summary = PayoutSummary::new(&result, api.config());
    let claim_id = summary.claim_id;

    let check_status = move |_| {
        let api = api.clone();
        status.set(RequestStatus::Loading);
        spawn(async move {
            match api.tx_status(claim_id).await {
                Ok(tx) => {
                    let json = serde_json::to_string_pretty(&tx).unwrap_or_default();
                    tx_json.set(Some(json));
                    status.set(RequestStatus::Success(format!(
                        "Transaction {}",
                        state_label(&tx.state())
                    )));
                }
                Err(e) => status.set(RequestStatus::Error(e.to_string())),
            }
        });
    };

    rsx! {
        section { class: "card",
            h2 { class: "page-title", "Payout" }
            dl { class: "payout",
                dt { "Claim ID" }
                dd { "{summary.claim_id}" }
                dt { "Is stressed" }
                dd { "{summary.stressed_label()}" }
                dt { "Probability" }
                dd { "{summary.probability}" }
                dt { "Payout %" }
                dd { "{summary.payout_percentage}%" }
                dt { "Claimable amount" }
                dd { class: "amount", "{summary.amount}" span { class: "hint", " of {summary.insured_amount}" } }
            }

            if let (Some(hash), Some(url)) = (summary.tx_hash.clone(), summary.explorer_url.clone()) {
                p { class: "onchain",
                    "On-chain tx: "
                    a { href: "{url}", target: "_blank", "{hash}" }
                }
            }
            if let Some(err) = summary.onchain_error.clone() {
                p { class: "status-line error", "On-chain submission failed: {err}" }
            }
            Button {
                variant: ButtonVariant::Secondary,
                busy: status.read().is_loading(),
                onclick: check_status,
                "Check on-chain status"
            }

            StatusLine { status: status() }
            if let Some(json) = tx_json() {
                pre { class: "tx-json", "{json}" }
            }
        }
    }
}
