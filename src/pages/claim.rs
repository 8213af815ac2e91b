//! Claim page.
//!
//! Lists the farmer's lands, collects readings for both models and submits
//! one claim. A small quick-add form creates a land without leaving the page.

use cropshield_core::{
    ApiClient, ClaimRequest, CropType, FarmerId, FarmerSession, LandSummary, Model1Inputs,
    Model2Inputs, NewLand,
};
use cropshield_ui::{
    selected_land, Button, CropSelect, Input, LandSelect, RequestStatus, Select, StatusLine,
};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Model1Fields, Model2Fields, ReadingsDraft};
use crate::context::{use_api, use_last_claim, use_session};
use crate::navigation::{after_claim, session_guard};

/// Assemble the claim body from the page state.
fn build_claim(
    session: &FarmerSession,
    land: &str,
    model1: &ReadingsDraft,
    model2: &ReadingsDraft,
    crop_override: &str,
) -> Result<ClaimRequest, String> {
    let land_id = selected_land(land).ok_or_else(|| "Select a land".to_string())?;
    let model1: Model1Inputs = model1.parse()?;
    let mut model2: Model2Inputs = model2.parse()?;
    model2.crop_type = crop_override.parse::<CropType>().ok();
    Ok(ClaimRequest::for_session(session, land_id, model1, model2))
}

fn load_lands(
    api: ApiClient,
    farmer_id: FarmerId,
    mut lands: Signal<Vec<LandSummary>>,
    mut status: Signal<RequestStatus>,
) {
    spawn(async move {
        match api.list_lands(farmer_id).await {
            Ok(list) => lands.set(list),
            Err(e) => status.set(RequestStatus::Error(e.to_string())),
        }
    });
}

#[component]
pub fn Claim() -> Element {
    let api = use_api();
    let navigator = use_navigator();
    let session = use_session();
    let mut last_claim = use_last_claim();

    let lands: Signal<Vec<LandSummary>> = use_signal(Vec::new);
    let mut land = use_signal(String::new);
    let model1 = use_signal(ReadingsDraft::default);
    let model2 = use_signal(ReadingsDraft::default);
    let mut crop_override = use_signal(String::new);
    let mut status = use_signal(RequestStatus::default);

    let mut quick_name = use_signal(String::new);
    let mut quick_crop = use_signal(CropType::default);
    let mut quick_location = use_signal(String::new);
    let mut quick_status = use_signal(RequestStatus::default);

    let loader = api.clone();
    use_effect(move || {
        let current = session.read().clone();
        if let Some(route) = session_guard(current.as_ref()) {
            navigator.replace(route);
            return;
        }
        if let Some(s) = current {
            load_lands(loader.clone(), s.farmer_id, lands, status);
        }
    });

    let submit_api = api.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status.read().is_loading() {
            return;
        }
        let Some(farmer) = session() else {
            navigator.push(Route::Login {});
            return;
        };
        let request = match build_claim(
            &farmer,
            &land(),
            &model1.read(),
            &model2.read(),
            &crop_override(),
        ) {
            Ok(r) => r,
            Err(msg) => {
                status.set(RequestStatus::Error(msg));
                return;
            }
        };
        status.set(RequestStatus::Loading);

        let api = submit_api.clone();
        spawn(async move {
            match api.submit_claim(&request).await {
                Ok(result) => {
                    tracing::info!(
                        "Claim {} scored {}% payout",
                        result.claim_id,
                        result.payout_percentage
                    );
                    let next = after_claim(&result);
                    last_claim.set(Some(result));
                    status.set(RequestStatus::Idle);
                    navigator.push(next);
                }
                Err(e) => status.set(RequestStatus::Error(e.to_string())),
            }
        });
    };

    let quick_api = api.clone();
    let quick_add = move |_| {
        let Some(farmer) = session() else {
            return;
        };
        if quick_name().trim().is_empty() {
            quick_status.set(RequestStatus::Error("Land name is required".to_string()));
            return;
        }
        quick_status.set(RequestStatus::Loading);

        let api = quick_api.clone();
        let body = NewLand {
            farmer_id: farmer.farmer_id,
            land_name: quick_name().trim().to_string(),
            crop_type: quick_crop(),
            location: quick_location().trim().to_string(),
        };
        spawn(async move {
            match api.create_land(&body).await {
                Ok(_) => {
                    quick_status.set(RequestStatus::Success(format!("Added {}", body.land_name)));
                    quick_name.set(String::new());
                    quick_location.set(String::new());
                    load_lands(api, body.farmer_id, lands, status);
                }
                Err(e) => quick_status.set(RequestStatus::Error(e.to_string())),
            }
        });
    };

    let crop_options = CropType::all()
        .iter()
        .map(|c| (c.as_str().to_string(), c.as_str().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        section { class: "card",
            h2 { class: "page-title", "Submit Claim" }
            form { onsubmit: submit,
                LandSelect {
                    lands: lands(),
                    value: land(),
                    onchange: move |v| land.set(v),
                }
                Model1Fields { draft: model1 }
                Model2Fields { draft: model2 }
                Select {
                    label: "Crop type override".to_string(),
                    value: crop_override(),
                    onchange: move |v| crop_override.set(v),
                    options: crop_options,
                    placeholder: "Use the land's crop".to_string(),
                }
                Button {
                    button_type: "submit".to_string(),
                    busy: status.read().is_loading(),
                    "Submit claim"
                }
            }
            StatusLine { status: status() }
        }

        section { class: "card",
            h3 { class: "section-title", "Quick add land" }
            Input {
                label: "Land name".to_string(),
                value: quick_name(),
                oninput: move |v| quick_name.set(v),
            }
            CropSelect {
                value: quick_crop(),
                onchange: move |c| quick_crop.set(c),
            }
            Input {
                label: "Location".to_string(),
                hint: "optional".to_string(),
                placeholder: "12.97,77.59".to_string(),
                value: quick_location(),
                oninput: move |v| quick_location.set(v),
            }
            Button {
                variant: cropshield_ui::ButtonVariant::Secondary,
                busy: quick_status.read().is_loading(),
                onclick: quick_add,
                "Add land"
            }
            StatusLine { status: quick_status() }
        }
    }
}
