//! Land registration page.
//!
//! `/add-land` and `/land-registration` render the same form.

use cropshield_core::{Attachment, CropType, GeoLocation, LandForm, RegistrationNo};
use cropshield_ui::{parse_optional_f64, Button, CropSelect, Input, RequestStatus, StatusLine};
use dioxus::prelude::*;

use crate::components::ImagePicker;
use crate::context::{use_api, use_session};

#[component]
pub fn AddLand() -> Element {
    rsx! { LandEditor { title: "Add Land".to_string() } }
}

#[component]
pub fn LandRegistration() -> Element {
    rsx! { LandEditor { title: "Land Registration".to_string() } }
}

/// Raw form text before validation.
#[derive(Clone, Debug, PartialEq)]
struct LandDraft {
    registration_no: String,
    land_name: String,
    size_acres: String,
    crop_type: CropType,
    plots_count: String,
    geo_lat: String,
    geo_lon: String,
}

impl Default for LandDraft {
    fn default() -> Self {
        Self {
            registration_no: String::new(),
            land_name: String::new(),
            size_acres: String::new(),
            crop_type: CropType::default(),
            plots_count: "1".to_string(),
            geo_lat: String::new(),
            geo_lon: String::new(),
        }
    }
}

impl LandDraft {
    fn to_form(&self, verification_image: Option<Attachment>) -> Result<LandForm, String> {
        let registration_no = RegistrationNo::new(self.registration_no.as_str());
        if registration_no.is_empty() {
            return Err("Registration number is required".to_string());
        }
        let plots = self.plots_count.trim();
        let plots_count = if plots.is_empty() {
            1
        } else {
            plots
                .parse::<u32>()
                .map_err(|_| format!("'{}' is not a plot count", plots))?
        };
        let geo = match (
            parse_optional_f64(&self.geo_lat)?,
            parse_optional_f64(&self.geo_lon)?,
        ) {
            (Some(lat), Some(lon)) => Some(GeoLocation::new(lat, lon)?),
            (None, None) => None,
            _ => return Err("Enter both latitude and longitude".to_string()),
        };

        Ok(LandForm {
            registration_no,
            land_name: self.land_name.clone(),
            size_acres: parse_optional_f64(&self.size_acres)?,
            crop_type: self.crop_type,
            plots_count,
            verification_image,
            geo,
        })
    }
}

#[component]
fn LandEditor(title: String) -> Element {
    let api = use_api();
    let session = use_session();

    let mut draft = use_signal(|| LandDraft {
        registration_no: session
            .peek()
            .as_ref()
            .and_then(|s| s.registration_no.as_ref())
            .map(|r| r.to_string())
            .unwrap_or_default(),
        ..Default::default()
    });
    let mut image: Signal<Option<Attachment>> = use_signal(|| None);
    let mut status = use_signal(RequestStatus::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status.read().is_loading() {
            return;
        }
        let form = match draft.read().to_form(image()) {
            Ok(form) => form,
            Err(msg) => {
                status.set(RequestStatus::Error(format!("Error: {}", msg)));
                return;
            }
        };
        status.set(RequestStatus::Loading);

        let api = api.clone();
        spawn(async move {
            match api.add_land(&form).await {
                Ok(added) => {
                    let json = serde_json::to_string(&added).unwrap_or_default();
                    status.set(RequestStatus::Success(format!("Added: {}", json)));
                }
                Err(e) => status.set(RequestStatus::Error(format!("Error: {}", e))),
            }
        });
    };

    let d = draft.read().clone();

    rsx! {
        section { class: "card",
            h2 { class: "page-title", "{title}" }
            form { onsubmit: submit,
                Input {
                    label: "Registration number".to_string(),
                    value: d.registration_no,
                    oninput: move |v| draft.write().registration_no = v,
                    required: true,
                }
                Input {
                    label: "Land name".to_string(),
                    value: d.land_name,
                    oninput: move |v| draft.write().land_name = v,
                    required: true,
                }
                Input {
                    label: "Size (acres)".to_string(),
                    input_type: "number".to_string(),
                    value: d.size_acres,
                    oninput: move |v| draft.write().size_acres = v,
                }
                CropSelect {
                    value: d.crop_type,
                    onchange: move |c| draft.write().crop_type = c,
                }
                Input {
                    label: "Plots".to_string(),
                    input_type: "number".to_string(),
                    value: d.plots_count,
                    oninput: move |v| draft.write().plots_count = v,
                }
                div { class: "geo-row",
                    Input {
                        label: "Latitude".to_string(),
                        hint: "optional".to_string(),
                        value: d.geo_lat,
                        oninput: move |v| draft.write().geo_lat = v,
                    }
                    Input {
                        label: "Longitude".to_string(),
                        hint: "optional".to_string(),
                        value: d.geo_lon,
                        oninput: move |v| draft.write().geo_lon = v,
                    }
                }
                ImagePicker {
                    label: "Verification image".to_string(),
                    on_pick: move |a| image.set(a),
                }
                Button {
                    button_type: "submit".to_string(),
                    busy: status.read().is_loading(),
                    "Add land"
                }
            }
            StatusLine { status: status() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> LandDraft {
        LandDraft {
            registration_no: "HBL-2025-3F9A1C".into(),
            land_name: "river plot".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_are_wheat_and_one_plot() {
        let form = draft().to_form(None).unwrap();
        assert_eq!(form.crop_type, CropType::Wheat);
        assert_eq!(form.plots_count, 1);
        assert!(form.geo.is_none());
        assert!(form.size_acres.is_none());
    }

    #[test]
    fn test_geo_needs_both_coordinates() {
        let mut d = draft();
        d.geo_lat = "12.97".into();
        assert_eq!(
            d.to_form(None).unwrap_err(),
            "Enter both latitude and longitude"
        );

        d.geo_lon = "77.59".into();
        let geo = d.to_form(None).unwrap().geo.unwrap();
        assert_eq!(geo.lat, 12.97);
    }

    #[test]
    fn test_registration_number_is_required() {
        let mut d = draft();
        d.registration_no = "  ".into();
        assert!(d.to_form(None).is_err());
    }

    #[test]
    fn test_bad_plot_count_is_rejected() {
        let mut d = draft();
        d.plots_count = "two".into();
        assert!(d.to_form(None).unwrap_err().contains("plot count"));
    }
}
