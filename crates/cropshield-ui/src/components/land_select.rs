//! Land and crop pickers.

use cropshield_core::{CropType, LandId, LandSummary};
use dioxus::prelude::*;

use super::input::Select;

/// `(value, text)` options for a land picker.
pub fn land_options(lands: &[LandSummary]) -> Vec<(String, String)> {
    lands
        .iter()
        .map(|l| (l.id.to_string(), l.label()))
        .collect()
}

/// Selected land from a picker value; empty means none chosen.
pub fn selected_land(value: &str) -> Option<LandId> {
    value.trim().parse().ok()
}

#[derive(Clone, PartialEq, Props)]
pub struct LandSelectProps {
    pub lands: Vec<LandSummary>,
    /// Selected land id as text, empty when none
    pub value: String,
    pub onchange: EventHandler<String>,
}

#[component]
pub fn LandSelect(props: LandSelectProps) -> Element {
    rsx! {
        Select {
            label: "Land".to_string(),
            value: props.value.clone(),
            onchange: props.onchange,
            options: land_options(&props.lands),
            placeholder: "Select land".to_string(),
            required: true,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CropSelectProps {
    pub value: CropType,
    pub onchange: EventHandler<CropType>,
    #[props(default = "Crop type".to_string())]
    pub label: String,
}

#[component]
pub fn CropSelect(props: CropSelectProps) -> Element {
    let options = CropType::all()
        .iter()
        .map(|c| (c.as_str().to_string(), c.as_str().to_string()))
        .collect();
    let onchange = props.onchange;

    rsx! {
        Select {
            label: props.label.clone(),
            value: props.value.as_str().to_string(),
            options: options,
            onchange: move |v: String| {
                if let Ok(crop) = v.parse::<CropType>() {
                    onchange.call(crop);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn land(id: i64, name: &str, crop: &str) -> LandSummary {
        LandSummary {
            id: LandId(id),
            land_name: name.into(),
            crop_type: crop.into(),
            geo_lat: None,
            geo_lon: None,
        }
    }

    #[test]
    fn test_options_use_ids_and_labels() {
        let opts = land_options(&[land(3, "north field", "Wheat")]);
        assert_eq!(opts, vec![("3".to_string(), "north field — Wheat".to_string())]);
    }

    #[test]
    fn test_empty_selection_is_none() {
        assert_eq!(selected_land(""), None);
        assert_eq!(selected_land("12"), Some(LandId(12)));
    }
}
