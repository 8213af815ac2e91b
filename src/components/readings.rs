//! Sensor reading fields for the two scoring models.
//!
//! Values are kept as typed text keyed by the wire name, so blank fields
//! are left out of the request and the service fills its defaults.

use std::collections::BTreeMap;

use cropshield_ui::{parse_optional_f64, NumberInput};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// `(wire key, label)` for model1.
pub const MODEL1_FIELDS: &[(&str, &str)] = &[
    ("NDVI", "NDVI"),
    ("SAVI", "SAVI"),
    ("Chlorophyll_Content", "Chlorophyll content"),
    ("Leaf_Area_Index", "Leaf area index"),
    ("Temperature", "Temperature (°C)"),
    ("Humidity", "Humidity (%)"),
    ("Rainfall", "Rainfall (mm)"),
    ("Soil_Moisture", "Soil moisture (%)"),
];

/// `(wire key, label)` for the model2 extras.
pub const MODEL2_FIELDS: &[(&str, &str)] = &[
    ("Expected_Yield", "Expected yield (t/acre)"),
    ("Crop_Stress_Indicator", "Crop stress indicator"),
    ("Canopy_Coverage", "Canopy coverage (%)"),
    ("Pest_Damage", "Pest damage (%)"),
    ("Leaf_Area_Index", "Leaf area index (optional)"),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadingsDraft(BTreeMap<&'static str, String>);

impl ReadingsDraft {
    pub fn get(&self, key: &str) -> String {
        self.0.get(key).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, key: &'static str, value: String) {
        self.0.insert(key, value);
    }

    /// Parse into a model input struct. Blank fields are omitted.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, String> {
        let mut obj = Map::new();
        for (key, raw) in &self.0 {
            if let Some(v) = parse_optional_f64(raw).map_err(|e| format!("{}: {}", key, e))? {
                obj.insert(key.to_string(), Value::from(v));
            }
        }
        serde_json::from_value(Value::Object(obj)).map_err(|e| e.to_string())
    }
}

#[derive(Clone, PartialEq, Props)]
struct ReadingFieldsProps {
    title: String,
    id_prefix: String,
    fields: &'static [(&'static str, &'static str)],
    draft: Signal<ReadingsDraft>,
}

#[component]
fn ReadingFields(props: ReadingFieldsProps) -> Element {
    let mut draft = props.draft;

    rsx! {
        fieldset { class: "readings",
            legend { "{props.title}" }
            div { class: "readings-grid",
                for (key, label) in props.fields.iter().copied() {
                    NumberInput {
                        key: "{key}",
                        id: format!("{}-{}", props.id_prefix, key.to_lowercase()),
                        label: label.to_string(),
                        value: draft.read().get(key),
                        oninput: move |v: String| draft.write().set(key, v),
                    }
                }
            }
        }
    }
}

/// Stress-model readings.
#[component]
pub fn Model1Fields(draft: Signal<ReadingsDraft>) -> Element {
    rsx! {
        ReadingFields {
            title: "Field readings".to_string(),
            id_prefix: "m1".to_string(),
            fields: MODEL1_FIELDS,
            draft: draft,
        }
    }
}

/// Payout-model extras.
#[component]
pub fn Model2Fields(draft: Signal<ReadingsDraft>) -> Element {
    rsx! {
        ReadingFields {
            title: "Yield and damage".to_string(),
            id_prefix: "m2".to_string(),
            fields: MODEL2_FIELDS,
            draft: draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropshield_core::{Model1Inputs, Model2Inputs};

    #[test]
    fn test_blank_draft_parses_to_empty_inputs() {
        let m1: Model1Inputs = ReadingsDraft::default().parse().unwrap();
        assert_eq!(m1, Model1Inputs::default());
    }

    #[test]
    fn test_filled_fields_map_to_wire_keys() {
        let mut draft = ReadingsDraft::default();
        draft.set("NDVI", "0.42".into());
        draft.set("Soil_Moisture", " 31 ".into());
        draft.set("Rainfall", "".into());

        let m1: Model1Inputs = draft.parse().unwrap();
        assert_eq!(m1.ndvi, Some(0.42));
        assert_eq!(m1.soil_moisture, Some(31.0));
        assert_eq!(m1.rainfall, None);
    }

    #[test]
    fn test_bad_number_names_the_field() {
        let mut draft = ReadingsDraft::default();
        draft.set("Pest_Damage", "lots".into());
        let err = draft.parse::<Model2Inputs>().unwrap_err();
        assert!(err.starts_with("Pest_Damage"));
    }

    #[test]
    fn test_field_keys_are_known_to_the_models() {
        for (key, _) in MODEL1_FIELDS {
            let mut draft = ReadingsDraft::default();
            draft.set(key, "1".into());
            let m1: Model1Inputs = draft.parse().unwrap();
            assert_ne!(m1, Model1Inputs::default(), "{key}");
        }
        for (key, _) in MODEL2_FIELDS {
            let mut draft = ReadingsDraft::default();
            draft.set(key, "1".into());
            let m2: Model2Inputs = draft.parse().unwrap();
            assert_ne!(m2, Model2Inputs::default(), "{key}");
        }
    }
}
