//! Claim submission and result bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::farmer::FarmerSession;
use super::ids::{ClaimId, FarmerId, LandId, RegistrationNo};
use super::land::CropType;

/// Stress-model inputs ("model1").
///
/// Keys match the columns the stress classifier was trained on. Blank
/// readings are omitted and defaulted server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model1Inputs {
    #[serde(rename = "NDVI", default, skip_serializing_if = "Option::is_none")]
    pub ndvi: Option<f64>,
    #[serde(rename = "SAVI", default, skip_serializing_if = "Option::is_none")]
    pub savi: Option<f64>,
    #[serde(rename = "Chlorophyll_Content", default, skip_serializing_if = "Option::is_none")]
    pub chlorophyll_content: Option<f64>,
    #[serde(rename = "Leaf_Area_Index", default, skip_serializing_if = "Option::is_none")]
    pub leaf_area_index: Option<f64>,
    #[serde(rename = "Temperature", default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(rename = "Humidity", default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(rename = "Rainfall", default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
    #[serde(rename = "Soil_Moisture", default, skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<f64>,
}

/// Payout-model inputs ("model2").
///
/// Shared readings from model1 are copied over by the service, so only the
/// extra columns live here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model2Inputs {
    #[serde(rename = "Expected_Yield", default, skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<f64>,
    #[serde(rename = "Crop_Stress_Indicator", default, skip_serializing_if = "Option::is_none")]
    pub crop_stress_indicator: Option<f64>,
    #[serde(rename = "Canopy_Coverage", default, skip_serializing_if = "Option::is_none")]
    pub canopy_coverage: Option<f64>,
    #[serde(rename = "Pest_Damage", default, skip_serializing_if = "Option::is_none")]
    pub pest_damage: Option<f64>,
    #[serde(rename = "Leaf_Area_Index", default, skip_serializing_if = "Option::is_none")]
    pub leaf_area_index: Option<f64>,
    /// Overrides the crop recorded for the land.
    #[serde(rename = "Crop_Type", default, skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<CropType>,
}

/// Body of `POST /api/claims/submit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<FarmerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<RegistrationNo>,
    pub land_id: LandId,
    pub model1: Model1Inputs,
    pub model2: Model2Inputs,
}

impl ClaimRequest {
    /// Claim on behalf of the logged-in farmer.
    ///
    /// Both identifiers are sent when known so either service variant can
    /// resolve the farmer.
    pub fn for_session(
        session: &FarmerSession,
        land_id: LandId,
        model1: Model1Inputs,
        model2: Model2Inputs,
    ) -> Self {
        Self {
            farmer_id: Some(session.farmer_id),
            registration_no: session.registration_no.clone(),
            land_id,
            model1,
            model2,
        }
    }

    /// Claim identified only by registration number.
    pub fn for_registration(
        registration_no: RegistrationNo,
        land_id: LandId,
        model1: Model1Inputs,
        model2: Model2Inputs,
    ) -> Self {
        Self {
            farmer_id: None,
            registration_no: Some(registration_no),
            land_id,
            model1,
            model2,
        }
    }
}

/// Chain transaction state as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxState {
    Confirmed,
    Reverted,
    Pending,
    Failed(String),
    Unknown,
}

/// On-chain submission or receipt status.
///
/// Returned inline with a claim result (`onchain`) and by
/// `GET /api/claims/{id}/tx_status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    /// `1`, `0` or `"pending"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TxStatus {
    pub fn state(&self) -> TxState {
        if let Some(ref e) = self.error {
            return TxState::Failed(e.clone());
        }
        match &self.status {
            Some(Value::Number(n)) if n.as_i64() == Some(1) => TxState::Confirmed,
            Some(Value::Number(n)) if n.as_i64() == Some(0) => TxState::Reverted,
            Some(Value::String(s)) if s == "pending" => TxState::Pending,
            None if self.tx_hash.is_some() => TxState::Pending,
            _ => TxState::Unknown,
        }
    }
}

/// Response to a claim submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimResult {
    pub claim_id: ClaimId,
    #[serde(deserialize_with = "de_flag")]
    pub is_stressed: bool,
    pub probability: f64,
    /// Percent of the insured amount, 0..=100
    pub payout_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<RegistrationNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_id: Option<LandId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<FarmerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onchain: Option<TxStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<DateTime<Utc>>,
}

impl ClaimResult {
    /// Hash of the on-chain oracle submission, if one was sent.
    pub fn tx_hash(&self) -> Option<&str> {
        self.onchain
            .as_ref()
            .and_then(|o| o.tx_hash.as_deref())
            .filter(|h| !h.is_empty())
    }
}

/// Accepts `true`/`false`, `0`/`1` and their string forms.
fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => match n.as_f64() {
            Some(v) => Ok(v != 0.0),
            None => Err(D::Error::custom("invalid numeric flag")),
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid flag '{}'", other))),
        },
        Value::Null => Ok(false),
        other => Err(D::Error::custom(format!("invalid flag {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_inputs_use_wire_keys_and_skip_blanks() {
        let m1 = Model1Inputs {
            ndvi: Some(0.42),
            soil_moisture: Some(18.0),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&m1).unwrap(),
            serde_json::json!({ "NDVI": 0.42, "Soil_Moisture": 18.0 })
        );

        let m2 = Model2Inputs {
            pest_damage: Some(3.5),
            crop_type: Some(CropType::Maize),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&m2).unwrap(),
            serde_json::json!({ "Pest_Damage": 3.5, "Crop_Type": "Maize" })
        );
    }

    #[test]
    fn test_claim_request_for_session_sends_both_ids() {
        let session: FarmerSession = serde_json::from_value(serde_json::json!({
            "farmer_id": 2, "registration_no": "HBL-2025-00AA11"
        }))
        .unwrap();
        let req = ClaimRequest::for_session(
            &session,
            LandId(5),
            Model1Inputs::default(),
            Model2Inputs::default(),
        );
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "farmer_id": 2,
                "registration_no": "HBL-2025-00AA11",
                "land_id": 5,
                "model1": {},
                "model2": {}
            })
        );
    }

    #[test]
    fn test_claim_result_decodes_integer_flag_and_onchain() {
        let body = serde_json::json!({
            "claim_id": 11,
            "registration_no": "HBL-2025-00AA11",
            "is_stressed": 1,
            "probability": 0.8123,
            "payout_percentage": 64.5,
            "land_id": 5,
            "farmer_id": 2,
            "onchain": { "tx_hash": "0xdeadbeef" },
            "ts": "2025-03-01T10:20:30.123456Z"
        });
        let result: ClaimResult = serde_json::from_value(body).unwrap();
        assert!(result.is_stressed);
        assert_eq!(result.claim_id, ClaimId(11));
        assert_eq!(result.tx_hash(), Some("0xdeadbeef"));
        assert!(result.ts.is_some());
    }

    #[test]
    fn test_claim_result_minimal_shape() {
        let body = serde_json::json!({
            "claim_id": 1, "is_stressed": false, "probability": 0.1, "payout_percentage": 0.0
        });
        let result: ClaimResult = serde_json::from_value(body).unwrap();
        assert!(!result.is_stressed);
        assert!(result.tx_hash().is_none());
    }

    #[test]
    fn test_tx_state_mapping() {
        let confirmed = TxStatus {
            status: Some(serde_json::json!(1)),
            ..Default::default()
        };
        assert_eq!(confirmed.state(), TxState::Confirmed);

        let reverted = TxStatus {
            status: Some(serde_json::json!(0)),
            ..Default::default()
        };
        assert_eq!(reverted.state(), TxState::Reverted);

        let pending = TxStatus {
            tx_hash: Some("0x1".into()),
            ..Default::default()
        };
        assert_eq!(pending.state(), TxState::Pending);

        let failed = TxStatus {
            error: Some("nonce too low".into()),
            ..Default::default()
        };
        assert_eq!(failed.state(), TxState::Failed("nonce too low".into()));

        assert_eq!(TxStatus::default().state(), TxState::Unknown);
    }
}
