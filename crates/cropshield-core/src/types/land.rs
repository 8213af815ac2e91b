//! Land parcel bodies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ids::{FarmerId, LandId, RegistrationNo};
use crate::attachment::Attachment;

/// Crops the payout model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CropType {
    #[default]
    Wheat,
    Maize,
    Rice,
}

impl CropType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Wheat => "Wheat",
            CropType::Maize => "Maize",
            CropType::Rice => "Rice",
        }
    }

    pub fn all() -> &'static [CropType] {
        &[CropType::Wheat, CropType::Maize, CropType::Rice]
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CropType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wheat" => Ok(CropType::Wheat),
            "maize" => Ok(CropType::Maize),
            "rice" => Ok(CropType::Rice),
            _ => Err(format!(
                "Invalid crop type '{}'. Must be one of: Wheat, Maize, Rice",
                s
            )),
        }
    }
}

/// Point location of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude {} out of range", lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(format!("longitude {} out of range", lon));
        }
        Ok(Self { lat, lon })
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lon)
    }
}

/// Multipart land registration (`POST /api/add-land`).
#[derive(Debug, Clone, PartialEq)]
pub struct LandForm {
    pub registration_no: RegistrationNo,
    pub land_name: String,
    pub size_acres: Option<f64>,
    pub crop_type: CropType,
    pub plots_count: u32,
    pub verification_image: Option<Attachment>,
    pub geo: Option<GeoLocation>,
}

impl Default for LandForm {
    fn default() -> Self {
        Self {
            registration_no: RegistrationNo::default(),
            land_name: String::new(),
            size_acres: None,
            crop_type: CropType::Wheat,
            plots_count: 1,
            verification_image: None,
            geo: None,
        }
    }
}

impl LandForm {
    /// Text fields in submission order. Geolocation is sent only when captured.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("registration_no", self.registration_no.to_string()),
            ("land_name", self.land_name.trim().to_string()),
        ];
        if let Some(size) = self.size_acres {
            out.push(("size_acres", size.to_string()));
        }
        out.push(("crop_type", self.crop_type.to_string()));
        out.push(("plots_count", self.plots_count.to_string()));
        if let Some(geo) = self.geo {
            out.push(("geo_lat", geo.lat.to_string()));
            out.push(("geo_lon", geo.lon.to_string()));
        }
        out
    }
}

/// JSON land creation used by the quick-add flow (`POST /api/lands`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLand {
    pub farmer_id: FarmerId,
    pub land_name: String,
    pub crop_type: CropType,
    pub location: String,
}

/// Response to `POST /api/add-land`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedLand {
    pub land_id: LandId,
    pub land_name: String,
}

/// Entry of `GET /api/lands?farmer_id=…`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandSummary {
    pub id: LandId,
    pub land_name: String,
    pub crop_type: String,
    #[serde(default)]
    pub geo_lat: Option<f64>,
    #[serde(default)]
    pub geo_lon: Option<f64>,
}

impl LandSummary {
    /// Option label used by land pickers.
    pub fn label(&self) -> String {
        format!("{} — {}", self.land_name, self.crop_type)
    }

    /// Crop type if the stored value is one the models know.
    pub fn crop(&self) -> Option<CropType> {
        self.crop_type.parse().ok()
    }

    pub fn location(&self) -> Option<GeoLocation> {
        match (self.geo_lat, self.geo_lon) {
            (Some(lat), Some(lon)) => Some(GeoLocation { lat, lon }),
            _ => None,
        }
    }
}
