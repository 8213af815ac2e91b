//! Farmer registration, verification and login bodies.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::{FarmerId, LandId, RegistrationNo};
use crate::attachment::Attachment;

/// Multipart registration form with optional identity photos.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub mobile: String,
    pub aadhaar: String,
    pub email: String,
    pub wallet_address: String,
    pub gov_id: Option<Attachment>,
    pub selfie: Option<Attachment>,
}

impl RegistrationForm {
    /// Text fields in submission order.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.trim().to_string()),
            ("mobile", self.mobile.trim().to_string()),
            ("aadhaar", self.aadhaar.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("wallet_address", self.wallet_address.trim().to_string()),
        ]
    }

    /// File parts keyed by the form field the service reads them from.
    pub fn file_fields(&self) -> Vec<(&'static str, &Attachment)> {
        let mut out = Vec::new();
        if let Some(ref gov) = self.gov_id {
            out.push(("gov_id_file", gov));
        }
        if let Some(ref selfie) = self.selfie {
            out.push(("selfie_file", selfie));
        }
        out
    }
}

/// JSON registration used by the email/password account flow.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct AccountRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub wallet_address: String,
}

impl fmt::Debug for AccountRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountRegistration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("wallet_address", &self.wallet_address)
            .finish()
    }
}

/// Response to a successful registration.
///
/// The OTP is only returned in the clear because the service is a prototype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub registration_no: RegistrationNo,
    #[serde(default)]
    pub otp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Registration awaiting OTP verification.
///
/// Carried from the register step to the verify step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingVerification {
    pub registration_no: RegistrationNo,
    #[serde(default)]
    pub otp: Option<String>,
}

impl From<&Registration> for PendingVerification {
    fn from(r: &Registration) -> Self {
        Self {
            registration_no: r.registration_no.clone(),
            otp: r.otp.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtpVerification {
    pub registration_no: RegistrationNo,
    pub otp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOutcome {
    #[serde(default)]
    pub verified: bool,
}

/// Login credentials for either prototype variant.
#[derive(Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Credentials {
    RegistrationNo {
        registration_no: RegistrationNo,
    },
    Email {
        email: String,
        password: String,
    },
}

impl Credentials {
    pub fn registration(reg: impl Into<RegistrationNo>) -> Self {
        Credentials::RegistrationNo {
            registration_no: reg.into(),
        }
    }

    pub fn email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Email {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::RegistrationNo { registration_no } => f
                .debug_struct("RegistrationNo")
                .field("registration_no", registration_no)
                .finish(),
            Credentials::Email { email, .. } => f
                .debug_struct("Email")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Land entry embedded in the login response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLand {
    pub id: LandId,
    pub land_name: String,
    pub crop_type: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// The logged-in farmer record returned by `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerSession {
    pub farmer_id: FarmerId,
    #[serde(default)]
    pub registration_no: Option<RegistrationNo>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub lands: Vec<SessionLand>,
}

impl FarmerSession {
    /// Name to greet the farmer with, falling back to the registration number.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.registration_no.as_ref().map(|r| r.to_string()))
            .unwrap_or_else(|| format!("farmer #{}", self.farmer_id))
    }
}
