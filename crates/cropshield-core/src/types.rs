//! Core types for CropShield
//!
//! These mirror the JSON bodies exchanged with the claim service. Field names
//! follow the wire format; Rust names are snake_case with serde renames where
//! the service uses the scoring models' column names.

mod claim;
mod farmer;
mod ids;
mod land;

pub use claim::{ClaimRequest, ClaimResult, Model1Inputs, Model2Inputs, TxState, TxStatus};
pub use farmer::{
    AccountRegistration, Credentials, FarmerSession, OtpVerification, PendingVerification,
    Registration, RegistrationForm, SessionLand, VerifyOutcome,
};
pub use ids::{ClaimId, FarmerId, LandId, RegistrationNo};
pub use land::{AddedLand, CropType, GeoLocation, LandForm, LandSummary, NewLand};
