//! Where each page goes after its request completes.
//!
//! Kept free of hooks so the flow can be checked without a renderer.

use cropshield_core::{
    ClaimResult, FarmerSession, PendingVerification, Registration, RegistrationNo, VerifyOutcome,
};

use crate::app::Route;

/// After a successful registration the farmer verifies the OTP.
pub fn after_register(registration: &Registration) -> (PendingVerification, Route) {
    (PendingVerification::from(registration), Route::VerifyOtp {})
}

/// Verify OTP without a registration number sends the farmer back to register.
pub fn verify_guard(pending: Option<&PendingVerification>) -> Option<Route> {
    match pending {
        Some(p) if !p.registration_no.is_empty() => None,
        _ => Some(Route::Register {}),
    }
}

/// A verified registration continues to login with the number prefilled.
pub fn after_verify(
    outcome: &VerifyOutcome,
    registration_no: &RegistrationNo,
) -> Option<(RegistrationNo, Route)> {
    outcome
        .verified
        .then(|| (registration_no.clone(), Route::Login {}))
}

pub fn after_login(_session: &FarmerSession) -> Route {
    Route::Claim {}
}

/// Claim and land pages that need a farmer id require a session.
pub fn session_guard(session: Option<&FarmerSession>) -> Option<Route> {
    match session {
        Some(_) => None,
        None => Some(Route::Login {}),
    }
}

pub fn after_claim(_result: &ClaimResult) -> Route {
    Route::Payout {}
}

pub fn after_logout() -> Route {
    Route::Login {}
}
