//! Shared state for the CropShield desktop app.
//!
//! Provided once by `App` and read by pages through the `use_*` hooks.
//!
//! ## Usage
//!
//! ```ignore
//! let api = use_api();
//! let mut session = use_session();
//!
//! spawn(async move {
//!     if let Ok(s) = api.login(&creds).await {
//!         session.set(Some(s));
//!     }
//! });
//! ```

use cropshield_core::{
    ApiClient, ClaimResult, FarmerSession, PendingVerification, RegistrationNo, WalletConnector,
};
use dioxus::prelude::*;

/// Network-facing services built at startup.
#[derive(Clone, Debug)]
pub struct Services {
    pub api: ApiClient,
    pub wallet: WalletConnector,
}

/// Registration number to prefill on the login page after verification.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginPrefill(pub Option<RegistrationNo>);

/// Hook to access the claim service client.
pub fn use_api() -> ApiClient {
    use_context::<Services>().api
}

/// Hook to access the wallet provider.
pub fn use_wallet() -> WalletConnector {
    use_context::<Services>().wallet
}

/// The logged-in farmer, `None` when logged out.
pub fn use_session() -> Signal<Option<FarmerSession>> {
    use_context::<Signal<Option<FarmerSession>>>()
}

/// Registration awaiting OTP verification.
///
/// Set by Register before navigating to Verify OTP.
pub fn use_pending_verification() -> Signal<Option<PendingVerification>> {
    use_context::<Signal<Option<PendingVerification>>>()
}

/// Latest claim result, read by the payout page.
pub fn use_last_claim() -> Signal<Option<ClaimResult>> {
    use_context::<Signal<Option<ClaimResult>>>()
}

pub fn use_login_prefill() -> Signal<LoginPrefill> {
    use_context::<Signal<LoginPrefill>>()
}
