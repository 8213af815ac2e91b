use cropshield_core::{ClaimResult, FarmerSession, PendingVerification};
use dioxus::prelude::*;

use crate::components::NavHeader;
use crate::context::LoginPrefill;
use crate::pages::{AddLand, Claim, LandRegistration, Login, Payout, Register, VerifyOtp};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Redirects to login
/// - `/register`, `/verify-otp`, `/login` - Onboarding
/// - `/add-land`, `/land-registration` - Same land form, two entry points
/// - `/claim`, `/payout` - Claim submission and its result
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[layout(Shell)]
        #[route("/register")]
        Register {},
        #[route("/verify-otp")]
        VerifyOtp {},
        #[route("/login")]
        Login {},
        #[route("/add-land")]
        AddLand {},
        #[route("/land-registration")]
        LandRegistration {},
        #[route("/claim")]
        Claim {},
        #[route("/payout")]
        Payout {},
}

/// Root application component.
///
/// Services arrive through the launch context; this provides the shared
/// signals pages use to hand state to each other.
#[component]
pub fn App() -> Element {
    let session: Signal<Option<FarmerSession>> = use_signal(|| None);
    let pending: Signal<Option<PendingVerification>> = use_signal(|| None);
    let last_claim: Signal<Option<ClaimResult>> = use_signal(|| None);
    let prefill: Signal<LoginPrefill> = use_signal(LoginPrefill::default);

    use_context_provider(|| session);
    use_context_provider(|| pending);
    use_context_provider(|| last_claim);
    use_context_provider(|| prefill);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Layout wrapping every page with the navigation bar.
#[component]
fn Shell() -> Element {
    rsx! {
        NavHeader {}
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}
