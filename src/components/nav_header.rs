//! Navigation Header Component
//!
//! App title, page links, and the logged-in farmer with a logout button.

use cropshield_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_last_claim, use_session};
use crate::navigation::after_logout;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Register,
    Login,
    AddLand,
    Claim,
}

impl NavLocation {
    pub const ALL: [NavLocation; 4] = [
        NavLocation::Register,
        NavLocation::Login,
        NavLocation::AddLand,
        NavLocation::Claim,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Register => "Register",
            NavLocation::Login => "Login",
            NavLocation::AddLand => "Add Land",
            NavLocation::Claim => "Claim",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Register => Route::Register {},
            NavLocation::Login => Route::Login {},
            NavLocation::AddLand => Route::AddLand {},
            NavLocation::Claim => Route::Claim {},
        }
    }
}

#[component]
pub fn NavHeader() -> Element {
    let navigator = use_navigator();
    let mut session = use_session();
    let mut last_claim = use_last_claim();
    let current: Route = use_route();

    let logout = move |_| {
        if let Some(s) = session() {
            tracing::info!("Logging out {}", s.display_name());
        }
        session.set(None);
        last_claim.set(None);
        navigator.push(after_logout());
    };

    let farmer = session.read().as_ref().map(|s| s.display_name());

    rsx! {
        header { class: "nav-header",
            h1 { class: "app-title", "CropShield" }
            nav { class: "nav-links",
                for location in NavLocation::ALL {
                    Link {
                        to: location.route(),
                        class: if location.route() == current { "nav-link active" } else { "nav-link" },
                        "{location.display_name()}"
                    }
                }
            }
            if let Some(name) = farmer {
                div { class: "nav-session",
                    span { class: "nav-farmer", "{name}" }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: logout,
                        "Logout"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_locations_map_to_routes() {
        assert_eq!(NavLocation::AddLand.route(), Route::AddLand {});
        assert_eq!(NavLocation::Claim.display_name(), "Claim");
        assert_eq!(NavLocation::ALL.len(), 4);
    }
}
