//! Page components for CropShield.

mod claim;
mod land;
mod login;
mod payout;
mod register;
mod verify_otp;

pub use claim::Claim;
pub use land::{AddLand, LandRegistration};
pub use login::Login;
pub use payout::Payout;
pub use register::Register;
pub use verify_otp::VerifyOtp;
