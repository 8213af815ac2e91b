//! Components shared by the CropShield pages.

mod image_picker;
mod nav_header;
mod readings;
mod wallet_connect;

pub use image_picker::ImagePicker;
pub use nav_header::NavHeader;
pub use readings::{Model1Fields, Model2Fields, ReadingsDraft};
pub use wallet_connect::WalletConnect;
