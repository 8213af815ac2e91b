//! Styling for the CropShield desktop app.

mod styles;

pub use styles::GLOBAL_STYLES;
