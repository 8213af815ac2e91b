//! CropShield UI Components
//!
//! Dioxus form controls shared by the desktop pages.
//!
//! ## Look
//!
//! Plain field-office forms: a white card on a light green page, one label
//! per field, and a single status line under each form that shows
//! the request in flight, the service's error or the success message.

pub mod components;

pub use components::*;
