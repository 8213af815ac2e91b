//! Reusable form components.

mod button;
mod input;
mod land_select;
mod status;

pub use button::*;
pub use input::*;
pub use land_select::*;
pub use status::*;
