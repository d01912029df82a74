//! A library to query and reconfigure displays through the macOS graphics
//! services.
//!
//! Displays are enumerated into an immutable [`DisplaySet`] snapshot which can
//! list devices, resolve target shortcuts, plan main-display changes and issue
//! rotation requests against a display's graphics service.

mod display;
mod platforms;
mod properties;
mod types;

#[cfg(feature = "json")]
pub mod json;

pub use display::*;
pub use properties::*;
pub use types::*;
