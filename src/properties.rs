use core::fmt;

use crate::types::{Bounds, DisplayId, Resolution};

/// Contains the properties of a display, captured at enumeration time.
///
/// A snapshot is never refreshed; every invocation enumerates the displays
/// again and builds a fresh set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayProperties {
    pub id: DisplayId,

    /// The unit number of the display's framebuffer
    pub unit: u32,

    pub resolution: Resolution,
    pub bounds: Bounds,

    /// Rotation in degrees as reported by the graphics system
    pub rotation: f64,

    pub active: bool,
    pub main: bool,
    pub builtin: bool,
}

impl fmt::Display for DisplayProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Display {{ id: {}, unit: {}, resolution: {}, bounds: {}, rotation: {}, active: {}, main: {}, builtin: {} }}",
            self.id,
            self.unit,
            self.resolution,
            self.bounds,
            self.rotation,
            self.active,
            self.main,
            self.builtin
        )
    }
}
