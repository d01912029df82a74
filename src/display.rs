use core::fmt;

use thiserror::Error;

use crate::platforms;
use crate::properties::DisplayProperties;
use crate::types::{
    Bounds, CursorPosition, DisplayId, OriginMove, Resolution, Rotation, TargetSelector,
};

/// Error type for the display module
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Could not enumerate displays: error {0}")]
    Enumerate(i32),
    #[error("No such display: {0}")]
    NoSuchDisplay(DisplayId),
    #[error("Could not find a built-in display")]
    NoInternalDisplay,
    #[error("Could not find an active display besides the internal one")]
    NoExternalDisplay,
    #[error("Could not read the cursor position")]
    CursorPosition,
    #[error("Failed to begin the display configuration: error {0}")]
    BeginConfiguration(i32),
    #[error("Failed to set the origin of display {0}: error {1}")]
    ConfigureOrigin(DisplayId, i32),
    #[error("Failed to commit the display configuration: error {0}")]
    CommitConfiguration(i32),
    #[error("The display service rejected the transform request: error {0}")]
    TransformRejected(i32),
    #[error("Display services are only available on macOS")]
    Unsupported,
}

type Result<T = ()> = std::result::Result<T, DisplayError>;

/// A struct that represents a display (index)
#[derive(Debug, Clone)]
pub struct Display<'a> {
    /// The index of the display in the display set
    index: usize,
    /// The display set containing this display
    display_set: &'a DisplaySet,
}

/// Generates getter for properties of a display
macro_rules! get_property {
    ($field:ident, $ty:ty) => {
        pub fn $field(&self) -> $ty {
            self.properties().$field
        }
    };
}

impl Display<'_> {
    fn properties(&self) -> &DisplayProperties {
        &self.display_set.displays[self.index]
    }

    get_property!(id, DisplayId);
    get_property!(unit, u32);
    get_property!(resolution, Resolution);
    get_property!(bounds, Bounds);
    get_property!(rotation, f64);

    pub fn is_active(&self) -> bool {
        self.properties().active
    }

    pub fn is_builtin(&self) -> bool {
        self.properties().builtin
    }

    pub fn is_main(&self) -> bool {
        self.display_set.main_display == self.index
    }

    /// Makes this display the main display.
    ///
    /// Moves the origin of every display in the set by the same delta so that
    /// this display ends up at (0, 0), inside one configuration transaction.
    /// A display that already is the main display is left alone and no
    /// transaction is started.
    pub fn make_main(&self) -> Result {
        if self.is_main() {
            log::debug!("Display {} already is the main display", self.id());
            return Ok(());
        }

        let moves = self.display_set.origin_moves_to(self.id())?;
        platforms::apply_origin_moves(&moves)
    }

    /// Asks the graphics service of this display to present at `rotation`
    pub fn rotate(&self, rotation: Rotation) -> Result {
        platforms::request_transform(self.id(), rotation.to_transform_options())
    }
}

/// A fresh snapshot of the displays known to the graphics system
#[derive(Debug, Clone)]
pub struct DisplaySet {
    /// The displays in this set
    displays: Vec<DisplayProperties>,
    /// Index of the main display within `displays`
    main_display: usize,
}

impl DisplaySet {
    /// Builds a set from enumerated display properties
    pub fn new(displays: Vec<DisplayProperties>) -> Self {
        let main_display = displays.iter().position(|d| d.main).unwrap_or(0);

        Self {
            displays,
            main_display,
        }
    }

    /// Iterates over the displays in this set
    pub fn displays(&self) -> impl ExactSizeIterator<Item = Display<'_>> {
        self.displays.iter().enumerate().map(|(index, _)| Display {
            index,
            display_set: self,
        })
    }

    /// Returns the display with the given `id`
    pub fn get(&self, id: DisplayId) -> Option<Display<'_>> {
        self.displays
            .iter()
            .position(|d| d.id == id)
            .map(|index| Display {
                index,
                display_set: self,
            })
    }

    /// Returns the main display
    pub fn main(&self) -> Display<'_> {
        Display {
            index: self.main_display,
            display_set: self,
        }
    }

    /// Returns the built-in display, if one is present
    pub fn internal(&self) -> Option<Display<'_>> {
        self.displays
            .iter()
            .position(|d| d.builtin)
            .map(|index| Display {
                index,
                display_set: self,
            })
    }

    /// Returns the first active display that is not built-in
    pub fn first_external(&self) -> Option<Display<'_>> {
        self.displays
            .iter()
            .position(|d| d.active && !d.builtin)
            .map(|index| Display {
                index,
                display_set: self,
            })
    }

    /// Resolves a target selector against this snapshot
    pub fn resolve(&self, selector: TargetSelector) -> Result<Display<'_>> {
        match selector {
            TargetSelector::Internal => self.internal().ok_or(DisplayError::NoInternalDisplay),
            TargetSelector::Main => Ok(self.main()),
            TargetSelector::External => self.first_external().ok_or(DisplayError::NoExternalDisplay),
            TargetSelector::Id(id) => self.get(id).ok_or(DisplayError::NoSuchDisplay(id)),
        }
    }

    /// Computes a new origin for every display in the set such that the
    /// display with the `target` id becomes the coordinate origin.
    ///
    /// Fails if `target` is not part of the snapshot; nothing is planned in
    /// that case.
    pub fn origin_moves_to(&self, target: DisplayId) -> Result<Vec<OriginMove>> {
        let target = self.get(target).ok_or(DisplayError::NoSuchDisplay(target))?;
        let delta = -target.bounds().min;

        Ok(self
            .displays
            .iter()
            .map(|d| OriginMove {
                id: d.id,
                origin: d.bounds.min + delta,
            })
            .collect())
    }
}

impl fmt::Display for DisplaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DisplaySet {{ displays: [")?;
        for (i, display) in self.displays.iter().enumerate() {
            if i > 0 {
                writeln!(f, ", ")?;
            }
            write!(f, "    {}", display)?;
        }
        write!(f, "\n] }}")
    }
}

/// Returns a fresh snapshot of all displays currently known to the graphics
/// system.
pub fn query_displays() -> Result<DisplaySet> {
    platforms::query_displays()
}

/// Returns the current pointer location in global display coordinates
pub fn cursor_position() -> Result<CursorPosition> {
    platforms::cursor_position()
}
