use core::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use thiserror::Error;

/// An opaque display identifier assigned by the graphics system.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DisplayId(pub u32);

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Errors that occur while parsing a display id from a string
#[derive(Error, Debug)]
pub enum ParseDisplayIdError {
    #[error("Error parsing hex integer")]
    IntError(#[from] std::num::ParseIntError),
}

impl FromStr for DisplayId {
    type Err = ParseDisplayIdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        Ok(Self(u32::from_str_radix(digits, 16)?))
    }
}

/// Selects the display an operation acts on.
///
/// The values `-1`, `0` and `1` are reserved shortcuts and win over literal
/// display ids of the same value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TargetSelector {
    /// The built-in panel (`-1`)
    Internal,
    /// The current main display (`0`)
    Main,
    /// The first active display that is not built-in (`1`)
    External,
    /// A concrete display id, given in hex
    Id(DisplayId),
}

impl fmt::Display for TargetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSelector::Internal => write!(f, "internal"),
            TargetSelector::Main => write!(f, "main"),
            TargetSelector::External => write!(f, "external"),
            TargetSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for TargetSelector {
    type Err = ParseDisplayIdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "-1" => Ok(TargetSelector::Internal),
            "0" => Ok(TargetSelector::Main),
            "1" => Ok(TargetSelector::External),
            _ => Ok(TargetSelector::Id(s.parse()?)),
        }
    }
}

/// A rotation request as given on the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RotationArg {
    /// The sentinel `1`: rotate to 90 degrees if the display is currently not
    /// rotated, back to 0 degrees otherwise
    Toggle,
    /// An angle in degrees
    Degrees(i64),
}

impl RotationArg {
    /// Resolves the request against the rotation the display currently reports.
    pub fn resolve(self, current_degrees: f64) -> Rotation {
        match self {
            RotationArg::Toggle => {
                if current_degrees == 0.0 {
                    Rotation::Deg90
                } else {
                    Rotation::Deg0
                }
            }
            RotationArg::Degrees(degrees) => Rotation::from_degrees(degrees),
        }
    }
}

/// Errors that occur while parsing a rotation from a string
#[derive(Error, Debug)]
pub enum ParseRotationError {
    #[error("Error parsing integer")]
    IntError(#[from] std::num::ParseIntError),
}

impl FromStr for RotationArg {
    type Err = ParseRotationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "1" => Ok(RotationArg::Toggle),
            _ => Ok(RotationArg::Degrees(s.parse()?)),
        }
    }
}

/// One of the four rotations a display's graphics service can present
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

// kIOFBSetTransform and the kIOScaleRotate* bits from the IOGraphics family
// headers; the probe option word carries the transform in its upper half.
const FB_SET_TRANSFORM: u32 = 0x0000_0400;
const SCALE_ROTATE_0: u32 = 0x0000_0000;
const SCALE_ROTATE_90: u32 = 0x0000_0030;
const SCALE_ROTATE_180: u32 = 0x0000_0060;
const SCALE_ROTATE_270: u32 = 0x0000_0050;

impl Rotation {
    /// Maps an angle in degrees to a rotation.
    ///
    /// Angles that are not a multiple of 90 reset the rotation to 0 degrees;
    /// multiples of 90 wrap modulo 360, negative ones included.
    pub fn from_degrees(degrees: i64) -> Self {
        if degrees % 90 != 0 {
            return Rotation::Deg0;
        }

        match degrees.div_euclid(90).rem_euclid(4) {
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            3 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }

    /// The angle in degrees
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// The option bits requesting a framebuffer transform at this rotation
    pub fn to_transform_options(self) -> TransformOptions {
        let transform = match self {
            Rotation::Deg0 => SCALE_ROTATE_0,
            Rotation::Deg90 => SCALE_ROTATE_90,
            Rotation::Deg180 => SCALE_ROTATE_180,
            Rotation::Deg270 => SCALE_ROTATE_270,
        };

        TransformOptions(FB_SET_TRANSFORM | (transform << 16))
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Option bits for a display service probe, selecting a framebuffer transform
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TransformOptions(pub u32);

impl fmt::Display for TransformOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Contains the position of a display origin in the global coordinate space
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Position {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The bounding box of a display in the global coordinate space
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    /// Creates a bounding box from its corners
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Contains the resolution of a display
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The new origin computed for one display when the main display changes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OriginMove {
    pub id: DisplayId,
    pub origin: Position,
}

/// The pointer location in the global display coordinate space
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}, {:.1}", self.x, self.y)
    }
}
