//! Stub backend for platforms without access to the display services.

use crate::display::{DisplayError, DisplaySet};
use crate::types::{CursorPosition, DisplayId, OriginMove, TransformOptions};

type Result<T = ()> = std::result::Result<T, DisplayError>;

pub(crate) fn query_displays() -> Result<DisplaySet> {
    Err(DisplayError::Unsupported)
}

pub(crate) fn cursor_position() -> Result<CursorPosition> {
    Err(DisplayError::Unsupported)
}

pub(crate) fn apply_origin_moves(_moves: &[OriginMove]) -> Result {
    Err(DisplayError::Unsupported)
}

pub(crate) fn request_transform(_id: DisplayId, _options: TransformOptions) -> Result {
    Err(DisplayError::Unsupported)
}
