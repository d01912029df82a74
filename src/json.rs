use serde::Serialize;

use crate::display::Display;
use crate::types::CursorPosition;

/// Serializable position for JSON output
#[derive(Serialize)]
pub struct PositionJson {
    pub x: i32,
    pub y: i32,
}

/// Serializable resolution for JSON output
#[derive(Serialize)]
pub struct ResolutionJson {
    pub width: u32,
    pub height: u32,
}

/// Serializable bounding box for JSON output
#[derive(Serialize)]
pub struct BoundsJson {
    pub min: PositionJson,
    pub max: PositionJson,
}

/// Serializable display info for JSON output
#[derive(Serialize)]
pub struct DisplayInfoJson {
    pub id: String,
    pub unit: u32,
    pub resolution: ResolutionJson,
    pub bounds: BoundsJson,
    pub rotation: f64,
    pub active: bool,
    pub main: bool,
    pub internal: bool,
}

/// Serializable cursor position for JSON output
#[derive(Serialize)]
pub struct CursorPositionJson {
    pub x: f64,
    pub y: f64,
}

/// Serializable report combining displays and the cursor position
#[derive(Serialize)]
pub struct InfoReportJson {
    pub displays: Vec<DisplayInfoJson>,
    pub cursor: CursorPositionJson,
}

/// Converts display data to JSON serializable format
pub fn display_to_json(display: &Display) -> DisplayInfoJson {
    let resolution = display.resolution();
    let bounds = display.bounds();

    DisplayInfoJson {
        id: display.id().to_string(),
        unit: display.unit(),
        resolution: ResolutionJson {
            width: resolution.width,
            height: resolution.height,
        },
        bounds: BoundsJson {
            min: PositionJson {
                x: bounds.min.x,
                y: bounds.min.y,
            },
            max: PositionJson {
                x: bounds.max.x,
                y: bounds.max.y,
            },
        },
        rotation: display.rotation(),
        active: display.is_active(),
        main: display.is_main(),
        internal: display.is_builtin(),
    }
}

/// Converts the cursor position to JSON serializable format
pub fn cursor_to_json(cursor: &CursorPosition) -> CursorPositionJson {
    CursorPositionJson {
        x: cursor.x,
        y: cursor.y,
    }
}
