//! Display enumeration and configuration through CoreGraphics and IOKit.

use core::ffi::c_void;
use std::ptr;

use core_graphics::display::{CGDirectDisplayID, CGDisplay};
use core_graphics::event::CGEvent;
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

use crate::display::{DisplayError, DisplaySet};
use crate::properties::DisplayProperties;
use crate::types::{
    Bounds, CursorPosition, DisplayId, OriginMove, Position, Resolution, TransformOptions,
};

/// Upper bound on the number of displays a single enumeration returns
const MAX_DISPLAYS: usize = 16;

/// Commit scope for a configuration: the change lasts for the login session
const CONFIGURE_FOR_SESSION: u32 = 1;

type CGDisplayConfigRef = *mut c_void;

// Enumeration, configuration and service-port calls that the core-graphics
// crate does not wrap. CGDisplayIOServicePort is deprecated but remains the
// way to reach the framebuffer service that answers transform probes.
#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    fn CGGetOnlineDisplayList(
        max_displays: u32,
        online_displays: *mut CGDirectDisplayID,
        display_count: *mut u32,
    ) -> i32;
    fn CGDisplayRotation(display: CGDirectDisplayID) -> f64;
    fn CGDisplayUnitNumber(display: CGDirectDisplayID) -> u32;
    fn CGBeginDisplayConfiguration(config: *mut CGDisplayConfigRef) -> i32;
    fn CGConfigureDisplayOrigin(
        config: CGDisplayConfigRef,
        display: CGDirectDisplayID,
        x: i32,
        y: i32,
    ) -> i32;
    fn CGCompleteDisplayConfiguration(config: CGDisplayConfigRef, option: u32) -> i32;
    fn CGCancelDisplayConfiguration(config: CGDisplayConfigRef) -> i32;
    fn CGDisplayIOServicePort(display: CGDirectDisplayID) -> u32;
}

#[link(name = "IOKit", kind = "framework")]
unsafe extern "C" {
    fn IOServiceRequestProbe(service: u32, options: u32) -> i32;
}

type Result<T = ()> = std::result::Result<T, DisplayError>;

/// Enumerates all online displays into a fresh snapshot
pub(crate) fn query_displays() -> Result<DisplaySet> {
    let ids = online_display_ids()?;
    let main_id = CGDisplay::main().id;

    let displays = ids
        .iter()
        .map(|&id| {
            let display = CGDisplay::new(id);
            let bounds = display.bounds();

            DisplayProperties {
                id: DisplayId(id),
                unit: unsafe { CGDisplayUnitNumber(id) },
                resolution: Resolution::new(
                    display.pixels_wide() as u32,
                    display.pixels_high() as u32,
                ),
                bounds: Bounds::new(
                    Position::new(bounds.origin.x as i32, bounds.origin.y as i32),
                    Position::new(
                        (bounds.origin.x + bounds.size.width) as i32,
                        (bounds.origin.y + bounds.size.height) as i32,
                    ),
                ),
                rotation: unsafe { CGDisplayRotation(id) },
                active: display.is_active(),
                main: id == main_id,
                builtin: display.is_builtin(),
            }
        })
        .collect();

    Ok(DisplaySet::new(displays))
}

fn online_display_ids() -> Result<Vec<CGDirectDisplayID>> {
    let mut ids = [0 as CGDirectDisplayID; MAX_DISPLAYS];
    let mut count: u32 = 0;

    let result = unsafe { CGGetOnlineDisplayList(MAX_DISPLAYS as u32, ids.as_mut_ptr(), &mut count) };
    if result != 0 {
        return Err(DisplayError::Enumerate(result));
    }

    Ok(ids[..count as usize].to_vec())
}

/// Reads the current pointer location from the event system
pub(crate) fn cursor_position() -> Result<CursorPosition> {
    let source = CGEventSource::new(CGEventSourceStateID::CombinedSessionState)
        .map_err(|_| DisplayError::CursorPosition)?;
    let event = CGEvent::new(source).map_err(|_| DisplayError::CursorPosition)?;
    let location = event.location();

    Ok(CursorPosition {
        x: location.x,
        y: location.y,
    })
}

/// Applies new display origins inside a single configuration transaction
pub(crate) fn apply_origin_moves(moves: &[OriginMove]) -> Result {
    let mut config: CGDisplayConfigRef = ptr::null_mut();

    let result = unsafe { CGBeginDisplayConfiguration(&mut config) };
    if result != 0 {
        return Err(DisplayError::BeginConfiguration(result));
    }

    for origin_move in moves {
        let result = unsafe {
            CGConfigureDisplayOrigin(
                config,
                origin_move.id.0,
                origin_move.origin.x,
                origin_move.origin.y,
            )
        };
        if result != 0 {
            unsafe { CGCancelDisplayConfiguration(config) };
            return Err(DisplayError::ConfigureOrigin(origin_move.id, result));
        }
    }

    let result = unsafe { CGCompleteDisplayConfiguration(config, CONFIGURE_FOR_SESSION) };
    if result != 0 {
        return Err(DisplayError::CommitConfiguration(result));
    }

    log::debug!("Committed new origins for {} displays", moves.len());
    Ok(())
}

/// Asks the framebuffer service behind `id` to probe with the given transform.
///
/// Callers enumerate the displays before ending up here; looking up the
/// service port without a preceding enumeration can hang on some systems.
pub(crate) fn request_transform(id: DisplayId, options: TransformOptions) -> Result {
    // The port is owned by the graphics system and must not be released.
    let service = unsafe { CGDisplayIOServicePort(id.0) };

    let result = unsafe { IOServiceRequestProbe(service, options.0) };
    if result != 0 {
        return Err(DisplayError::TransformRejected(result));
    }

    log::debug!("Probed display {} with transform options {}", id, options);
    Ok(())
}
