//! Input mapping from winit events to controller key codes
//!
//! The controller speaks legacy numeric key codes, so arrow keys and WASD
//! land on the same actions. This mapper translates winit's `KeyCode` for
//! it, and separately maps the demo's special keys (Escape). Movement and
//! jump keys are NOT handled as special actions - they flow through
//! `legacy_code` to the controller.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAction {
    /// Release the pointer (Escape while locked)
    ReleaseCursor,
    /// Exit application (Escape while not locked)
    Exit,
}

/// Maps raw winit input to controller key codes and special actions
pub struct InputMapper;

impl InputMapper {
    /// Map a keyboard event to a special action
    ///
    /// Returns `Some(action)` for special keys, `None` for everything
    /// that belongs to the controller.
    pub fn map_special(
        key: KeyCode,
        state: ElementState,
        locked: bool,
    ) -> Option<SpecialAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => {
                if locked {
                    Some(SpecialAction::ReleaseCursor)
                } else {
                    Some(SpecialAction::Exit)
                }
            }
            _ => None,
        }
    }

    /// Translate a winit key code into the controller's legacy code
    ///
    /// Returns `None` for keys the controller does not use.
    pub fn legacy_code(key: KeyCode) -> Option<u32> {
        match key {
            KeyCode::ArrowUp => Some(38),
            KeyCode::KeyW => Some(87),
            KeyCode::ArrowLeft => Some(37),
            KeyCode::KeyA => Some(65),
            KeyCode::ArrowDown => Some(40),
            KeyCode::KeyS => Some(83),
            KeyCode::ArrowRight => Some(39),
            KeyCode::KeyD => Some(68),
            KeyCode::Space => Some(32),
            _ => None,
        }
    }
}
