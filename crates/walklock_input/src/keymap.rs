//! Legacy key-code mapping
//!
//! The controller contract is defined in terms of numeric key codes, so
//! both arrow keys and WASD resolve to the same actions. Host bindings
//! translate their native key events into these codes before calling the
//! controller.

/// Semantic action bound to a key code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
}

/// Map a numeric key code to its action
///
/// Returns `None` for unmapped codes; those are ignored everywhere.
pub fn action_for_code(code: u32) -> Option<KeyAction> {
    match code {
        38 | 87 => Some(KeyAction::Forward),  // up, w
        37 | 65 => Some(KeyAction::Left),     // left, a
        40 | 83 => Some(KeyAction::Backward), // down, s
        39 | 68 => Some(KeyAction::Right),    // right, d
        32 => Some(KeyAction::Jump),          // space
        _ => None,
    }
}
