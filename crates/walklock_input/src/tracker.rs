//! Held-key and jump-availability state

use bitflags::bitflags;

use crate::keymap::KeyAction;

bitflags! {
    /// Movement keys currently held
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MovementKeys: u8 {
        const FORWARD = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

/// Mutable input state read by the motion integrator each frame
///
/// Pure state, no timing: key handlers flip the held flags, the ground
/// clamp re-arms `jump_available`, and a lock transition resets everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputTracker {
    keys: MovementKeys,
    jump_available: bool,
}

impl InputTracker {
    /// Create a tracker with nothing held and jump unavailable
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movement key press or release
    ///
    /// `Jump` is not held state; the integrator consumes it at key-down
    /// time, so it is ignored here.
    pub fn set_held(&mut self, action: KeyAction, held: bool) {
        let flag = match action {
            KeyAction::Forward => MovementKeys::FORWARD,
            KeyAction::Backward => MovementKeys::BACKWARD,
            KeyAction::Left => MovementKeys::LEFT,
            KeyAction::Right => MovementKeys::RIGHT,
            KeyAction::Jump => return,
        };
        self.keys.set(flag, held);
    }

    /// Clear all held keys and disarm jump (lock transition)
    pub fn reset(&mut self) {
        self.keys = MovementKeys::empty();
        self.jump_available = false;
    }

    pub fn forward(&self) -> bool {
        self.keys.contains(MovementKeys::FORWARD)
    }

    pub fn backward(&self) -> bool {
        self.keys.contains(MovementKeys::BACKWARD)
    }

    pub fn left(&self) -> bool {
        self.keys.contains(MovementKeys::LEFT)
    }

    pub fn right(&self) -> bool {
        self.keys.contains(MovementKeys::RIGHT)
    }

    /// Whether any movement key is held
    pub fn is_moving(&self) -> bool {
        !self.keys.is_empty()
    }

    /// Forward/backward input as -1, 0, or +1
    pub fn axis_forward(&self) -> f32 {
        (self.forward() as i32 - self.backward() as i32) as f32
    }

    /// Left/right input as -1, 0, or +1
    pub fn axis_strafe(&self) -> f32 {
        (self.left() as i32 - self.right() as i32) as f32
    }

    /// Whether a jump impulse may be applied right now
    pub fn jump_available(&self) -> bool {
        self.jump_available
    }

    /// Arm or disarm the jump
    ///
    /// Armed by the ground clamp, disarmed at jump key-down and on lock.
    pub fn set_jump_available(&mut self, available: bool) {
        self.jump_available = available;
    }
}
