//! Winit-backed pointer-lock capability
//!
//! Implements [`PointerLock`] with window cursor grabbing: `Locked` grab
//! where the platform supports it, falling back to `Confined`, with the
//! cursor hidden while captured. Mouse-look applies relative deltas to
//! the anchor's yaw and pitch.

use std::sync::Arc;

use winit::window::{CursorGrabMode, Window};

use walklock_core::Anchor;

use crate::capability::{LockError, PointerLock};

/// Default mouse-look sensitivity in radians per pixel
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.002;

/// Pointer-lock capability backed by a winit window
pub struct WinitPointerLock {
    window: Arc<Window>,
    anchor: Anchor,
    locked: bool,
    sensitivity: f32,
}

impl WinitPointerLock {
    /// Create a capability for the given window
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            anchor: Anchor::new(),
            locked: false,
            sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }

    /// Builder: set mouse-look sensitivity
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }
}

impl PointerLock for WinitPointerLock {
    fn lock(&mut self) -> Result<(), LockError> {
        if self.locked {
            return Ok(());
        }
        // Try Locked mode first (best for mouse-look), fall back to Confined
        self.window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
            .map_err(|e| LockError::new(e.to_string()))?;
        self.window.set_cursor_visible(false);
        self.locked = true;
        log::info!("Cursor captured - Escape to release");
        Ok(())
    }

    fn unlock(&mut self) {
        if !self.locked {
            return;
        }
        let _ = self.window.set_cursor_grab(CursorGrabMode::None);
        self.window.set_cursor_visible(true);
        self.locked = false;
        log::info!("Cursor released - click to capture");
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn mouse_look(&mut self, dx: f64, dy: f64) {
        if !self.locked {
            return;
        }
        // Mouse right turns the view right, mouse down looks down
        self.anchor.look(
            -(dx as f32) * self.sensitivity,
            -(dy as f32) * self.sensitivity,
        );
    }

    fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    fn anchor_mut(&mut self) -> &mut Anchor {
        &mut self.anchor
    }

    fn dispose(&mut self) {
        self.unlock();
    }
}
