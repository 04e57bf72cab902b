//! Pointer-lock capability seam
//!
//! The controller does not talk to a windowing system directly; it drives
//! a [`PointerLock`] implementation that owns the anchor node and the
//! mouse-look rotation. The production implementation wraps winit cursor
//! grabbing; tests substitute an in-memory one.

use std::fmt;

use walklock_core::Anchor;

/// The pointer-lock capability
///
/// Exposes exclusive-pointer acquisition and release, the anchor node the
/// integrator moves, and relative mouse-look rotation.
pub trait PointerLock {
    /// Request exclusive pointer capture
    ///
    /// Returns `Err` when the host environment refuses the request; the
    /// controller logs the refusal and stays idle, it does not retry.
    fn lock(&mut self) -> Result<(), LockError>;

    /// Release pointer capture; a no-op when not locked
    fn unlock(&mut self);

    /// Whether the pointer is currently captured
    fn is_locked(&self) -> bool;

    /// Apply a relative mouse movement to the view orientation
    ///
    /// Implementations ignore movement while not locked.
    fn mouse_look(&mut self, dx: f64, dy: f64);

    /// The anchor node representing the viewpoint
    fn anchor(&self) -> &Anchor;

    /// Mutable access to the anchor for the integrator and position
    /// overrides
    fn anchor_mut(&mut self) -> &mut Anchor;

    /// Release the capability permanently (unlocks if needed)
    fn dispose(&mut self);
}

/// Pointer-lock request failure
///
/// The only failure mode in the system: the host refused exclusive
/// pointer capture (permission denial, unsupported platform).
#[derive(Debug)]
pub struct LockError {
    message: String,
}

impl LockError {
    /// Create an error with the host's refusal message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pointer lock denied: {}", self.message)
    }
}

impl std::error::Error for LockError {}
