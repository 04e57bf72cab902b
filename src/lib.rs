//! Walklock - a pointer-lock first-person walk controller
//!
//! Locks the pointer for mouse-look, turns held movement keys into
//! planar velocity, and integrates a simple gravity/jump model each
//! frame. The crate is split the same way the runtime is:
//!
//! - [`walklock_input`] tracks which movement keys are held
//! - [`walklock_physics`] integrates velocity, gravity, and the ground
//!   clamp every frame
//! - [`walklock_core`] holds the anchor node, event bus, throttle, and
//!   frame clock they share
//! - this crate wires them together behind [`WalkController`] and
//!   provides the winit-backed pointer-lock capability and demo binary

pub mod capability;
pub mod config;
pub mod controller;
pub mod input;
pub mod pointer_lock;

pub use capability::{LockError, PointerLock};
pub use controller::{RenderFn, WalkController};
pub use pointer_lock::WinitPointerLock;

// Re-export the types host bindings interact with
pub use walklock_core::{Anchor, ControllerEvent, HandlerKey, Position};
pub use walklock_physics::{FrameScheduler, MotionConfig};
