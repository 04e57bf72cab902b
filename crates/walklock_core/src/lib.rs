//! Core types for the walklock controller
//!
//! This crate provides the foundational types the motion integrator and
//! the controller facade are built on:
//!
//! - [`Anchor`] - The scene-graph node standing in for the player viewpoint
//! - [`Position`] - An (x, z, yaw) snapshot of an anchor
//! - [`EventBus`] - Explicit subscribe/unsubscribe event dispatch
//! - [`Throttle`] - Rate limiter for the moved signal
//! - [`FrameClock`] - Per-frame delta time tracking

mod anchor;
mod clock;
mod events;
mod throttle;

pub use anchor::{Anchor, Position};
pub use clock::FrameClock;
pub use events::{ControllerEvent, EventBus, HandlerKey};
pub use throttle::Throttle;

// Re-export the vector type for convenience
pub use walklock_math::Vec3;
