//! Motion integration for the walklock controller
//!
//! This crate provides the per-frame motion integrator:
//! - Velocity damping, gravity, and keyboard acceleration
//! - Ground clamping with jump re-arming
//! - The {Idle, Locked} frame-loop state machine
//! - The [`FrameScheduler`] seam the host loop implements

pub mod integrator;

pub use integrator::{
    FrameOutcome, FrameScheduler, LoopState, MotionConfig, MotionIntegrator,
};
