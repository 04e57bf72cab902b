//! Keyboard input handling for the walklock controller
//!
//! This crate provides the input tracker: which movement keys are held
//! and whether a jump is currently available, plus the legacy key-code
//! mapping the controller contract requires.

mod keymap;
mod tracker;

pub use keymap::{KeyAction, action_for_code};
pub use tracker::{InputTracker, MovementKeys};
