//! Host-side input mapping
//!
//! Translates winit keyboard events into the controller's legacy key
//! codes and the demo's special actions.

mod input_mapper;

pub use input_mapper::{InputMapper, SpecialAction};
