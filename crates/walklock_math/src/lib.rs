//! Vector math for the walklock controller
//!
//! Provides the small amount of 3D vector math the motion integrator
//! needs: velocity/direction storage, normalization, and scaling.

mod vec3;

pub use vec3::Vec3;
