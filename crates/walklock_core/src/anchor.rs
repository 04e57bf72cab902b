//! The anchor node the integrator moves around
//!
//! An [`Anchor`] stands in for the scene-graph node that represents the
//! player's viewpoint: a world position plus yaw/pitch orientation. The
//! motion integrator translates it along its own local axes, so yaw from
//! mouse-look changes which way "forward" moves the player.

use serde::{Serialize, Deserialize};
use walklock_math::Vec3;

/// Maximum pitch magnitude in radians (straight up / straight down)
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;

/// Snapshot of an anchor's planar position and heading
///
/// This is the payload of the controller's moved/unlocked signals and the
/// argument format of the external position override.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub z: f32,
    pub yaw: f32,
}

impl Position {
    /// Create a new position snapshot
    pub const fn new(x: f32, z: f32, yaw: f32) -> Self {
        Self { x, z, yaw }
    }
}

/// The player viewpoint node
///
/// Owned by the pointer-lock capability; the integrator mutates it through
/// a mutable borrow each frame but never owns its lifecycle.
#[derive(Clone, Debug, Default)]
pub struct Anchor {
    /// World-space position
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
}

impl Anchor {
    /// Create an anchor at the origin looking down -Z
    pub fn new() -> Self {
        Self::default()
    }

    /// Current yaw (rotation about the world Y axis) in radians
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Set the yaw directly (external re-sync, bypassing mouse-look)
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Current pitch in radians, always within ±π/2
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply a mouse-look rotation delta
    ///
    /// Yaw accumulates unbounded; pitch is clamped so the view can never
    /// flip past straight up or straight down.
    pub fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Translate along the anchor's local axes
    ///
    /// Only yaw participates: local X and Z rotate with the heading while
    /// Y stays world-vertical, so walking forward while looking up does
    /// not lift the player off the ground.
    pub fn translate_local(&mut self, delta: Vec3) {
        let (sin, cos) = self.yaw.sin_cos();
        self.position.x += delta.x * cos + delta.z * sin;
        self.position.z += delta.z * cos - delta.x * sin;
        self.position.y += delta.y;
    }

    /// Snapshot the planar position and heading
    pub fn snapshot(&self) -> Position {
        Position::new(self.position.x, self.position.z, self.yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_new_anchor_at_origin() {
        let anchor = Anchor::new();
        assert_eq!(anchor.position, Vec3::ZERO);
        assert_eq!(anchor.yaw(), 0.0);
        assert_eq!(anchor.pitch(), 0.0);
    }

    #[test]
    fn test_translate_no_rotation() {
        let mut anchor = Anchor::new();
        anchor.translate_local(Vec3::new(1.0, 2.0, 3.0));
        assert!((anchor.position.x - 1.0).abs() < EPSILON);
        assert!((anchor.position.y - 2.0).abs() < EPSILON);
        assert!((anchor.position.z - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_translate_respects_yaw() {
        // Yaw a quarter turn: local +Z maps to world +X
        let mut anchor = Anchor::new();
        anchor.set_yaw(std::f32::consts::FRAC_PI_2);
        anchor.translate_local(Vec3::new(0.0, 0.0, 1.0));
        assert!((anchor.position.x - 1.0).abs() < EPSILON);
        assert!(anchor.position.z.abs() < EPSILON);
    }

    #[test]
    fn test_translate_local_x_respects_yaw() {
        // Yaw a quarter turn: local +X maps to world -Z
        let mut anchor = Anchor::new();
        anchor.set_yaw(std::f32::consts::FRAC_PI_2);
        anchor.translate_local(Vec3::new(1.0, 0.0, 0.0));
        assert!(anchor.position.x.abs() < EPSILON);
        assert!((anchor.position.z + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_vertical_translation_ignores_yaw() {
        let mut anchor = Anchor::new();
        anchor.set_yaw(1.234);
        anchor.translate_local(Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(anchor.position.x, 0.0);
        assert_eq!(anchor.position.z, 0.0);
        assert!((anchor.position.y - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut anchor = Anchor::new();
        anchor.look(0.0, 10.0);
        assert!((anchor.pitch() - PITCH_LIMIT).abs() < EPSILON);
        anchor.look(0.0, -20.0);
        assert!((anchor.pitch() + PITCH_LIMIT).abs() < EPSILON);
    }

    #[test]
    fn test_yaw_unbounded() {
        let mut anchor = Anchor::new();
        anchor.look(10.0, 0.0);
        assert!((anchor.yaw() - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_snapshot() {
        let mut anchor = Anchor::new();
        anchor.position = Vec3::new(1.0, 16.0, -2.0);
        anchor.set_yaw(0.5);
        let snap = anchor.snapshot();
        assert_eq!(snap, Position::new(1.0, -2.0, 0.5));
    }
}
