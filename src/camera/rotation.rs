use glam::{Vec2, Vec3};

use crate::options::AxisClamp;

/// Accumulated rotation angles, in degrees.
///
/// `rotation_x` is the vertical (tilt) angle and `rotation_y` the
/// horizontal (turn) angle. Note the clamp pairing: the `yaw` clamp
/// bounds `rotation_x` and the `pitch` clamp bounds `rotation_y`.
///
/// Unclamped accumulators are never wrapped into `[-180, 180]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    /// Vertical accumulator.
    pub rotation_x: f32,
    /// Horizontal accumulator.
    pub rotation_y: f32,
}

impl RotationState {
    /// Add one direction sample and apply the clamps.
    pub fn integrate(
        &mut self,
        direction: Vec2,
        sensitivity: f32,
        yaw: &AxisClamp,
        pitch: &AxisClamp,
    ) {
        self.rotation_y += direction.x * sensitivity;
        self.rotation_x += direction.y * sensitivity;

        self.rotation_x = yaw.apply(self.rotation_x);
        self.rotation_y = pitch.apply(self.rotation_y);
    }

    /// Euler target `(rotation_x, rotation_y, 0)` for the smoother.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        Vec3::new(self.rotation_x, self.rotation_y, 0.0)
    }
}
