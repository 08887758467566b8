use glam::{EulerRot, Quat, Vec3};

/// Build an orientation from Euler angles in degrees.
///
/// The frame is left-handed with +Y up and +Z forward. Angles are
/// `(x, y, z)`, applied roll about Z first, then pitch about X, then yaw
/// about Y. A positive X angle tilts the forward axis downward.
#[must_use]
pub fn euler_to_quat(euler_degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        euler_degrees.y.to_radians(),
        euler_degrees.x.to_radians(),
        euler_degrees.z.to_radians(),
    )
}

/// Position plus Euler orientation of a scene object.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Orientation as Euler angles in degrees (see [`euler_to_quat`]).
    pub euler: Vec3,
}

impl Transform {
    /// Transform at `position` with no rotation.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            euler: Vec3::ZERO,
        }
    }

    /// Orientation as a quaternion.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        euler_to_quat(self.euler)
    }

    /// Unit forward axis (+Z rotated).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// Unit right axis (+X rotated).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Unit up axis (+Y rotated).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }
}

/// Camera pose produced by one rig update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraPose {
    /// Smoothed orientation as Euler angles in degrees.
    pub rotation_euler: Vec3,
    /// Camera position in world space.
    pub position: Vec3,
}

impl CameraPose {
    /// Forward axis of the pose.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        euler_to_quat(self.rotation_euler) * Vec3::Z
    }

    /// Write the pose into a host transform.
    pub fn apply_to(&self, transform: &mut Transform) {
        transform.euler = self.rotation_euler;
        transform.position = self.position;
    }
}
