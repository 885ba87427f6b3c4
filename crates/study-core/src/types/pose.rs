//! Rest pose type definition

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rest pose of a part (position and orientation at explosion = 0)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub xyz: [f32; 3],
    pub rpy: [f32; 3], // XYZ Euler angles in radians
}

impl Pose {
    pub fn new(xyz: [f32; 3], rpy: [f32; 3]) -> Self {
        Self { xyz, rpy }
    }

    pub fn from_position(xyz: [f32; 3]) -> Self {
        Self { xyz, rpy: [0.0; 3] }
    }

    /// Get position as Vec3
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.xyz)
    }

    /// Convert the Euler angles to a quaternion
    pub fn to_quat(&self) -> Quat {
        Quat::from_euler(glam::EulerRot::XYZ, self.rpy[0], self.rpy[1], self.rpy[2])
    }

    /// Transform placing the rotation at an arbitrary position
    ///
    /// The rest rotation never changes with explosion, so callers pass the
    /// displaced position and keep the orientation from the pose.
    pub fn to_mat4_at(&self, position: Vec3) -> Mat4 {
        Mat4::from_rotation_translation(self.to_quat(), position)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.xyz.iter().chain(self.rpy.iter()).all(|v| v.is_finite())
    }
}
