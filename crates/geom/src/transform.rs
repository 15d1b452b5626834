use glam::{DAffine3, DQuat, DVec3, EulerRot};

/// Local transform of a node relative to its parent.
///
/// Conventions:
/// - `translation` in the parent's units.
/// - `rotation` as XYZ Euler angles in radians. Storing angles (rather than a
///   quaternion) keeps a yaw that was set to `π` reading back as exactly `π`.
/// - `scale` is uniform and applied before rotation and translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position relative to the parent.
    pub translation: DVec3,
    /// XYZ Euler angles in radians.
    pub rotation: DVec3,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: DVec3::ZERO,
        rotation: DVec3::ZERO,
        scale: 1.0,
    };

    /// Pure translation.
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Replace the Euler rotation.
    pub fn with_rotation(mut self, rotation: DVec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Replace the uniform scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation about the vertical axis, in radians.
    pub fn yaw(&self) -> f64 {
        self.rotation.y
    }

    /// Set the rotation about the vertical axis, leaving pitch and roll alone.
    pub fn set_yaw(&mut self, yaw: f64) {
        self.rotation.y = yaw;
    }

    /// Rotation as a quaternion.
    pub fn quat(&self) -> DQuat {
        DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Affine matrix `T * R * S`.
    pub fn to_affine(&self) -> DAffine3 {
        DAffine3::from_scale_rotation_translation(
            DVec3::splat(self.scale),
            self.quat(),
            self.translation,
        )
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}
