//! Part and geometry reference definitions

use std::fmt;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::Pose;

/// Reference to a shared 3D asset (file path or asset key)
///
/// Parts sharing the same reference form a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeometryRef(String);

impl GeometryRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short name for lists: file stem of the reference
    /// (`/models/Pin.glb` -> `Pin`)
    pub fn display_name(&self) -> &str {
        Path::new(&self.0)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for GeometryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GeometryRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GeometryRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One placeable component instance of an assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    /// Shared asset this instance renders
    pub geometry: GeometryRef,
    /// Pose at explosion = 0
    pub rest: Pose,
    /// Displacement applied scaled by the explosion amount
    pub explode_direction: [f32; 3],
    /// Text shown when the part is selected
    #[serde(default)]
    pub description: Option<String>,
}

impl Part {
    /// Create a part at the origin with no explode direction
    pub fn new(id: impl Into<String>, geometry: impl Into<GeometryRef>) -> Self {
        Self {
            id: id.into(),
            geometry: geometry.into(),
            rest: Pose::default(),
            explode_direction: [0.0; 3],
            description: None,
        }
    }

    pub fn with_rest_position(mut self, xyz: [f32; 3]) -> Self {
        self.rest.xyz = xyz;
        self
    }

    pub fn with_rest_rotation(mut self, rpy: [f32; 3]) -> Self {
        self.rest.rpy = rpy;
        self
    }

    pub fn with_explode_direction(mut self, direction: [f32; 3]) -> Self {
        self.explode_direction = direction;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn rest_position(&self) -> Vec3 {
        self.rest.position()
    }

    pub fn explode_direction(&self) -> Vec3 {
        Vec3::from(self.explode_direction)
    }

    /// Position at the given explosion amount
    ///
    /// `rest + direction * amount`, componentwise. Rotation is not affected.
    pub fn position_at(&self, amount: f32) -> Vec3 {
        self.rest_position() + self.explode_direction() * amount
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.rest.is_finite() && self.explode_direction.iter().all(|v| v.is_finite())
    }
}
