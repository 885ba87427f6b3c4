//! Transform gizmo mode

use serde::{Deserialize, Serialize};

/// Mode of the on-screen transform gizmo attached to the selected part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
}

impl TransformMode {
    pub fn name(&self) -> &'static str {
        match self {
            TransformMode::Translate => "Translate",
            TransformMode::Rotate => "Rotate",
        }
    }
}
