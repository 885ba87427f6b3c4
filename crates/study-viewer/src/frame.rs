//! Per-frame render snapshot handed to the renderer

use glam::Mat4;
use serde::Serialize;
use study_core::{AssemblyViewState, FocusTarget, GeometryRef, TransformMode};

use crate::camera_rig::CameraRig;

/// One visible part instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartInstance {
    pub part_id: String,
    pub geometry: GeometryRef,
    /// Current position with the fixed rest rotation
    pub transform: Mat4,
    pub selected: bool,
}

/// Transform gizmo attached to the selected part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gizmo {
    pub part_id: String,
    pub mode: TransformMode,
}

/// Everything the renderer reads for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    /// Visible parts in catalog order
    pub instances: Vec<PartInstance>,
    /// Only present when the selected part is visible
    pub gizmo: Option<Gizmo>,
    pub focus: Option<FocusTarget>,
    pub explosion: f32,
    /// World-to-camera transform of the orbit camera
    pub camera: Mat4,
}

impl RenderFrame {
    pub fn capture(view: &AssemblyViewState, camera: &CameraRig) -> Self {
        let instances: Vec<PartInstance> = view
            .visible_parts()
            .map(|part| PartInstance {
                part_id: part.id.clone(),
                geometry: part.geometry.clone(),
                transform: view.world_transform_of(part),
                selected: view.is_selected(&part.id),
            })
            .collect();

        let gizmo = instances.iter().find(|i| i.selected).map(|i| Gizmo {
            part_id: i.part_id.clone(),
            mode: view.transform_mode(),
        });

        Self {
            instances,
            gizmo,
            focus: view.focus_target(),
            explosion: view.explosion_amount(),
            camera: camera.view_matrix(),
        }
    }

    pub fn instance(&self, part_id: &str) -> Option<&PartInstance> {
        self.instances.iter().find(|i| i.part_id == part_id)
    }
}
