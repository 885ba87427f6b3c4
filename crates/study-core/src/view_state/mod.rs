//! Session view state of an assembly
//!
//! [`AssemblyViewState`] pairs an immutable [`Catalog`] with the mutable
//! [`ViewState`] of one study session. It is the single source of truth for
//! both the rendering layer and the UI layer:
//! - explosion amount and the derived current positions
//! - single part selection
//! - per-group visibility and "checked for analysis" markers
//! - one-shot camera focus requests
//! - transform gizmo mode
//!
//! Operations that name a part or group absent from the catalog return a
//! [`ViewError`] and leave the state untouched.

mod explode;
mod groups;
mod selection;

pub use explode::clamp_explosion;

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogError};
use crate::part::{GeometryRef, Part};
use crate::types::TransformMode;

/// Upper bound of the explosion amount, in model-space units
pub const EXPLODE_MAX: f32 = 0.5;

/// Reference to a part or group that is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("Unknown part: {0}")]
    UnknownPart(String),

    #[error("Unknown group: {0}")]
    UnknownGroup(GeometryRef),
}

/// One-shot camera focus request
///
/// The request number grows with every focus call, so two requests for the
/// same point are still distinguishable by the camera collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusTarget {
    pub point: Vec3,
    pub request: u64,
}

/// Mutable state of one viewing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    explosion_amount: f32,
    selected_part_id: Option<String>,
    visibility_by_group: HashMap<GeometryRef, bool>,
    checked_groups: HashMap<GeometryRef, bool>,
    focus_target: Option<FocusTarget>,
    transform_mode: TransformMode,
}

impl ViewState {
    fn initial(catalog: &Catalog) -> Self {
        let geometries = catalog.groups().iter().map(|g| g.geometry.clone());
        Self {
            explosion_amount: 0.0,
            selected_part_id: None,
            visibility_by_group: geometries.clone().map(|g| (g, true)).collect(),
            checked_groups: geometries.map(|g| (g, false)).collect(),
            focus_target: None,
            transform_mode: TransformMode::default(),
        }
    }

    pub fn explosion_amount(&self) -> f32 {
        self.explosion_amount
    }

    pub fn selected_part_id(&self) -> Option<&str> {
        self.selected_part_id.as_deref()
    }

    pub fn visibility_by_group(&self) -> &HashMap<GeometryRef, bool> {
        &self.visibility_by_group
    }

    pub fn checked_groups(&self) -> &HashMap<GeometryRef, bool> {
        &self.checked_groups
    }

    pub fn focus_target(&self) -> Option<FocusTarget> {
        self.focus_target
    }

    pub fn transform_mode(&self) -> TransformMode {
        self.transform_mode
    }
}

/// Catalog plus session state, updated by discrete user actions
#[derive(Debug, Clone)]
pub struct AssemblyViewState {
    catalog: Arc<Catalog>,
    state: ViewState,
    last_focus_request: u64,
}

impl AssemblyViewState {
    /// Validate the parts and open a fresh view over them
    pub fn load_catalog(parts: Vec<Part>) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::from_parts(parts)?))
    }

    /// Open a fresh view over an already validated catalog
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        let catalog = catalog.into();
        let state = ViewState::initial(&catalog);
        tracing::debug!(
            "Opened view over {} parts in {} groups",
            catalog.len(),
            catalog.groups().len()
        );
        Self {
            catalog,
            state,
            last_focus_request: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Immutable copy of the current state for readers on other threads
    pub fn snapshot(&self) -> ViewState {
        self.state.clone()
    }

    pub fn transform_mode(&self) -> TransformMode {
        self.state.transform_mode
    }

    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        self.state.transform_mode = mode;
    }

    fn require_part(&self, part_id: &str) -> Result<&Part, ViewError> {
        self.catalog.part(part_id).ok_or_else(|| {
            tracing::warn!("Unknown part: {}", part_id);
            ViewError::UnknownPart(part_id.to_string())
        })
    }

    fn require_group(&self, geometry: &GeometryRef) -> Result<(), ViewError> {
        if self.catalog.group(geometry).is_some() {
            Ok(())
        } else {
            tracing::warn!("Unknown group: {}", geometry);
            Err(ViewError::UnknownGroup(geometry.clone()))
        }
    }
}
