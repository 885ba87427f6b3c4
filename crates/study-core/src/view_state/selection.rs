//! Part selection and camera focus requests

use crate::part::{GeometryRef, Part};

use super::{AssemblyViewState, FocusTarget, ViewError};

impl AssemblyViewState {
    /// Select a part, replacing any previous selection
    pub fn select_part(&mut self, part_id: &str) -> Result<(), ViewError> {
        self.require_part(part_id)?;
        self.state.selected_part_id = Some(part_id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_part_id = None;
    }

    pub fn selected_part(&self) -> Option<&Part> {
        self.state
            .selected_part_id
            .as_deref()
            .and_then(|id| self.catalog.part(id))
    }

    pub fn is_selected(&self, part_id: &str) -> bool {
        self.state.selected_part_id.as_deref() == Some(part_id)
    }

    /// Focus the camera on a group and select its representative part
    ///
    /// The representative is the first part of the group in catalog order; the
    /// focus point is its position at the current explosion amount.
    pub fn focus_on_group(&mut self, geometry: &GeometryRef) -> Result<FocusTarget, ViewError> {
        let representative = self.catalog.representative(geometry).ok_or_else(|| {
            tracing::warn!("Unknown group: {}", geometry);
            ViewError::UnknownGroup(geometry.clone())
        })?;

        let point = self.position_of(representative);
        let part_id = representative.id.clone();

        self.last_focus_request += 1;
        let target = FocusTarget {
            point,
            request: self.last_focus_request,
        };

        self.state.focus_target = Some(target);
        self.state.selected_part_id = Some(part_id);
        Ok(target)
    }

    pub fn focus_target(&self) -> Option<FocusTarget> {
        self.state.focus_target
    }

    /// Clear the focus target once the camera has settled on it
    ///
    /// Only the active request is cleared; acknowledging a superseded or
    /// already cleared request is a no-op. Returns whether anything changed.
    pub fn acknowledge_focus(&mut self, request: u64) -> bool {
        match self.state.focus_target {
            Some(target) if target.request == request => {
                self.state.focus_target = None;
                true
            }
            _ => false,
        }
    }
}
