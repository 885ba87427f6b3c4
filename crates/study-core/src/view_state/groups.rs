//! Group visibility and analysis markers

use crate::group::Group;
use crate::part::{GeometryRef, Part};

use super::{AssemblyViewState, ViewError};

impl AssemblyViewState {
    /// Groups in order of first appearance in the catalog
    pub fn groups(&self) -> &[Group] {
        self.catalog.groups()
    }

    pub fn group_of(&self, part_id: &str) -> Option<&Group> {
        self.catalog.group_of(part_id)
    }

    /// Flip visibility of every part in the group at once
    ///
    /// Returns the new visibility.
    pub fn toggle_group_visibility(&mut self, geometry: &GeometryRef) -> Result<bool, ViewError> {
        self.require_group(geometry)?;
        let visible = self
            .state
            .visibility_by_group
            .entry(geometry.clone())
            .or_insert(true);
        *visible = !*visible;
        Ok(*visible)
    }

    /// Flip the "checked for analysis" marker of a group
    ///
    /// Does not affect rendering. Returns the new marker value.
    pub fn toggle_group_checked(&mut self, geometry: &GeometryRef) -> Result<bool, ViewError> {
        self.require_group(geometry)?;
        let checked = self
            .state
            .checked_groups
            .entry(geometry.clone())
            .or_insert(false);
        *checked = !*checked;
        Ok(*checked)
    }

    pub fn is_group_visible(&self, geometry: &GeometryRef) -> bool {
        self.state
            .visibility_by_group
            .get(geometry)
            .copied()
            .unwrap_or(false)
    }

    pub fn is_group_checked(&self, geometry: &GeometryRef) -> bool {
        self.state
            .checked_groups
            .get(geometry)
            .copied()
            .unwrap_or(false)
    }

    /// Visibility of a part, derived from its group; unknown parts are not visible
    pub fn is_part_visible(&self, part_id: &str) -> bool {
        self.catalog
            .part(part_id)
            .is_some_and(|p| self.is_group_visible(&p.geometry))
    }

    /// Parts to render, in catalog order
    pub fn visible_parts(&self) -> impl Iterator<Item = &Part> + '_ {
        self.catalog
            .parts()
            .iter()
            .filter(|p| self.is_group_visible(&p.geometry))
    }

    /// Checked groups in group order
    pub fn checked_groups(&self) -> impl Iterator<Item = &Group> + '_ {
        self.catalog
            .groups()
            .iter()
            .filter(|g| self.is_group_checked(&g.geometry))
    }

    /// Display names of the checked groups, for the analysis context
    pub fn checked_group_names(&self) -> Vec<&str> {
        self.checked_groups().map(Group::display_name).collect()
    }
}
