//! User actions and their dispatch onto a study session

use serde::{Deserialize, Serialize};
use study_core::{GeometryRef, TransformMode};

use crate::assistant::AssistantTab;
use crate::session::{SessionError, StudySession};

/// Every discrete user interaction with a study session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StudyAction {
    // Selection
    SelectPart(String),
    ClearSelection,
    FocusGroup(GeometryRef),

    // Group list
    ToggleGroupVisibility(GeometryRef),
    ToggleGroupChecked(GeometryRef),

    // Viewport
    SetExplosion(f32),
    SetTransformMode(TransformMode),
    GizmoDragged {
        part_id: String,
        position: [f32; 3],
        rotation: [f32; 3],
    },

    // Side panel
    SetAssistantTab(AssistantTab),
    EditQuestion(String),
    Ask,
    EditNotes(String),
    ToggleBookmark,
}

impl StudyAction {
    /// Get a description of the action for display
    pub fn description(&self) -> &'static str {
        match self {
            StudyAction::SelectPart(_) => "Select Part",
            StudyAction::ClearSelection => "Clear Selection",
            StudyAction::FocusGroup(_) => "Focus Group",
            StudyAction::ToggleGroupVisibility(_) => "Toggle Group Visibility",
            StudyAction::ToggleGroupChecked(_) => "Toggle Group Checked",
            StudyAction::SetExplosion(_) => "Set Explosion",
            StudyAction::SetTransformMode(_) => "Set Transform Mode",
            StudyAction::GizmoDragged { .. } => "Drag Gizmo",
            StudyAction::SetAssistantTab(_) => "Switch Assistant Tab",
            StudyAction::EditQuestion(_) => "Edit Question",
            StudyAction::Ask => "Ask Assistant",
            StudyAction::EditNotes(_) => "Edit Notes",
            StudyAction::ToggleBookmark => "Toggle Bookmark",
        }
    }
}

impl StudySession {
    /// Apply one action
    ///
    /// Unknown parts or groups are reported and leave the session unchanged.
    pub fn apply(&mut self, action: StudyAction) -> Result<(), SessionError> {
        tracing::debug!("{}: {:?}", action.description(), action);

        match action {
            StudyAction::SelectPart(id) => self.view.select_part(&id)?,
            StudyAction::ClearSelection => self.view.clear_selection(),
            StudyAction::FocusGroup(geometry) => {
                self.view.focus_on_group(&geometry)?;
            }
            StudyAction::ToggleGroupVisibility(geometry) => {
                self.view.toggle_group_visibility(&geometry)?;
            }
            StudyAction::ToggleGroupChecked(geometry) => {
                self.view.toggle_group_checked(&geometry)?;
            }
            StudyAction::SetExplosion(amount) => {
                self.view.set_explosion(amount);
            }
            StudyAction::SetTransformMode(mode) => self.view.set_transform_mode(mode),
            StudyAction::GizmoDragged {
                part_id,
                position,
                rotation,
            } => {
                // Manual adjustments are reported only; rest poses stay as loaded.
                let current = self.view.current_position(&part_id)?;
                tracing::info!(
                    "Gizmo moved '{}' from {:?} to position {:?}, rotation {:?}",
                    part_id,
                    current,
                    position,
                    rotation
                );
            }
            StudyAction::SetAssistantTab(tab) => self.assistant.set_tab(tab),
            StudyAction::EditQuestion(text) => self.assistant.set_draft(text),
            StudyAction::Ask => {
                if !self.ask_assistant() {
                    tracing::debug!("Ignored empty question");
                }
            }
            StudyAction::EditNotes(text) => self.assistant.set_notes(text),
            StudyAction::ToggleBookmark => self.bookmarked = !self.bookmarked,
        }
        Ok(())
    }
}
