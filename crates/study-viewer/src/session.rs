//! Study session: one view state plus the panels around it

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use study_core::{
    AssemblyViewState, Catalog, CatalogDescriber, PartDescriber, PartDescription, ViewError,
    ViewState,
};
use uuid::Uuid;

use crate::assistant::AssistantPanel;
use crate::camera_rig::CameraRig;
use crate::config::ViewerConfig;
use crate::frame::RenderFrame;

pub type SharedSession = Arc<RwLock<StudySession>>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    View(#[from] ViewError),
}

/// Describer stored in a session, usable from any thread
pub type SessionDescriber = Box<dyn PartDescriber + Send + Sync>;

/// One open study of an assembly
pub struct StudySession {
    id: Uuid,
    pub(crate) view: AssemblyViewState,
    pub(crate) camera: CameraRig,
    pub(crate) assistant: AssistantPanel,
    pub(crate) bookmarked: bool,
    describer: SessionDescriber,
}

impl StudySession {
    /// Open a session that describes parts from the catalog itself
    pub fn open(catalog: Catalog, config: &ViewerConfig) -> Self {
        let catalog = Arc::new(catalog);
        let describer = Box::new(CatalogDescriber::new(Arc::clone(&catalog)));
        Self::with_describer(catalog, config, describer)
    }

    pub fn with_describer(
        catalog: Arc<Catalog>,
        config: &ViewerConfig,
        describer: SessionDescriber,
    ) -> Self {
        let id = Uuid::new_v4();
        tracing::info!(
            "Opened study session {} for '{}' ({} parts)",
            id,
            catalog.title(),
            catalog.len()
        );
        Self {
            id,
            view: AssemblyViewState::new(catalog),
            camera: CameraRig::new(config),
            assistant: AssistantPanel::new(),
            bookmarked: false,
            describer,
        }
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn view(&self) -> &AssemblyViewState {
        &self.view
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn assistant(&self) -> &AssistantPanel {
        &self.assistant
    }

    pub fn is_bookmarked(&self) -> bool {
        self.bookmarked
    }

    /// Immutable copy of the view state for readers on other threads
    pub fn snapshot(&self) -> ViewState {
        self.view.snapshot()
    }

    /// Advance the camera by one frame
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.camera.tick(&mut self.view, dt)
    }

    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame::capture(&self.view, &self.camera)
    }

    /// Description of the selected part, if any part is selected
    pub fn selected_description(&self) -> Option<PartDescription> {
        self.view
            .selected_part()
            .map(|p| self.describer.describe(&p.id))
    }

    /// Names given to the assistant as analysis context
    ///
    /// Checked groups if any, otherwise the group of the selected part.
    pub fn analysis_context(&self) -> Vec<&str> {
        let checked = self.view.checked_group_names();
        if !checked.is_empty() {
            return checked;
        }
        self.view
            .selected_part()
            .and_then(|p| self.view.group_of(&p.id))
            .map(|g| vec![g.display_name()])
            .unwrap_or_default()
    }

    pub(crate) fn ask_assistant(&mut self) -> bool {
        let context: Vec<String> = self
            .analysis_context()
            .into_iter()
            .map(str::to_string)
            .collect();
        let context: Vec<&str> = context.iter().map(String::as_str).collect();
        self.assistant.ask(&context).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::Part;

    fn catalog() -> Catalog {
        Catalog::from_parts(vec![
            Part::new("gear", "/models/BaseGear.glb")
                .with_explode_direction([0.0, -0.2, 0.0])
                .with_description("Main drive gear"),
            Part::new("pin_01", "/models/Pin.glb").with_explode_direction([0.2, 0.2, 0.2]),
            Part::new("pin_02", "/models/Pin.glb").with_explode_direction([-0.2, 0.2, 0.2]),
        ])
        .unwrap()
    }

    #[test]
    fn test_sessions_are_independent() {
        let config = ViewerConfig::default();
        let mut a = StudySession::open(catalog(), &config);
        let b = StudySession::open(catalog(), &config);

        a.view.set_explosion(0.4);
        assert_ne!(a.id(), b.id());
        assert_eq!(b.view().explosion_amount(), 0.0);
    }

    #[test]
    fn test_selected_description() {
        let mut session = StudySession::open(catalog(), &ViewerConfig::default());
        assert_eq!(session.selected_description(), None);

        session.view.select_part("gear").unwrap();
        assert!(session.selected_description().unwrap().is_available());

        session.view.select_part("pin_01").unwrap();
        assert_eq!(session.selected_description(), Some(PartDescription::Unavailable));
    }

    #[test]
    fn test_analysis_context_prefers_checked() {
        let mut session = StudySession::open(catalog(), &ViewerConfig::default());
        assert!(session.analysis_context().is_empty());

        session.view.select_part("pin_02").unwrap();
        assert_eq!(session.analysis_context(), vec!["Pin"]);

        session.view.toggle_group_checked(&"/models/BaseGear.glb".into()).unwrap();
        assert_eq!(session.analysis_context(), vec!["BaseGear"]);
    }

    #[test]
    fn test_analysis_context_keeps_same_stem_groups_apart() {
        let catalog = Catalog::from_parts(vec![
            Part::new("front_pin", "/a/Pin.glb"),
            Part::new("rear_pin", "/b/Pin.glb"),
        ])
        .unwrap();
        let mut session = StudySession::open(catalog, &ViewerConfig::default());

        session.view.select_part("rear_pin").unwrap();
        assert_eq!(session.analysis_context(), vec!["/b/Pin.glb"]);

        session.view.toggle_group_checked(&"/a/Pin.glb".into()).unwrap();
        session.view.toggle_group_checked(&"/b/Pin.glb".into()).unwrap();
        assert_eq!(session.analysis_context(), vec!["/a/Pin.glb", "/b/Pin.glb"]);
    }

    #[test]
    fn test_shared_snapshot_from_other_thread() {
        let shared = StudySession::open(catalog(), &ViewerConfig::default()).into_shared();
        shared.write().view.set_explosion(0.25);

        let reader = Arc::clone(&shared);
        let amount = std::thread::spawn(move || reader.read().snapshot().explosion_amount())
            .join()
            .unwrap();
        assert_eq!(amount, 0.25);
    }
}
