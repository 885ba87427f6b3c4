//! Headless study viewer
//!
//! Drives an [`study_core::AssemblyViewState`] the way an interactive front-end
//! would: user actions, a per-frame camera rig, render snapshots, a part
//! metadata client and the assistant/notes side panel.

pub mod actions;
pub mod assistant;
pub mod camera_rig;
pub mod config;
pub mod frame;
pub mod metadata;
pub mod script;
pub mod session;

pub use actions::StudyAction;
pub use assistant::{AssistantPanel, AssistantTab, Exchange};
pub use camera_rig::CameraRig;
pub use config::{
    AppConfig, ConfigManager, MetadataConfig, SharedConfig, ViewerConfig, create_shared_config,
};
pub use frame::{Gizmo, PartInstance, RenderFrame};
pub use metadata::{HttpPartDescriber, MetadataError, PartInfo};
pub use script::{ReplaySummary, ScriptError, ScriptStep, replay};
pub use session::{SessionDescriber, SessionError, SharedSession, StudySession};
