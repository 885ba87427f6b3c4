//! Scripted replay of user actions
//!
//! A script is a RON list of steps; each step is either an action or a pause
//! during which the camera keeps animating frame by frame.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::actions::StudyAction;
use crate::session::StudySession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScriptStep {
    Action(StudyAction),
    Wait { millis: u64 },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse script: {0}")]
    Parse(String),
}

const MIN_FRAME: Duration = Duration::from_millis(1);

/// Outcome of a replay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
    pub frames: usize,
    pub focus_settled: usize,
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    ron::from_str(content).map_err(|e| ScriptError::Parse(e.to_string()))
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScriptError::Io(e.to_string()))?;
    parse_script(&content)
}

/// Run every step against the session
///
/// Rejected actions (unknown parts or groups) are logged and skipped. Frames
/// shorter than a millisecond are advanced as one millisecond.
pub fn replay(session: &mut StudySession, steps: Vec<ScriptStep>, frame: Duration) -> ReplaySummary {
    let frame = frame.max(MIN_FRAME);
    let mut summary = ReplaySummary::default();

    for step in steps {
        match step {
            ScriptStep::Action(action) => match session.apply(action) {
                Ok(()) => summary.applied += 1,
                Err(e) => {
                    tracing::warn!("Skipped action: {}", e);
                    summary.rejected += 1;
                }
            },
            ScriptStep::Wait { millis } => {
                let mut remaining = Duration::from_millis(millis);
                while !remaining.is_zero() {
                    let dt = remaining.min(frame);
                    if session.advance(dt) {
                        summary.focus_settled += 1;
                    }
                    remaining -= dt;
                    summary.frames += 1;
                }
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use study_core::{Catalog, Part};

    fn session() -> StudySession {
        let catalog = Catalog::from_parts(vec![
            Part::new("plate", "/models/BasePlate.glb"),
            Part::new("pin_01", "/models/Pin.glb").with_explode_direction([0.2, 0.2, 0.2]),
        ])
        .unwrap();
        StudySession::open(catalog, &ViewerConfig::default())
    }

    #[test]
    fn test_replay_settles_focus() {
        let steps = parse_script(
            r#"[
                Action(SetExplosion(0.5)),
                Action(FocusGroup("/models/Pin.glb")),
                Wait(millis: 1200),
                Action(SelectPart("missing")),
            ]"#,
        )
        .unwrap();

        let mut session = session();
        let summary = replay(&mut session, steps, Duration::from_millis(100));

        assert_eq!(
            summary,
            ReplaySummary {
                applied: 2,
                rejected: 1,
                frames: 12,
                focus_settled: 1,
            }
        );
        assert_eq!(session.view().focus_target(), None);
        assert_eq!(session.view().state().selected_part_id(), Some("pin_01"));
    }

    #[test]
    fn test_zero_frame_still_advances() {
        let mut session = session();
        let summary = replay(
            &mut session,
            vec![ScriptStep::Wait { millis: 10 }],
            Duration::ZERO,
        );
        assert_eq!(summary.frames, 10);

        let summary = replay(
            &mut session,
            vec![ScriptStep::Wait { millis: 3 }],
            Duration::from_micros(10),
        );
        assert_eq!(summary.frames, 3);
    }

    #[test]
    fn test_bundled_tour() {
        let catalog =
            Catalog::from_ron_str(include_str!("../../../assets/precision_assembly.ron")).unwrap();
        let steps = parse_script(include_str!("../../../assets/tour.ron")).unwrap();
        let mut session = StudySession::open(catalog, &ViewerConfig::default());

        let summary = replay(&mut session, steps, Duration::from_millis(16));
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.focus_settled, 1);

        let frame = session.render_frame();
        assert_eq!(frame.instances.len(), 9);
        assert_eq!(frame.gizmo.unwrap().part_id, "gripper_L");
        assert_eq!(session.view().checked_group_names(), vec!["Link", "Gripper"]);
        assert!(session.assistant().transcript()[0].answer.contains("'Link, Gripper'"));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(parse_script("[Jump]"), Err(ScriptError::Parse(_))));
    }
}
