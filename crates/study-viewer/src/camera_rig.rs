//! Camera rig that consumes focus requests
//!
//! Each frame the rig moves the orbit target and the camera a fixed fraction
//! of the way toward the active focus point. Once the request has been active
//! for the settle window, the rig acknowledges it so the view state clears it.

use std::time::Duration;

use glam::{Mat4, Vec3};
use study_core::AssemblyViewState;

use crate::config::ViewerConfig;

/// Orbit camera driven by focus requests
#[derive(Debug, Clone)]
pub struct CameraRig {
    position: Vec3,
    orbit_target: Vec3,
    target_lerp: f32,
    position_lerp: f32,
    offset: Vec3,
    settle: Duration,
    /// Request currently animated and how long it has been active
    active: Option<(u64, Duration)>,
}

impl CameraRig {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            position: Vec3::from(config.initial_camera),
            orbit_target: Vec3::ZERO,
            target_lerp: config.target_lerp.clamp(0.0, 1.0),
            position_lerp: config.position_lerp.clamp(0.0, 1.0),
            offset: Vec3::from(config.camera_offset),
            settle: config.focus_settle(),
            active: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orbit_target(&self) -> Vec3 {
        self.orbit_target
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.orbit_target, Vec3::Y)
    }

    /// Whether a focus animation is in progress
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Advance one frame; returns true when a focus request was settled
    pub fn tick(&mut self, view: &mut AssemblyViewState, dt: Duration) -> bool {
        let Some(target) = view.focus_target() else {
            self.active = None;
            return false;
        };

        let elapsed = match self.active {
            Some((request, elapsed)) if request == target.request => elapsed,
            _ => {
                tracing::debug!("Camera focusing on {:?} (request {})", target.point, target.request);
                Duration::ZERO
            }
        };

        self.orbit_target = self.orbit_target.lerp(target.point, self.target_lerp);
        self.position = self.position.lerp(target.point + self.offset, self.position_lerp);

        let elapsed = elapsed + dt;
        if elapsed >= self.settle {
            view.acknowledge_focus(target.request);
            self.active = None;
            return true;
        }

        self.active = Some((target.request, elapsed));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use study_core::Part;

    fn view() -> AssemblyViewState {
        AssemblyViewState::load_catalog(vec![
            Part::new("a", "A").with_rest_position([1.0, 0.0, 0.0]),
            Part::new("b", "B").with_rest_position([0.0, 0.0, 1.0]),
        ])
        .unwrap()
    }

    const FRAME: Duration = Duration::from_millis(100);

    #[test]
    fn test_idle_without_focus() {
        let mut view = view();
        let mut rig = CameraRig::new(&ViewerConfig::default());
        let before = rig.position();

        assert!(!rig.tick(&mut view, FRAME));
        assert_eq!(rig.position(), before);
        assert!(!rig.is_animating());
    }

    #[test]
    fn test_first_frame_lerps() {
        let mut view = view();
        let config = ViewerConfig::default();
        let mut rig = CameraRig::new(&config);
        view.focus_on_group(&"A".into()).unwrap();

        rig.tick(&mut view, FRAME);
        assert_relative_eq!(rig.orbit_target().x, 0.1);
        // 0.8 + (1.5 - 0.8) * 0.05
        assert_relative_eq!(rig.position().x, 0.835, epsilon = 1e-6);
        assert!(rig.is_animating());
    }

    #[test]
    fn test_focus_cleared_after_settle() {
        let mut view = view();
        let mut rig = CameraRig::new(&ViewerConfig::default());
        view.focus_on_group(&"A".into()).unwrap();

        for _ in 0..9 {
            assert!(!rig.tick(&mut view, FRAME));
        }
        assert!(view.focus_target().is_some());

        assert!(rig.tick(&mut view, FRAME));
        assert_eq!(view.focus_target(), None);
        assert!(!rig.is_animating());
    }

    #[test]
    fn test_new_request_restarts_settle() {
        let mut view = view();
        let mut rig = CameraRig::new(&ViewerConfig::default());
        view.focus_on_group(&"A".into()).unwrap();
        for _ in 0..8 {
            rig.tick(&mut view, FRAME);
        }

        let second = view.focus_on_group(&"B".into()).unwrap();
        for _ in 0..5 {
            assert!(!rig.tick(&mut view, FRAME));
        }
        assert_eq!(view.focus_target(), Some(second));
    }

    #[test]
    fn test_converges_toward_target() {
        let mut view = view();
        let config = ViewerConfig {
            focus_settle_ms: 60_000,
            ..Default::default()
        };
        let mut rig = CameraRig::new(&config);
        view.focus_on_group(&"B".into()).unwrap();

        for _ in 0..400 {
            rig.tick(&mut view, Duration::from_millis(16));
        }
        assert!(rig.orbit_target().distance(Vec3::new(0.0, 0.0, 1.0)) < 1e-3);
        assert!(rig.position().distance(Vec3::new(0.5, 0.5, 1.5)) < 1e-3);
    }
}
