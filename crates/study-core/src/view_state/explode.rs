//! Explosion amount and derived part positions

use glam::{Mat4, Vec3};

use crate::part::Part;

use super::{AssemblyViewState, EXPLODE_MAX, ViewError};

/// Clamp a slider value into `[0, EXPLODE_MAX]`, mapping NaN to 0
pub fn clamp_explosion(amount: f32) -> f32 {
    if amount.is_nan() {
        return 0.0;
    }
    amount.clamp(0.0, EXPLODE_MAX)
}

impl AssemblyViewState {
    /// Store a clamped explosion amount and return the stored value
    ///
    /// Out-of-range input is clamped rather than rejected. No part is touched;
    /// positions follow on the next query.
    pub fn set_explosion(&mut self, amount: f32) -> f32 {
        let clamped = clamp_explosion(amount);
        self.state.explosion_amount = clamped;
        clamped
    }

    pub fn explosion_amount(&self) -> f32 {
        self.state.explosion_amount
    }

    /// Explosion as a fraction of its range, for progress displays
    pub fn explosion_ratio(&self) -> f32 {
        self.state.explosion_amount / EXPLODE_MAX
    }

    /// Position of a part at the current explosion amount
    pub fn position_of(&self, part: &Part) -> Vec3 {
        part.position_at(self.state.explosion_amount)
    }

    /// Position of a part by id at the current explosion amount
    pub fn current_position(&self, part_id: &str) -> Result<Vec3, ViewError> {
        self.require_part(part_id).map(|p| self.position_of(p))
    }

    /// World transform of a part: current position with its fixed rest rotation
    pub fn world_transform_of(&self, part: &Part) -> Mat4 {
        part.rest.to_mat4_at(self.position_of(part))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::scenario_view;
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_identity_over_range() {
        let mut view = scenario_view();
        for step in 0..=10 {
            let amount = EXPLODE_MAX * step as f32 / 10.0;
            view.set_explosion(amount);
            for part in view.catalog().parts().to_vec() {
                let expected = part.rest_position() + part.explode_direction() * amount;
                assert_eq!(view.position_of(&part), expected);
            }
        }
    }

    #[test]
    fn test_clamping() {
        let mut view = scenario_view();
        assert_eq!(view.set_explosion(-1.0), 0.0);
        let low = view.snapshot();
        view.set_explosion(0.0);
        assert_eq!(low, view.snapshot());

        assert_eq!(view.set_explosion(999.0), EXPLODE_MAX);
        let high = view.snapshot();
        view.set_explosion(EXPLODE_MAX);
        assert_eq!(high, view.snapshot());

        assert_eq!(view.set_explosion(f32::NAN), 0.0);
    }

    #[test]
    fn test_set_explosion_idempotent() {
        let mut view = scenario_view();
        view.set_explosion(0.3);
        let once = view.snapshot();
        view.set_explosion(0.3);
        assert_eq!(once, view.snapshot());
        assert_relative_eq!(view.explosion_ratio(), 0.6);
    }

    #[test]
    fn test_unknown_part_position() {
        let view = scenario_view();
        assert_eq!(
            view.current_position("missing"),
            Err(ViewError::UnknownPart("missing".to_string()))
        );
    }

    #[test]
    fn test_world_transform_translation() {
        let mut view = scenario_view();
        view.set_explosion(0.5);
        let part = view.catalog().part("p3").unwrap().clone();
        let transform = view.world_transform_of(&part);
        assert_eq!(transform.w_axis.truncate(), Vec3::new(0.5, 0.0, 1.0));
    }
}
