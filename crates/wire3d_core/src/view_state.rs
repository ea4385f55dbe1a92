//! Interactive view state: cumulative shift, scale, and projection
//!
//! [`ViewState`] keeps an immutable snapshot of the original points and
//! derives the displayed points from it on every query. Repeated
//! operations therefore never compound floating-point error, and
//! [`reset`](ViewState::reset) restores the original values exactly.

use serde::{Serialize, Deserialize};
use wire3d_math::Vec3;

use crate::ProjectionPlane;

/// Factor applied by one [`ViewState::scale_up`] step
pub const SCALE_UP_FACTOR: f32 = 1.1;
/// Factor applied by one [`ViewState::scale_down`] step
pub const SCALE_DOWN_FACTOR: f32 = 0.9;

/// Cumulative transform state over a pristine point snapshot
///
/// The displayed points are always a pure function of the snapshot and
/// the three state fields; nothing is mutated incrementally. Application
/// order is a fixed contract: scale, then shift, then projection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewState {
    /// Original points, never mutated after construction
    original_points: Vec<Vec3>,
    /// Cumulative multiplicative scale (1.0 = original size)
    scale_factor: f32,
    /// Cumulative additive shift
    shift_total: Vec3,
    /// Active projection plane, if any
    projection: Option<ProjectionPlane>,
}

impl ViewState {
    /// Create a view state over a snapshot of the given points
    pub fn new(original_points: Vec<Vec3>) -> Self {
        Self {
            original_points,
            scale_factor: 1.0,
            shift_total: Vec3::ZERO,
            projection: None,
        }
    }

    /// The pristine snapshot this state derives from
    pub fn original_points(&self) -> &[Vec3] {
        &self.original_points
    }

    /// Current cumulative scale factor
    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Current cumulative shift
    #[inline]
    pub fn shift_total(&self) -> Vec3 {
        self.shift_total
    }

    /// Active projection plane, if any
    #[inline]
    pub fn projection(&self) -> Option<ProjectionPlane> {
        self.projection
    }

    /// Add (dx, dy, dz) to the cumulative shift
    ///
    /// Leaves the scale factor and projection untouched.
    pub fn apply_shift(&mut self, dx: f32, dy: f32, dz: f32) {
        self.shift_total += Vec3::new(dx, dy, dz);
    }

    /// Grow the model by one step (scale factor x1.1)
    ///
    /// Steps compound multiplicatively: two steps give x1.21, not x1.2.
    pub fn scale_up(&mut self) {
        self.scale_factor *= SCALE_UP_FACTOR;
    }

    /// Shrink the model by one step (scale factor x0.9)
    ///
    /// The factor is not clamped; repeated steps approach zero without
    /// reaching it.
    pub fn scale_down(&mut self) {
        self.scale_factor *= SCALE_DOWN_FACTOR;
    }

    /// Activate a projection plane, replacing any previous one
    ///
    /// Projections never stack; only the latest plane is applied.
    pub fn set_projection(&mut self, plane: ProjectionPlane) {
        self.projection = Some(plane);
    }

    /// Deactivate the projection
    pub fn clear_projection(&mut self) {
        self.projection = None;
    }

    /// Restore the original view: scale 1.0, zero shift, no projection
    ///
    /// Because the displayed points are recomputed from the snapshot,
    /// a query after reset reproduces the original values exactly.
    pub fn reset(&mut self) {
        self.scale_factor = 1.0;
        self.shift_total = Vec3::ZERO;
        self.projection = None;
    }

    /// Compute the displayed points from the snapshot
    ///
    /// Per point: scale componentwise, then add the shift, then (if a
    /// projection is active) zero the dropped axis. The order is part of
    /// the contract - reordering changes results whenever scale is not
    /// 1.0 or the shift is nonzero.
    pub fn current_points(&self) -> Vec<Vec3> {
        self.original_points
            .iter()
            .map(|&p| {
                let placed = p * self.scale_factor + self.shift_total;
                match self.projection {
                    Some(plane) => plane.flatten(placed),
                    None => placed,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn fixture() -> Vec<Vec3> {
        vec![
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 3.0, 5.0),
            Vec3::new(-1.0, 0.5, 0.25),
        ]
    }

    #[test]
    fn test_pristine_state_returns_original() {
        let state = ViewState::new(fixture());
        assert_eq!(state.current_points(), fixture());
        assert_eq!(state.scale_factor(), 1.0);
        assert_eq!(state.shift_total(), Vec3::ZERO);
        assert_eq!(state.projection(), None);
    }

    #[test]
    fn test_shift_accumulates() {
        let mut state = ViewState::new(fixture());
        state.apply_shift(1.0, 0.0, 0.0);
        state.apply_shift(0.5, -1.0, 2.0);

        assert_eq!(state.shift_total(), Vec3::new(1.5, -1.0, 2.0));
        // Scale and projection untouched
        assert_eq!(state.scale_factor(), 1.0);
        assert_eq!(state.projection(), None);
    }

    #[test]
    fn test_scale_compounds_multiplicatively() {
        let mut state = ViewState::new(fixture());
        state.scale_up();
        state.scale_up();
        // 1.1 * 1.1 = 1.21, not 1.2
        assert!(approx_eq(state.scale_factor(), 1.21));

        state.scale_down();
        assert!(approx_eq(state.scale_factor(), 1.21 * 0.9));
    }

    #[test]
    fn test_scale_is_applied_before_shift() {
        // Call order does not matter; the displayed point is always
        // p * scale + shift, never (p + shift) * scale.
        let mut state = ViewState::new(vec![Vec3::new(2.0, 0.0, 0.0)]);
        state.apply_shift(1.0, 0.0, 0.0);
        state.scale_up();

        let p = state.current_points()[0];
        // 2 * 1.1 + 1 = 3.2
        assert!(approx_eq(p.x, 3.2), "Expected 3.2, got {}", p.x);
        // Not (2 + 1) * 1.1 = 3.3
        assert!(!approx_eq(p.x, 3.3));
    }

    #[test]
    fn test_projection_zeroes_exactly_one_axis() {
        let mut state = ViewState::new(vec![Vec3::new(2.0, 3.0, 5.0)]);

        state.set_projection(ProjectionPlane::Yz);
        assert_eq!(state.current_points()[0], Vec3::new(0.0, 3.0, 5.0));

        state.set_projection(ProjectionPlane::Xz);
        assert_eq!(state.current_points()[0], Vec3::new(2.0, 0.0, 5.0));

        state.set_projection(ProjectionPlane::Xy);
        assert_eq!(state.current_points()[0], Vec3::new(2.0, 3.0, 0.0));
    }

    #[test]
    fn test_set_projection_replaces_never_stacks() {
        let mut state = ViewState::new(vec![Vec3::new(2.0, 3.0, 5.0)]);
        state.set_projection(ProjectionPlane::Yz);
        state.set_projection(ProjectionPlane::Xy);

        // Only Z is dropped; the earlier Yz projection left no trace
        assert_eq!(state.current_points()[0], Vec3::new(2.0, 3.0, 0.0));
    }

    #[test]
    fn test_clear_projection() {
        let mut state = ViewState::new(vec![Vec3::new(2.0, 3.0, 5.0)]);
        state.set_projection(ProjectionPlane::Xy);
        state.clear_projection();
        assert_eq!(state.current_points()[0], Vec3::new(2.0, 3.0, 5.0));
    }

    #[test]
    fn test_projection_applies_after_scale_and_shift() {
        let mut state = ViewState::new(vec![Vec3::new(2.0, 3.0, 5.0)]);
        state.scale_up();
        state.apply_shift(0.0, 1.0, 0.0);
        state.set_projection(ProjectionPlane::Yz);

        let p = state.current_points()[0];
        assert_eq!(p.x, 0.0);
        assert!(approx_eq(p.y, 3.0 * 1.1 + 1.0));
        assert!(approx_eq(p.z, 5.0 * 1.1));
    }

    #[test]
    fn test_reset_restores_original_exactly() {
        let mut state = ViewState::new(fixture());
        state.apply_shift(3.0, -2.0, 0.5);
        state.scale_up();
        state.scale_up();
        state.scale_down();
        state.set_projection(ProjectionPlane::Xz);

        state.reset();

        // Bit-exact: the snapshot was never touched
        assert_eq!(state.current_points(), fixture());
        assert_eq!(state.scale_factor(), 1.0);
        assert_eq!(state.shift_total(), Vec3::ZERO);
        assert_eq!(state.projection(), None);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = ViewState::new(fixture());
        state.apply_shift(1.0, 1.0, 1.0);
        state.reset();
        let after_one = state.current_points();
        state.reset();
        assert_eq!(state.current_points(), after_one);
    }

    #[test]
    fn test_current_points_does_not_mutate_snapshot() {
        let mut state = ViewState::new(fixture());
        state.scale_up();
        let _ = state.current_points();
        let _ = state.current_points();
        assert_eq!(state.original_points(), fixture().as_slice());
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        // Recomputation from the snapshot means no drift across queries
        let mut state = ViewState::new(fixture());
        state.scale_up();
        state.apply_shift(0.1, 0.2, 0.3);

        let first = state.current_points();
        for _ in 0..100 {
            assert_eq!(state.current_points(), first);
        }
    }
}
