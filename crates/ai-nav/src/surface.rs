use crate::Vec3;

/// Validation of candidate destinations against the navigable surface.
pub trait NavSurface {
    /// Closest navigable point within `max_distance` of `point`, if any.
    fn sample_position(&self, point: Vec3, max_distance: f32) -> Option<Vec3>;

    fn is_navigable(&self, point: Vec3) -> bool {
        self.sample_position(point, 0.0).is_some()
    }
}

/// Unbounded flat ground: every point is navigable as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSurface;

impl NavSurface for OpenSurface {
    fn sample_position(&self, point: Vec3, _max_distance: f32) -> Option<Vec3> {
        Some(point)
    }
}
