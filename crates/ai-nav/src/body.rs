use crate::world::ARRIVAL_TOLERANCE;
use crate::Vec3;

/// Straight-line kinematic mover.
///
/// A stand-in for an engine's navigation agent: it ignores obstacles, which is enough for
/// headless simulation and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct NavBody {
    pub position: Vec3,
    pub speed: f32,
    pub stopping_distance: f32,
    destination: Option<Vec3>,
}

impl NavBody {
    pub fn new(position: Vec3, speed: f32, stopping_distance: f32) -> Self {
        Self {
            position,
            speed: speed.max(0.0),
            stopping_distance: stopping_distance.max(0.0),
            destination: None,
        }
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    pub fn set_destination(&mut self, point: Vec3) {
        self.destination = Some(point);
    }

    pub fn remaining_distance(&self) -> f32 {
        self.destination
            .map(|d| self.position.distance(d))
            .unwrap_or(0.0)
    }

    pub fn has_arrived(&self) -> bool {
        self.remaining_distance() <= self.stopping_distance + ARRIVAL_TOLERANCE
    }

    /// Move toward the destination for `dt` seconds, halting at the stopping distance.
    pub fn advance(&mut self, dt: f32) {
        let Some(destination) = self.destination else {
            return;
        };

        let remaining = self.position.distance(destination);
        if remaining <= self.stopping_distance {
            return;
        }

        let step = (self.speed * dt.max(0.0)).min(remaining - self.stopping_distance);
        self.position = self.position.move_towards(destination, step);
    }
}
