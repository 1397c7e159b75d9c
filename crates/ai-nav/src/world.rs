use ai_core::{WorldMut, WorldView};

use crate::{NavSurface, Vec3};

/// Slack applied to arrival checks so float drift at the stopping distance still counts.
pub const ARRIVAL_TOLERANCE: f32 = 1e-3;

/// Read side of the navigation capability.
pub trait NavWorldView: WorldView {
    /// Live position of any tracked entity (agents and their targets alike).
    fn position(&self, agent: Self::Agent) -> Option<Vec3>;

    /// Distance left along the current path; `0.0` when idle.
    fn remaining_distance(&self, agent: Self::Agent) -> f32;

    fn stopping_distance(&self, agent: Self::Agent) -> f32;

    fn surface(&self) -> &dyn NavSurface;

    fn has_arrived(&self, agent: Self::Agent) -> bool {
        self.remaining_distance(agent) <= self.stopping_distance(agent) + ARRIVAL_TOLERANCE
    }
}

/// Movement commands. Exactly one active behavior issues these for a given agent.
pub trait NavWorldMut: WorldMut + NavWorldView {
    fn set_destination(&mut self, agent: Self::Agent, point: Vec3);

    /// Halt in place.
    fn stop(&mut self, agent: Self::Agent) {
        if let Some(here) = self.position(agent) {
            self.set_destination(agent, here);
        }
    }
}
