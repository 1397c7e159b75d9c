use ai_core::AgentId;
use ai_nav::Vec3;

use crate::{Crossing, PerceptionTrigger, TriggerKind};

/// Physics-side overlap detector for a sphere around a moving centre.
///
/// Remembers whether the point was inside at the previous step so it can report
/// crossings, which is what a collision engine does for trigger colliders.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereVolume {
    radius: f32,
    inside: bool,
}

impl SphereVolume {
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            inside: false,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn contains_point(&self) -> bool {
        self.inside
    }

    /// Test `point` against the sphere at `center`; `Some` only when containment changed.
    pub fn step(&mut self, center: Vec3, point: Vec3) -> Option<Crossing> {
        let inside = center.distance(point) <= self.radius;
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside {
            Crossing::Entered
        } else {
            Crossing::Exited
        })
    }
}

/// A trigger with its own sphere volume, for environments without a physics engine.
#[derive(Debug)]
pub struct TriggerVolume<A: AgentId> {
    pub volume: SphereVolume,
    pub trigger: PerceptionTrigger<A>,
}

impl<A: AgentId> TriggerVolume<A> {
    pub fn new(kind: TriggerKind, tracked: A, radius: f32) -> Self {
        Self {
            volume: SphereVolume::new(radius),
            trigger: PerceptionTrigger::new(kind, tracked),
        }
    }

    /// Run one physics step for `other` at `other_position`.
    pub fn sense(&mut self, center: Vec3, other: A, other_position: Vec3) -> Option<Crossing> {
        if other != self.trigger.tracked() {
            return None;
        }
        let crossing = self.volume.step(center, other_position)?;
        self.trigger.observe(other, crossing);
        Some(crossing)
    }
}
