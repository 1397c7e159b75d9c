use core::fmt;

use ai_core::AgentId;

use crate::Latch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which boundary a trigger represents. Variants only differ by radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriggerKind {
    /// Target close enough to start chasing.
    Chase,
    /// Target close enough to begin an attack wind-up.
    AttackRange,
    /// Target close enough for a finished swing to connect.
    AttackReach,
}

impl TriggerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerKind::Chase => "chase",
            TriggerKind::AttackRange => "attack_range",
            TriggerKind::AttackReach => "attack_reach",
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crossing {
    Entered,
    Exited,
}

impl Crossing {
    pub fn inside(self) -> bool {
        matches!(self, Crossing::Entered)
    }
}

type Subscriber = Box<dyn FnMut(bool)>;

/// One-shot event source for a single tracked target.
///
/// The trigger keeps no "inside" state: every inward crossing fires `true`, every outward
/// crossing fires `false`, with no debouncing or coalescing. Overlaps by anything other
/// than the tracked target are ignored.
pub struct PerceptionTrigger<A: AgentId> {
    kind: TriggerKind,
    tracked: A,
    subscribers: Vec<Subscriber>,
}

impl<A: AgentId> PerceptionTrigger<A> {
    pub fn new(kind: TriggerKind, tracked: A) -> Self {
        Self {
            kind,
            tracked,
            subscribers: Vec::new(),
        }
    }

    pub fn kind(&self) -> TriggerKind {
        self.kind
    }

    pub fn tracked(&self) -> A {
        self.tracked
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(bool) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Subscribe a fresh latch, initially `false`.
    pub fn subscribe_latch(&mut self) -> Latch {
        let latch = Latch::detached(false);
        let writer = latch.clone();
        self.subscribe(move |inside| writer.set(inside));
        latch
    }

    pub fn on_overlap_begin(&mut self, other: A) {
        self.observe(other, Crossing::Entered);
    }

    pub fn on_overlap_end(&mut self, other: A) {
        self.observe(other, Crossing::Exited);
    }

    /// Deliver a crossing reported by the physics step.
    pub fn observe(&mut self, other: A, crossing: Crossing) {
        if other != self.tracked {
            return;
        }

        let inside = crossing.inside();
        tracing::trace!(
            kind = %self.kind,
            target = self.tracked.stable_id(),
            inside,
            "perception crossing"
        );
        for subscriber in self.subscribers.iter_mut() {
            subscriber(inside);
        }
    }
}

impl<A: AgentId> fmt::Debug for PerceptionTrigger<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerceptionTrigger")
            .field("kind", &self.kind)
            .field("tracked", &self.tracked)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
