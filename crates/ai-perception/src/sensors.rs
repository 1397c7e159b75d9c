use ai_core::AgentId;

use crate::{PerceptionTrigger, TriggerKind};

/// The triggers an agent may be wired to. Assembly decides which ones are required.
#[derive(Debug)]
pub struct Sensors<A: AgentId> {
    pub chase: Option<PerceptionTrigger<A>>,
    pub attack_range: Option<PerceptionTrigger<A>>,
    pub attack_reach: Option<PerceptionTrigger<A>>,
}

impl<A: AgentId> Default for Sensors<A> {
    fn default() -> Self {
        Self {
            chase: None,
            attack_range: None,
            attack_reach: None,
        }
    }
}

impl<A: AgentId> Sensors<A> {
    /// All three triggers tracking `target`.
    pub fn tracking(target: A) -> Self {
        Self {
            chase: Some(PerceptionTrigger::new(TriggerKind::Chase, target)),
            attack_range: Some(PerceptionTrigger::new(TriggerKind::AttackRange, target)),
            attack_reach: Some(PerceptionTrigger::new(TriggerKind::AttackReach, target)),
        }
    }

    pub fn get(&self, kind: TriggerKind) -> Option<&PerceptionTrigger<A>> {
        match kind {
            TriggerKind::Chase => self.chase.as_ref(),
            TriggerKind::AttackRange => self.attack_range.as_ref(),
            TriggerKind::AttackReach => self.attack_reach.as_ref(),
        }
    }

    pub fn get_mut(&mut self, kind: TriggerKind) -> Option<&mut PerceptionTrigger<A>> {
        match kind {
            TriggerKind::Chase => self.chase.as_mut(),
            TriggerKind::AttackRange => self.attack_range.as_mut(),
            TriggerKind::AttackReach => self.attack_reach.as_mut(),
        }
    }

    pub fn insert(&mut self, trigger: PerceptionTrigger<A>) -> Option<PerceptionTrigger<A>> {
        let slot = match trigger.kind() {
            TriggerKind::Chase => &mut self.chase,
            TriggerKind::AttackRange => &mut self.attack_range,
            TriggerKind::AttackReach => &mut self.attack_reach,
        };
        slot.replace(trigger)
    }
}
