use std::borrow::Cow;

use ai_bt::Node;
use ai_core::{Status, TickContext};

use crate::combat::{CombatWorld, DamageGate, DamageOutcome, Health};

/// One agent: its behavior tree root, its health and its damage gate.
///
/// `tick` processes the root exactly once; the caller owns the tick loop.
pub struct AgentController<W>
where
    W: CombatWorld + 'static,
{
    agent: W::Agent,
    name: Cow<'static, str>,
    root: Node<W>,
    health: Health,
    gate: DamageGate,
    last_status: Option<Status>,
    ticks: u64,
}

impl<W> AgentController<W>
where
    W: CombatWorld + 'static,
{
    pub fn new(
        agent: W::Agent,
        name: impl Into<Cow<'static, str>>,
        root: Node<W>,
        health: Health,
        gate: DamageGate,
    ) -> Self {
        Self {
            agent,
            name: name.into(),
            root,
            health,
            gate,
            last_status: None,
            ticks: 0,
        }
    }

    pub fn agent(&self) -> W::Agent {
        self.agent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) -> Status {
        let status = self.root.process(ctx, self.agent, world);
        if self.last_status != Some(status) {
            tracing::trace!(agent = ?self.agent, name = %self.name, %status, "root status");
        }
        self.last_status = Some(status);
        self.ticks += 1;
        status
    }

    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn root(&self) -> &Node<W> {
        &self.root
    }

    pub fn can_be_damaged(&self) -> bool {
        self.gate.is_open()
    }

    pub fn set_can_be_damaged(&self, open: bool) {
        self.gate.set(open);
    }

    pub fn gate(&self) -> &DamageGate {
        &self.gate
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }

    /// Offer damage from outside. Ignored while the gate is closed.
    pub fn receive_damage(&mut self, amount: f32) -> DamageOutcome {
        if !self.gate.is_open() {
            tracing::debug!(agent = ?self.agent, amount, "damage ignored, gate closed");
            return DamageOutcome::Ignored;
        }

        let remaining = self.health.apply_damage(amount);
        if self.health.is_depleted() {
            tracing::info!(agent = ?self.agent, name = %self.name, "health depleted");
            DamageOutcome::Depleted
        } else {
            DamageOutcome::Applied { remaining }
        }
    }
}

impl<W> core::fmt::Debug for AgentController<W>
where
    W: CombatWorld + 'static,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AgentController")
            .field("agent", &self.agent)
            .field("name", &self.name)
            .field("health", &self.health)
            .field("can_be_damaged", &self.gate.is_open())
            .field("last_status", &self.last_status)
            .field("root", &self.root)
            .finish()
    }
}
