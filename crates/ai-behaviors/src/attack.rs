use ai_bt::Behavior;
use ai_core::{Status, TickContext};
use ai_perception::Latch;

use crate::combat::{CombatWorld, DamageGate};
use crate::config::AttackConfig;

/// Melee attack: wind up while the target is in range, then hit if it is still within reach.
///
/// The cooldown counts down on every `process` call, including ones that fail, and is not
/// cleared by `reset`; only the wind-up is.
pub struct AttackBehavior<W>
where
    W: CombatWorld + 'static,
{
    target: W::Agent,
    in_range: Latch,
    in_reach: Latch,
    gate: DamageGate,
    config: AttackConfig,
    cooldown_remaining: f32,
    windup_elapsed: f32,
}

impl<W> AttackBehavior<W>
where
    W: CombatWorld + 'static,
{
    pub fn new(
        target: W::Agent,
        in_range: Latch,
        in_reach: Latch,
        gate: DamageGate,
        config: AttackConfig,
    ) -> Self {
        Self {
            target,
            in_range,
            in_reach,
            gate,
            config,
            cooldown_remaining: 0.0,
            windup_elapsed: 0.0,
        }
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    pub fn windup_elapsed(&self) -> f32 {
        self.windup_elapsed
    }

    pub fn is_winding_up(&self) -> bool {
        self.windup_elapsed > 0.0
    }
}

impl<W> Behavior<W> for AttackBehavior<W>
where
    W: CombatWorld + 'static,
{
    fn name(&self) -> &str {
        "attack"
    }

    fn process(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> Status {
        let dt = ctx.dt();
        self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);

        if !self.in_range.get() || self.cooldown_remaining > 0.0 {
            return Status::Failure;
        }

        self.gate.set(true);
        if self.windup_elapsed == 0.0 {
            world.stop(agent);
        }

        self.windup_elapsed += dt;
        if self.windup_elapsed < self.config.windup_seconds {
            return Status::Running;
        }

        if self.in_reach.get() {
            tracing::info!(
                agent = ?agent,
                target = ?self.target,
                damage = self.config.damage,
                tick = ctx.tick,
                "melee hit"
            );
            world.apply_damage(agent, self.target, self.config.damage);
        } else {
            tracing::debug!(agent = ?agent, tick = ctx.tick, "melee swing missed");
        }

        self.cooldown_remaining = self.config.cooldown_seconds;
        self.windup_elapsed = 0.0;
        Status::Success
    }

    fn reset(&mut self) {
        self.windup_elapsed = 0.0;
    }
}
