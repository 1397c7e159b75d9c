use ai_bt::Behavior;
use ai_core::{Status, TickContext};
use ai_nav::Vec3;

use crate::combat::{CombatWorld, ProjectileSpawn};
use crate::config::RangedAttackConfig;

/// Fire-and-forget projectile on a fixed interval.
///
/// Never returns `Running`, so it cannot hold up a parallel node. `reset` keeps the shot
/// timer: time since the last shot is real elapsed time.
pub struct RangedAttackBehavior<W>
where
    W: CombatWorld + 'static,
{
    target: W::Agent,
    config: RangedAttackConfig,
    time_since_last_shot: f32,
}

impl<W> RangedAttackBehavior<W>
where
    W: CombatWorld + 'static,
{
    pub fn new(target: W::Agent, config: RangedAttackConfig) -> Self {
        Self {
            target,
            config,
            time_since_last_shot: 0.0,
        }
    }

    pub fn time_since_last_shot(&self) -> f32 {
        self.time_since_last_shot
    }
}

impl<W> Behavior<W> for RangedAttackBehavior<W>
where
    W: CombatWorld + 'static,
{
    fn name(&self) -> &str {
        "ranged_attack"
    }

    fn process(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> Status {
        self.time_since_last_shot += ctx.dt();
        if self.time_since_last_shot < self.config.interval_seconds {
            return Status::Failure;
        }

        let (Some(origin), Some(aim)) = (world.position(agent), world.position(self.target)) else {
            return Status::Failure;
        };

        let direction = (aim - origin).horizontal().normalize_or_zero();
        if direction == Vec3::ZERO {
            // Target straight above or below: no horizontal heading to fire along.
            return Status::Failure;
        }

        self.time_since_last_shot = 0.0;
        let projectile = self.config.projectile;
        let spawn = ProjectileSpawn {
            origin,
            direction,
            speed: projectile.speed,
            lifetime_seconds: projectile.lifetime_seconds,
            damage: projectile.damage,
        };
        tracing::debug!(agent = ?agent, target = ?self.target, tick = ctx.tick, "projectile fired");
        world.spawn_projectile(agent, spawn);

        Status::Success
    }

    fn reset(&mut self) {}
}
