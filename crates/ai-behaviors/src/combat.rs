use std::cell::Cell;
use std::rc::Rc;

use ai_nav::{NavWorldMut, Vec3};

/// A projectile to be created by the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpawn {
    pub origin: Vec3,
    /// Unit vector on the horizontal plane.
    pub direction: Vec3,
    pub speed: f32,
    pub lifetime_seconds: f32,
    pub damage: f32,
}

/// Combat capability. Damage bookkeeping for the receiving side is the environment's.
pub trait CombatWorld: NavWorldMut {
    fn apply_damage(&mut self, source: Self::Agent, target: Self::Agent, amount: f32);

    fn spawn_projectile(&mut self, source: Self::Agent, projectile: ProjectileSpawn);
}

/// "Can be damaged" flag shared between an agent and the behaviors that drive it.
///
/// Clones refer to the same flag. Written by at most one active behavior per tick.
#[derive(Debug, Clone, Default)]
pub struct DamageGate(Rc<Cell<bool>>);

impl DamageGate {
    pub fn new(open: bool) -> Self {
        Self(Rc::new(Cell::new(open)))
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, open: bool) {
        self.0.set(open);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Subtract `amount` (negative amounts are ignored), saturating at zero.
    pub fn apply_damage(&mut self, amount: f32) -> f32 {
        self.current = (self.current - amount.max(0.0)).max(0.0);
        self.current
    }

    pub fn set_current(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }
}

/// Result of offering damage to an agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// The damage gate was closed.
    Ignored,
    Applied { remaining: f32 },
    /// Health reached zero. Removing the agent is up to the caller.
    Depleted,
}
