//! Combat agent behaviors on top of the `ai-bt` runtime.
//!
//! - [`PursueBehavior`]: chase the target while perceived, then investigate its last known
//!   position.
//! - [`WanderBehavior`]: idle for a random duration, walk to a random reachable point,
//!   repeat.
//! - [`AttackBehavior`] and [`RangedAttackBehavior`]: melee wind-up/cooldown and
//!   fire-and-forget projectiles.
//! - [`assemble`]: builds an [`AgentController`] for one of the supported [`Archetype`]s.
//!
//! Behaviors only talk to the environment through [`ai_nav::NavWorldMut`] and
//! [`CombatWorld`]. [`arena::Arena`] is a headless implementation of both.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod arena;
pub mod assembly;
pub mod attack;
pub mod combat;
pub mod config;
pub mod controller;
pub mod error;
pub mod pursue;
pub mod ranged;
pub mod wander;

pub use assembly::{assemble, Archetype};
pub use attack::AttackBehavior;
pub use combat::{CombatWorld, DamageGate, DamageOutcome, Health, ProjectileSpawn};
pub use config::{
    AgentConfig, AttackConfig, PerceptionConfig, ProjectileConfig, RangedAttackConfig,
    WanderConfig,
};
pub use controller::AgentController;
pub use error::{AssemblyError, ConfigError};
pub use pursue::{PursueBehavior, PursuePhase};
pub use ranged::RangedAttackBehavior;
pub use wander::{sample_wander_destination, WanderBehavior, WanderPhase, WanderSample};
