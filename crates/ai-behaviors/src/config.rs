//! Tuning values for agent behaviors.
//!
//! Every struct has sensible defaults; with the `serde` feature enabled, missing fields
//! fall back to them when deserializing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Idle/move cycle of the fallback behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderConfig {
    pub min_idle_seconds: f32,
    pub max_idle_seconds: f32,
    /// Destinations are sampled within this distance of the agent.
    pub radius: f32,
    /// How far a sample may be moved to land on the navigable surface.
    pub snap_distance: f32,
    pub max_sample_attempts: u32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            min_idle_seconds: 1.0,
            max_idle_seconds: 3.0,
            radius: 8.0,
            snap_distance: 1.0,
            max_sample_attempts: 25,
        }
    }
}

/// Melee swing gated by range, reach and cooldown.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackConfig {
    pub windup_seconds: f32,
    pub cooldown_seconds: f32,
    pub damage: f32,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            windup_seconds: 0.5,
            cooldown_seconds: 1.5,
            damage: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectileConfig {
    pub speed: f32,
    pub lifetime_seconds: f32,
    pub damage: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 12.0,
            lifetime_seconds: 3.0,
            damage: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangedAttackConfig {
    pub interval_seconds: f32,
    pub projectile: ProjectileConfig,
}

impl Default for RangedAttackConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 2.0,
            projectile: ProjectileConfig::default(),
        }
    }
}

/// Trigger radii. Consumed by whatever environment sizes the trigger volumes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PerceptionConfig {
    pub chase_radius: f32,
    pub attack_range_radius: f32,
    pub attack_reach_radius: f32,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            chase_radius: 10.0,
            attack_range_radius: 2.5,
            attack_reach_radius: 1.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    pub max_health: f32,
    pub perception: PerceptionConfig,
    pub wander: WanderConfig,
    pub attack: AttackConfig,
    pub ranged: RangedAttackConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            perception: PerceptionConfig::default(),
            wander: WanderConfig::default(),
            attack: AttackConfig::default(),
            ranged: RangedAttackConfig::default(),
        }
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl WanderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("wander.min_idle_seconds", self.min_idle_seconds)?;
        non_negative("wander.max_idle_seconds", self.max_idle_seconds)?;
        if self.min_idle_seconds > self.max_idle_seconds {
            return Err(ConfigError::InvertedIdleRange {
                min: self.min_idle_seconds,
                max: self.max_idle_seconds,
            });
        }
        positive("wander.radius", self.radius)?;
        non_negative("wander.snap_distance", self.snap_distance)?;
        if self.max_sample_attempts == 0 {
            return Err(ConfigError::NoSampleAttempts);
        }
        Ok(())
    }
}

impl AttackConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("attack.windup_seconds", self.windup_seconds)?;
        non_negative("attack.cooldown_seconds", self.cooldown_seconds)?;
        non_negative("attack.damage", self.damage)
    }
}

impl RangedAttackConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("ranged.interval_seconds", self.interval_seconds)?;
        positive("ranged.projectile.speed", self.projectile.speed)?;
        positive("ranged.projectile.lifetime_seconds", self.projectile.lifetime_seconds)?;
        non_negative("ranged.projectile.damage", self.projectile.damage)
    }
}

impl PerceptionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("perception.chase_radius", self.chase_radius)?;
        positive("perception.attack_range_radius", self.attack_range_radius)?;
        positive("perception.attack_reach_radius", self.attack_reach_radius)
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("max_health", self.max_health)?;
        self.perception.validate()?;
        self.wander.validate()?;
        self.attack.validate()?;
        self.ranged.validate()
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
