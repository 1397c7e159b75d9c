use ai_perception::TriggerKind;
use thiserror::Error;

use crate::assembly::Archetype;

/// Rejected configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be >= 0, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("idle duration range is inverted: min {min} > max {max}")]
    InvertedIdleRange { min: f32, max: f32 },

    #[error("wander needs at least one destination sample attempt")]
    NoSampleAttempts,

    #[cfg(feature = "serde")]
    #[error("failed to parse agent config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Setup errors reported once, when an agent's tree is assembled.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("{archetype} agent {agent} is missing its {kind} trigger")]
    MissingTrigger {
        archetype: Archetype,
        agent: u64,
        kind: TriggerKind,
    },

    #[error("{kind} trigger of agent {agent} tracks {found}, expected {expected}")]
    TrackingMismatch {
        agent: u64,
        kind: TriggerKind,
        expected: u64,
        found: u64,
    },

    #[error("invalid agent config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
