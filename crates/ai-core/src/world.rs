use crate::AgentId;

/// The environment agents are ticked against, seen from a behavior.
///
/// `Agent` names both the acting agent and its targets: a chase target is just another id
/// the world can locate. Queries live in capability traits next to their consumers
/// (`ai_nav::NavWorldView` for movement, `CombatWorld` for damage and projectiles).
pub trait WorldView {
    type Agent: AgentId;
}

/// The environment a behavior issues commands to during `process`.
///
/// Commands take effect on the environment's schedule; behaviors observe their results on a
/// later tick.
pub trait WorldMut: WorldView {}
