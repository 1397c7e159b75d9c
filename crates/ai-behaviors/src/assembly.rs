//! Wiring of perception, behaviors and tree shape for the supported agent kinds.

use core::fmt;

use ai_bt::Node;
use ai_core::AgentId;
use ai_perception::{Latch, Sensors, TriggerKind};

use crate::attack::AttackBehavior;
use crate::combat::{CombatWorld, DamageGate, Health};
use crate::config::AgentConfig;
use crate::controller::AgentController;
use crate::error::AssemblyError;
use crate::pursue::PursueBehavior;
use crate::ranged::RangedAttackBehavior;
use crate::wander::WanderBehavior;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported agent kinds. Every tree is `Sequence("tree", [Repeater(..)])` around:
///
/// - `Melee`: `Selector[Attack, Pursue, Wander]`
/// - `Hybrid`: `Parallel[Selector[Attack, Pursue, Wander], RangedAttack]`
/// - `Turret`: `Parallel[Pursue (untriggered), RangedAttack]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Archetype {
    Melee,
    Hybrid,
    Turret,
}

impl Archetype {
    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::Melee => "melee",
            Archetype::Hybrid => "hybrid",
            Archetype::Turret => "turret",
        }
    }

    /// Triggers that must be present for this kind.
    pub fn required_triggers(self) -> &'static [TriggerKind] {
        match self {
            Archetype::Melee | Archetype::Hybrid => &[
                TriggerKind::Chase,
                TriggerKind::AttackRange,
                TriggerKind::AttackReach,
            ],
            Archetype::Turret => &[],
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the controller for `agent` fighting `target`.
///
/// Every check runs before anything subscribes to `sensors`, so a failed assembly leaves
/// the triggers untouched.
pub fn assemble<W>(
    archetype: Archetype,
    agent: W::Agent,
    target: W::Agent,
    sensors: &mut Sensors<W::Agent>,
    config: &AgentConfig,
) -> Result<AgentController<W>, AssemblyError>
where
    W: CombatWorld + 'static,
{
    config.validate()?;

    for &kind in archetype.required_triggers() {
        let trigger = sensors.get(kind).ok_or(AssemblyError::MissingTrigger {
            archetype,
            agent: agent.stable_id(),
            kind,
        })?;
        if trigger.tracked() != target {
            return Err(AssemblyError::TrackingMismatch {
                agent: agent.stable_id(),
                kind,
                expected: target.stable_id(),
                found: trigger.tracked().stable_id(),
            });
        }
    }

    let gate = DamageGate::new(false);
    let root = match archetype {
        Archetype::Melee => {
            let combat = melee_selector(archetype, agent, target, sensors, config, &gate)?;
            Node::sequence("tree", vec![Node::repeater("repeat", combat)])
        }
        Archetype::Hybrid => {
            let combat = melee_selector(archetype, agent, target, sensors, config, &gate)?;
            let ranged = Node::leaf(RangedAttackBehavior::new(target, config.ranged));
            Node::sequence(
                "tree",
                vec![Node::repeater(
                    "repeat",
                    Node::parallel("hybrid", vec![combat, ranged]),
                )],
            )
        }
        Archetype::Turret => {
            let turret = Node::parallel(
                "turret",
                vec![
                    Node::leaf(PursueBehavior::new(target, None, gate.clone())),
                    Node::leaf(RangedAttackBehavior::new(target, config.ranged)),
                ],
            );
            Node::sequence("tree", vec![Node::repeater("repeat", turret)])
        }
    };

    tracing::info!(
        archetype = %archetype,
        agent = ?agent,
        target = ?target,
        "agent assembled"
    );

    Ok(AgentController::new(
        agent,
        format!("{archetype}-{}", agent.stable_id()),
        root,
        Health::new(config.max_health),
        gate,
    ))
}

fn subscribe<A: AgentId>(
    sensors: &mut Sensors<A>,
    kind: TriggerKind,
    archetype: Archetype,
    agent: A,
) -> Result<Latch, AssemblyError> {
    sensors
        .get_mut(kind)
        .map(|trigger| trigger.subscribe_latch())
        .ok_or(AssemblyError::MissingTrigger {
            archetype,
            agent: agent.stable_id(),
            kind,
        })
}

fn melee_selector<W>(
    archetype: Archetype,
    agent: W::Agent,
    target: W::Agent,
    sensors: &mut Sensors<W::Agent>,
    config: &AgentConfig,
    gate: &DamageGate,
) -> Result<Node<W>, AssemblyError>
where
    W: CombatWorld + 'static,
{
    let range = subscribe(sensors, TriggerKind::AttackRange, archetype, agent)?;
    let reach = subscribe(sensors, TriggerKind::AttackReach, archetype, agent)?;
    let chase = subscribe(sensors, TriggerKind::Chase, archetype, agent)?;

    Ok(Node::selector(
        "combat",
        vec![
            Node::leaf(AttackBehavior::new(
                target,
                range,
                reach,
                gate.clone(),
                config.attack,
            )),
            Node::leaf(PursueBehavior::new(target, Some(chase), gate.clone())),
            Node::leaf(WanderBehavior::new(config.wander, gate.clone())),
        ],
    ))
}
