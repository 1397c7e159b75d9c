//! Headless reference environment.
//!
//! Kinematic bodies on a [`NavSurface`], sphere volumes for the perception triggers and
//! logs for everything the combat capability emits. Hosts with a real engine implement
//! the world traits themselves; this one backs tests and the bundled simulation.

use std::collections::BTreeMap;

use ai_core::{WorldMut, WorldView};
use ai_nav::{NavBody, NavSurface, NavWorldMut, NavWorldView, OpenSurface, Vec3};
use ai_perception::{Crossing, Sensors, SphereVolume, TriggerKind, TriggerVolume};

use crate::combat::{CombatWorld, ProjectileSpawn};
use crate::config::PerceptionConfig;

/// Damage an agent dealt this step. Delivered to the receiving controller by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageEvent {
    pub source: u64,
    pub target: u64,
    pub amount: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnedProjectile {
    pub source: u64,
    pub projectile: ProjectileSpawn,
}

/// A crossing reported by [`Arena::step_physics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorEvent {
    pub owner: u64,
    pub kind: TriggerKind,
    pub crossing: Crossing,
}

pub struct Arena {
    surface: Box<dyn NavSurface>,
    bodies: BTreeMap<u64, NavBody>,
    volumes: BTreeMap<u64, Vec<TriggerVolume<u64>>>,
    damage: Vec<DamageEvent>,
    projectiles: Vec<SpawnedProjectile>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Box::new(OpenSurface))
    }
}

impl Arena {
    pub fn new(surface: Box<dyn NavSurface>) -> Self {
        Self {
            surface,
            bodies: BTreeMap::new(),
            volumes: BTreeMap::new(),
            damage: Vec::new(),
            projectiles: Vec::new(),
        }
    }

    pub fn insert_body(&mut self, id: u64, body: NavBody) -> Option<NavBody> {
        self.bodies.insert(id, body)
    }

    /// Drop a body along with any trigger volumes it owns.
    pub fn remove_body(&mut self, id: u64) -> Option<NavBody> {
        self.volumes.remove(&id);
        self.bodies.remove(&id)
    }

    pub fn body(&self, id: u64) -> Option<&NavBody> {
        self.bodies.get(&id)
    }

    pub fn body_mut(&mut self, id: u64) -> Option<&mut NavBody> {
        self.bodies.get_mut(&id)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (u64, &NavBody)> {
        self.bodies.iter().map(|(id, body)| (*id, body))
    }

    /// Take ownership of `owner`'s triggers and give each one a sphere sized by `radii`.
    ///
    /// Call this after assembly has subscribed to the triggers.
    pub fn attach_sensors(&mut self, owner: u64, sensors: Sensors<u64>, radii: &PerceptionConfig) {
        let Sensors {
            chase,
            attack_range,
            attack_reach,
        } = sensors;

        let volumes = self.volumes.entry(owner).or_default();
        for trigger in [chase, attack_range, attack_reach].into_iter().flatten() {
            let radius = match trigger.kind() {
                TriggerKind::Chase => radii.chase_radius,
                TriggerKind::AttackRange => radii.attack_range_radius,
                TriggerKind::AttackReach => radii.attack_reach_radius,
            };
            volumes.push(TriggerVolume {
                volume: SphereVolume::new(radius),
                trigger,
            });
        }
    }

    /// Test every trigger volume against its tracked target and fire the crossings.
    pub fn step_physics(&mut self) -> Vec<SensorEvent> {
        let mut events = Vec::new();
        for (&owner, volumes) in self.volumes.iter_mut() {
            let Some(center) = self.bodies.get(&owner).map(|b| b.position) else {
                continue;
            };
            for volume in volumes.iter_mut() {
                let tracked = volume.trigger.tracked();
                let Some(position) = self.bodies.get(&tracked).map(|b| b.position) else {
                    continue;
                };
                if let Some(crossing) = volume.sense(center, tracked, position) {
                    events.push(SensorEvent {
                        owner,
                        kind: volume.trigger.kind(),
                        crossing,
                    });
                }
            }
        }
        events
    }

    pub fn step_movement(&mut self, dt: f32) {
        for body in self.bodies.values_mut() {
            body.advance(dt);
        }
    }

    /// Movement, then perception for the new positions.
    pub fn step(&mut self, dt: f32) -> Vec<SensorEvent> {
        self.step_movement(dt);
        self.step_physics()
    }

    pub fn damage_log(&self) -> &[DamageEvent] {
        &self.damage
    }

    pub fn drain_damage(&mut self) -> Vec<DamageEvent> {
        std::mem::take(&mut self.damage)
    }

    pub fn projectiles(&self) -> &[SpawnedProjectile] {
        &self.projectiles
    }

    pub fn drain_projectiles(&mut self) -> Vec<SpawnedProjectile> {
        std::mem::take(&mut self.projectiles)
    }
}

impl core::fmt::Debug for Arena {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arena")
            .field("bodies", &self.bodies)
            .field("volumes", &self.volumes)
            .field("damage", &self.damage.len())
            .field("projectiles", &self.projectiles.len())
            .finish()
    }
}

impl WorldView for Arena {
    type Agent = u64;
}

impl WorldMut for Arena {}

impl NavWorldView for Arena {
    fn position(&self, agent: u64) -> Option<Vec3> {
        self.bodies.get(&agent).map(|b| b.position)
    }

    fn remaining_distance(&self, agent: u64) -> f32 {
        self.bodies
            .get(&agent)
            .map(NavBody::remaining_distance)
            .unwrap_or(0.0)
    }

    fn stopping_distance(&self, agent: u64) -> f32 {
        self.bodies
            .get(&agent)
            .map(|b| b.stopping_distance)
            .unwrap_or(0.0)
    }

    fn surface(&self) -> &dyn NavSurface {
        &*self.surface
    }
}

impl NavWorldMut for Arena {
    fn set_destination(&mut self, agent: u64, point: Vec3) {
        if let Some(body) = self.bodies.get_mut(&agent) {
            body.set_destination(point);
        }
    }
}

impl CombatWorld for Arena {
    fn apply_damage(&mut self, source: u64, target: u64, amount: f32) {
        self.damage.push(DamageEvent {
            source,
            target,
            amount,
        });
    }

    fn spawn_projectile(&mut self, source: u64, projectile: ProjectileSpawn) {
        self.projectiles.push(SpawnedProjectile { source, projectile });
    }
}
