//! Lowest-priority fallback: idle for a random while, walk to a random nearby point, repeat.

use ai_bt::Behavior;
use ai_core::{DeterministicRng, SplitMix64, Status, TickContext};
use ai_fsm::{State, StateCx, StateMachine, Transition};
use ai_nav::{NavSurface, NavWorldMut, Vec3};

use crate::combat::DamageGate;
use crate::config::WanderConfig;

/// RNG stream id for wander sampling (see `TickContext::rng_for_agent`).
const WANDER_RNG_STREAM: u64 = 0x5741_4E44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WanderPhase {
    Idle,
    Move,
}

/// Outcome of one destination search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderSample {
    pub origin: Vec3,
    /// Last raw candidate, before snapping to the surface.
    pub candidate: Vec3,
    /// Where the agent is sent: the snapped candidate, or `origin` if every attempt failed.
    pub destination: Vec3,
    pub attempts: u32,
    pub found: bool,
}

/// Sample up to `max_attempts` points on the horizontal disk of `radius` around `origin`,
/// keeping the first one the surface accepts within `snap_distance`.
pub fn sample_wander_destination<R>(
    origin: Vec3,
    radius: f32,
    snap_distance: f32,
    max_attempts: u32,
    rng: &mut R,
    surface: &dyn NavSurface,
) -> WanderSample
where
    R: DeterministicRng + ?Sized,
{
    let mut candidate = origin;
    for attempt in 1..=max_attempts {
        let (dx, dz) = rng.unit_disk();
        candidate = origin + Vec3::new(dx * radius, 0.0, dz * radius);
        if let Some(destination) = surface.sample_position(candidate, snap_distance) {
            return WanderSample {
                origin,
                candidate,
                destination,
                attempts: attempt,
                found: true,
            };
        }
    }

    WanderSample {
        origin,
        candidate,
        destination: origin,
        attempts: max_attempts,
        found: false,
    }
}

struct Shared {
    config: WanderConfig,
    rng: SplitMix64,
    last_sample: Option<WanderSample>,
}

struct Idle {
    duration: f32,
    elapsed: f32,
}

impl<W> State<WanderPhase, W, Shared> for Idle
where
    W: NavWorldMut + 'static,
{
    fn enter(&mut self, cx: &mut StateCx<'_, W, Shared>) {
        let config = cx.shared.config;
        self.duration = cx
            .shared
            .rng
            .range_f32(config.min_idle_seconds, config.max_idle_seconds);
        self.elapsed = 0.0;
        cx.world.stop(cx.agent);
    }

    fn update(&mut self, cx: &mut StateCx<'_, W, Shared>) -> Transition<WanderPhase> {
        self.elapsed += cx.tick.dt();
        if self.elapsed >= self.duration {
            Transition::To(WanderPhase::Move)
        } else {
            Transition::Stay
        }
    }
}

struct Move;

impl<W> State<WanderPhase, W, Shared> for Move
where
    W: NavWorldMut + 'static,
{
    fn enter(&mut self, cx: &mut StateCx<'_, W, Shared>) {
        let Some(origin) = cx.world.position(cx.agent) else {
            return;
        };

        let config = cx.shared.config;
        let sample = sample_wander_destination(
            origin,
            config.radius,
            config.snap_distance,
            config.max_sample_attempts,
            &mut cx.shared.rng,
            cx.world.surface(),
        );
        if !sample.found {
            tracing::debug!(
                agent = ?cx.agent,
                attempts = sample.attempts,
                "no navigable wander destination, staying put"
            );
        }

        cx.shared.last_sample = Some(sample);
        cx.world.set_destination(cx.agent, sample.destination);
    }

    fn update(&mut self, cx: &mut StateCx<'_, W, Shared>) -> Transition<WanderPhase> {
        if cx.world.has_arrived(cx.agent) {
            Transition::To(WanderPhase::Idle)
        } else {
            Transition::Stay
        }
    }
}

/// Idle/move wandering. Always `Running`; closes the damage gate while active.
pub struct WanderBehavior<W>
where
    W: NavWorldMut + 'static,
{
    gate: DamageGate,
    seeded: bool,
    shared: Shared,
    machine: StateMachine<WanderPhase, W, Shared>,
}

impl<W> WanderBehavior<W>
where
    W: NavWorldMut + 'static,
{
    pub fn new(config: WanderConfig, gate: DamageGate) -> Self {
        Self {
            gate,
            seeded: false,
            shared: Shared {
                config,
                rng: SplitMix64::new(0),
                last_sample: None,
            },
            machine: StateMachine::new("wander")
                .with_state(
                    WanderPhase::Idle,
                    Idle {
                        duration: 0.0,
                        elapsed: 0.0,
                    },
                )
                .with_state(WanderPhase::Move, Move),
        }
    }

    pub fn phase(&self) -> Option<WanderPhase> {
        self.machine.current()
    }

    /// The most recent destination search, if the agent has moved at least once.
    pub fn last_sample(&self) -> Option<WanderSample> {
        self.shared.last_sample
    }
}

impl<W> Behavior<W> for WanderBehavior<W>
where
    W: NavWorldMut + 'static,
{
    fn name(&self) -> &str {
        "wander"
    }

    fn process(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> Status {
        self.gate.set(false);

        if !self.seeded {
            self.shared.rng = ctx.rng_for_agent(agent, WANDER_RNG_STREAM);
            self.seeded = true;
        }

        let mut cx = StateCx::new(ctx, agent, world, &mut self.shared);
        if self.machine.current().is_none() {
            self.machine.change_state(WanderPhase::Idle, &mut cx);
        }
        self.machine.update(&mut cx);

        Status::Running
    }

    fn reset(&mut self) {
        self.machine.clear();
    }
}
