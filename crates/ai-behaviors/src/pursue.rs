//! Chase a perceived target; when it slips away, investigate where it was last seen.

use ai_bt::Behavior;
use ai_core::{Status, TickContext};
use ai_fsm::{State, StateCx, StateMachine, Transition};
use ai_nav::{NavWorldMut, Vec3};
use ai_perception::Latch;

use crate::combat::DamageGate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuePhase {
    Chase,
    Investigate,
}

struct Shared<A> {
    target: A,
    in_range: bool,
    last_known: Option<Vec3>,
    status: Status,
}

type Cx<'a, W> = StateCx<'a, W, Shared<<W as ai_core::WorldView>::Agent>>;

struct Chase;

impl<W> State<PursuePhase, W, Shared<W::Agent>> for Chase
where
    W: NavWorldMut + 'static,
{
    fn update(&mut self, cx: &mut Cx<'_, W>) -> Transition<PursuePhase> {
        if !cx.shared.in_range {
            return Transition::To(PursuePhase::Investigate);
        }

        if let Some(seen) = cx.world.position(cx.shared.target) {
            cx.shared.last_known = Some(seen);
            cx.world.set_destination(cx.agent, seen);
        }
        Transition::Stay
    }
}

struct Investigate;

impl<W> State<PursuePhase, W, Shared<W::Agent>> for Investigate
where
    W: NavWorldMut + 'static,
{
    fn enter(&mut self, cx: &mut Cx<'_, W>) {
        match cx.shared.last_known {
            Some(point) => cx.world.set_destination(cx.agent, point),
            None => cx.world.stop(cx.agent),
        }
    }

    fn update(&mut self, cx: &mut Cx<'_, W>) -> Transition<PursuePhase> {
        if cx.shared.in_range {
            return Transition::To(PursuePhase::Chase);
        }

        if cx.world.has_arrived(cx.agent) {
            tracing::debug!(
                agent = ?cx.agent,
                tick = cx.tick.tick,
                "target not reacquired, giving up pursuit"
            );
            cx.shared.status = Status::Success;
        }
        Transition::Stay
    }
}

/// Chase/investigate behavior.
///
/// Status semantics: `Failure` while the target has not been perceived, `Running` while
/// chasing or investigating, `Success` once investigation ends without reacquiring the
/// target (hand control to a lower-priority branch). Stays `Success` until reset.
///
/// Built without a chase latch, the target counts as always perceived and the behavior
/// is `Running` from the start.
pub struct PursueBehavior<W>
where
    W: NavWorldMut + 'static,
{
    perception: Option<Latch>,
    gate: DamageGate,
    shared: Shared<W::Agent>,
    machine: StateMachine<PursuePhase, W, Shared<W::Agent>>,
}

impl<W> PursueBehavior<W>
where
    W: NavWorldMut + 'static,
{
    pub fn new(target: W::Agent, perception: Option<Latch>, gate: DamageGate) -> Self {
        let status = initial_status(perception.as_ref());
        Self {
            perception,
            gate,
            shared: Shared {
                target,
                in_range: false,
                last_known: None,
                status,
            },
            machine: StateMachine::new("pursue")
                .with_state(PursuePhase::Chase, Chase)
                .with_state(PursuePhase::Investigate, Investigate),
        }
    }

    pub fn phase(&self) -> Option<PursuePhase> {
        self.machine.current()
    }

    pub fn status(&self) -> Status {
        self.shared.status
    }

    pub fn last_known_position(&self) -> Option<Vec3> {
        self.shared.last_known
    }

    fn target_in_range(&self) -> bool {
        self.perception.as_ref().map_or(true, Latch::get)
    }
}

fn initial_status(perception: Option<&Latch>) -> Status {
    if perception.is_some() {
        Status::Failure
    } else {
        Status::Running
    }
}

impl<W> Behavior<W> for PursueBehavior<W>
where
    W: NavWorldMut + 'static,
{
    fn name(&self) -> &str {
        "pursue"
    }

    fn process(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> Status {
        self.shared.in_range = self.target_in_range();

        match self.shared.status {
            Status::Success => return Status::Success,
            Status::Failure if !self.shared.in_range => return Status::Failure,
            Status::Failure => self.shared.status = Status::Running,
            Status::Running => {}
        }

        self.gate.set(true);

        let mut cx = StateCx::new(ctx, agent, world, &mut self.shared);
        if self.machine.current().is_none() {
            cx.shared.last_known = cx.world.position(cx.shared.target);
            self.machine.change_state(PursuePhase::Chase, &mut cx);
        }
        self.machine.update(&mut cx);

        self.shared.status
    }

    fn reset(&mut self) {
        self.shared.status = initial_status(self.perception.as_ref());
        self.shared.last_known = None;
        self.machine.clear();
    }
}
