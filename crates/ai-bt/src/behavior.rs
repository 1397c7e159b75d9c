use ai_core::{Status, TickContext, WorldMut};

/// A unit of agent logic evaluated once per tick through a leaf node.
///
/// Implementations must never block: anything that takes time is expressed as
/// `Status::Running` plus an accumulator advanced by `ctx.dt()`.
pub trait Behavior<W>: 'static
where
    W: WorldMut + 'static,
{
    fn name(&self) -> &str;

    fn process(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> Status;

    /// Drop in-progress state so the next `process` starts fresh.
    fn reset(&mut self);
}

impl<W> Behavior<W> for Box<dyn Behavior<W>>
where
    W: WorldMut + 'static,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn process(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> Status {
        (**self).process(ctx, agent, world)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
