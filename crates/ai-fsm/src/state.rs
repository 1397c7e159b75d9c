use core::fmt::Debug;

use ai_core::{TickContext, WorldMut};

/// Identifier of a registered state. Usually a small module-private enum.
pub trait StateId: Copy + Eq + Debug + 'static {}

impl<T> StateId for T where T: Copy + Eq + Debug + 'static {}

/// Transition requested by [`State::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<K> {
    Stay,
    To(K),
}

/// Everything a state can touch during one call.
///
/// `shared` is owned by the behavior that owns the machine; states use it to read
/// latched perception and to report back (e.g. a behavior-level status).
pub struct StateCx<'a, W, B>
where
    W: WorldMut,
{
    pub tick: &'a TickContext,
    pub agent: W::Agent,
    pub world: &'a mut W,
    pub shared: &'a mut B,
}

impl<'a, W, B> StateCx<'a, W, B>
where
    W: WorldMut,
{
    pub fn new(tick: &'a TickContext, agent: W::Agent, world: &'a mut W, shared: &'a mut B) -> Self {
        Self {
            tick,
            agent,
            world,
            shared,
        }
    }
}

/// One state of a [`crate::StateMachine`].
///
/// States are constructed once and live as long as the machine, so anything they store
/// (a sampled duration, an elapsed timer) survives between activations unless `enter`
/// resets it.
pub trait State<K, W, B>: 'static
where
    K: StateId,
    W: WorldMut + 'static,
{
    fn enter(&mut self, _cx: &mut StateCx<'_, W, B>) {}

    fn update(&mut self, cx: &mut StateCx<'_, W, B>) -> Transition<K>;

    fn exit(&mut self, _cx: &mut StateCx<'_, W, B>) {}
}
