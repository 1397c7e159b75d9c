use std::borrow::Cow;

use ai_core::WorldMut;

use crate::state::{State, StateCx, StateId, Transition};

struct Slot<K, W, B>
where
    K: StateId,
    W: WorldMut + 'static,
{
    id: K,
    state: Box<dyn State<K, W, B>>,
}

/// Finite state machine holding a fixed set of states and at most one current state.
///
/// Invariants:
/// - on every transition the old state's `exit` runs before the new state's `enter`;
/// - `update` always targets the current state;
/// - transitions only happen inside [`StateMachine::update`] or an explicit
///   [`StateMachine::change_state`].
pub struct StateMachine<K, W, B>
where
    K: StateId,
    W: WorldMut + 'static,
{
    name: Cow<'static, str>,
    slots: Vec<Slot<K, W, B>>,
    current: Option<usize>,
}

impl<K, W, B> StateMachine<K, W, B>
where
    K: StateId,
    W: WorldMut + 'static,
    B: 'static,
{
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
            current: None,
        }
    }

    /// Register a state under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already registered.
    pub fn with_state(mut self, id: K, state: impl State<K, W, B>) -> Self {
        assert!(
            self.index_of(id).is_none(),
            "state {id:?} registered twice on machine `{}`",
            self.name
        );
        self.slots.push(Slot {
            id,
            state: Box::new(state),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current(&self) -> Option<K> {
        self.current.map(|i| self.slots[i].id)
    }

    pub fn is_in(&self, id: K) -> bool {
        self.current() == Some(id)
    }

    /// Exit the current state (if any), then enter `next`.
    ///
    /// Changing to the current state runs its `exit` and `enter` again.
    ///
    /// # Panics
    ///
    /// Panics if `next` was never registered.
    pub fn change_state(&mut self, next: K, cx: &mut StateCx<'_, W, B>) {
        let Some(next_index) = self.index_of(next) else {
            panic!("state {next:?} is not registered on machine `{}`", self.name);
        };

        let previous = self.current();
        if let Some(index) = self.current {
            self.slots[index].state.exit(cx);
        }

        tracing::debug!(
            machine = %self.name,
            from = ?previous,
            to = ?next,
            tick = cx.tick.tick,
            "state transition"
        );

        self.current = Some(next_index);
        self.slots[next_index].state.enter(cx);
    }

    /// Update the current state and apply the transition it requests.
    ///
    /// No-op until the first `change_state`.
    pub fn update(&mut self, cx: &mut StateCx<'_, W, B>) {
        let Some(index) = self.current else {
            return;
        };

        if let Transition::To(next) = self.slots[index].state.update(cx) {
            self.change_state(next, cx);
        }
    }

    /// Forget the current state without running its `exit`.
    pub fn clear(&mut self) {
        self.current = None;
    }

    fn index_of(&self, id: K) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id == id)
    }
}
