use std::cell::Cell;
use std::rc::Rc;

/// Subscriber-owned boolean written by a trigger callback and read at tick time.
///
/// Clones share the same value. Single-threaded by construction (`!Send`).
#[derive(Debug, Clone, Default)]
pub struct Latch {
    value: Rc<Cell<bool>>,
}

impl Latch {
    /// A latch no trigger writes to. It keeps `value` until [`Latch::set`] is called.
    pub fn detached(value: bool) -> Self {
        Self {
            value: Rc::new(Cell::new(value)),
        }
    }

    pub fn get(&self) -> bool {
        self.value.get()
    }

    pub fn set(&self, value: bool) {
        self.value.set(value);
    }
}
