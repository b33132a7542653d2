//! Generation-guarded debounced values.
//!
//! DESIGN
//! ======
//! A [`Debounced`] holds the value the user is editing (`live`) and the value
//! queries read (`settled`). Every `set` bumps a generation counter and
//! returns it; the timer scheduled for that edit later calls `settle` with the
//! same generation. A settle whose generation is no longer current is
//! ignored, so only the last edit inside the window reaches `settled`.
//!
//! The struct owns no timer. The caller schedules the settle (see
//! `state::filter` for the browser wiring), which keeps this type plain data
//! and testable without a clock.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Debounced<T> {
    live: T,
    settled: T,
    generation: u64,
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(value: T) -> Self {
        Self { live: value.clone(), settled: value, generation: 0 }
    }

    /// Record an edit. Returns the generation the pending settle must carry.
    pub fn set(&mut self, value: T) -> u64 {
        self.live = value;
        self.generation += 1;
        self.generation
    }

    /// Promote `live` to `settled` if `generation` is still the latest edit.
    /// Returns whether the settled value changed.
    pub fn settle(&mut self, generation: u64) -> bool {
        self.settle_with(generation, Clone::clone)
    }

    /// As [`Self::settle`], transforming the live value on the way through.
    pub fn settle_with(&mut self, generation: u64, map: impl FnOnce(&T) -> T) -> bool {
        if generation != self.generation {
            return false;
        }
        let next = map(&self.live);
        if next == self.settled {
            return false;
        }
        self.settled = next;
        true
    }

    /// Set both values at once and invalidate any pending settle.
    pub fn reset(&mut self, value: T) {
        self.live = value.clone();
        self.settled = value;
        self.generation += 1;
    }

    pub fn live(&self) -> &T {
        &self.live
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
