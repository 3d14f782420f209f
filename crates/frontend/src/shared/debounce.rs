//! Debounced propagation for search inputs.
//!
//! Each keystroke arms a fresh timer generation; a timer that is no longer
//! the newest generation when it fires does nothing. One fetch per pause,
//! not one per keystroke.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay before a search term is considered settled.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Monotonic generation counter. Arming invalidates every earlier timer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn arm(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest == id
    }
}

/// Reactive debounce handle: feed raw input values in, read the settled
/// value from `value`.
#[derive(Clone, Copy)]
pub struct Debounced {
    generation: StoredValue<Generation>,
    set_value: WriteSignal<String>,
    pub value: ReadSignal<String>,
}

impl Debounced {
    pub fn new() -> Self {
        let (value, set_value) = signal(String::new());
        Self {
            generation: StoredValue::new(Generation::default()),
            set_value,
            value,
        }
    }

    /// Called on every keystroke; resets the pending timer.
    pub fn input(&self, raw: String) {
        let mut id = 0;
        self.generation.update_value(|g| id = g.arm());
        let generation = self.generation;
        let set_value = self.set_value;
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.with_value(|g| g.is_current(id)) {
                set_value.set(raw);
            }
        });
    }
}

impl Default for Debounced {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_timer_fires() {
        let mut generation = Generation::default();
        // Five keystrokes inside the window: five armed generations.
        let ids: Vec<u64> = (0..5).map(|_| generation.arm()).collect();
        let firing: Vec<u64> = ids
            .iter()
            .copied()
            .filter(|id| generation.is_current(*id))
            .collect();
        assert_eq!(firing, vec![ids[4]]);
    }

    #[test]
    fn a_new_keystroke_invalidates_a_fired_check() {
        let mut generation = Generation::default();
        let first = generation.arm();
        assert!(generation.is_current(first));
        let second = generation.arm();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
