//! Observers for the inversive generator's no-inverse fallback.
//!
//! When the previous value shares a factor with `m` it has no modular
//! inverse, and [`InversiveGenerator`](super::InversiveGenerator) substitutes
//! [`FALLBACK_INVERSE`](super::FALLBACK_INVERSE). The fallback is recovered
//! locally; observers only get to see it.
//!
//! Observers are a generic parameter of the generator (static dispatch).
//! Any `FnMut(FallbackEvent)` closure is an observer.
//!
//! # Examples
//!
//! ```
//! use congruent_sim::rng::inversive::generate_with_observer;
//! use congruent_sim::rng::FallbackEvent;
//!
//! let mut events: Vec<FallbackEvent> = Vec::new();
//! // Seed 2 shares the factor 2 with m = 8
//! let sequence = generate_with_observer(2, 3, 1, 8, 4, |event: FallbackEvent| {
//!     events.push(event)
//! }).unwrap();
//!
//! assert_eq!(sequence.len(), 4);
//! assert_eq!(events[0].step, 1);
//! assert_eq!(events[0].previous, 2);
//! ```

use tracing::debug;

/// One occurrence of the no-inverse fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FallbackEvent {
    /// Index of the value being produced (the seed is index 0).
    pub step: usize,
    /// The raw value that had no inverse.
    pub previous: u64,
    /// The generator modulus.
    pub modulus: u64,
}

/// Receives no-inverse fallback events.
pub trait FallbackObserver {
    /// Called once for each fallback, before the new value is computed.
    fn on_fallback(&mut self, event: FallbackEvent);
}

impl<F> FallbackObserver for F
where
    F: FnMut(FallbackEvent),
{
    #[inline]
    fn on_fallback(&mut self, event: FallbackEvent) {
        self(event)
    }
}

/// Emits a `debug` tracing event per fallback. The default observer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl FallbackObserver for TracingObserver {
    fn on_fallback(&mut self, event: FallbackEvent) {
        debug!(
            step = event.step,
            previous = event.previous,
            modulus = event.modulus,
            "No modular inverse for previous value, substituting 1"
        );
    }
}

/// Ignores every fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl FallbackObserver for NoopObserver {
    #[inline]
    fn on_fallback(&mut self, _event: FallbackEvent) {}
}

/// Collects every fallback event in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FallbackRecorder {
    events: Vec<FallbackEvent>,
}

impl FallbackRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[inline]
    pub fn events(&self) -> &[FallbackEvent] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no fallback was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the recorder and returns the events.
    pub fn into_events(self) -> Vec<FallbackEvent> {
        self.events
    }
}

impl FallbackObserver for FallbackRecorder {
    fn on_fallback(&mut self, event: FallbackEvent) {
        self.events.push(event);
    }
}
