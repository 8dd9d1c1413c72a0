//! Aggregate trait for event-sourced domain models.

/// Aggregate execution semantics (pure, deterministic).
///
/// An aggregate is the current derived state of one logical entity. It starts
/// from `Default` (the empty aggregate) and evolves only through `apply`.
///
/// `apply` consumes the current state and returns the next one. A failed
/// transition returns an error instead, so the caller never observes a
/// half-applied state: the consumed value is simply dropped.
///
/// Aggregates must not perform IO or side effects.
pub trait Aggregate: Default + Clone + core::fmt::Debug {
    /// Stable aggregate type name (e.g. "github.pull_request").
    const AGGREGATE_TYPE: &'static str;

    type Event;
    type Error: core::fmt::Debug;

    /// Evolve state from a single event.
    fn apply(self, event: &Self::Event) -> Result<Self, Self::Error>;
}
