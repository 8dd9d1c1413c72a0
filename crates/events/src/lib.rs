//! Event model, event streams and projection mechanics.
//!
//! Everything here is synchronous and in-memory: streams are materialized
//! collections handed over by an ingestion layer, and projections fold them
//! into aggregates without IO.

pub mod envelope;
pub mod error;
pub mod event;
pub mod projection;
pub mod runner;
pub mod stream;

pub use envelope::Event;
pub use error::ProjectionError;
pub use event::{EventPayload, EventType, PayloadKind};
pub use projection::project;
pub use runner::{ProjectionCursor, ProjectionRunner};
pub use stream::EventStream;
