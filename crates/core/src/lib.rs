//! `panoptes-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no sources, no
//! rendering). Event model and stream mechanics live in `panoptes-events`.

pub mod aggregate;
pub mod error;
pub mod id;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
