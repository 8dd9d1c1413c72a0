use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use panoptes_core::{AggregateId, DomainError, DomainResult};

/// Stable, namespaced event type identifier (`"<source>.<action>"`, e.g.
/// `"github.pull_request_opened"`).
///
/// Catalogue entries are built with [`EventType::from_static`] and cost no
/// allocation; types read from the outside go through [`EventType::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventType(Cow<'static, str>);

impl EventType {
    /// Build a catalogue constant. The caller guarantees the
    /// `<source>.<action>` shape.
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Validate and build an event type from untrusted input.
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.split_once('.') {
            Some((source, action))
                if !source.is_empty() && !action.is_empty() && !action.contains('.') =>
            {
                Ok(Self(Cow::Owned(value.to_string())))
            }
            _ => Err(DomainError::validation(format!(
                "event type `{value}` is not of the form <source>.<action>"
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Producing system, e.g. `"github"`.
    pub fn source(&self) -> &str {
        self.0.split_once('.').map(|(s, _)| s).unwrap_or(&self.0)
    }

    /// What happened, e.g. `"pull_request_opened"`.
    pub fn action(&self) -> &str {
        self.0.split_once('.').map(|(_, a)| a).unwrap_or("")
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EventType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.0.into_owned()
    }
}

/// Discriminant of an [`EventPayload`] variant, used in error reporting.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Empty,
    Linked,
}

impl core::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PayloadKind::Empty => f.write_str("empty"),
            PayloadKind::Linked => f.write_str("linked"),
        }
    }
}

/// Closed set of event payloads.
///
/// Every variant answers the same questions (`kind`, `cross_reference`), so a
/// marker payload is as usable as a data-bearing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventPayload {
    /// Marker payload: the event type alone carries the meaning.
    #[default]
    Empty,
    /// Points at an aggregate owned by another source (e.g. an issue key).
    Linked { reference: AggregateId },
}

impl EventPayload {
    pub fn linked(reference: impl Into<AggregateId>) -> Self {
        Self::Linked {
            reference: reference.into(),
        }
    }

    pub fn kind(&self) -> PayloadKind {
        match self {
            EventPayload::Empty => PayloadKind::Empty,
            EventPayload::Linked { .. } => PayloadKind::Linked,
        }
    }

    /// The foreign aggregate id carried by this payload, if any.
    pub fn cross_reference(&self) -> Option<&AggregateId> {
        match self {
            EventPayload::Empty => None,
            EventPayload::Linked { reference } => Some(reference),
        }
    }
}
