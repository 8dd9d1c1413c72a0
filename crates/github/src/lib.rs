//! GitHub source module (event-sourced pull requests).
//!
//! This crate contains the GitHub event catalogue and the `PullRequest`
//! aggregate, implemented purely as deterministic domain logic (no IO, no
//! API client).

pub mod event_types;
pub mod pull_request;

pub use event_types::{
    ISSUE_LINKED, ISSUE_UNLINKED, PULL_REQUEST_MERGED, PULL_REQUEST_OPENED, PullRequestEventType,
};
pub use pull_request::{PullRequest, PullRequestStatus};
