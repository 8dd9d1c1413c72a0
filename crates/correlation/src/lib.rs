//! Cross-source correlation engine.
//!
//! Projects a pull request from the primary (GitHub) stream, follows the
//! issue keys it links to into the secondary (Jira) stream, and merges both
//! sides into one chronological timeline. Batch and in-memory only.

pub mod correlate;
pub mod error;
pub mod references;
pub mod timeline;

pub use correlate::{correlate, correlate_many, correlate_with};
pub use error::CorrelationError;
pub use references::{ReferenceSource, extract_cross_references};
pub use timeline::Timeline;
