//! Domain Entities
//!
//! Two explicit views over the same configuration file:
//! - `Document` - raw lines, used for text-preserving edits
//! - `StructuredConfig` - parsed tree, used for presence and value queries

mod document;
mod structured;

pub use document::{Document, Line};
pub use structured::StructuredConfig;
