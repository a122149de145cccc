//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (local disk, atomic replace)
//! - `template/` - Default template sources (file, embedded)
//! - `listener/` - Change listeners (logging, no-op)

pub mod fs;
pub mod listener;
pub mod template;

// Re-export for convenience
pub use fs::LocalFs;
pub use listener::{LoggingListener, NoopListener};
pub use template::{EmbeddedTemplate, FileTemplate};
