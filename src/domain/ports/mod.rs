//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod change_listener;
pub mod file_system;
pub mod template_source;

pub use change_listener::ChangeListener;
pub use file_system::{FileSystem, FsError, FsResult};
pub use template_source::TemplateSource;
