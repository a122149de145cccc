//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_version;
mod key_path;
mod release_version;

pub use config_version::{ConfigVersion, DEFAULT_VERSION_KEY};
pub use key_path::{KeyPath, INDENT_WIDTH};
pub use release_version::ReleaseVersion;
