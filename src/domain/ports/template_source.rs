//! TemplateSource port - supplies the shipped default configuration.

use super::file_system::FsResult;

/// Source of the default configuration template text
///
/// Implementations:
/// - `FileTemplate` - template read from disk
/// - `EmbeddedTemplate` - template compiled into the host binary
pub trait TemplateSource {
    /// Load the raw template text.
    fn load(&self) -> FsResult<String>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}
