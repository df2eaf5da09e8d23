use crate::shared::Result;
use std::path::PathBuf;

/// ReportWriter port for persisting a rendered report
pub trait ReportWriter {
    /// Persists `content` under `file_name` and returns where it went.
    ///
    /// `file_name` is a bare file name, never a path.
    ///
    /// # Errors
    /// Returns an error if the destination cannot be created or written.
    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf>;
}
