use crate::license_report::domain::PackageDocument;
use crate::shared::Result;

/// DocumentFormatter port for rendering an assembled document
///
/// Implemented once per output format (SPDX RDF, Markdown summary).
pub trait DocumentFormatter {
    /// Renders the document as text.
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, document: &PackageDocument) -> Result<String>;
}
