/// Outbound ports (driven ports)
///
/// Interfaces the report generation core uses to reach the file system,
/// artifact registries and the console.
pub mod formatter;
pub mod manifest_reader;
pub mod progress_reporter;
pub mod project_resolver;
pub mod report_writer;

pub use formatter::DocumentFormatter;
pub use manifest_reader::{ManifestReader, ProjectManifest};
pub use progress_reporter::ProgressReporter;
pub use project_resolver::ProjectResolver;
pub use report_writer::ReportWriter;
