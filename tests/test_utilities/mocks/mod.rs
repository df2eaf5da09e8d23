/// Mock implementations for testing
mod mock_manifest_reader;
mod mock_progress_reporter;
mod mock_project_resolver;

pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_resolver::MockProjectResolver;
