use crate::license_report::domain::{DependencyRef, ProjectDescriptor};
use crate::shared::Result;
use std::path::Path;

/// Contents of a project manifest: the project itself and its declared
/// dependencies in declaration order
#[derive(Debug, Clone)]
pub struct ProjectManifest {
    pub project: ProjectDescriptor,
    pub dependencies: Vec<DependencyRef>,
}

/// ManifestReader port for reading the project being reported on
pub trait ManifestReader {
    /// Reads the manifest found in `project_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist or is not a regular file
    /// - The manifest cannot be parsed
    /// - A dependency entry has an invalid coordinate
    fn read_manifest(&self, project_path: &Path) -> Result<ProjectManifest>;
}
