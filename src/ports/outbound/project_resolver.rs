use crate::license_report::domain::{ArtifactCoordinate, ArtifactVersion, ProjectMetadata};
use crate::shared::Result;

/// ProjectResolver port for looking up published artifact metadata
///
/// Abstracts the dependency-graph resolver: a local license index, a remote
/// registry, or a cache in front of either. Calls are synchronous and each
/// one is attempted exactly once; adapters must not retry.
pub trait ProjectResolver {
    /// Lists every published version of the coordinate's artifact.
    ///
    /// The version component of `coordinate` is ignored. An empty list means
    /// the artifact is known but no versions are listed.
    ///
    /// # Errors
    /// Returns an error if the artifact is unknown or the lookup fails.
    fn available_versions(&self, coordinate: &ArtifactCoordinate) -> Result<Vec<ArtifactVersion>>;

    /// Builds the project metadata (display name and declared licenses) of
    /// exactly the version named by `coordinate`.
    ///
    /// # Errors
    /// Returns an error if the version cannot be found or its metadata is
    /// unreadable.
    fn resolve_project(&self, coordinate: &ArtifactCoordinate) -> Result<ProjectMetadata>;
}

impl<T: ProjectResolver + ?Sized> ProjectResolver for Box<T> {
    fn available_versions(&self, coordinate: &ArtifactCoordinate) -> Result<Vec<ArtifactVersion>> {
        (**self).available_versions(coordinate)
    }

    fn resolve_project(&self, coordinate: &ArtifactCoordinate) -> Result<ProjectMetadata> {
        (**self).resolve_project(coordinate)
    }
}

impl<T: ProjectResolver + ?Sized> ProjectResolver for &T {
    fn available_versions(&self, coordinate: &ArtifactCoordinate) -> Result<Vec<ArtifactVersion>> {
        (**self).available_versions(coordinate)
    }

    fn resolve_project(&self, coordinate: &ArtifactCoordinate) -> Result<ProjectMetadata> {
        (**self).resolve_project(coordinate)
    }
}
