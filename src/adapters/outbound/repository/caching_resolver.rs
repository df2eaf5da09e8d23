use crate::license_report::domain::{ArtifactCoordinate, ArtifactVersion, ProjectMetadata};
use crate::ports::outbound::ProjectResolver;
use crate::shared::Result;
use dashmap::DashMap;

/// Cache key for version listings: the coordinate without its version
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct ArtifactKey {
    group_id: String,
    artifact_id: String,
}

impl ArtifactKey {
    fn of(coordinate: &ArtifactCoordinate) -> Self {
        Self {
            group_id: coordinate.group_id().to_string(),
            artifact_id: coordinate.artifact_id().to_string(),
        }
    }
}

/// CachingProjectResolver wraps a ProjectResolver with a per-run in-memory cache.
///
/// Only successful lookups are cached, so a dependency that is declared
/// twice costs one lookup. The cache lives as long as the resolver; nothing
/// is persisted.
pub struct CachingProjectResolver<R: ProjectResolver> {
    inner: R,
    versions: DashMap<ArtifactKey, Vec<ArtifactVersion>>,
    projects: DashMap<ArtifactCoordinate, ProjectMetadata>,
}

impl<R: ProjectResolver> CachingProjectResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            versions: DashMap::new(),
            projects: DashMap::new(),
        }
    }

    /// Number of cached entries (version listings plus projects)
    pub fn cache_size(&self) -> usize {
        self.versions.len() + self.projects.len()
    }
}

impl<R: ProjectResolver> ProjectResolver for CachingProjectResolver<R> {
    fn available_versions(&self, coordinate: &ArtifactCoordinate) -> Result<Vec<ArtifactVersion>> {
        let key = ArtifactKey::of(coordinate);
        if let Some(cached) = self.versions.get(&key) {
            return Ok(cached.clone());
        }

        let versions = self.inner.available_versions(coordinate)?;
        self.versions.insert(key, versions.clone());
        Ok(versions)
    }

    fn resolve_project(&self, coordinate: &ArtifactCoordinate) -> Result<ProjectMetadata> {
        if let Some(cached) = self.projects.get(coordinate) {
            return Ok(cached.clone());
        }

        let project = self.inner.resolve_project(coordinate)?;
        self.projects.insert(coordinate.clone(), project.clone());
        Ok(project)
    }
}
