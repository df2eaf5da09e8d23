use spdx_license_report::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock ProjectResolver backed by in-memory metadata
///
/// Versions are keyed by `group:artifact`, projects by `group:artifact:version`.
#[derive(Default)]
pub struct MockProjectResolver {
    versions: HashMap<String, Vec<String>>,
    projects: HashMap<String, ProjectMetadata>,
    failing_versions: Vec<String>,
    pub project_calls: AtomicUsize,
}

impl MockProjectResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(
        mut self,
        group: &str,
        artifact: &str,
        version: &str,
        name: Option<&str>,
        licenses: Vec<LicenseInfo>,
    ) -> Self {
        self.versions
            .entry(format!("{}:{}", group, artifact))
            .or_default()
            .push(version.to_string());
        self.projects.insert(
            format!("{}:{}:{}", group, artifact, version),
            ProjectMetadata::new(
                group.to_string(),
                artifact.to_string(),
                version.to_string(),
                name.map(String::from),
                licenses,
            ),
        );
        self
    }

    /// Makes the version listing fail while project lookups still work
    pub fn with_failing_versions(mut self, group: &str, artifact: &str) -> Self {
        self.failing_versions.push(format!("{}:{}", group, artifact));
        self
    }

    pub fn project_calls(&self) -> usize {
        self.project_calls.load(Ordering::SeqCst)
    }
}

impl ProjectResolver for MockProjectResolver {
    fn available_versions(&self, coordinate: &ArtifactCoordinate) -> Result<Vec<ArtifactVersion>> {
        let key = format!("{}:{}", coordinate.group_id(), coordinate.artifact_id());
        if self.failing_versions.contains(&key) {
            anyhow::bail!("Mock version listing failure for {}", key);
        }
        match self.versions.get(&key) {
            Some(versions) => Ok(versions.iter().map(|v| ArtifactVersion::parse(v)).collect()),
            None => anyhow::bail!("{} is not known", key),
        }
    }

    fn resolve_project(&self, coordinate: &ArtifactCoordinate) -> Result<ProjectMetadata> {
        self.project_calls.fetch_add(1, Ordering::SeqCst);
        self.projects
            .get(&coordinate.to_string())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no project metadata for {}", coordinate))
    }
}
