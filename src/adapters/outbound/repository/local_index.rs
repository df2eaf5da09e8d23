use super::index_document::IndexDocument;
use crate::license_report::domain::{ArtifactCoordinate, ArtifactVersion, ProjectMetadata};
use crate::ports::outbound::ProjectResolver;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Default index directory name, relative to the project directory
pub const DEFAULT_INDEX_DIRECTORY: &str = "license-index";

/// LocalIndexResolver adapter reading license metadata from a directory tree
///
/// Each artifact lives in `<root>/<group_id>/<artifact_id>.json`, holding an
/// [`IndexDocument`].
pub struct LocalIndexResolver {
    root: PathBuf,
}

impl LocalIndexResolver {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, coordinate: &ArtifactCoordinate) -> Result<PathBuf> {
        for component in [coordinate.group_id(), coordinate.artifact_id()] {
            if component == "." || component == ".." {
                anyhow::bail!("Security: '{}' is not a valid index path component", component);
            }
        }

        Ok(self
            .root
            .join(coordinate.group_id())
            .join(format!("{}.json", coordinate.artifact_id())))
    }

    fn load(&self, coordinate: &ArtifactCoordinate) -> Result<IndexDocument> {
        let path = self.document_path(coordinate)?;
        if !path.exists() {
            anyhow::bail!(
                "{}:{} is not in the license index ({})",
                coordinate.group_id(),
                coordinate.artifact_id(),
                path.display()
            );
        }

        validate_regular_file(&path, "license index entry")?;
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        IndexDocument::parse(&content)
            .with_context(|| format!("Failed to parse license index entry {}", path.display()))
    }
}

impl ProjectResolver for LocalIndexResolver {
    fn available_versions(&self, coordinate: &ArtifactCoordinate) -> Result<Vec<ArtifactVersion>> {
        Ok(self.load(coordinate)?.versions())
    }

    fn resolve_project(&self, coordinate: &ArtifactCoordinate) -> Result<ProjectMetadata> {
        self.load(coordinate)?.project(coordinate)
    }
}
