use crate::license_report::domain::{DependencyRef, LicenseInfo, ProjectDescriptor};
use crate::ports::outbound::{ManifestReader, ProjectManifest};
use crate::shared::error::ReportError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File name of the project manifest
pub const MANIFEST_FILE_NAME: &str = "spdx-project.toml";

#[derive(Debug, Deserialize)]
struct ManifestDocument {
    project: ProjectTable,
    #[serde(default)]
    dependencies: Vec<DependencyEntry>,
}

#[derive(Debug, Deserialize)]
struct ProjectTable {
    name: String,
    #[serde(default)]
    licenses: Vec<LicenseEntry>,
    originator: Option<String>,
    download_location: Option<String>,
    copyright_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LicenseEntry {
    name: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DependencyEntry {
    group_id: String,
    artifact_id: String,
    version: String,
    scope: Option<String>,
}

/// FileSystemReader adapter reading `spdx-project.toml` from a project directory
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse_manifest(&self, manifest_path: &Path, content: &str) -> Result<ProjectManifest> {
        let document: ManifestDocument =
            toml::from_str(content).map_err(|e| ReportError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            })?;

        if document.project.name.trim().is_empty() {
            return Err(ReportError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: "project name cannot be empty".to_string(),
            }
            .into());
        }

        let mut dependencies = Vec::with_capacity(document.dependencies.len());
        for (index, entry) in document.dependencies.into_iter().enumerate() {
            let dependency =
                DependencyRef::new(entry.group_id, entry.artifact_id, entry.version, entry.scope)
                    .map_err(|e| ReportError::ManifestParseError {
                        path: manifest_path.to_path_buf(),
                        details: format!("dependency #{}: {}", index, e),
                    })?;
            dependencies.push(dependency);
        }

        let project = document.project;
        let declared_licenses = project
            .licenses
            .into_iter()
            .map(|l| LicenseInfo::new(l.name, l.url))
            .collect();

        let descriptor = ProjectDescriptor::new(project.name, declared_licenses)
            .with_originator(project.originator)
            .with_download_location(project.download_location)
            .with_copyright_text(project.copyright_text);

        Ok(ProjectManifest {
            project: descriptor,
            dependencies,
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, project_path: &Path) -> Result<ProjectManifest> {
        let manifest_path = project_path.join(MANIFEST_FILE_NAME);

        if !manifest_path.exists() {
            return Err(ReportError::ManifestNotFound {
                path: manifest_path.clone(),
                suggestion: format!(
                    "{} does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of the project, or specify the correct path with the --path option.",
                    MANIFEST_FILE_NAME,
                    project_path.display()
                ),
            }
            .into());
        }

        validate_regular_file(&manifest_path, "project manifest")?;

        let content = fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;

        self.parse_manifest(&manifest_path, &content)
    }
}
