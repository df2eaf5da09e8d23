use crate::license_report::domain::{
    ArtifactCoordinate, ArtifactVersion, LicenseInfo, ProjectMetadata,
};
use crate::shared::Result;
use serde::Deserialize;

/// License metadata of one artifact, as published by a license index.
///
/// ```json
/// {
///   "versions": [
///     {
///       "version": "3.12.0",
///       "name": "Apache Commons Lang",
///       "licenses": [
///         { "name": "Apache License, Version 2.0",
///           "url": "https://www.apache.org/licenses/LICENSE-2.0.txt" }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct IndexDocument {
    #[serde(default)]
    versions: Vec<IndexVersion>,
}

#[derive(Debug, Clone, Deserialize)]
struct IndexVersion {
    version: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    licenses: Vec<IndexLicense>,
}

#[derive(Debug, Clone, Deserialize)]
struct IndexLicense {
    name: String,
    #[serde(default)]
    url: Option<String>,
}

impl IndexDocument {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn versions(&self) -> Vec<ArtifactVersion> {
        self.versions
            .iter()
            .map(|v| ArtifactVersion::parse(&v.version))
            .collect()
    }

    /// Metadata of exactly `coordinate.version()`.
    pub fn project(&self, coordinate: &ArtifactCoordinate) -> Result<ProjectMetadata> {
        let entry = self
            .versions
            .iter()
            .find(|v| v.version == coordinate.version())
            .ok_or_else(|| anyhow::anyhow!("version {} is not published", coordinate.version()))?;

        let licenses = entry
            .licenses
            .iter()
            .map(|l| LicenseInfo::new(l.name.clone(), l.url.clone()))
            .collect();

        Ok(ProjectMetadata::new(
            coordinate.group_id().to_string(),
            coordinate.artifact_id().to_string(),
            entry.version.clone(),
            entry.name.clone(),
            licenses,
        ))
    }
}
