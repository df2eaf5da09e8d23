use super::index_document::IndexDocument;
use crate::license_report::domain::{ArtifactCoordinate, ArtifactVersion, ProjectMetadata};
use crate::ports::outbound::ProjectResolver;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum accepted response body (16 MB)
const MAX_RESPONSE_BYTES: u64 = 16 * 1024 * 1024;

/// HttpRegistryResolver adapter fetching license metadata from a remote index
///
/// Serves the same layout as [`super::LocalIndexResolver`] over HTTP:
/// `<base_url>/<group_id>/<artifact_id>.json`. Each request is sent once;
/// failures are reported to the caller without retrying.
pub struct HttpRegistryResolver {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpRegistryResolver {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            anyhow::bail!(
                "Registry URL must start with http:// or https://, got '{}'",
                base_url
            );
        }

        let user_agent = format!("spdx-license-report/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Validates a coordinate component before it becomes part of a URL
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component == "." || component == ".." {
            anyhow::bail!(
                "Security: {} '{}' is not a valid path segment",
                component_type,
                component
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    fn document_url(&self, coordinate: &ArtifactCoordinate) -> Result<String> {
        Self::validate_url_component(coordinate.group_id(), "Group id")?;
        Self::validate_url_component(coordinate.artifact_id(), "Artifact id")?;

        Ok(format!(
            "{}/{}/{}.json",
            self.base_url,
            urlencoding::encode(coordinate.group_id()),
            urlencoding::encode(coordinate.artifact_id())
        ))
    }

    fn fetch(&self, coordinate: &ArtifactCoordinate) -> Result<IndexDocument> {
        let url = self.document_url(coordinate)?;
        tracing::debug!(%url, "fetching license metadata");

        let response = self.client.get(&url).send().map_err(|e| ReportError::RegistryError {
            url: url.clone(),
            details: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(ReportError::RegistryError {
                url,
                details: format!("registry returned status code {}", response.status()),
            }
            .into());
        }

        if response.content_length().unwrap_or(0) > MAX_RESPONSE_BYTES {
            return Err(ReportError::RegistryError {
                url,
                details: format!("response exceeds {} bytes", MAX_RESPONSE_BYTES),
            }
            .into());
        }

        let body = response.text().map_err(|e| ReportError::RegistryError {
            url: url.clone(),
            details: e.to_string(),
        })?;

        IndexDocument::parse(&body).map_err(|e| {
            ReportError::RegistryError {
                url,
                details: format!("invalid index document: {}", e),
            }
            .into()
        })
    }
}

impl ProjectResolver for HttpRegistryResolver {
    fn available_versions(&self, coordinate: &ArtifactCoordinate) -> Result<Vec<ArtifactVersion>> {
        Ok(self.fetch(coordinate)?.versions())
    }

    fn resolve_project(&self, coordinate: &ArtifactCoordinate) -> Result<ProjectMetadata> {
        self.fetch(coordinate)?.project(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(group: &str, artifact: &str) -> ArtifactCoordinate {
        ArtifactCoordinate::new(group.to_string(), artifact.to_string(), "1.0".to_string())
            .unwrap()
    }

    #[test]
    fn test_registry_creation() {
        assert!(HttpRegistryResolver::new("https://licenses.example.com").is_ok());
    }

    #[test]
    fn test_registry_rejects_non_http_url() {
        let result = HttpRegistryResolver::new("ftp://licenses.example.com");
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("http://"));
    }

    #[test]
    fn test_document_url() {
        let registry = HttpRegistryResolver::new("https://licenses.example.com/index/").unwrap();
        let url = registry
            .document_url(&coordinate("org.apache.commons", "commons-lang3"))
            .unwrap();
        assert_eq!(
            url,
            "https://licenses.example.com/index/org.apache.commons/commons-lang3.json"
        );
    }

    #[test]
    fn test_document_url_rejects_dot_segments() {
        let registry = HttpRegistryResolver::new("https://licenses.example.com").unwrap();
        assert!(registry.document_url(&coordinate("..", "a")).is_err());
        assert!(registry.document_url(&coordinate("org", ".")).is_err());
    }

    #[test]
    fn test_validate_url_component() {
        assert!(HttpRegistryResolver::validate_url_component("guava", "Artifact id").is_ok());
        assert!(HttpRegistryResolver::validate_url_component("a/b", "Artifact id").is_err());
        assert!(HttpRegistryResolver::validate_url_component("a?b", "Artifact id").is_err());
        assert!(HttpRegistryResolver::validate_url_component("a@b", "Artifact id").is_err());
    }
}
