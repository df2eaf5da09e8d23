use crate::license_report::domain::{LicenseOverride, UserLicense};
use crate::license_report::services::DEFAULT_SCOPES;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::path::PathBuf;

/// ReportRequest - request DTO for the report generation use case
///
/// Values given here win over the ones read from the project manifest.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Directory holding the project manifest
    pub project_path: PathBuf,
    /// Comma separated list of scopes to include
    pub scopes: String,
    /// Group id prefixes to exclude from the report
    pub exclude_prefixes: Vec<String>,
    /// User license declarations referenced by overrides
    pub user_licenses: Vec<UserLicense>,
    /// License overrides, in declaration order
    pub overrides: Vec<LicenseOverride>,
    pub originator: Option<String>,
    pub download_location: Option<String>,
    pub copyright_text: Option<String>,
}

impl ReportRequest {
    pub fn builder() -> ReportRequestBuilder {
        ReportRequestBuilder::default()
    }
}

/// Builder for [`ReportRequest`]
#[derive(Debug, Default)]
pub struct ReportRequestBuilder {
    project_path: Option<PathBuf>,
    scopes: Option<String>,
    exclude_prefixes: Vec<String>,
    user_licenses: Vec<UserLicense>,
    overrides: Vec<LicenseOverride>,
    originator: Option<String>,
    download_location: Option<String>,
    copyright_text: Option<String>,
}

impl ReportRequestBuilder {
    pub fn project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    pub fn scopes(mut self, scopes: impl Into<String>) -> Self {
        self.scopes = Some(scopes.into());
        self
    }

    pub fn exclude_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.exclude_prefixes = prefixes;
        self
    }

    pub fn user_licenses(mut self, licenses: Vec<UserLicense>) -> Self {
        self.user_licenses = licenses;
        self
    }

    pub fn overrides(mut self, overrides: Vec<LicenseOverride>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn originator(mut self, originator: Option<String>) -> Self {
        self.originator = originator;
        self
    }

    pub fn download_location(mut self, location: Option<String>) -> Self {
        self.download_location = location;
        self
    }

    pub fn copyright_text(mut self, text: Option<String>) -> Self {
        self.copyright_text = text;
        self
    }

    pub fn build(self) -> Result<ReportRequest> {
        let project_path = self.project_path.ok_or_else(|| ReportError::Validation {
            message: "project_path is required".to_string(),
        })?;

        let scopes = self.scopes.unwrap_or_else(|| DEFAULT_SCOPES.to_string());
        if scopes.split(',').all(|s| s.trim().is_empty()) {
            return Err(ReportError::Validation {
                message: "at least one scope must be given".to_string(),
            }
            .into());
        }

        Ok(ReportRequest {
            project_path,
            scopes,
            exclude_prefixes: self.exclude_prefixes,
            user_licenses: self.user_licenses,
            overrides: self.overrides,
            originator: self.originator,
            download_location: self.download_location,
            copyright_text: self.copyright_text,
        })
    }
}
