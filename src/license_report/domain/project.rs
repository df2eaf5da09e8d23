use super::license::LicenseInfo;

/// Resolved metadata of one dependency's project, as returned by a resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    group_id: String,
    artifact_id: String,
    version: String,
    name: Option<String>,
    licenses: Vec<LicenseInfo>,
}

impl ProjectMetadata {
    pub fn new(
        group_id: String,
        artifact_id: String,
        version: String,
        name: Option<String>,
        licenses: Vec<LicenseInfo>,
    ) -> Self {
        Self {
            group_id,
            artifact_id,
            version,
            name: name.filter(|n| !n.trim().is_empty()),
            licenses,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Human readable name, falling back to the artifact id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.artifact_id)
    }

    pub fn licenses(&self) -> &[LicenseInfo] {
        &self.licenses
    }
}

/// The project the report is generated for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    name: String,
    declared_licenses: Vec<LicenseInfo>,
    originator: Option<String>,
    download_location: Option<String>,
    copyright_text: Option<String>,
}

impl ProjectDescriptor {
    pub fn new(name: String, declared_licenses: Vec<LicenseInfo>) -> Self {
        Self {
            name,
            declared_licenses,
            originator: None,
            download_location: None,
            copyright_text: None,
        }
    }

    pub fn with_originator(mut self, originator: Option<String>) -> Self {
        self.originator = non_blank(originator);
        self
    }

    pub fn with_download_location(mut self, download_location: Option<String>) -> Self {
        self.download_location = non_blank(download_location);
        self
    }

    pub fn with_copyright_text(mut self, copyright_text: Option<String>) -> Self {
        self.copyright_text = non_blank(copyright_text);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_licenses(&self) -> &[LicenseInfo] {
        &self.declared_licenses
    }

    pub fn originator(&self) -> Option<&str> {
        self.originator.as_deref()
    }

    pub fn download_location(&self) -> Option<&str> {
        self.download_location.as_deref()
    }

    pub fn copyright_text(&self) -> Option<&str> {
        self.copyright_text.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
