/// LicenseInfo value object: a license display name and its optional canonical url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseInfo {
    name: String,
    url: Option<String>,
}

impl LicenseInfo {
    /// Empty or whitespace-only urls are treated as absent.
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            url: url.filter(|u| !u.trim().is_empty()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// A license declared by the user, addressable by its token (`id`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLicense {
    id: String,
    license: LicenseInfo,
}

impl UserLicense {
    pub fn new(id: impl Into<String>, license: LicenseInfo) -> Self {
        Self {
            id: id.into(),
            license,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn license(&self) -> &LicenseInfo {
        &self.license
    }
}
