use crate::shared::Result;

/// Maximum length for group and artifact identifiers (security limit)
const MAX_IDENTIFIER_LENGTH: usize = 255;

/// Maximum length for versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Scope assumed for dependencies that do not declare one
pub const DEFAULT_SCOPE: &str = "runtime";

fn validate_identifier(value: &str, kind: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", kind);
    }

    if value.len() > MAX_IDENTIFIER_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            kind,
            value.len(),
            MAX_IDENTIFIER_LENGTH
        );
    }

    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        anyhow::bail!(
            "{} '{}' contains invalid characters. Only alphanumeric, hyphens, underscores and dots are allowed.",
            kind,
            value
        );
    }

    Ok(())
}

fn validate_version(version: &str) -> Result<()> {
    if version.trim().is_empty() {
        anyhow::bail!("Version cannot be empty");
    }

    if version.len() > MAX_VERSION_LENGTH {
        anyhow::bail!(
            "Version is too long ({} bytes). Maximum allowed: {} bytes",
            version.len(),
            MAX_VERSION_LENGTH
        );
    }

    // Ranges and property placeholders are passed through; only the pinned
    // version from the resolver is ever used to build a lookup.
    if version.chars().any(char::is_control) {
        anyhow::bail!("Version '{}' contains control characters", version.escape_debug());
    }

    Ok(())
}

/// Fully qualified artifact identity: `group:artifact:version`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl ArtifactCoordinate {
    pub fn new(group_id: String, artifact_id: String, version: String) -> Result<Self> {
        validate_identifier(&group_id, "Group id")?;
        validate_identifier(&artifact_id, "Artifact id")?;
        validate_version(&version)?;

        Ok(Self {
            group_id,
            artifact_id,
            version,
        })
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

    /// Same artifact pinned to another version.
    pub fn with_version(&self, version: &str) -> Self {
        Self {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: version.to_string(),
        }
    }
}

impl std::fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// One dependency as declared by the project being reported on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    coordinate: ArtifactCoordinate,
    scope: Option<String>,
}

impl DependencyRef {
    pub fn new(
        group_id: String,
        artifact_id: String,
        version: String,
        scope: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            coordinate: ArtifactCoordinate::new(group_id, artifact_id, version)?,
            scope: scope.filter(|s| !s.trim().is_empty()),
        })
    }

    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    pub fn group_id(&self) -> &str {
        self.coordinate.group_id()
    }

    pub fn artifact_id(&self) -> &str {
        self.coordinate.artifact_id()
    }

    pub fn version(&self) -> &str {
        self.coordinate.version()
    }

    /// Declared scope exactly as written, if any
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Lower-cased declared scope, or [`DEFAULT_SCOPE`] when none is declared
    pub fn effective_scope(&self) -> String {
        self.scope
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(|| DEFAULT_SCOPE.to_string())
    }
}
