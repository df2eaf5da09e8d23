use super::license::{LicenseInfo, UserLicense};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// What a license override is keyed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideTarget {
    /// Matches dependencies whose artifact id is equal
    Artifact(String),
    /// Matches every dependency whose group id is equal
    Group(String),
}

/// A user-supplied license assignment that takes precedence over published metadata.
///
/// External overrides describe components that are not part of the dependency
/// graph at all; they always produce a report row of their own and are never
/// matched against resolved dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseOverride {
    target: OverrideTarget,
    license_ids: Vec<String>,
    external: bool,
}

impl LicenseOverride {
    /// Builds an override from its raw configuration fields.
    ///
    /// `index` is the position in the configuration and is only used for
    /// error reporting. Exactly one of `artifact_id` / `group_id` must be
    /// set, and an external override must be keyed on an artifact id.
    /// `license_tokens` is a comma separated list; entries are trimmed and
    /// empty entries dropped.
    pub fn from_parts(
        index: usize,
        artifact_id: Option<&str>,
        group_id: Option<&str>,
        license_tokens: &str,
        external: bool,
    ) -> Result<Self> {
        let artifact_id = artifact_id.map(str::trim).filter(|s| !s.is_empty());
        let group_id = group_id.map(str::trim).filter(|s| !s.is_empty());

        let target = match (artifact_id, group_id) {
            (Some(artifact), None) => OverrideTarget::Artifact(artifact.to_string()),
            (None, Some(group)) => OverrideTarget::Group(group.to_string()),
            (Some(_), Some(_)) => {
                return Err(ReportError::MalformedOverride {
                    index,
                    reason: "both artifact_id and group_id are set".to_string(),
                }
                .into())
            }
            (None, None) => {
                return Err(ReportError::MalformedOverride {
                    index,
                    reason: "neither artifact_id nor group_id is set".to_string(),
                }
                .into())
            }
        };

        if external && matches!(target, OverrideTarget::Group(_)) {
            return Err(ReportError::MalformedOverride {
                index,
                reason: "external mappings must name an artifact_id".to_string(),
            }
            .into());
        }

        let license_ids: Vec<String> = license_tokens
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();

        if license_ids.is_empty() {
            return Err(ReportError::MalformedOverride {
                index,
                reason: "license_id is empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            target,
            license_ids,
            external,
        })
    }

    pub fn target(&self) -> &OverrideTarget {
        &self.target
    }

    pub fn license_ids(&self) -> &[String] {
        &self.license_ids
    }

    pub fn is_external(&self) -> bool {
        self.external
    }

    /// The artifact id this override is keyed on, if any
    pub fn artifact_id(&self) -> Option<&str> {
        match &self.target {
            OverrideTarget::Artifact(artifact) => Some(artifact),
            OverrideTarget::Group(_) => None,
        }
    }

    /// Case-sensitive equality on the configured key.
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        match &self.target {
            OverrideTarget::Artifact(artifact) => artifact == artifact_id,
            OverrideTarget::Group(group) => group == group_id,
        }
    }

    /// User licenses whose token is listed by this override, in user-license
    /// declaration order. Tokens naming no declared license are ignored.
    pub fn mapped_licenses(&self, user_licenses: &[UserLicense]) -> Vec<LicenseInfo> {
        user_licenses
            .iter()
            .filter(|u| self.license_ids.iter().any(|id| id == u.id()))
            .map(|u| u.license().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_licenses() -> Vec<UserLicense> {
        vec![
            UserLicense::new("apache", LicenseInfo::new("Apache License 2.0", None)),
            UserLicense::new("mit", LicenseInfo::new("MIT License", None)),
            UserLicense::new("custom", LicenseInfo::new("Custom License", None)),
        ]
    }

    #[test]
    fn test_artifact_override_matches_artifact_only() {
        let mapping =
            LicenseOverride::from_parts(0, Some("u1"), None, "custom", false).unwrap();
        assert!(mapping.matches("any.group", "u1"));
        assert!(!mapping.matches("u1", "other"));
        assert_eq!(mapping.artifact_id(), Some("u1"));
    }

    #[test]
    fn test_group_override_matches_group_only() {
        let mapping =
            LicenseOverride::from_parts(0, None, Some("com.acme"), "mit", false).unwrap();
        assert!(mapping.matches("com.acme", "anything"));
        assert!(!mapping.matches("com.acme.sub", "anything"));
        assert_eq!(mapping.artifact_id(), None);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let mapping =
            LicenseOverride::from_parts(0, Some("Guava"), None, "apache", false).unwrap();
        assert!(!mapping.matches("com.google.guava", "guava"));
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let mapping =
            LicenseOverride::from_parts(0, Some("u1"), None, " mit , custom ,", false).unwrap();
        assert_eq!(mapping.license_ids(), &["mit", "custom"]);
    }

    #[test]
    fn test_mapped_licenses_follow_user_declaration_order() {
        let mapping =
            LicenseOverride::from_parts(0, Some("u1"), None, "custom,apache", false).unwrap();
        let names: Vec<String> = mapping
            .mapped_licenses(&user_licenses())
            .iter()
            .map(|l| l.name().to_string())
            .collect();
        assert_eq!(names, vec!["Apache License 2.0", "Custom License"]);
    }

    #[test]
    fn test_mapped_licenses_ignores_unknown_tokens() {
        let mapping =
            LicenseOverride::from_parts(0, Some("u1"), None, "gpl", false).unwrap();
        assert!(mapping.mapped_licenses(&user_licenses()).is_empty());
    }

    #[test]
    fn test_rejects_both_keys() {
        let err = LicenseOverride::from_parts(3, Some("a"), Some("g"), "mit", false).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid license mapping #3"));
        assert!(message.contains("both"));
    }

    #[test]
    fn test_rejects_no_keys() {
        let err = LicenseOverride::from_parts(0, None, Some("  "), "mit", false).unwrap_err();
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn test_rejects_external_group_override() {
        let err =
            LicenseOverride::from_parts(1, None, Some("com.acme"), "mit", true).unwrap_err();
        assert!(err.to_string().contains("external mappings"));
    }

    #[test]
    fn test_rejects_empty_license_tokens() {
        let err = LicenseOverride::from_parts(0, Some("u1"), None, " , ", false).unwrap_err();
        assert!(err.to_string().contains("license_id is empty"));
    }
}
