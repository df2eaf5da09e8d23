use crate::license_report::domain::{LicenseInfo, LicenseOverride, UserLicense};

/// LicenseOverridePolicy decides whether user configuration overrides a
/// dependency's published licenses.
///
/// Rules:
/// 1. Overrides are checked in configuration order; the first match wins.
/// 2. A group-keyed override matches on equal group id, an artifact-keyed one
///    on equal artifact id.
/// 3. External overrides never match resolved dependencies.
/// 4. A match yields the user licenses named by the override, in the order
///    the user declared them. A match naming no declared license yields an
///    empty list, not `None`.
pub struct LicenseOverridePolicy;

impl LicenseOverridePolicy {
    pub fn resolve(
        group_id: &str,
        artifact_id: &str,
        overrides: &[LicenseOverride],
        user_licenses: &[UserLicense],
    ) -> Option<Vec<LicenseInfo>> {
        overrides
            .iter()
            .filter(|o| !o.is_external())
            .find(|o| o.matches(group_id, artifact_id))
            .map(|o| o.mapped_licenses(user_licenses))
    }
}
