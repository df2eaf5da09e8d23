pub mod artifact_version;
pub mod coordinate;
pub mod dependency_row;
pub mod license;
pub mod license_identity_table;
pub mod license_override;
pub mod package_document;
pub mod project;
pub mod resolution_failure;

pub use artifact_version::ArtifactVersion;
pub use coordinate::{ArtifactCoordinate, DependencyRef, DEFAULT_SCOPE};
pub use dependency_row::DependencyRow;
pub use license::{LicenseInfo, UserLicense};
pub use license_identity_table::{LicenseEntry, LicenseIdentity, LicenseIdentityTable};
pub use license_override::{LicenseOverride, OverrideTarget};
pub use package_document::{
    Analysis, CreationInfo, DeclaredLicense, LicenseReference, PackageDocument, NOASSERTION, NONE,
};
pub use project::{ProjectDescriptor, ProjectMetadata};
pub use resolution_failure::{ResolutionFailure, ResolutionStage};
