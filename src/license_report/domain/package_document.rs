use super::dependency_row::DependencyRow;

/// Sentinel for a field that is known to have no value
pub const NONE: &str = "NONE";

/// Sentinel for a field the tool makes no assertion about
pub const NOASSERTION: &str = "NOASSERTION";

/// Marks an analysis this tool does not perform.
///
/// File hashing, per-file license detection and review records are not
/// produced. Their document fields hold `NotComputed` so consumers can tell
/// "not computed" apart from an empty result, and formatters render the
/// SPDX placeholders instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Analysis {
    #[default]
    NotComputed,
}

/// When and by which tool the document was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationInfo {
    created: String,
    creator: String,
}

impl CreationInfo {
    pub fn new(created: String, creator: String) -> Self {
        Self { created, creator }
    }

    /// UTC timestamp, `yyyy-MM-ddTHH:mm:ssZ`
    pub fn created(&self) -> &str {
        &self.created
    }

    /// Tool identifier, `Tool: <name>-<version>`
    pub fn creator(&self) -> &str {
        &self.creator
    }
}

/// The project's own declared license(s)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredLicense {
    None,
    Single(String),
    /// All licenses apply, in project declaration order
    Conjunctive(Vec<String>),
}

impl DeclaredLicense {
    pub fn from_names(mut names: Vec<String>) -> Self {
        match names.len() {
            0 => DeclaredLicense::None,
            1 => DeclaredLicense::Single(names.remove(0)),
            _ => DeclaredLicense::Conjunctive(names),
        }
    }

    /// Single-line rendering, `A AND B` for conjunctive sets
    pub fn expression(&self) -> String {
        match self {
            DeclaredLicense::None => NONE.to_string(),
            DeclaredLicense::Single(name) => name.clone(),
            DeclaredLicense::Conjunctive(names) => names.join(" AND "),
        }
    }
}

/// One deduplicated license referenced by the package's dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseReference {
    pub name: String,
    pub url: Option<String>,
}

/// The assembled compliance document for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDocument {
    pub creation_info: CreationInfo,
    pub package_name: String,
    pub originator: Option<String>,
    pub download_location: String,
    pub verification_code: Analysis,
    pub license_concluded: String,
    /// Identity table entries, in first-seen order
    pub license_info_from_files: Vec<LicenseReference>,
    pub declared_license: DeclaredLicense,
    pub copyright_text: String,
    pub file_licenses: Analysis,
    pub reviews: Analysis,
    pub dependency_rows: Vec<DependencyRow>,
}
