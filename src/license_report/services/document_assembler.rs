use crate::license_report::domain::{
    Analysis, CreationInfo, DeclaredLicense, DependencyRow, LicenseIdentityTable,
    LicenseReference, PackageDocument, ProjectDescriptor, NOASSERTION, NONE,
};

/// DocumentAssembler service composing the final package document
///
/// Pure and deterministic: the only varying input is the supplied
/// [`CreationInfo`].
pub struct DocumentAssembler;

impl DocumentAssembler {
    pub fn assemble(
        project: &ProjectDescriptor,
        rows: Vec<DependencyRow>,
        table: &LicenseIdentityTable,
        creation_info: CreationInfo,
    ) -> PackageDocument {
        let declared_license = DeclaredLicense::from_names(
            project
                .declared_licenses()
                .iter()
                .map(|l| l.name().to_string())
                .collect(),
        );

        let license_info_from_files = table
            .entries()
            .iter()
            .map(|entry| LicenseReference {
                name: entry.name().to_string(),
                url: entry.url().map(String::from),
            })
            .collect();

        PackageDocument {
            creation_info,
            package_name: project.name().to_string(),
            originator: project.originator().map(String::from),
            download_location: project
                .download_location()
                .unwrap_or(NONE)
                .to_string(),
            verification_code: Analysis::NotComputed,
            license_concluded: NOASSERTION.to_string(),
            license_info_from_files,
            declared_license,
            copyright_text: project
                .copyright_text()
                .unwrap_or(NOASSERTION)
                .to_string(),
            file_licenses: Analysis::NotComputed,
            reviews: Analysis::NotComputed,
            dependency_rows: rows,
        }
    }
}
