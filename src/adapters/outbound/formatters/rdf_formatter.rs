use crate::license_report::domain::{Analysis, DeclaredLicense, PackageDocument};
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;
use std::fmt::Write;

const RDF_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
  xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
  xmlns:j.0="http://usefulinc.com/ns/doap#"
  xmlns="http://spdx.org/rdf/terms#"
  xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#">
<SpdxDocument rdf:about="http://www.spdx.org/tools#SPDXANALYSIS">
  <specVersion>SPDX-1.2</specVersion>
"#;

const RDF_FOOTER: &str = "</SpdxDocument>\n</rdf:RDF>\n";

/// RdfFormatter adapter rendering an SPDX 1.2 RDF/XML document
///
/// Sections are written in this order: header, creation info, package
/// (name, originator, download location, verification code placeholder,
/// concluded license, licenses from files, declared license, copyright).
/// File information and reviews are never computed, so no `hasFile` or
/// `reviewed` elements are written.
pub struct RdfFormatter;

impl RdfFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_creation_info(out: &mut String, document: &PackageDocument) -> std::fmt::Result {
        let info = &document.creation_info;
        writeln!(out, "  <creationInfo>")?;
        writeln!(out, "    <CreationInfo>")?;
        writeln!(out, "      <created>{}</created>", xml_escape(info.created()))?;
        writeln!(out, "      <creator>{}</creator>", xml_escape(info.creator()))?;
        writeln!(out, "    </CreationInfo>")?;
        writeln!(out, "  </creationInfo>")
    }

    fn write_package(out: &mut String, document: &PackageDocument) -> std::fmt::Result {
        writeln!(out, "  <Package rdf:about=\"\">")?;
        writeln!(
            out,
            "    <packageFileName>{}</packageFileName>",
            xml_escape(&document.package_name)
        )?;
        if let Some(originator) = &document.originator {
            writeln!(out, "    <originator>{}</originator>", xml_escape(originator))?;
        }
        writeln!(
            out,
            "    <downloadLocation>{}</downloadLocation>",
            xml_escape(&document.download_location)
        )?;

        Self::write_verification_code(out, document)?;

        writeln!(
            out,
            "    <licenseConcluded>{}</licenseConcluded>",
            xml_escape(&document.license_concluded)
        )?;

        for license in &document.license_info_from_files {
            writeln!(
                out,
                "    <licenseInfoFromFiles rdf:resource=\"{}\"/>",
                xml_escape(&license.name)
            )?;
        }

        Self::write_declared_license(out, &document.declared_license)?;

        writeln!(
            out,
            "    <copyrightText>{}</copyrightText>",
            xml_escape(&document.copyright_text)
        )?;

        writeln!(out, "  </Package>")
    }

    fn write_verification_code(out: &mut String, document: &PackageDocument) -> std::fmt::Result {
        match document.verification_code {
            Analysis::NotComputed => {
                writeln!(out, "    <packageVerificationCode>")?;
                writeln!(out, "      <PackageVerificationCode>")?;
                writeln!(out, "        <packageVerificationCodeValue></packageVerificationCodeValue>")?;
                writeln!(out, "        <packageVerificationCodeExcludedFile></packageVerificationCodeExcludedFile>")?;
                writeln!(out, "      </PackageVerificationCode>")?;
                writeln!(out, "    </packageVerificationCode>")
            }
        }
    }

    fn write_declared_license(out: &mut String, declared: &DeclaredLicense) -> std::fmt::Result {
        match declared {
            DeclaredLicense::None => {
                writeln!(out, "    <licenseDeclared rdf:resource=\"NONE\"/>")
            }
            DeclaredLicense::Single(name) => writeln!(
                out,
                "    <licenseDeclared rdf:resource=\"{}\"/>",
                xml_escape(name)
            ),
            DeclaredLicense::Conjunctive(names) => {
                writeln!(out, "    <licenseDeclared>")?;
                writeln!(out, "      <ConjunctiveLicenseSet>")?;
                for name in names {
                    writeln!(out, "        <member rdf:resource=\"{}\"/>", xml_escape(name))?;
                }
                writeln!(out, "      </ConjunctiveLicenseSet>")?;
                writeln!(out, "    </licenseDeclared>")
            }
        }
    }
}

impl Default for RdfFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for RdfFormatter {
    fn format(&self, document: &PackageDocument) -> Result<String> {
        let mut out = String::from(RDF_HEADER);
        Self::write_creation_info(&mut out, document)?;
        Self::write_package(&mut out, document)?;
        out.push_str(RDF_FOOTER);
        Ok(out)
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
