use crate::license_report::domain::{PackageDocument, ResolutionFailure};
use crate::shared::security::MAX_FILE_NAME_LENGTH;

/// ReportResponse - result of the report generation use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// The assembled document, ready to be formatted
    pub document: PackageDocument,
    /// Dependencies declared by the manifest
    pub declared_count: usize,
    /// Dependencies left after scope and exclusion filtering
    pub included_count: usize,
    /// Recovered per-dependency resolver failures
    pub failures: Vec<ResolutionFailure>,
}

impl ReportResponse {
    pub fn new(
        document: PackageDocument,
        declared_count: usize,
        included_count: usize,
        failures: Vec<ResolutionFailure>,
    ) -> Self {
        Self {
            document,
            declared_count,
            included_count,
            failures,
        }
    }

    /// File name for the written report: the project name plus `extension`,
    /// shortened to fit [`MAX_FILE_NAME_LENGTH`] bytes.
    pub fn file_name(&self, extension: &str) -> String {
        let stem: String = self
            .document
            .package_name
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        let stem = stem.trim().trim_matches('.');
        let stem = if stem.is_empty() { "report" } else { stem };
        let stem = stem.replace("..", "_");

        let max_stem = MAX_FILE_NAME_LENGTH.saturating_sub(extension.len() + 1);
        let stem = truncate_to_boundary(&stem, max_stem)
            .trim_end_matches(|c: char| c.is_whitespace() || c == '.');
        let stem = if stem.is_empty() { "report" } else { stem };
        format!("{}.{}", stem, extension)
    }
}

fn truncate_to_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
