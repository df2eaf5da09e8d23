use crate::license_report::domain::PackageDocument;
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;

/// Markdown table header for the dependency summary
const DEPENDENCY_TABLE_HEADER: &str = "| Dependency | License type |\n";

/// Markdown table separator for the dependency summary
const DEPENDENCY_TABLE_SEPARATOR: &str = "|------------|--------------|\n";

/// Markdown table header for the license links
const LICENSE_TABLE_HEADER: &str = "| License type | License file |\n";

/// Markdown table separator for the license links
const LICENSE_TABLE_SEPARATOR: &str = "|--------------|--------------|\n";

/// MarkdownFormatter adapter for a human readable license summary
///
/// Renders the package facts followed by two tables: every dependency with
/// its license names, and every distinct license with its url.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// A Markdown link for http(s) urls, plain text otherwise
    fn license_link(url: Option<&str>) -> String {
        match url {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                let escaped = Self::escape_markdown_table_cell(url);
                format!("[{}]({})", escaped, url.replace(' ', "%20").replace(')', "%29"))
            }
            Some(other) => Self::escape_markdown_table_cell(other),
            None => "-".to_string(),
        }
    }

    fn render_header(output: &mut String, document: &PackageDocument) {
        output.push_str(&format!(
            "# License report: {}\n\n",
            document.package_name.replace('\n', " ")
        ));
        output.push_str(&format!("- **Created:** {}\n", document.creation_info.created()));
        output.push_str(&format!("- **Creator:** {}\n", document.creation_info.creator()));
        if let Some(originator) = &document.originator {
            output.push_str(&format!("- **Originator:** {}\n", originator));
        }
        output.push_str(&format!(
            "- **Download location:** {}\n",
            document.download_location
        ));
        output.push_str(&format!(
            "- **Declared license:** {}\n",
            document.declared_license.expression()
        ));
        output.push_str(&format!(
            "- **Concluded license:** {}\n",
            document.license_concluded
        ));
        output.push_str(&format!("- **Copyright:** {}\n\n", document.copyright_text));
    }

    fn render_dependencies(output: &mut String, document: &PackageDocument) {
        output.push_str("## Dependencies\n\n");
        if document.dependency_rows.is_empty() {
            output.push_str("No dependencies in scope.\n\n");
            return;
        }

        output.push_str(DEPENDENCY_TABLE_HEADER);
        output.push_str(DEPENDENCY_TABLE_SEPARATOR);
        for row in &document.dependency_rows {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(row.display_name()),
                Self::escape_markdown_table_cell(row.license_names())
            ));
        }
        output.push('\n');
    }

    fn render_licenses(output: &mut String, document: &PackageDocument) {
        output.push_str("## Licenses\n\n");
        if document.license_info_from_files.is_empty() {
            output.push_str("No licenses found.\n");
            return;
        }

        output.push_str(LICENSE_TABLE_HEADER);
        output.push_str(LICENSE_TABLE_SEPARATOR);
        for license in &document.license_info_from_files {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&license.name),
                Self::license_link(license.url.as_deref())
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for MarkdownFormatter {
    fn format(&self, document: &PackageDocument) -> Result<String> {
        let mut output = String::new();
        Self::render_header(&mut output, document);
        Self::render_dependencies(&mut output, document);
        Self::render_licenses(&mut output, document);
        Ok(output)
    }
}
