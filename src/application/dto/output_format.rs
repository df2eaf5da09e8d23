/// Output format of a generated license report
///
/// Shared by the CLI, the configuration file and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// SPDX 1.2 RDF/XML (default)
    #[default]
    Rdf,
    /// Human-readable Markdown summary
    Markdown,
}

impl OutputFormat {
    /// File extension used for the written report
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Rdf => "rdf",
            OutputFormat::Markdown => "md",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rdf" | "xml" => Ok(OutputFormat::Rdf),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'rdf' or 'markdown'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Rdf => write!(f, "rdf"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}
