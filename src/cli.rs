use clap::Parser;
use std::path::PathBuf;

use crate::logging::LogFormat;
use spdx_license_report::application::dto::OutputFormat;

/// Resolve dependency licenses and emit an SPDX package document
#[derive(Parser, Debug)]
#[command(name = "spdx-license-report")]
#[command(version)]
#[command(about = "Resolve dependency licenses and emit an SPDX package document", long_about = None)]
pub struct Args {
    /// Path to the project directory holding spdx-project.toml (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Path to a config file (defaults to spdx-report.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: rdf or markdown [default: rdf]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Directory the report is written to [default: target/spdx]
    #[arg(short, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the report to stdout instead of writing a file
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,

    /// Comma separated scopes to include [default: compile,runtime]
    #[arg(long)]
    pub scopes: Option<String>,

    /// Exclude dependencies whose group id starts with PREFIX.
    /// Can be specified multiple times: -e com.example -e org.internal
    #[arg(short, long = "exclude", value_name = "PREFIX")]
    pub exclude: Vec<String>,

    /// Local license index directory [default: license-index in the project directory]
    #[arg(long, value_name = "DIR", conflicts_with = "registry")]
    pub index: Option<PathBuf>,

    /// Base URL of a remote license registry
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    /// Package originator, e.g. "Organization: Acme"
    #[arg(long)]
    pub originator: Option<String>,

    /// Package download location
    #[arg(long)]
    pub download_location: Option<String>,

    /// Log filter (RUST_LOG takes precedence) [default: warn]
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["spdx-license-report"]).unwrap();
        assert!(args.path.is_none());
        assert!(args.format.is_none());
        assert!(!args.stdout);
        assert!(args.exclude.is_empty());
        assert_eq!(args.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "spdx-license-report",
            "-p",
            "demo",
            "-f",
            "md",
            "-o",
            "out",
            "--scopes",
            "compile",
            "-e",
            "com.example",
            "-e",
            "org.internal",
            "--registry",
            "https://licenses.example.com",
            "--originator",
            "Organization: Acme",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.path, Some(PathBuf::from("demo")));
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.exclude, vec!["com.example", "org.internal"]);
        assert_eq!(args.registry.as_deref(), Some("https://licenses.example.com"));
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["spdx-license-report", "--format", "json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_stdout_conflicts_with_output_dir() {
        let result = Args::try_parse_from(["spdx-license-report", "--stdout", "-o", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_index_conflicts_with_registry() {
        let result = Args::try_parse_from([
            "spdx-license-report",
            "--index",
            "idx",
            "--registry",
            "https://licenses.example.com",
        ]);
        assert!(result.is_err());
    }
}
