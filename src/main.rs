mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use owo_colors::OwoColorize;
use spdx_license_report::adapters::outbound::console::StderrProgressReporter;
use spdx_license_report::adapters::outbound::filesystem::{
    FileSystemReader, DEFAULT_OUTPUT_DIRECTORY,
};
use spdx_license_report::adapters::outbound::repository::{
    CachingProjectResolver, HttpRegistryResolver, LocalIndexResolver, DEFAULT_INDEX_DIRECTORY,
};
use spdx_license_report::application::dto::{OutputFormat, ReportRequest};
use spdx_license_report::application::factories::{FormatterFactory, WriterFactory, WriterType};
use spdx_license_report::application::use_cases::GenerateReportUseCase;
use spdx_license_report::config::{self, ConfigFile};
use spdx_license_report::ports::outbound::ProjectResolver;
use spdx_license_report::shared::error::{ExitCode, ReportError};
use spdx_license_report::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = logging::init_tracing(args.log_level.as_deref(), args.log_format) {
        eprintln!("{} {}", "❌".red(), e);
        process::exit(ExitCode::InvalidArguments.as_i32());
    }

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Validate project directory
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    // Load configuration: explicit path, else discovered in the project directory
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&project_path)?.unwrap_or_default(),
    };

    let format = resolve_format(&args, &config)?;
    let request = build_request(&args, &config, &project_path)?;
    let writer_type = resolve_writer(&args, &config, &project_path);

    // Create adapters (Dependency Injection)
    let resolver = CachingProjectResolver::new(create_resolver(&args, &config, &project_path)?);
    let use_case = GenerateReportUseCase::new(
        FileSystemReader::new(),
        resolver,
        StderrProgressReporter::new(),
    );

    tracing::info!(project = %project_path.display(), %format, "generating license report");
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatter = FormatterFactory::create(format);
    let content = formatter.format(&response.document)?;

    // A failed write is reported but does not fail the run
    let file_name = response.file_name(format.extension());
    let writer = WriterFactory::create(writer_type);
    match writer.write(&file_name, &content) {
        Ok(path) if path != Path::new("-") => {
            eprintln!("{} {}", "✅ Report written to".green(), path.display());
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!(file = %file_name, error = %e, "failed to write report");
            eprintln!("{} {:#}", "⚠️  Could not write report:".yellow(), e);
        }
    }

    Ok(())
}

/// CLI format wins over the config file; rdf otherwise
fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }

    match config.format.as_deref() {
        Some(value) => OutputFormat::from_str(value).map_err(|message| {
            ReportError::Validation {
                message: format!("config field 'format': {}", message),
            }
            .into()
        }),
        None => Ok(OutputFormat::default()),
    }
}

/// Merges CLI flags over config values. Exclusions from both are kept.
fn build_request(args: &Args, config: &ConfigFile, project_path: &Path) -> Result<ReportRequest> {
    let mut excludes = config.excludes.clone().unwrap_or_default();
    excludes.extend(args.exclude.iter().cloned());

    let mut builder = ReportRequest::builder()
        .project_path(project_path)
        .exclude_prefixes(excludes)
        .user_licenses(config.user_licenses())
        .overrides(config.license_overrides()?)
        .originator(args.originator.clone().or_else(|| config.originator.clone()))
        .download_location(
            args.download_location
                .clone()
                .or_else(|| config.download_location.clone()),
        )
        .copyright_text(config.copyright_text.clone());

    if let Some(scopes) = args.scopes.as_ref().or(config.scopes.as_ref()) {
        builder = builder.scopes(scopes.clone());
    }

    builder.build()
}

/// `--stdout` wins; CLI paths are taken as given, config paths are relative
/// to the project directory.
fn resolve_writer(args: &Args, config: &ConfigFile, project_path: &Path) -> WriterType {
    if args.stdout {
        return WriterType::Stdout;
    }

    let directory = match (&args.output_dir, &config.output_directory) {
        (Some(dir), _) => dir.clone(),
        (None, Some(dir)) => project_path.join(dir),
        (None, None) => project_path.join(DEFAULT_OUTPUT_DIRECTORY),
    };
    WriterType::Directory(directory)
}

/// Picks the metadata source: CLI registry or index, then the config
/// repository, then the default index directory in the project.
fn create_resolver(
    args: &Args,
    config: &ConfigFile,
    project_path: &Path,
) -> Result<Box<dyn ProjectResolver>> {
    if let Some(url) = &args.registry {
        return Ok(Box::new(HttpRegistryResolver::new(url)?));
    }
    if let Some(index) = &args.index {
        return Ok(Box::new(LocalIndexResolver::new(index.clone())));
    }

    let repository = config.repository.as_ref();
    if let Some(url) = repository.and_then(|r| r.url.as_deref()) {
        return Ok(Box::new(HttpRegistryResolver::new(url)?));
    }

    let index = repository
        .and_then(|r| r.index.as_ref())
        .map(|index| project_path.join(index))
        .unwrap_or_else(|| project_path.join(DEFAULT_INDEX_DIRECTORY));
    if !index.is_dir() {
        tracing::warn!(
            index = %index.display(),
            "license index directory not found, every lookup will fail"
        );
    }
    Ok(Box::new(LocalIndexResolver::new(index)))
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| ReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(ReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["spdx-license-report"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let result = validate_project_path(Path::new("/nonexistent/path/that/does/not/exist"));
        assert!(format!("{}", result.unwrap_err()).contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_file.txt");
        fs::write(&file_path, "test content").unwrap();

        let result = validate_project_path(&file_path);
        assert!(format!("{}", result.unwrap_err()).contains("Not a directory"));
    }

    #[test]
    fn test_resolve_format_precedence() {
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_format(&args(&[]), &config).unwrap(), OutputFormat::Markdown);
        assert_eq!(
            resolve_format(&args(&["-f", "rdf"]), &config).unwrap(),
            OutputFormat::Rdf
        );
        assert_eq!(
            resolve_format(&args(&[]), &ConfigFile::default()).unwrap(),
            OutputFormat::Rdf
        );
    }

    #[test]
    fn test_resolve_format_invalid_config_value() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            ..Default::default()
        };
        let err = resolve_format(&args(&[]), &config).unwrap_err();
        assert!(err.to_string().contains("config field 'format'"));
    }

    #[test]
    fn test_build_request_merges_excludes_and_prefers_cli() {
        let config = ConfigFile {
            excludes: Some(vec!["com.example".to_string()]),
            scopes: Some("compile".to_string()),
            originator: Some("Organization: Config".to_string()),
            ..Default::default()
        };
        let request = build_request(
            &args(&["-e", "org.internal", "--originator", "Person: Cli"]),
            &config,
            Path::new("."),
        )
        .unwrap();

        assert_eq!(request.exclude_prefixes, vec!["com.example", "org.internal"]);
        assert_eq!(request.scopes, "compile");
        assert_eq!(request.originator.as_deref(), Some("Person: Cli"));
    }

    #[test]
    fn test_resolve_writer() {
        let project = Path::new("proj");
        let config = ConfigFile {
            output_directory: Some(PathBuf::from("build/spdx")),
            ..Default::default()
        };

        assert_eq!(
            resolve_writer(&args(&["--stdout"]), &config, project),
            WriterType::Stdout
        );
        assert_eq!(
            resolve_writer(&args(&["-o", "out"]), &config, project),
            WriterType::Directory(PathBuf::from("out"))
        );
        assert_eq!(
            resolve_writer(&args(&[]), &config, project),
            WriterType::Directory(PathBuf::from("proj/build/spdx"))
        );
        assert_eq!(
            resolve_writer(&args(&[]), &ConfigFile::default(), project),
            WriterType::Directory(PathBuf::from("proj/target/spdx"))
        );
    }
}
