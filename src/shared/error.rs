use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A failed write of the finished report is advisory and still exits with
/// `Success`; only unusable input stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated (or generation attempted and the write was best-effort)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable manifest, malformed configuration, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Project manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse project manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that spdx-project.toml declares a [project] table and [[dependencies]] entries")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Invalid license mapping #{index}: {reason}\n\n💡 Hint: Each license mapping needs exactly one of 'artifact_id' or 'group_id'; external mappings need an 'artifact_id'")]
    MalformedOverride { index: usize, reason: String },

    /// Validation error for builder patterns and value objects
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory is writable")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("License registry request failed: {url}\nDetails: {details}")]
    RegistryError { url: String, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_manifest_not_found_display() {
        let error = ReportError::ManifestNotFound {
            path: PathBuf::from("/work/app/spdx-project.toml"),
            suggestion: "Run from the project root".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Project manifest not found"));
        assert!(display.contains("/work/app/spdx-project.toml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Run from the project root"));
    }

    #[test]
    fn test_manifest_parse_error_display() {
        let error = ReportError::ManifestParseError {
            path: PathBuf::from("spdx-project.toml"),
            details: "missing field `name`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse project manifest"));
        assert!(display.contains("missing field `name`"));
    }

    #[test]
    fn test_malformed_override_display() {
        let error = ReportError::MalformedOverride {
            index: 2,
            reason: "both artifact_id and group_id are set".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid license mapping #2"));
        assert!(display.contains("both artifact_id and group_id are set"));
        assert!(display.contains("exactly one of 'artifact_id' or 'group_id'"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ReportError::FileWriteError {
            path: PathBuf::from("/readonly/report.rdf"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/readonly/report.rdf"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ReportError::SecurityError {
            path: PathBuf::from("/tmp/link"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Point to the real file".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Point to the real file"));
    }

    #[test]
    fn test_registry_error_display() {
        let error = ReportError::RegistryError {
            url: "https://licenses.example.com/junit/junit.json".to_string(),
            details: "status 404".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("License registry request failed"));
        assert!(display.contains("junit/junit.json"));
        assert!(display.contains("status 404"));
    }
}
