use crate::ports::outbound::ReportWriter;
use crate::shared::error::ReportError;
use crate::shared::security::{validate_file_name, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Default output directory, relative to the project directory
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "target/spdx";

/// DirectoryWriter adapter writing reports into an output directory
///
/// The directory (and any missing parents) is created on first write.
/// Neither the directory nor the report file may be a symbolic link.
pub struct DirectoryWriter {
    output_directory: PathBuf,
}

impl DirectoryWriter {
    pub fn new(output_directory: PathBuf) -> Self {
        Self { output_directory }
    }

    pub fn output_directory(&self) -> &std::path::Path {
        &self.output_directory
    }

    fn prepare_directory(&self) -> Result<()> {
        validate_not_symlink(&self.output_directory, "Write")?;

        if self.output_directory.exists() {
            if !self.output_directory.is_dir() {
                return Err(ReportError::FileWriteError {
                    path: self.output_directory.clone(),
                    details: "Output path exists and is not a directory".to_string(),
                }
                .into());
            }
            return Ok(());
        }

        fs::create_dir_all(&self.output_directory).map_err(|e| {
            ReportError::FileWriteError {
                path: self.output_directory.clone(),
                details: format!("Failed to create output directory: {}", e),
            }
            .into()
        })
    }
}

impl ReportWriter for DirectoryWriter {
    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        validate_file_name(file_name)?;
        self.prepare_directory()?;

        let output_path = self.output_directory.join(file_name);
        validate_not_symlink(&output_path, "Write")?;

        fs::write(&output_path, content).map_err(|e| ReportError::FileWriteError {
            path: output_path.clone(),
            details: e.to_string(),
        })?;

        tracing::info!(path = %output_path.display(), bytes = content.len(), "report written");
        Ok(output_path)
    }
}

/// StdoutWriter adapter printing the report to stdout
pub struct StdoutWriter;

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for StdoutWriter {
    fn write(&self, _file_name: &str, content: &str) -> Result<PathBuf> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(PathBuf::from("-"))
    }
}
