use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any input file we read (manifest, config, index entries): 16 MB
pub const MAX_INPUT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Maximum length of a generated report file name
pub const MAX_FILE_NAME_LENGTH: usize = 255;

/// Rejects `path` when it is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet is accepted.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} operations on symbolic links are not allowed",
                operation
            ),
            hint: "Point the tool at the real file or directory instead of a link".to_string(),
        }
        .into()),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )),
    }
}

/// Validates that a path exists, is not a symlink and is a regular file
/// no larger than [`MAX_INPUT_FILE_SIZE`].
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ReportError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Symbolic links are not followed; use a regular file".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_INPUT_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates a bare file name used inside the output directory.
///
/// The name must not be empty, must not contain path separators or `..`,
/// and must fit in [`MAX_FILE_NAME_LENGTH`] bytes.
pub fn validate_file_name(file_name: &str) -> Result<()> {
    if file_name.is_empty() {
        anyhow::bail!("Report file name cannot be empty");
    }

    if file_name.len() > MAX_FILE_NAME_LENGTH {
        anyhow::bail!(
            "Report file name is too long ({} bytes). Maximum allowed: {} bytes",
            file_name.len(),
            MAX_FILE_NAME_LENGTH
        );
    }

    if file_name.contains('/') || file_name.contains('\\') || file_name.contains("..") {
        return Err(ReportError::SecurityError {
            path: file_name.into(),
            reason: "Report file name contains path components".to_string(),
            hint: "Use a project name without '/', '\\' or '..'".to_string(),
        }
        .into());
    }

    Ok(())
}
