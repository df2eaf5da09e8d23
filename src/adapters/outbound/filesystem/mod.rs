/// Filesystem adapters for reading the project manifest and writing reports
mod file_writer;
mod manifest_reader;

pub use file_writer::{DirectoryWriter, StdoutWriter, DEFAULT_OUTPUT_DIRECTORY};
pub use manifest_reader::{FileSystemReader, MANIFEST_FILE_NAME};
