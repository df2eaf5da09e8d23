use crate::adapters::outbound::filesystem::{DirectoryWriter, StdoutWriter};
use crate::ports::outbound::ReportWriter;
use std::path::PathBuf;

/// Where a finished report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterType {
    Stdout,
    Directory(PathBuf),
}

/// Factory for creating report writers
pub struct WriterFactory;

impl WriterFactory {
    /// Creates a writer instance for the specified destination
    ///
    /// # Examples
    /// ```
    /// use spdx_license_report::application::factories::{WriterFactory, WriterType};
    ///
    /// let writer = WriterFactory::create(WriterType::Stdout);
    /// ```
    pub fn create(writer_type: WriterType) -> Box<dyn ReportWriter> {
        match writer_type {
            WriterType::Stdout => Box::new(StdoutWriter::new()),
            WriterType::Directory(path) => Box::new(DirectoryWriter::new(path)),
        }
    }
}
