/// Formatter adapters for the supported report formats
mod markdown_formatter;
mod rdf_formatter;

pub use markdown_formatter::MarkdownFormatter;
pub use rdf_formatter::RdfFormatter;
