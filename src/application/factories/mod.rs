mod formatter_factory;
mod writer_factory;

pub use formatter_factory::FormatterFactory;
pub use writer_factory::{WriterFactory, WriterType};
