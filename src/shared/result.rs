/// Crate-wide Result alias.
///
/// Fallible operations return `anyhow::Error` so callers can attach context
/// with `anyhow::Context`; typed failures are `ReportError` values converted
/// into it.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
