use crate::license_report::domain::CreationInfo;
use chrono::{DateTime, Utc};

/// Name recorded as the document creator
pub const TOOL_NAME: &str = "spdx-license-report";

/// Second-precision UTC pattern used for the creation timestamp
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// CreationInfoGenerator service for document creation metadata
pub struct CreationInfoGenerator;

impl CreationInfoGenerator {
    /// Creation info stamped with the given instant
    pub fn generate_at(instant: DateTime<Utc>, tool_name: &str, tool_version: &str) -> CreationInfo {
        CreationInfo::new(
            instant.format(TIMESTAMP_FORMAT).to_string(),
            format!("Tool: {}-{}", tool_name, tool_version),
        )
    }

    /// Creation info for this tool, stamped now
    pub fn generate_default() -> CreationInfo {
        Self::generate_at(Utc::now(), TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
