mod creation_info_generator;
mod dependency_filter;
mod document_assembler;
mod license_collector;

pub use creation_info_generator::{CreationInfoGenerator, TOOL_NAME};
pub use dependency_filter::{
    classify, is_included, parse_scopes, DependencyFilter, FilterDecision, DEFAULT_SCOPES,
};
pub use document_assembler::DocumentAssembler;
pub use license_collector::{CollectedDependency, Collection, LicenseCollector};
